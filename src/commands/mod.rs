pub mod add;
pub mod average;
pub mod budget;
pub mod category;
pub mod help;
pub mod list;
pub mod list_sort;
pub mod summary;
pub mod total;
