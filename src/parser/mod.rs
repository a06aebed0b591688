//! Argument grammars for the interactive commands
//!
//! Each command has its own small grammar. The tokenizers here turn the raw
//! argument string into a typed result or a [CommandError](crate::CommandError)
//! naming what was wrong, so the dispatch layer never has to inspect text.

pub mod add;
pub mod sort;
pub(crate) mod utils;
