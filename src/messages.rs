pub(crate) const WELCOME: &str = "Welcome to centavo. Type /help for the list of commands.";
pub(crate) const GOODBYE: &str = "Goodbye!";
pub(crate) const EMPTY_LIST: &str = "No expenses found";
pub(crate) const CATEGORY_NOT_FOUND: &str = "Category not found";
pub(crate) const GRAND_TOTAL: &str = "Grand Total";
pub(crate) const HIGHEST_SPEND: &str = "Highest Spending Category";

pub(crate) const HELP: &str = "Commands:
  /add <DESCRIPTION> $<AMOUNT> [/c <CATEGORY>] [/d <DATE>]
  /add-recurring <DESCRIPTION> $<AMOUNT> [/c <CATEGORY>] [/d <DATE>]
  /list
  /list-recurring
  /list-sort <FIELD> <DIR>            FIELD: name|amount|category|date  DIR: asc|dsc
  /list-sort-recurring <FIELD> <DIR>
  /total
  /average
  /summary [<CATEGORY>]
  /budget <AMOUNT>
  /add-category <CATEGORY>
  /help
  /exit

AMOUNT must be a positive number greater than 0.
DATE must be in the form dd-MM-yyyy and defaults to today.
CATEGORY defaults to UNCATEGORIZED.";
