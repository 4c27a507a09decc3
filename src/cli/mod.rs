//! Command-line interface.

mod args;
pub mod categories;
pub mod list;
pub mod showcase;

pub use args::{CategoriesArgs, Cli, Commands, ListArgs, ShowcaseArgs, SortOrder};
