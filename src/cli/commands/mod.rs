//! One module per subcommand.

pub mod add;
pub mod generate;
pub mod list;
pub mod remove;
pub mod show;
