//! CLI commands for Quire
//!
//! Each subcommand maps onto one core operation of `quire_db::TodoService`.

pub mod add;
pub mod delete_list;
pub mod lists;
pub mod move_item;
pub mod new_list;
pub mod remove;
pub mod rename;
pub mod show;
pub mod toggle;

pub use add::AddCommand;
pub use delete_list::DeleteListCommand;
pub use lists::ListsCommand;
pub use move_item::MoveCommand;
pub use new_list::NewListCommand;
pub use remove::RemoveCommand;
pub use rename::RenameCommand;
pub use show::ShowCommand;
pub use toggle::{ExpandCommand, ToggleCommand};

use crate::error::CliError;
use crate::output::Response;
use clap::Subcommand;
use quire_db::Database;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new list
    NewList(NewListCommand),
    /// Show your lists
    Lists(ListsCommand),
    /// Show a list as a tree
    Show(ShowCommand),
    /// Delete a list and all of its items
    DeleteList(DeleteListCommand),
    /// Add an item to a list
    Add(AddCommand),
    /// Toggle an item's completed status
    Toggle(ToggleCommand),
    /// Expand or collapse an item's sub-items
    Expand(ExpandCommand),
    /// Change an item's title
    Rename(RenameCommand),
    /// Delete an item and its sub-items
    Rm(RemoveCommand),
    /// Move an item and its sub-items to another list
    Mv(MoveCommand),
}

impl Command {
    /// Execute the command on behalf of `user`.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the underlying operation fails.
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        match self {
            Command::NewList(cmd) => cmd.execute(db, user).await,
            Command::Lists(cmd) => cmd.execute(db, user).await,
            Command::Show(cmd) => cmd.execute(db, user).await,
            Command::DeleteList(cmd) => cmd.execute(db, user).await,
            Command::Add(cmd) => cmd.execute(db, user).await,
            Command::Toggle(cmd) => cmd.execute(db, user).await,
            Command::Expand(cmd) => cmd.execute(db, user).await,
            Command::Rename(cmd) => cmd.execute(db, user).await,
            Command::Rm(cmd) => cmd.execute(db, user).await,
            Command::Mv(cmd) => cmd.execute(db, user).await,
        }
    }
}
