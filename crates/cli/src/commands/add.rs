//! Add command for creating list items
//!
//! Implements the `quire add` command. Items may be nested under a parent
//! up to three levels deep.

use crate::error::CliError;
use crate::output::{Response, format_item};
use clap::Args;
use quire_db::Database;

/// Add an item to a list
#[derive(Debug, Args)]
pub struct AddCommand {
    /// List ID (case-insensitive)
    #[arg(required = true)]
    pub list_id: String,

    /// Title of the item
    #[arg(required = true)]
    pub title: String,

    /// Parent item ID (nests the new item under it)
    #[arg(short, long)]
    pub parent: Option<String>,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Db` if:
    /// - The title is empty
    /// - The list or parent doesn't exist, or the list isn't the user's
    /// - The parent is already at the deepest level
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let view = db
            .todos()
            .create_item(user, &self.list_id, self.parent.as_deref(), &self.title)
            .await?;
        Ok(Response::new(
            format!("Item created successfully! {}", format_item(&view)),
            serde_json::to_value(&view)?,
        ))
    }
}
