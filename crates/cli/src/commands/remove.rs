//! Remove command for deleting an item and its subtree

use crate::error::CliError;
use crate::output::Response;
use clap::Args;
use quire_db::Database;
use serde_json::json;

/// Delete an item together with all of its sub-items
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Item ID (case-insensitive)
    #[arg(required = true)]
    pub item_id: String,
}

impl RemoveCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let removed = db.todos().delete_item(user, &self.item_id).await?;
        let message = if removed == 1 {
            "Item deleted successfully!".to_string()
        } else {
            format!("Deleted {} items (including sub-items)", removed)
        };
        Ok(Response::success(message, json!({ "removed": removed })))
    }
}
