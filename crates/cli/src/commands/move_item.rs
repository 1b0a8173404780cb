//! Move command for relocating an item subtree to another list

use crate::error::CliError;
use crate::output::Response;
use clap::Args;
use quire_db::Database;
use serde_json::json;

/// Move an item (and its sub-items) to another list
#[derive(Debug, Args)]
pub struct MoveCommand {
    /// Item ID (case-insensitive)
    #[arg(required = true)]
    pub item_id: String,

    /// Destination list ID
    #[arg(required = true)]
    pub list_id: String,
}

impl MoveCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let moved = db
            .todos()
            .move_item(user, &self.item_id, &self.list_id)
            .await?;
        Ok(Response::success(
            format!("Item moved successfully! ({} items)", moved),
            json!({ "moved": moved }),
        ))
    }
}
