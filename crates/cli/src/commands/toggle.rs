//! Toggle and expand commands for flipping item flags

use crate::error::CliError;
use crate::output::{Response, format_item};
use clap::Args;
use quire_db::Database;
use serde_json::json;

/// Toggle an item's completed status
#[derive(Debug, Args)]
pub struct ToggleCommand {
    /// Item ID (case-insensitive)
    #[arg(required = true)]
    pub item_id: String,
}

impl ToggleCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let view = db.todos().toggle_completed(user, &self.item_id).await?;
        Ok(Response::new(
            format_item(&view),
            json!({ "id": view.item.id, "completed": view.item.completed }),
        ))
    }
}

/// Toggle whether an item's children are shown
#[derive(Debug, Args)]
pub struct ExpandCommand {
    /// Item ID (case-insensitive)
    #[arg(required = true)]
    pub item_id: String,
}

impl ExpandCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let view = db.todos().toggle_expanded(user, &self.item_id).await?;
        let state = if view.item.expanded {
            "expanded"
        } else {
            "collapsed"
        };
        Ok(Response::new(
            format!("Item {} {}", view.item.id, state),
            json!({ "id": view.item.id, "expanded": view.item.expanded }),
        ))
    }
}
