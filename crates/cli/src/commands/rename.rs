//! Rename command for editing an item's title

use crate::error::CliError;
use crate::output::{Response, format_item};
use clap::Args;
use quire_db::Database;

/// Change an item's title
#[derive(Debug, Args)]
pub struct RenameCommand {
    /// Item ID (case-insensitive)
    #[arg(required = true)]
    pub item_id: String,

    /// New title
    #[arg(required = true)]
    pub title: String,
}

impl RenameCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let view = db
            .todos()
            .rename_item(user, &self.item_id, &self.title)
            .await?;
        Ok(Response::new(
            format!("Item updated successfully! {}", format_item(&view)),
            serde_json::to_value(&view)?,
        ))
    }
}
