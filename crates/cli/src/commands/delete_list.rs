//! Delete-list command for removing a list and all of its items

use crate::error::CliError;
use crate::output::Response;
use clap::Args;
use quire_db::Database;
use serde_json::json;

/// Delete a list and every item in it
#[derive(Debug, Args)]
pub struct DeleteListCommand {
    /// List ID (case-insensitive)
    #[arg(required = true)]
    pub list_id: String,
}

impl DeleteListCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let removed = db.todos().delete_list(user, &self.list_id).await?;
        Ok(Response::success(
            format!("List deleted successfully! ({} items removed)", removed),
            json!({ "removed": removed }),
        ))
    }
}
