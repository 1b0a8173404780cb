//! Show command for rendering a list as a tree

use crate::error::CliError;
use crate::output::{Response, format_tree};
use clap::Args;
use quire_db::Database;

/// Show a list with its items
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// List ID (case-insensitive)
    #[arg(required = true)]
    pub list_id: String,
}

impl ShowCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let tree = db.todos().list_tree(user, &self.list_id).await?;
        Ok(Response::new(format_tree(&tree), serde_json::to_value(&tree)?))
    }
}
