//! Lists command for showing the user's todo lists

use crate::error::CliError;
use crate::output::{Response, format_list_table};
use clap::Args;
use quire_db::Database;

/// Show all lists owned by the current user
#[derive(Debug, Args)]
pub struct ListsCommand {}

impl ListsCommand {
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let lists = db.todos().lists(user).await?;
        Ok(Response::new(
            format_list_table(&lists),
            serde_json::to_value(&lists)?,
        ))
    }
}
