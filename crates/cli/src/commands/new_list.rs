//! New-list command for creating todo lists

use crate::error::CliError;
use crate::output::Response;
use clap::Args;
use quire_db::Database;
use serde_json::json;

/// Create a new todo list
#[derive(Debug, Args)]
pub struct NewListCommand {
    /// Title of the list
    #[arg(required = true)]
    pub title: String,
}

impl NewListCommand {
    /// Execute the new-list command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Db` if the title is blank or the write fails.
    pub async fn execute(&self, db: &Database, user: &str) -> Result<Response, CliError> {
        let list = db.todos().create_list(user, &self.title).await?;
        Ok(Response::new(
            format!("List created successfully! ({})", list.id),
            json!({ "id": list.id, "title": list.title }),
        ))
    }
}
