//! Test infrastructure for integration tests
//!
//! Provides isolated database setup/teardown and CLI command execution helpers.
//! Each test gets its own database instance to ensure no shared state.

use std::path::PathBuf;
use quire_cli::commands::{
    AddCommand, DeleteListCommand, ExpandCommand, MoveCommand, NewListCommand, RemoveCommand,
    ShowCommand, ToggleCommand,
};
use quire_db::Database;

/// Test context containing an isolated database and temp directory
pub struct TestContext {
    pub db: Database,
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an isolated database.
    ///
    /// Each call creates a uniquely named temp directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub async fn new() -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "quire-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));

        let db = Database::connect(&temp_dir).await.unwrap();
        db.init().await.unwrap();

        Self { db, temp_dir }
    }

    /// Create a list as `user` and return its ID.
    pub async fn list(&self, user: &str, title: &str) -> String {
        let response = NewListCommand {
            title: title.to_string(),
        }
        .execute(&self.db, user)
        .await
        .unwrap();
        id_of(&response.data)
    }

    /// Add an item as `user` and return its ID.
    pub async fn item(&self, user: &str, list_id: &str, title: &str, parent: Option<&str>) -> String {
        let response = add_cmd(list_id, title, parent)
            .execute(&self.db, user)
            .await
            .unwrap();
        id_of(&response.data)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

/// Pull the `id` field out of a command's JSON payload.
pub fn id_of(data: &serde_json::Value) -> String {
    data["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

pub fn add_cmd(list_id: &str, title: &str, parent: Option<&str>) -> AddCommand {
    AddCommand {
        list_id: list_id.to_string(),
        title: title.to_string(),
        parent: parent.map(str::to_string),
    }
}

pub fn show_cmd(list_id: &str) -> ShowCommand {
    ShowCommand {
        list_id: list_id.to_string(),
    }
}

pub fn toggle_cmd(item_id: &str) -> ToggleCommand {
    ToggleCommand {
        item_id: item_id.to_string(),
    }
}

pub fn expand_cmd(item_id: &str) -> ExpandCommand {
    ExpandCommand {
        item_id: item_id.to_string(),
    }
}

pub fn rm_cmd(item_id: &str) -> RemoveCommand {
    RemoveCommand {
        item_id: item_id.to_string(),
    }
}

pub fn mv_cmd(item_id: &str, list_id: &str) -> MoveCommand {
    MoveCommand {
        item_id: item_id.to_string(),
        list_id: list_id.to_string(),
    }
}

pub fn delete_list_cmd(list_id: &str) -> DeleteListCommand {
    DeleteListCommand {
        list_id: list_id.to_string(),
    }
}
