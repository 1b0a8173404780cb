//! Atomic write batches
//!
//! Collects SurrealQL statements and runs them inside a single
//! `BEGIN TRANSACTION` / `COMMIT TRANSACTION` block, so either every
//! statement takes effect or none does.

use crate::error::DbResult;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::{debug, trace};

/// A group of statements committed together
#[derive(Debug, Default)]
pub struct WriteBatch {
    statements: Vec<String>,
}

impl WriteBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement (without trailing semicolon)
    pub fn push(&mut self, statement: impl Into<String>) {
        self.statements.push(statement.into());
    }

    /// Number of queued statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Render the batch as one transactional query.
    pub fn to_query(&self) -> String {
        let mut query = String::from("BEGIN TRANSACTION;\n");
        for statement in &self.statements {
            query.push_str(statement);
            query.push_str(";\n");
        }
        query.push_str("COMMIT TRANSACTION;");
        query
    }

    /// Execute the batch.
    ///
    /// Any failing statement cancels the whole transaction.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if the transaction fails.
    pub async fn commit(self, client: &Surreal<Db>) -> DbResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        debug!("Committing batch of {} statements", self.len());
        let query = self.to_query();
        trace!("Batch query: {}", query);
        client.query(query).await?.check()?;
        Ok(())
    }
}
