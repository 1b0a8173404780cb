//! Repository modules for database operations
//!
//! Provides repository pattern implementations for list and item records,
//! encapsulating database queries, plus the transactional write batch used
//! by multi-record mutations.

mod batch;
mod item;
mod list;

pub use batch::WriteBatch;
pub use item::{ItemFlag, ItemRepository};
pub use list::ListRepository;
