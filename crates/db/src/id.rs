//! Record ID generation and normalization
//!
//! IDs are short lowercase base-36 strings derived from a SHA-256 hash of a
//! seed (usually the title) mixed with random bytes. Callers retry with
//! `IdGenerator::next_id` until they find one that is not taken.

use crate::error::{DbError, DbResult, Entity};
use sha2::{Digest, Sha256};

/// Length of the first candidate ID
const BASE_LENGTH: usize = 6;

/// Candidates tried before giving up
const MAX_ATTEMPTS: usize = 10;

/// Every third failed attempt adds one character
const GROW_EVERY: usize = 3;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces candidate IDs for a new record
#[derive(Debug)]
pub struct IdGenerator {
    seed: String,
    attempt: usize,
}

impl IdGenerator {
    /// Create a generator seeded with `seed`
    pub fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            attempt: 0,
        }
    }

    /// Next candidate ID, or `None` once the attempts are exhausted.
    pub fn next_id(&mut self) -> Option<String> {
        if self.attempt >= MAX_ATTEMPTS {
            return None;
        }
        let length = BASE_LENGTH + self.attempt / GROW_EVERY;
        self.attempt += 1;

        let nonce: [u8; 16] = rand::random();
        let mut hasher = Sha256::new();
        hasher.update(self.seed.as_bytes());
        hasher.update(nonce);
        let digest = hasher.finalize();

        let id = digest
            .iter()
            .take(length)
            .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
            .collect();
        Some(id)
    }
}

/// Normalize a caller-supplied ID for lookup.
///
/// IDs are case-insensitive. Anything that is not ASCII alphanumeric can
/// never name a record, so it is reported as not found.
///
/// # Errors
///
/// Returns `DbError::ValidationError` for an empty ID and
/// `DbError::NotFound` for an ID with invalid characters.
pub fn normalize_id(raw: &str, entity: Entity) -> DbResult<String> {
    let id = raw.trim().to_lowercase();
    if id.is_empty() {
        return Err(DbError::validation(format!("{} ID is required.", entity)));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DbError::not_found(entity, raw.trim()));
    }
    Ok(id)
}
