//! Voxpop Storage Layer
//!
//! Implements the InterviewStore trait using SQLite.
//!
//! # Architecture
//!
//! - SQLite for interview records (title, combined transcript, rendered analysis)
//! - `created_at` is assigned by the database at insert time
//!
//! # Examples
//!
//! ```no_run
//! use voxpop_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for interview operations
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use voxpop_domain::traits::InterviewStore;
use voxpop_domain::{Interview, NewInterview};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Interview not found
    #[error("Interview not found: {0}")]
    NotFound(i64),
}

/// SQLite-based implementation of InterviewStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Share a store across tasks behind a
/// mutex, or give each thread its own instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use voxpop_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("voxpop.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn row_to_interview(row: &rusqlite::Row<'_>) -> rusqlite::Result<Interview> {
        Ok(Interview {
            id: row.get(0)?,
            title: row.get(1)?,
            transcript: row.get(2)?,
            analysis: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

impl InterviewStore for SqliteStore {
    type Error = StoreError;

    fn create_interview(&mut self, interview: NewInterview) -> Result<Interview, Self::Error> {
        self.conn.execute(
            "INSERT INTO interviews (title, transcript, analysis) VALUES (?1, ?2, ?3)",
            params![&interview.title, &interview.transcript, &interview.analysis],
        )?;

        let id = self.conn.last_insert_rowid();

        // Re-read so the caller sees the database-assigned created_at
        self.get_interview(id)?.ok_or(StoreError::NotFound(id))
    }

    fn get_interview(&self, id: i64) -> Result<Option<Interview>, Self::Error> {
        let interview = self
            .conn
            .query_row(
                "SELECT id, title, transcript, analysis, created_at
                 FROM interviews WHERE id = ?1",
                params![id],
                Self::row_to_interview,
            )
            .optional()?;

        Ok(interview)
    }

    fn list_interviews(&self) -> Result<Vec<Interview>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, transcript, analysis, created_at
             FROM interviews ORDER BY id DESC",
        )?;

        let interviews = stmt
            .query_map([], Self::row_to_interview)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(interviews)
    }
}
