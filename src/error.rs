//! Errors raised while loading a catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog could not be loaded. Any of these abandons the whole batch.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The backing file could not be opened.
    #[error("Could not open file: {path}")]
    SourceUnavailable {
        /// The path that was asked for.
        path: PathBuf,
        /// What the OS said about it.
        #[source]
        source: std::io::Error,
    },

    /// The source opened fine but reading from it failed part way through.
    #[error("Failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    /// A row did not have both a course number and a name.
    #[error("Invalid row format on line {line}: expected a course number and a name, found {fields} field(s) in {row:?}")]
    MalformedRow {
        /// 1-based line number of the row.
        line: usize,
        /// The row as it was read.
        row: String,
        /// How many non-empty fields the row had.
        fields: usize,
    },

    /// A course lists a prerequisite that is not part of the same catalog.
    #[error("Missing prerequisite: {prerequisite} (required by {course})")]
    UnresolvedPrerequisite {
        /// Number of the course naming the prerequisite.
        course: String,
        /// The prerequisite that matched no course.
        prerequisite: String,
    },
}

/// Shorthand for results of catalog loading.
pub type LoadResult<T> = Result<T, LoadError>;
