//! # Storage Layer
//!
//! This module defines the persistence abstraction for faculty. The [`DataStore`]
//! trait loads and saves the whole roster in one pass; the in-memory
//! [`Roster`](crate::roster::Roster) does everything in between.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one comma-delimited line per record
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Durability
//!
//! `save` truncates and rewrites the destination. There is no temp file and no
//! rename, so a crash mid-write can leave a truncated file behind.

use crate::error::Result;
use crate::model::Teacher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod fs;
pub mod memory;

/// What to do when a line in the data file cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Fail the whole load, reporting the offending line.
    #[default]
    Strict,
    /// Skip the line with a warning and keep going.
    Lenient,
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPolicy::Strict => write!(f, "strict"),
            LoadPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(LoadPolicy::Strict),
            "lenient" => Ok(LoadPolicy::Lenient),
            other => Err(format!(
                "Invalid load policy '{}', expected 'strict' or 'lenient'",
                other
            )),
        }
    }
}

/// Abstract interface for roster persistence.
pub trait DataStore {
    /// Read every record, in stored order. A missing source is an empty roster.
    fn load(&self) -> Result<Vec<Teacher>>;

    /// Replace the stored records with `teachers`, in the given order.
    fn save(&mut self, teachers: &[Teacher]) -> Result<()>;
}
