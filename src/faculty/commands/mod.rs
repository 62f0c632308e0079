use crate::config::FacultyConfig;
use crate::error::{FacultyError, Result};
use crate::model::Teacher;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod filter;
pub mod list;
pub mod search;
pub mod sort;
pub mod update;

#[derive(Debug, Clone)]
pub struct FacultyPaths {
    pub config_dir: Option<PathBuf>,
    pub data_file: PathBuf,
}

impl FacultyPaths {
    pub fn config_dir(&self) -> Result<PathBuf> {
        self.config_dir
            .clone()
            .ok_or_else(|| FacultyError::Config("No configuration directory available".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_teachers: Vec<Teacher>,
    pub listed_teachers: Vec<Teacher>,
    pub config: Option<FacultyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.affected_teachers = teachers;
        self
    }

    pub fn with_listed_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.listed_teachers = teachers;
        self
    }

    pub fn with_config(mut self, config: FacultyConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command changed the roster.
    pub fn is_mutation(&self) -> bool {
        !self.affected_teachers.is_empty()
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Shared by add and update: names or dates the line format cannot hold.
pub(crate) fn reserved_char_warnings(teacher: &Teacher) -> Vec<CmdMessage> {
    let mut warnings = Vec::new();
    if crate::codec::contains_reserved(&teacher.full_name) {
        warnings.push(CmdMessage::warning(format!(
            "Name '{}' contains a comma or line break and will not load back correctly",
            teacher.full_name
        )));
    }
    if crate::codec::contains_reserved(&teacher.date_of_birth) {
        warnings.push(CmdMessage::warning(format!(
            "Date of birth '{}' contains a comma or line break and will not load back correctly",
            teacher.date_of_birth
        )));
    }
    warnings
}
