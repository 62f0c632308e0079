//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every front end (the interactive menu and the one-shot subcommands
//! both go through it).
//!
//! ## Role and Responsibilities
//!
//! - **Owns state**: the storage backend and the in-memory [`Roster`]
//! - **Dispatches** to the appropriate command function
//! - **Tracks unsaved changes** so callers can tell whether a save is pending
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no presentation.
//!
//! ## Generic Over DataStore
//!
//! `FacultyApi<S: DataStore>` is generic over the storage backend:
//! - Production: `FacultyApi<FileStore>`
//! - Testing: `FacultyApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{SortKey, SortOrder, Teacher, TeacherFilter};
use crate::roster::Roster;
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct FacultyApi<S: DataStore> {
    store: S,
    roster: Roster,
    paths: commands::FacultyPaths,
    dirty: bool,
}

impl<S: DataStore> FacultyApi<S> {
    /// Loads the roster from `store`.
    pub fn open(store: S, paths: commands::FacultyPaths) -> Result<Self> {
        let roster = Roster::from(store.load()?);
        Ok(Self {
            store,
            roster,
            paths,
            dirty: false,
        })
    }

    pub fn list_teachers(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn add_teacher(
        &mut self,
        new: NewTeacher,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.roster, new, today)?;
        self.mark_if_mutated(&result);
        Ok(result)
    }

    pub fn filter_teachers(&self, filter: TeacherFilter) -> Result<commands::CmdResult> {
        commands::filter::run(&self.roster, &filter)
    }

    pub fn sort_teachers(&self, key: SortKey, order: SortOrder) -> Result<commands::CmdResult> {
        commands::sort::run(&self.roster, key, order)
    }

    pub fn search_teacher(&self, name: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.roster, name)
    }

    pub fn update_teacher(
        &mut self,
        name: &str,
        replacement: Teacher,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.roster, name, replacement)?;
        self.mark_if_mutated(&result);
        Ok(result)
    }

    /// Like [`update_teacher`](Self::update_teacher), but fields left unset in
    /// `patch` keep their stored value.
    pub fn patch_teacher(&mut self, name: &str, patch: &TeacherPatch) -> Result<commands::CmdResult> {
        let result = commands::update::run_patch(&mut self.roster, name, patch)?;
        self.mark_if_mutated(&result);
        Ok(result)
    }

    pub fn delete_teacher(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.roster, name)?;
        self.mark_if_mutated(&result);
        Ok(result)
    }

    /// Writes the whole roster back through the store.
    pub fn save(&mut self) -> Result<commands::CmdResult> {
        self.store.save(self.roster.as_slice())?;
        self.dirty = false;
        let mut result = commands::CmdResult::default();
        result.add_message(commands::CmdMessage::info(format!(
            "Saved {} teacher(s) to {}",
            self.roster.len(),
            self.paths.data_file.display()
        )));
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn mark_if_mutated(&mut self, result: &commands::CmdResult) {
        if result.is_mutation() {
            self.dirty = true;
        }
    }
}

pub use crate::commands::add::NewTeacher;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::update::TeacherPatch;
pub use commands::{CmdMessage, CmdResult, FacultyPaths, MessageLevel};
