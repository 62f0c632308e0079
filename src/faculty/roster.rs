//! # Roster
//!
//! The in-memory, ordered collection of teachers. Insertion order is the stored
//! order and is what gets written back on save.
//!
//! Queries that reorder or narrow the collection ([`Roster::filter`],
//! [`Roster::sorted`]) return new vectors and leave the stored order alone.
//! Name lookups are case-insensitive exact matches and always act on the
//! first match in stored order, since names are not required to be unique.

use crate::model::{SortKey, SortOrder, Teacher, TeacherFilter};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    teachers: Vec<Teacher>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, teacher: Teacher) {
        self.teachers.push(teacher);
    }

    pub fn find(&self, name: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.is_named(name))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.teachers.iter().position(|t| t.is_named(name))
    }

    /// Overwrites the slot of the first teacher named `name` with `replacement`.
    ///
    /// Returns the record that was replaced, or `None` if nobody matched.
    pub fn update(&mut self, name: &str, replacement: Teacher) -> Option<Teacher> {
        let idx = self.position(name)?;
        Some(std::mem::replace(&mut self.teachers[idx], replacement))
    }

    /// Removes the first teacher named `name` and returns it.
    pub fn delete(&mut self, name: &str) -> Option<Teacher> {
        let idx = self.position(name)?;
        Some(self.teachers.remove(idx))
    }

    pub fn filter(&self, filter: &TeacherFilter) -> Vec<Teacher> {
        self.teachers
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    /// Returns a sorted copy using a stable sort.
    ///
    /// Descending by name flips the comparison, so names equal up to case keep
    /// their stored order. Descending by age or class count is the exact reverse
    /// of the ascending result, ties included.
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<Teacher> {
        let mut sorted = self.teachers.clone();
        match (key, order) {
            (SortKey::Name, SortOrder::Descending) => {
                sorted.sort_by(|a, b| compare_by(key, b, a));
            }
            (_, SortOrder::Descending) => {
                sorted.sort_by(|a, b| compare_by(key, a, b));
                sorted.reverse();
            }
            (_, SortOrder::Ascending) => sorted.sort_by(|a, b| compare_by(key, a, b)),
        }
        sorted
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    pub fn as_slice(&self) -> &[Teacher] {
        &self.teachers
    }
}

impl From<Vec<Teacher>> for Roster {
    fn from(teachers: Vec<Teacher>) -> Self {
        Self { teachers }
    }
}

fn compare_by(key: SortKey, a: &Teacher, b: &Teacher) -> Ordering {
    match key {
        SortKey::Name => a
            .full_name
            .to_lowercase()
            .cmp(&b.full_name.to_lowercase()),
        SortKey::Age => a.age.cmp(&b.age),
        SortKey::Classes => a.num_classes.cmp(&b.num_classes),
    }
}
