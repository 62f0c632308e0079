use super::DataStore;
use crate::error::{FacultyError, Result};
use crate::model::Teacher;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    teachers: Vec<Teacher>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teachers(teachers: Vec<Teacher>) -> Self {
        Self {
            teachers,
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail with an IO error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn saved(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Teacher>> {
        Ok(self.teachers.clone())
    }

    fn save(&mut self, teachers: &[Teacher]) -> Result<()> {
        if self.fail_saves {
            return Err(FacultyError::Io(std::io::Error::other(
                "in-memory store configured to fail",
            )));
        }
        self.teachers = teachers.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::roster::Roster;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_teacher(mut self, name: &str, age: u32, dob: &str, classes: u32) -> Self {
            self.store
                .teachers
                .push(Teacher::new(name, age, dob, classes));
            self
        }

        pub fn with_teachers(mut self, count: usize) -> Self {
            for i in 0..count {
                let age = 30 + i as u32;
                let dob = format!("01/01/{}", 1994 - i);
                self.store
                    .teachers
                    .push(Teacher::new(format!("Teacher {}", i + 1), age, dob, 1 + i as u32));
            }
            self
        }

        /// The reference pair used across the test suite: Alice (30, 3 classes)
        /// followed by bob (45, 5 classes).
        pub fn with_alice_and_bob(self) -> Self {
            self.with_teacher("Alice", 30, "01/01/1994", 3)
                .with_teacher("bob", 45, "05/05/1979", 5)
        }

        pub fn roster(&self) -> Roster {
            Roster::from(self.store.teachers.clone())
        }
    }
}
