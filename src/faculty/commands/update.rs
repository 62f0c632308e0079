use crate::age::parse_date_of_birth;
use crate::commands::{reserved_char_warnings, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Teacher;
use crate::roster::Roster;

/// Field-by-field changes; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct TeacherPatch {
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub date_of_birth: Option<String>,
    pub num_classes: Option<u32>,
}

impl TeacherPatch {
    pub fn apply(&self, current: &Teacher) -> Teacher {
        Teacher {
            full_name: self
                .full_name
                .clone()
                .unwrap_or_else(|| current.full_name.clone()),
            age: self.age.unwrap_or(current.age),
            date_of_birth: self
                .date_of_birth
                .clone()
                .unwrap_or_else(|| current.date_of_birth.clone()),
            num_classes: self.num_classes.unwrap_or(current.num_classes),
        }
    }
}

pub fn not_found(name: &str) -> CmdMessage {
    CmdMessage::warning(format!("Teacher not found for update: {}", name))
}

/// Replaces the first teacher named `name` with `replacement`, in place.
pub fn run(roster: &mut Roster, name: &str, replacement: Teacher) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let warnings = reserved_char_warnings(&replacement);

    match roster.update(name, replacement.clone()) {
        Some(previous) => {
            for warning in warnings {
                result.add_message(warning);
            }
            let content = if previous.full_name == replacement.full_name {
                format!("Teacher updated: {}", replacement.full_name)
            } else {
                format!(
                    "Teacher updated: {} (now {})",
                    previous.full_name, replacement.full_name
                )
            };
            result.add_message(CmdMessage::success(content));
            Ok(result.with_affected_teachers(vec![replacement]))
        }
        None => {
            result.add_message(not_found(name));
            Ok(result)
        }
    }
}

/// Applies `patch` on top of the first teacher named `name`. A new date of birth
/// must be a valid `dd/mm/yyyy` date.
pub fn run_patch(roster: &mut Roster, name: &str, patch: &TeacherPatch) -> Result<CmdResult> {
    if let Some(dob) = &patch.date_of_birth {
        parse_date_of_birth(dob)?;
    }

    let replacement = match roster.find(name) {
        Some(current) => patch.apply(current),
        None => {
            let mut result = CmdResult::default();
            result.add_message(not_found(name));
            return Ok(result);
        }
    };
    run(roster, name, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_entry_in_place() {
        let mut roster = StoreFixture::new()
            .with_teacher("Zed", 60, "01/01/1964", 2)
            .with_alice_and_bob()
            .roster();
        let replacement = Teacher::new("Alice Cooper", 31, "01/01/1993", 6);

        let result = run(&mut roster, "alice", replacement.clone()).unwrap();

        assert!(result.is_mutation());
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.as_slice()[0].full_name, "Zed");
        assert_eq!(roster.as_slice()[1], replacement);
        assert_eq!(roster.as_slice()[2].full_name, "bob");
        assert!(result.messages[0].content.contains("now Alice Cooper"));
    }

    #[test]
    fn update_is_visible_through_find() {
        let mut roster = StoreFixture::new().with_alice_and_bob().roster();
        run(&mut roster, "bob", Teacher::new("bob", 46, "05/05/1979", 7)).unwrap();
        assert_eq!(roster.find("BOB").unwrap().num_classes, 7);
    }

    #[test]
    fn patch_keeps_unspecified_fields() {
        let mut roster = StoreFixture::new().with_alice_and_bob().roster();
        let patch = TeacherPatch {
            num_classes: Some(9),
            ..TeacherPatch::default()
        };
        run_patch(&mut roster, "ALICE", &patch).unwrap();
        assert_eq!(
            roster.as_slice()[0],
            Teacher::new("Alice", 30, "01/01/1994", 9)
        );
    }

    #[test]
    fn patch_rejects_invalid_date() {
        let mut roster = StoreFixture::new().with_alice_and_bob().roster();
        let before = roster.clone();
        let patch = TeacherPatch {
            date_of_birth: Some("1994-01-01".into()),
            ..TeacherPatch::default()
        };
        assert!(matches!(
            run_patch(&mut roster, "Alice", &patch),
            Err(crate::error::FacultyError::InvalidDate(_))
        ));
        assert_eq!(roster, before);
    }

    #[test]
    fn patch_on_missing_name_is_a_warning() {
        let mut roster = StoreFixture::new().with_alice_and_bob().roster();
        let result = run_patch(&mut roster, "carol", &TeacherPatch::default()).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn missing_name_is_a_warning() {
        let mut roster = StoreFixture::new().with_alice_and_bob().roster();
        let before = roster.clone();
        let result = run(&mut roster, "carol", Teacher::new("x", 1, "x", 1)).unwrap();
        assert!(!result.is_mutation());
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(roster, before);
    }
}
