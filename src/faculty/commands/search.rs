use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster, name: &str) -> Result<CmdResult> {
    match roster.find(name) {
        Some(teacher) => Ok(CmdResult::default().with_listed_teachers(vec![teacher.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Teacher not found: {}", name)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_exact_name_ignoring_case() {
        let roster = StoreFixture::new().with_alice_and_bob().roster();
        let result = run(&roster, "ALICE").unwrap();
        assert_eq!(result.listed_teachers.len(), 1);
        assert_eq!(result.listed_teachers[0].age, 30);
    }

    #[test]
    fn partial_names_do_not_match() {
        let roster = StoreFixture::new().with_alice_and_bob().roster();
        let result = run(&roster, "Ali").unwrap();
        assert!(result.listed_teachers.is_empty());
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn returns_first_of_duplicate_names() {
        let roster = StoreFixture::new()
            .with_teacher("Sam", 30, "01/01/1994", 1)
            .with_teacher("sam", 50, "01/01/1974", 2)
            .roster();
        let result = run(&roster, "SAM").unwrap();
        assert_eq!(result.listed_teachers[0].age, 30);
    }
}
