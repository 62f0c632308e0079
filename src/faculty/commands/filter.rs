use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::TeacherFilter;
use crate::roster::Roster;

pub fn run(roster: &Roster, filter: &TeacherFilter) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_teachers(roster.filter(filter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn filters_by_class_count() {
        let roster = StoreFixture::new().with_alice_and_bob().roster();
        let result = run(&roster, &TeacherFilter::ExactClasses(3)).unwrap();
        assert_eq!(result.listed_teachers.len(), 1);
        assert_eq!(result.listed_teachers[0].full_name, "Alice");
    }

    #[test]
    fn age_window_below() {
        let roster = StoreFixture::new().with_alice_and_bob().roster();
        let result = run(&roster, &TeacherFilter::AgeBelow(46)).unwrap();
        assert_eq!(result.listed_teachers.len(), 1);
        assert_eq!(result.listed_teachers[0].full_name, "bob");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let roster = StoreFixture::new().with_alice_and_bob().roster();
        let result = run(&roster, &TeacherFilter::ExactAge(99)).unwrap();
        assert!(result.listed_teachers.is_empty());
        assert!(!result.is_mutation());
    }
}
