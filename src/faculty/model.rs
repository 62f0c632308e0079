use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub full_name: String,
    pub age: u32,
    /// Kept as entered (`dd/mm/yyyy`); only parsed when an age is derived from it.
    pub date_of_birth: String,
    pub num_classes: u32,
}

impl Teacher {
    pub fn new(
        full_name: impl Into<String>,
        age: u32,
        date_of_birth: impl Into<String>,
        num_classes: u32,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            age,
            date_of_birth: date_of_birth.into(),
            num_classes,
        }
    }

    /// Case-insensitive exact match on the full name.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.full_name, name)
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Age: {} | DOB: {} | Classes: {}",
            self.full_name, self.age, self.date_of_birth, self.num_classes
        )
    }
}

pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Filter conditions the roster knows how to evaluate.
///
/// The age windows are inclusive and two years wide: `AgeBelow(40)` keeps
/// ages 38 to 40, `AgeAbove(40)` keeps ages 40 to 42.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherFilter {
    ExactAge(u32),
    AgeBelow(u32),
    AgeAbove(u32),
    ExactClasses(u32),
}

pub const AGE_WINDOW: u32 = 2;

impl TeacherFilter {
    pub fn matches(&self, teacher: &Teacher) -> bool {
        match *self {
            TeacherFilter::ExactAge(age) => teacher.age == age,
            TeacherFilter::AgeBelow(age) => {
                (age.saturating_sub(AGE_WINDOW)..=age).contains(&teacher.age)
            }
            TeacherFilter::AgeAbove(age) => {
                (age..=age.saturating_add(AGE_WINDOW)).contains(&teacher.age)
            }
            TeacherFilter::ExactClasses(count) => teacher.num_classes == count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Age,
    Classes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher_aged(age: u32) -> Teacher {
        Teacher::new("T", age, "01/01/1990", 1)
    }

    #[test]
    fn display_uses_pipe_separated_layout() {
        let t = Teacher::new("John Doe", 40, "01/01/1984", 3);
        assert_eq!(
            t.to_string(),
            "John Doe | Age: 40 | DOB: 01/01/1984 | Classes: 3"
        );
    }

    #[test]
    fn name_match_ignores_case() {
        let t = Teacher::new("Alice Smith", 30, "01/01/1994", 3);
        assert!(t.is_named("alice smith"));
        assert!(t.is_named("ALICE SMITH"));
        assert!(!t.is_named("Alice"));
    }

    #[test]
    fn age_below_is_inclusive_two_year_window() {
        let filter = TeacherFilter::AgeBelow(40);
        assert!(!filter.matches(&teacher_aged(37)));
        assert!(filter.matches(&teacher_aged(38)));
        assert!(filter.matches(&teacher_aged(40)));
        assert!(!filter.matches(&teacher_aged(41)));
    }

    #[test]
    fn age_above_is_inclusive_two_year_window() {
        let filter = TeacherFilter::AgeAbove(40);
        assert!(!filter.matches(&teacher_aged(39)));
        assert!(filter.matches(&teacher_aged(40)));
        assert!(filter.matches(&teacher_aged(42)));
        assert!(!filter.matches(&teacher_aged(43)));
    }

    #[test]
    fn age_below_saturates_near_zero() {
        let filter = TeacherFilter::AgeBelow(1);
        assert!(filter.matches(&teacher_aged(0)));
        assert!(filter.matches(&teacher_aged(1)));
    }

    #[test]
    fn exact_filters() {
        let t = Teacher::new("T", 30, "01/01/1994", 3);
        assert!(TeacherFilter::ExactAge(30).matches(&t));
        assert!(!TeacherFilter::ExactAge(31).matches(&t));
        assert!(TeacherFilter::ExactClasses(3).matches(&t));
        assert!(!TeacherFilter::ExactClasses(4).matches(&t));
    }
}
