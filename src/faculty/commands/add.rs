use crate::age::{compute_age, parse_date_of_birth};
use crate::commands::{reserved_char_warnings, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Teacher;
use crate::roster::Roster;
use chrono::NaiveDate;

/// Input for a new teacher. The age is derived from the date of birth.
#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub full_name: String,
    pub date_of_birth: String,
    pub num_classes: u32,
}

impl NewTeacher {
    pub fn new(full_name: impl Into<String>, date_of_birth: impl Into<String>, num_classes: u32) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth: date_of_birth.into(),
            num_classes,
        }
    }
}

pub fn run(roster: &mut Roster, new: NewTeacher, today: NaiveDate) -> Result<CmdResult> {
    let dob = parse_date_of_birth(&new.date_of_birth)?;
    let teacher = Teacher {
        full_name: new.full_name,
        age: compute_age(dob, today),
        date_of_birth: new.date_of_birth.trim().to_string(),
        num_classes: new.num_classes,
    };

    let mut result = CmdResult::default();
    for warning in reserved_char_warnings(&teacher) {
        result.add_message(warning);
    }

    roster.add(teacher.clone());
    result.add_message(CmdMessage::success(format!(
        "Teacher added: {}",
        teacher.full_name
    )));
    Ok(result.with_affected_teachers(vec![teacher]))
}
