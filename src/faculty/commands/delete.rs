use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &mut Roster, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match roster.delete(name) {
        Some(removed) => {
            result.add_message(CmdMessage::success(format!(
                "Teacher deleted: {}",
                removed.full_name
            )));
            Ok(result.with_affected_teachers(vec![removed]))
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Teacher not found for deletion: {}",
                name
            )));
            Ok(result)
        }
    }
}
