use crate::commands::CmdResult;
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_teachers(roster.as_slice().to_vec()))
}
