use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{SortKey, SortOrder};
use crate::roster::Roster;

pub fn run(roster: &Roster, key: SortKey, order: SortOrder) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_teachers(roster.sorted(key, order)))
}
