//! # Line Codec
//!
//! Each record is one line: `fullName,age,dateOfBirth,numClasses`.
//!
//! There is no quoting or escaping. A name or date containing `,` or a line
//! break produces a line that will not decode back to the same record (or will
//! not decode at all). Callers that accept free text should warn about it; see
//! [`contains_reserved`].

use crate::error::FormatError;
use crate::model::Teacher;

pub const DELIMITER: char = ',';
const FIELD_COUNT: usize = 4;

pub fn decode_line(line: &str) -> Result<Teacher, FormatError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount {
            found: fields.len(),
        });
    }

    Ok(Teacher {
        full_name: fields[0].to_string(),
        age: parse_count("age", fields[1])?,
        date_of_birth: fields[2].to_string(),
        num_classes: parse_count("numClasses", fields[3])?,
    })
}

pub fn encode_record(teacher: &Teacher) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}\n",
        teacher.full_name,
        teacher.age,
        teacher.date_of_birth,
        teacher.num_classes,
        d = DELIMITER
    )
}

/// True when `value` would break the line format if written as a field.
pub fn contains_reserved(value: &str) -> bool {
    value.contains(DELIMITER) || value.contains('\n') || value.contains('\r')
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, FormatError> {
    raw.trim()
        .parse()
        .map_err(|_| FormatError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}
