//! Terminal output for command results.
//!
//! Everything writes to a generic `Write` so the interactive menu can be driven
//! against in-memory buffers in tests. Colors come from `colored` and follow its
//! global override, so tests switch them off with `set_override(false)`.

use colored::Colorize;
use faculty::api::{CmdMessage, MessageLevel};
use faculty::model::Teacher;
use std::io::{self, Write};

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Prints `heading` followed by one teacher per line, or `empty_message` alone.
pub fn write_teachers<W: Write>(
    out: &mut W,
    heading: &str,
    teachers: &[Teacher],
    empty_message: &str,
) -> io::Result<()> {
    if teachers.is_empty() {
        return writeln!(out, "{}", empty_message);
    }
    writeln!(out, "{}", heading.bold())?;
    for teacher in teachers {
        writeln!(out, "{}", teacher)?;
    }
    Ok(())
}

pub fn print_messages(messages: &[CmdMessage]) -> io::Result<()> {
    write_messages(&mut io::stdout().lock(), messages)
}

pub fn print_teachers(heading: &str, teachers: &[Teacher], empty_message: &str) -> io::Result<()> {
    write_teachers(&mut io::stdout().lock(), heading, teachers, empty_message)
}
