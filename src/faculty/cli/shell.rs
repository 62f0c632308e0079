//! # Interactive Menu
//!
//! The numbered menu shown when `faculty` runs without a subcommand. It reads one
//! line per prompt and talks to the roster only through [`FacultyApi`], so the same
//! loop runs against a `FileStore` in the binary and an `InMemoryStore` in tests.
//!
//! Nothing is written to disk until the user leaves the menu (option `0` or end of
//! input). A failed save on the way out is returned to the caller.

use super::render::{write_messages, write_teachers};
use chrono::NaiveDate;
use faculty::age::parse_date_of_birth;
use faculty::api::{FacultyApi, NewTeacher};
use faculty::error::Result;
use faculty::model::{SortKey, SortOrder, Teacher, TeacherFilter};
use faculty::store::DataStore;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\
Teacher Management System
1. Show all teachers
2. Add a teacher
3. Filter teachers
4. Sort teachers
5. Search for a teacher
6. Update a teacher's record
7. Delete a teacher
0. Exit";

const INVALID_DATE: &str = "Invalid date format. Please enter the date in dd/mm/yyyy format.";

pub struct Shell<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut FacultyApi<S>,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(api: &'a mut FacultyApi<S>, input: R, output: W, today: NaiveDate) -> Self {
        Self {
            api,
            input,
            output,
            today,
        }
    }

    /// Runs the menu until `0` or end of input, then saves the roster.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.show_all()?,
                "2" => self.add()?,
                "3" => self.filter()?,
                "4" => self.sort()?,
                "5" => self.search()?,
                "6" => self.update()?,
                "7" => self.delete()?,
                "0" => break,
                _ => writeln!(self.output, "Invalid choice. Please enter a valid option.")?,
            }
        }

        let saved = self.api.save()?;
        for message in &saved.messages {
            tracing::debug!("{}", message.content);
        }
        writeln!(self.output, "Exiting the program. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn show_all(&mut self) -> Result<()> {
        let result = self.api.list_teachers()?;
        write_teachers(
            &mut self.output,
            "All Teachers:",
            &result.listed_teachers,
            "No teachers available.",
        )?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some(full_name) = self.prompt("Enter Full Name: ")? else {
            return Ok(());
        };
        let Some(dob) = self.prompt("Enter Date of Birth (dd/mm/yyyy): ")? else {
            return Ok(());
        };
        if parse_date_of_birth(&dob).is_err() {
            writeln!(self.output, "{}", INVALID_DATE)?;
            return Ok(());
        }
        let Some(num_classes) = self.prompt_number(
            "Enter Number of Classes: ",
            "Invalid input. Please enter a valid integer for Number of Classes.",
        )?
        else {
            return Ok(());
        };

        let result = self
            .api
            .add_teacher(NewTeacher::new(full_name, dob, num_classes), self.today)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn filter(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Filter Options:\n1. Filter by Age\n2. Filter by Number of Classes"
        )?;
        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(());
        };

        let filter = match choice.trim() {
            "1" => {
                let Some(age) = self.prompt_number(
                    "Enter Age to filter: ",
                    "Invalid input. Please enter a valid integer for Age.",
                )?
                else {
                    return Ok(());
                };
                writeln!(
                    self.output,
                    "Filter by (1) Exact Age, (2) Below The Age, (3) Above The Age"
                )?;
                let Some(mode) = self.read_line()? else {
                    return Ok(());
                };
                match mode.trim() {
                    "1" => TeacherFilter::ExactAge(age),
                    "2" => TeacherFilter::AgeBelow(age),
                    "3" => TeacherFilter::AgeAbove(age),
                    _ => {
                        writeln!(self.output, "Invalid age filter type.")?;
                        return Ok(());
                    }
                }
            }
            "2" => {
                let Some(classes) = self.prompt_number(
                    "Enter Number of Classes to filter: ",
                    "Invalid input. Please enter a valid integer for Number of Classes.",
                )?
                else {
                    return Ok(());
                };
                TeacherFilter::ExactClasses(classes)
            }
            _ => {
                writeln!(self.output, "Invalid filter choice.")?;
                return Ok(());
            }
        };

        let result = self.api.filter_teachers(filter)?;
        write_teachers(
            &mut self.output,
            "Filtered Teachers:",
            &result.listed_teachers,
            "No teachers match the filter criteria.",
        )?;
        Ok(())
    }

    fn sort(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Sort Options:\n1. Sort by Name\n2. Sort by Age\n3. Sort by Number of Classes"
        )?;
        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(());
        };
        // The order is asked for even when the key is invalid.
        let Some(order) = self.prompt("Sort in (1) Ascending or (2) Descending order: ")? else {
            return Ok(());
        };
        let key = match choice.trim() {
            "1" => SortKey::Name,
            "2" => SortKey::Age,
            "3" => SortKey::Classes,
            _ => {
                writeln!(self.output, "Invalid sorting choice.")?;
                return Ok(());
            }
        };
        let order = if order.trim() == "2" {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        let result = self.api.sort_teachers(key, order)?;
        write_teachers(
            &mut self.output,
            "Sorted Teachers:",
            &result.listed_teachers,
            "No teachers available.",
        )?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter Full Name to search: ")? else {
            return Ok(());
        };
        let result = self.api.search_teacher(&name)?;
        if result.listed_teachers.is_empty() {
            write_messages(&mut self.output, &result.messages)?;
        } else {
            write_teachers(&mut self.output, "Teacher found:", &result.listed_teachers, "")?;
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter Full Name of the teacher to update: ")? else {
            return Ok(());
        };
        if self.api.roster().find(&name).is_none() {
            writeln!(self.output, "Teacher not found for update: {}", name)?;
            return Ok(());
        }

        let Some(new_name) = self.prompt("Enter new Full Name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt_number(
            "Enter new Age: ",
            "Invalid input. Please enter a valid integer for Age.",
        )?
        else {
            return Ok(());
        };
        let Some(dob) = self.prompt("Enter new Date of Birth: ")? else {
            return Ok(());
        };
        if parse_date_of_birth(&dob).is_err() {
            writeln!(self.output, "{}", INVALID_DATE)?;
            return Ok(());
        }
        let Some(num_classes) = self.prompt_number(
            "Enter new Number of Classes: ",
            "Invalid input. Please enter a valid integer for Number of Classes.",
        )?
        else {
            return Ok(());
        };

        let replacement = Teacher::new(new_name, age, dob.trim(), num_classes);
        let result = self.api.update_teacher(&name, replacement)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter Full Name of the teacher to delete: ")? else {
            return Ok(());
        };
        let result = self.api.delete_teacher(&name)?;
        write_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    /// Keeps asking until the answer parses; `None` on end of input.
    fn prompt_number<T: FromStr>(&mut self, text: &str, retry: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "{}", retry)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// One line without its terminator; `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faculty::api::FacultyPaths;
    use faculty::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn alice_and_bob() -> InMemoryStore {
        InMemoryStore::with_teachers(vec![
            Teacher::new("Alice", 30, "01/01/1994", 3),
            Teacher::new("bob", 45, "05/05/1979", 5),
        ])
    }

    fn api_with(store: InMemoryStore) -> FacultyApi<InMemoryStore> {
        let paths = FacultyPaths {
            config_dir: None,
            data_file: "teachers.txt".into(),
        };
        FacultyApi::open(store, paths).unwrap()
    }

    fn run_script(api: &mut FacultyApi<InMemoryStore>, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Shell::new(api, Cursor::new(script.as_bytes()), &mut output, today())
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn exit_saves_and_says_goodbye() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "0\n");
        assert!(out.ends_with("Exiting the program. Goodbye!\n"));
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().saved().len(), 2);
    }

    #[test]
    fn end_of_input_behaves_like_exit() {
        let mut api = api_with(InMemoryStore::new());
        let out = run_script(&mut api, "");
        assert!(out.contains("Exiting the program. Goodbye!"));
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn show_all_on_empty_roster() {
        let mut api = api_with(InMemoryStore::new());
        let out = run_script(&mut api, "1\n0\n");
        assert!(out.contains("No teachers available."));
    }

    #[test]
    fn add_retries_class_count_until_valid() {
        let mut api = api_with(InMemoryStore::new());
        let out = run_script(&mut api, "2\nJane Roe\n01/01/2000\nmany\n4\n1\n0\n");
        assert!(out.contains("Invalid input. Please enter a valid integer for Number of Classes."));
        assert!(out.contains("Jane Roe | Age: 24 | DOB: 01/01/2000 | Classes: 4"));
        assert_eq!(api.store().saved()[0].num_classes, 4);
    }

    #[test]
    fn add_with_bad_date_returns_to_menu() {
        let mut api = api_with(InMemoryStore::new());
        let out = run_script(&mut api, "2\nJane Roe\n2000-01-01\n0\n");
        assert!(out.contains(INVALID_DATE));
        assert!(api.roster().is_empty());
        assert!(!out.contains("Enter Number of Classes"));
    }

    #[test]
    fn filter_by_classes() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "3\n2\n3\n0\n");
        assert!(out.contains("Filtered Teachers:"));
        assert!(out.contains("Alice | Age: 30"));
        assert!(!out.contains("bob | Age: 45"));
    }

    #[test]
    fn filter_with_no_matches() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "3\n1\n60\n1\n0\n");
        assert!(out.contains("No teachers match the filter criteria."));
    }

    #[test]
    fn invalid_submenu_choices() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "3\n9\n3\n1\n30\n7\n4\n5\n1\n0\n");
        assert!(out.contains("Invalid filter choice."));
        assert!(out.contains("Invalid age filter type."));
        assert!(out.contains("Invalid sorting choice."));
    }

    #[test]
    fn sort_descending_by_age() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "4\n2\n2\n0\n");
        let bob = out.find("bob | Age: 45").unwrap();
        let alice = out.find("Alice | Age: 30").unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn invalid_sort_key_still_reads_the_order_line() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "4\n9\n2\n1\n0\n");
        let rejected = out.find("Invalid sorting choice.").unwrap();
        let listing = out.find("All Teachers:").unwrap();
        assert!(rejected < listing);
        assert!(!out.contains("Invalid choice. Please enter a valid option."));
        assert!(!out.contains("Sorted Teachers:"));
    }

    #[test]
    fn search_reports_hit_and_miss() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "5\nALICE\n5\nCarol\n0\n");
        assert!(out.contains("Teacher found:\nAlice | Age: 30"));
        assert!(out.contains("Teacher not found: Carol"));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut api = api_with(alice_and_bob());
        run_script(&mut api, "6\nalice\nAlicia\n31\n01/01/1993\n6\n0\n");
        let saved = api.store().saved();
        assert_eq!(saved[0], Teacher::new("Alicia", 31, "01/01/1993", 6));
        assert_eq!(saved[1].full_name, "bob");
    }

    #[test]
    fn update_unknown_name_skips_prompts() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "6\nCarol\n0\n");
        assert!(out.contains("Teacher not found for update: Carol"));
        assert!(!out.contains("Enter new Full Name"));
    }

    #[test]
    fn delete_then_exit_persists_removal() {
        let mut api = api_with(alice_and_bob());
        let out = run_script(&mut api, "7\nbob\n0\n");
        assert!(out.contains("Teacher deleted: bob"));
        assert_eq!(api.store().saved().len(), 1);
    }

    #[test]
    fn unknown_choice_is_reported() {
        let mut api = api_with(InMemoryStore::new());
        let out = run_script(&mut api, "42\n0\n");
        assert!(out.contains("Invalid choice. Please enter a valid option."));
    }

    #[test]
    fn failed_save_is_returned() {
        let mut api = api_with(InMemoryStore::new().failing_saves());
        let mut output = Vec::new();
        let result = Shell::new(&mut api, Cursor::new(&b"0\n"[..]), &mut output, today()).run();
        assert!(result.is_err());
    }
}
