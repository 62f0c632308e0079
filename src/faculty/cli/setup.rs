use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use faculty::model::{SortKey, TeacherFilter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "faculty", bin_name = "faculty", version)]
#[command(about = "Keep a roster of teachers in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Roster file to use instead of the configured data-file
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all teachers
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a teacher (age is computed from the date of birth)
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Full name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Date of birth
        #[arg(long, value_name = "DD/MM/YYYY")]
        dob: String,

        /// Number of classes
        #[arg(long)]
        classes: u32,
    },

    /// Filter teachers by age or number of classes
    #[command(display_order = 3)]
    #[command(group(ArgGroup::new("criterion").required(true).args(["age", "classes"])))]
    Filter {
        /// Age to filter on
        #[arg(long)]
        age: Option<u32>,

        /// How to compare ages: exact, below (two years under), above (two years over)
        #[arg(long, value_enum, conflicts_with = "classes")]
        mode: Option<AgeMode>,

        /// Number of classes to match exactly
        #[arg(long)]
        classes: Option<u32>,
    },

    /// Sort teachers (the stored order is not changed)
    #[command(display_order = 4)]
    Sort {
        #[arg(value_enum)]
        key: SortField,

        /// Descending order
        #[arg(long)]
        desc: bool,
    },

    /// Search for a teacher by full name (case-insensitive)
    #[command(alias = "find", display_order = 5)]
    Search {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Update a teacher's record; omitted fields keep their current value
    #[command(alias = "e", display_order = 6)]
    Update {
        /// Full name of the teacher to update
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// New full name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<u32>,

        /// New date of birth
        #[arg(long, value_name = "DD/MM/YYYY")]
        dob: Option<String>,

        /// New number of classes
        #[arg(long)]
        classes: Option<u32>,
    },

    /// Delete a teacher
    #[command(alias = "rm", display_order = 7)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (data-file, load-policy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Run the interactive menu (the default)
    #[command(display_order = 21)]
    Shell,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AgeMode {
    Exact,
    Below,
    Above,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
    Age,
    Classes,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => SortKey::Name,
            SortField::Age => SortKey::Age,
            SortField::Classes => SortKey::Classes,
        }
    }
}

/// Builds the roster filter from the `filter` subcommand's flags.
pub fn build_filter(age: Option<u32>, mode: Option<AgeMode>, classes: Option<u32>) -> Option<TeacherFilter> {
    match (age, classes) {
        (Some(age), _) => Some(match mode.unwrap_or(AgeMode::Exact) {
            AgeMode::Exact => TeacherFilter::ExactAge(age),
            AgeMode::Below => TeacherFilter::AgeBelow(age),
            AgeMode::Above => TeacherFilter::AgeAbove(age),
        }),
        (None, Some(classes)) => Some(TeacherFilter::ExactClasses(classes)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("faculty").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_shell() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_joins_name_words() {
        match parse(&["add", "John", "Doe", "--dob", "01/01/1984", "--classes", "3"]).command {
            Some(Commands::Add { name, dob, classes }) => {
                assert_eq!(name.join(" "), "John Doe");
                assert_eq!(dob, "01/01/1984");
                assert_eq!(classes, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_file_flag_after_subcommand() {
        let cli = parse(&["list", "--file", "roster.txt"]);
        assert_eq!(cli.file, Some(PathBuf::from("roster.txt")));
    }

    #[test]
    fn filter_requires_a_criterion() {
        assert!(Cli::try_parse_from(["faculty", "filter"]).is_err());
        assert!(Cli::try_parse_from(["faculty", "filter", "--age", "3", "--classes", "2"]).is_err());
    }

    #[test]
    fn filter_builds_age_window() {
        match parse(&["filter", "--age", "40", "--mode", "below"]).command {
            Some(Commands::Filter { age, mode, classes }) => {
                assert_eq!(
                    build_filter(age, mode, classes),
                    Some(TeacherFilter::AgeBelow(40))
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn filter_defaults_to_exact_age() {
        assert_eq!(
            build_filter(Some(30), None, None),
            Some(TeacherFilter::ExactAge(30))
        );
        assert_eq!(
            build_filter(None, None, Some(3)),
            Some(TeacherFilter::ExactClasses(3))
        );
    }

    #[test]
    fn sort_parses_key_and_direction() {
        match parse(&["sort", "classes", "--desc"]).command {
            Some(Commands::Sort { key, desc }) => {
                assert_eq!(SortKey::from(key), SortKey::Classes);
                assert!(desc);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn update_separates_target_from_new_name() {
        match parse(&["update", "Alice", "--name", "Alicia", "--classes", "4"]).command {
            Some(Commands::Update {
                name,
                new_name,
                classes,
                age,
                dob,
            }) => {
                assert_eq!(name, vec!["Alice"]);
                assert_eq!(new_name.as_deref(), Some("Alicia"));
                assert_eq!(classes, Some(4));
                assert_eq!(age, None);
                assert_eq!(dob, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
