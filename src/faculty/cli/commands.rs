//! # CLI Layer
//!
//! The command line is one client of the library; the interactive menu in
//! [`super::shell`] is another. Both go through [`FacultyApi`].
//!
//! This is the only place that:
//! - parses arguments
//! - installs the log subscriber
//! - touches stdout, stdin and the process environment
//!
//! ## Structure
//!
//! - `run()`: parse, set up logging, dispatch
//! - `init_context()`: opens the roster named by `--file` or the configuration
//! - `handle_*()`: one per subcommand; mutations are saved before returning
//!
//! `config` is dispatched before the roster is opened so that it keeps working
//! when the data file cannot be loaded (for example to switch a malformed file
//! over to the lenient load policy).

use super::render::{print_messages, print_teachers};
use super::setup::{build_filter, AgeMode, Cli, Commands, SortField};
use super::shell::Shell;
use chrono::{Local, NaiveDate};
use clap::Parser;
use faculty::api::{
    CmdResult, ConfigAction, FacultyApi, FacultyPaths, NewTeacher, TeacherPatch,
};
use faculty::commands;
use faculty::error::{FacultyError, Result};
use faculty::init::{default_config_dir, initialize, FacultyContext};
use faculty::model::SortOrder;
use faculty::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "FACULTY_LOG";

struct AppContext {
    api: FacultyApi<FileStore>,
    today: NaiveDate,
}

pub fn run() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match cli.command.take() {
        Some(Commands::Config { key, value }) => return handle_config(&cli, key, value),
        other => other,
    };

    let mut ctx = init_context(&cli)?;

    match command {
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add { name, dob, classes }) => {
            handle_add(&mut ctx, name.join(" "), dob, classes)
        }
        Some(Commands::Filter { age, mode, classes }) => handle_filter(&ctx, age, mode, classes),
        Some(Commands::Sort { key, desc }) => handle_sort(&ctx, key, desc),
        Some(Commands::Search { name }) => handle_search(&ctx, name.join(" ")),
        Some(Commands::Update {
            name,
            new_name,
            age,
            dob,
            classes,
        }) => {
            let patch = TeacherPatch {
                full_name: new_name,
                age,
                date_of_birth: dob,
                num_classes: classes,
            };
            handle_update(&mut ctx, name.join(" "), patch)
        }
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, name.join(" ")),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
        Some(Commands::Config { .. }) => {
            unreachable!("config is dispatched before the roster is opened")
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let FacultyContext { api } = initialize(&cwd, cli.file.as_deref())?;

    Ok(AppContext {
        api,
        today: Local::now().date_naive(),
    })
}

/// Saves when `result` changed the roster, then prints both sets of messages.
fn finish_mutation(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print_messages(&result.messages)?;
    if result.is_mutation() {
        let saved = ctx.api.save()?;
        for message in &saved.messages {
            tracing::debug!("{}", message.content);
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_teachers()?;
    print_teachers(
        "All Teachers:",
        &result.listed_teachers,
        "No teachers available.",
    )?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: String, dob: String, classes: u32) -> Result<()> {
    let result = ctx
        .api
        .add_teacher(NewTeacher::new(name, dob, classes), ctx.today)?;
    finish_mutation(ctx, result)
}

fn handle_filter(
    ctx: &AppContext,
    age: Option<u32>,
    mode: Option<AgeMode>,
    classes: Option<u32>,
) -> Result<()> {
    let filter = build_filter(age, mode, classes)
        .ok_or_else(|| FacultyError::Api("filter needs --age or --classes".to_string()))?;
    let result = ctx.api.filter_teachers(filter)?;
    print_teachers(
        "Filtered Teachers:",
        &result.listed_teachers,
        "No teachers match the filter criteria.",
    )?;
    Ok(())
}

fn handle_sort(ctx: &AppContext, key: SortField, desc: bool) -> Result<()> {
    let order = if desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let result = ctx.api.sort_teachers(key.into(), order)?;
    print_teachers(
        "Sorted Teachers:",
        &result.listed_teachers,
        "No teachers available.",
    )?;
    Ok(())
}

fn handle_search(ctx: &AppContext, name: String) -> Result<()> {
    let result = ctx.api.search_teacher(&name)?;
    if result.listed_teachers.is_empty() {
        print_messages(&result.messages)?;
    } else {
        print_teachers("Teacher found:", &result.listed_teachers, "")?;
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext, name: String, patch: TeacherPatch) -> Result<()> {
    let result = ctx.api.patch_teacher(&name, &patch)?;
    finish_mutation(ctx, result)
}

fn handle_delete(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.delete_teacher(&name)?;
    finish_mutation(ctx, result)
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock(), ctx.today).run()
}

fn handle_config(cli: &Cli, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let paths = FacultyPaths {
        config_dir: default_config_dir(),
        data_file: cli.file.clone().unwrap_or_default(),
    };
    let result = commands::config::run(&paths, action)?;

    if key.is_none() {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages)?;
    Ok(())
}
