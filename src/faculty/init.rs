use crate::api::{FacultyApi, FacultyPaths};
use crate::config::FacultyConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (primarily for testing).
pub const HOME_ENV: &str = "FACULTY_HOME";

pub struct FacultyContext {
    pub api: FacultyApi<FileStore>,
}

/// `$FACULTY_HOME` if set and non-empty, otherwise the OS config directory.
pub fn default_config_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "faculty", "faculty").map(|dirs| dirs.config_dir().to_path_buf())
}

/// The explicit path wins; otherwise the configured file, resolved against `cwd`
/// when relative.
pub fn resolve_data_file(cwd: &Path, config: &FacultyConfig, explicit: Option<&Path>) -> PathBuf {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.data_file));
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

pub fn initialize(cwd: &Path, data_file: Option<&Path>) -> Result<FacultyContext> {
    initialize_with(cwd, default_config_dir(), data_file)
}

pub fn initialize_with(
    cwd: &Path,
    config_dir: Option<PathBuf>,
    data_file: Option<&Path>,
) -> Result<FacultyContext> {
    let config = match &config_dir {
        Some(dir) => FacultyConfig::load(dir)?,
        None => {
            tracing::debug!("no configuration directory, using defaults");
            FacultyConfig::default()
        }
    };

    let data_file = resolve_data_file(cwd, &config, data_file);
    tracing::debug!(
        data_file = %data_file.display(),
        policy = %config.load_policy,
        "opening roster"
    );

    let store = FileStore::new(data_file.clone()).with_policy(config.load_policy);
    let paths = FacultyPaths {
        config_dir,
        data_file,
    };
    let api = FacultyApi::open(store, paths)?;

    Ok(FacultyContext { api })
}
