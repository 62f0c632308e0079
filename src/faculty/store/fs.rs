use super::{DataStore, LoadPolicy};
use crate::codec::{decode_line, encode_record};
use crate::error::{FacultyError, Result};
use crate::model::Teacher;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
    policy: LoadPolicy,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FacultyError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Teacher>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(FacultyError::Io(e)),
        };

        let mut teachers = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(FacultyError::Io)?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;
            match decode_line(&line) {
                Ok(teacher) => teachers.push(teacher),
                Err(source) => match self.policy {
                    LoadPolicy::Strict => {
                        return Err(FacultyError::Format {
                            line: line_no,
                            source,
                        })
                    }
                    LoadPolicy::Lenient => {
                        tracing::warn!(
                            path = %self.path.display(),
                            line = line_no,
                            "skipping malformed record: {}",
                            source
                        );
                    }
                },
            }
        }

        tracing::debug!(path = %self.path.display(), count = teachers.len(), "loaded roster");
        Ok(teachers)
    }

    fn save(&mut self, teachers: &[Teacher]) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = File::create(&self.path).map_err(FacultyError::Io)?;
        let mut writer = BufWriter::new(file);
        for teacher in teachers {
            writer
                .write_all(encode_record(teacher).as_bytes())
                .map_err(FacultyError::Io)?;
        }
        writer.flush().map_err(FacultyError::Io)?;

        tracing::debug!(path = %self.path.display(), count = teachers.len(), "saved roster");
        Ok(())
    }
}
