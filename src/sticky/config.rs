use crate::error::{Result, StickyError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DB_FILENAME: &str = "sticky.db";

/// Explicit path to the database file. Wins over everything else.
pub const ENV_DB_PATH: &str = "STICKY_DB";

/// Set to `dev` to keep the database in the current directory.
pub const ENV_MODE: &str = "STICKY_ENV";

/// `tracing` filter directives, e.g. `sticky=debug`.
pub const ENV_LOG: &str = "STICKY_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    Explicit,
    WorkingDir,
    UserData,
}

/// Where the notes database lives for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyConfig {
    pub db_path: PathBuf,
    pub source: LocationSource,
}

impl StickyConfig {
    /// Resolve the location from the process environment.
    pub fn from_env() -> Result<Self> {
        let explicit = std::env::var_os(ENV_DB_PATH).map(PathBuf::from);
        let mode = std::env::var(ENV_MODE).ok();
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let data_dir = ProjectDirs::from("", "", "sticky").map(|d| d.data_dir().to_path_buf());

        Self::resolve(explicit, mode.as_deref(), &cwd, data_dir)
    }

    /// Resolution order: explicit path, then dev mode (working directory), then
    /// the per-user data directory.
    pub fn resolve(
        explicit: Option<PathBuf>,
        mode: Option<&str>,
        cwd: &Path,
        data_dir: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self {
                db_path: path,
                source: LocationSource::Explicit,
            });
        }

        if mode == Some("dev") {
            return Ok(Self {
                db_path: cwd.join(DB_FILENAME),
                source: LocationSource::WorkingDir,
            });
        }

        let data_dir = data_dir.ok_or_else(|| {
            StickyError::Config("Could not determine the user data directory".to_string())
        })?;
        Ok(Self {
            db_path: data_dir.join(DB_FILENAME),
            source: LocationSource::UserData,
        })
    }
}
