//! System host adapter

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use varfilter_application::ports::HostEnvironment;
use varfilter_domain::{DomainError, DomainResult};

/// Host accessors backed by the running process.
///
/// Directories not overridden are computed on every call: `curdir` follows
/// the process's working directory, and `projectdir` (hence `configdir`)
/// follows `curdir` unless a project directory was set.
#[derive(Debug)]
pub struct SystemHost {
    tool: String,
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
    program_dir: Option<PathBuf>,
    script_dir: RwLock<Option<PathBuf>>,
}

impl SystemHost {
    /// Creates a host for the tool named `tool`.
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            project_dir: None,
            global_dir: None,
            program_dir: None,
            script_dir: RwLock::new(None),
        }
    }

    /// Fixes the project directory.
    #[must_use]
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    /// Overrides the global directory.
    #[must_use]
    pub fn with_global_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_dir = Some(dir.into());
        self
    }

    /// Overrides the program directory.
    #[must_use]
    pub fn with_program_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.program_dir = Some(dir.into());
        self
    }

    /// Sets (or clears) the directory of the script being executed.
    pub fn set_scriptdir(&self, dir: Option<PathBuf>) {
        *self
            .script_dir
            .write()
            .unwrap_or_else(PoisonError::into_inner) = dir;
    }
}

impl HostEnvironment for SystemHost {
    fn host(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn tmpdir(&self) -> DomainResult<PathBuf> {
        Ok(std::env::temp_dir())
    }

    fn curdir(&self) -> DomainResult<PathBuf> {
        std::env::current_dir().map_err(|e| DomainError::accessor("curdir", e))
    }

    fn scriptdir(&self) -> DomainResult<PathBuf> {
        let script_dir = self
            .script_dir
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match script_dir {
            Some(dir) => Ok(dir),
            None => self.curdir(),
        }
    }

    fn programdir(&self) -> DomainResult<PathBuf> {
        if let Some(dir) = &self.program_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe().map_err(|e| DomainError::accessor("programdir", e))?;
        exe.parent()
            .map(std::path::Path::to_path_buf)
            .ok_or_else(|| DomainError::accessor("programdir", "executable has no parent"))
    }

    fn globaldir(&self) -> DomainResult<PathBuf> {
        if let Some(dir) = &self.global_dir {
            return Ok(dir.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(&self.tool))
            .ok_or_else(|| DomainError::accessor("globaldir", "no user configuration directory"))
    }

    fn configdir(&self) -> DomainResult<PathBuf> {
        Ok(self.projectdir()?.join(format!(".{}", self.tool)))
    }

    fn projectdir(&self) -> DomainResult<PathBuf> {
        match &self.project_dir {
            Some(dir) => Ok(dir.clone()),
            None => self.curdir(),
        }
    }
}
