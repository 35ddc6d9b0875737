use crate::statics;
use std::path::{Path, PathBuf};

/// Where the persisted state lives. Defaults to `./data` next to the
/// working directory; overridable through the `TASK_TRACKER_DATA`
/// environment variable (useful for tests and portable installs).
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn resolve() -> Self {
        let root = std::env::var_os(statics::ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(statics::DEFAULT_DATA_DIR));
        Self { root }
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn task_data(&self) -> PathBuf {
        self.root.join(statics::FILE_TASK_DATA)
    }

    pub fn type_data(&self) -> PathBuf {
        self.root.join(statics::FILE_TYPE_DATA)
    }

    pub fn active_session(&self) -> PathBuf {
        self.root.join(statics::FILE_ACTIVE_SESSION)
    }

    /// Exports land in the user's download folder, falling back to the
    /// working directory on platforms without one.
    pub fn export_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::DataPaths;

    #[test]
    fn data_files_live_under_the_root() {
        let paths = DataPaths::new("/tmp/tracker");
        assert_eq!(
            paths.task_data(),
            std::path::PathBuf::from("/tmp/tracker/task_data.json")
        );
        assert_eq!(
            paths.type_data(),
            std::path::PathBuf::from("/tmp/tracker/type_data.json")
        );
        assert_eq!(
            paths.active_session(),
            std::path::PathBuf::from("/tmp/tracker/active_session.txt")
        );
    }
}
