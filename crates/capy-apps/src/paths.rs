//! Path helpers for XDG application directories.

use std::path::PathBuf;

const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Where to look for `.desktop` files.
///
/// Built from `XDG_DATA_HOME` / `XDG_DATA_DIRS` by default, or from explicit
/// values when the shell config overrides them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPaths {
    /// User data home (e.g. `~/.local/share`).
    pub data_home: PathBuf,
    /// System data dirs in priority order.
    pub data_dirs: Vec<PathBuf>,
}

impl SearchPaths {
    pub fn new(data_home: impl Into<PathBuf>, data_dirs: Vec<PathBuf>) -> Self {
        Self {
            data_home: data_home.into(),
            data_dirs,
        }
    }

    /// Read the XDG environment, falling back to the documented defaults.
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_default();

        let data_home = std::env::var("XDG_DATA_HOME")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".local/share"));

        let data_dirs = std::env::var("XDG_DATA_DIRS")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIRS.to_string());

        Self {
            data_home,
            data_dirs: split_data_dirs(&data_dirs),
        }
    }

    /// All `applications` directories, deduplicated, in lookup order.
    pub fn application_directories(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = Vec::with_capacity(self.data_dirs.len() + 1);

        let candidates = std::iter::once(&self.data_home)
            .chain(self.data_dirs.iter())
            .map(|base| base.join("applications"));

        for dir in candidates {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }

        dirs
    }
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split a colon-separated search path, dropping empty segments.
pub fn split_data_dirs(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_application_directories_are_deduplicated() {
        let paths = SearchPaths::new(
            "/usr/share",
            vec![
                PathBuf::from("/usr/local/share"),
                PathBuf::from("/usr/share"),
                PathBuf::from("/usr/local/share"),
            ],
        );

        assert_eq!(
            paths.application_directories(),
            vec![
                PathBuf::from("/usr/share/applications"),
                PathBuf::from("/usr/local/share/applications"),
            ]
        );
    }

    #[test]
    fn test_split_data_dirs_skips_empty_segments() {
        assert_eq!(
            split_data_dirs("/a::/b:"),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn test_from_env_reads_xdg_vars() {
        let _guard = ENV_LOCK.lock().unwrap();

        unsafe {
            env::set_var("XDG_DATA_HOME", "/tmp/capy-home");
            env::set_var("XDG_DATA_DIRS", "/opt/share:/srv/share");
        }

        let paths = SearchPaths::from_env();
        assert_eq!(paths.data_home, PathBuf::from("/tmp/capy-home"));
        assert_eq!(
            paths.data_dirs,
            vec![PathBuf::from("/opt/share"), PathBuf::from("/srv/share")]
        );

        unsafe {
            env::remove_var("XDG_DATA_HOME");
            env::remove_var("XDG_DATA_DIRS");
        }
    }

    #[test]
    fn test_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();

        unsafe {
            env::remove_var("XDG_DATA_HOME");
            env::remove_var("XDG_DATA_DIRS");
        }

        let paths = SearchPaths::from_env();
        assert!(paths.data_home.ends_with(".local/share"));
        assert_eq!(
            paths.data_dirs,
            vec![PathBuf::from("/usr/local/share"), PathBuf::from("/usr/share")]
        );
    }
}
