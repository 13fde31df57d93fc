//! Window class → desktop entry resolution.

use crate::desktop_entry::{AppInfo, DesktopEntryCandidate, read_entry, read_icon, score_entry};
use crate::paths::SearchPaths;
use log::debug;
use std::cmp::Reverse;
use std::path::PathBuf;

/// Minimum score for a candidate to count as a match.
pub const MATCH_THRESHOLD: u32 = 3;

/// Anything that can turn a window class into app metadata.
pub trait AppResolver {
    fn resolve_app_info(&self, class_name: &str) -> Option<AppInfo>;
}

/// Scans application directories for the entry best matching a class name.
///
/// Holds no state besides the directory list; every call hits the filesystem.
#[derive(Clone, Debug)]
pub struct DesktopEntryResolver {
    dirs: Vec<PathBuf>,
}

impl DesktopEntryResolver {
    pub fn new(paths: &SearchPaths) -> Self {
        Self {
            dirs: paths.application_directories(),
        }
    }

    /// Resolver over exactly these directories.
    pub fn with_directories(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Best matching desktop entry for `search_term`, if any file matched.
    pub fn resolve(&self, search_term: &str) -> Option<DesktopEntryCandidate> {
        let mut matches = Vec::new();

        for dir in &self.dirs {
            if !dir.is_dir() {
                continue;
            }

            let walker = walkdir::WalkDir::new(dir)
                .follow_links(true)
                .min_depth(1)
                .max_depth(1);

            for entry in walker.into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                if !entry.file_type().is_file()
                    || path.extension().and_then(|e| e.to_str()) != Some("desktop")
                {
                    continue;
                }

                let content = match read_entry(path) {
                    Ok(c) => c,
                    Err(e) => {
                        debug!("Skipping desktop entry: {}", e);
                        continue;
                    }
                };

                if let Some(candidate) = score_entry(path, &content, search_term) {
                    matches.push(candidate);
                }
            }
        }

        // Main entries first, then score, then shorter path. Lexical path
        // order last so the directory walk order never leaks through.
        matches.sort_by(|a, b| {
            let key = |c: &DesktopEntryCandidate| {
                (
                    Reverse(c.is_main),
                    Reverse(c.score),
                    c.path.as_os_str().len(),
                )
            };
            key(a).cmp(&key(b)).then_with(|| a.path.cmp(&b.path))
        });

        let best = matches.into_iter().next();
        debug!("Best desktop entry for '{}': {:?}", search_term, best);
        best
    }
}

impl AppResolver for DesktopEntryResolver {
    fn resolve_app_info(&self, class_name: &str) -> Option<AppInfo> {
        let candidate = self.resolve(class_name)?;
        if candidate.score < MATCH_THRESHOLD {
            debug!(
                "Rejecting weak match for '{}': {:?} (score {})",
                class_name, candidate.path, candidate.score
            );
            return None;
        }

        Some(AppInfo {
            icon: read_icon(&candidate.path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    fn write_entry(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn resolver_for(dirs: &[&TempDir]) -> DesktopEntryResolver {
        DesktopEntryResolver::with_directories(dirs.iter().map(|d| d.path().to_path_buf()).collect())
    }

    #[test]
    fn test_startup_wm_class_match() {
        let dir = tempdir().unwrap();
        let path = write_entry(
            dir.path(),
            "firefox.desktop",
            "[Desktop Entry]\nName=Firefox\nStartupWMClass=firefox\nIcon=firefox\n",
        );
        let resolver = resolver_for(&[&dir]);

        // Stem equals the term too, so the best candidate scores 3 + 4.
        let best = resolver.resolve("firefox").unwrap();
        assert_eq!(best.path, path);
        assert!(best.score >= 3);

        let info = resolver.resolve_app_info("firefox").unwrap();
        assert_eq!(info.icon, "firefox");
    }

    #[test]
    fn test_startup_wm_class_only_scores_three() {
        let dir = tempdir().unwrap();
        write_entry(
            dir.path(),
            "org.mozilla.browser.desktop",
            "[Desktop Entry]\nStartupWMClass=firefox\nIcon=firefox\n",
        );
        let resolver = resolver_for(&[&dir]);

        assert_eq!(resolver.resolve("firefox").unwrap().score, 3);
        assert_eq!(resolver.resolve_app_info("firefox").unwrap().icon, "firefox");
    }

    #[test]
    fn test_main_entry_beats_url_handler() {
        let dir = tempdir().unwrap();
        let main = write_entry(dir.path(), "code.desktop", "Exec=code %F\nIcon=vscode\n");
        write_entry(
            dir.path(),
            "code-url-handler.desktop",
            "Exec=code --open-url %U\nIcon=vscode\n",
        );
        let resolver = resolver_for(&[&dir]);

        let best = resolver.resolve("code").unwrap();
        assert_eq!(best.path, main);
        assert_eq!(best.score, 6);
        assert!(best.is_main);
    }

    #[test]
    fn test_equal_scores_prefer_shorter_path() {
        let short = tempdir().unwrap();
        let long = tempfile::Builder::new()
            .prefix("a-much-longer-directory-name")
            .tempdir()
            .unwrap();
        write_entry(long.path(), "editor.desktop", "StartupWMClass=ed\n");
        write_entry(short.path(), "editor.desktop", "StartupWMClass=ed\n");

        let expected = if short.path().as_os_str().len() <= long.path().as_os_str().len() {
            short.path().join("editor.desktop")
        } else {
            long.path().join("editor.desktop")
        };

        let forward = resolver_for(&[&long, &short]).resolve("ed").unwrap();
        let backward = resolver_for(&[&short, &long]).resolve("ed").unwrap();
        assert_eq!(forward.path, expected);
        assert_eq!(backward.path, expected);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let dir = tempdir().unwrap();
        for name in ["b.desktop", "a.desktop", "c.desktop"] {
            write_entry(dir.path(), name, "Exec=tool\n");
        }
        let resolver = resolver_for(&[&dir]);

        let first = resolver.resolve("tool").unwrap();
        for _ in 0..5 {
            assert_eq!(resolver.resolve("tool").unwrap(), first);
        }
        assert!(first.path.ends_with("a.desktop"));
    }

    #[test]
    fn test_weak_match_below_threshold() {
        let dir = tempdir().unwrap();
        write_entry(dir.path(), "mytool-gui.desktop", "Exec=mytool-gui\n");
        let resolver = resolver_for(&[&dir]);

        // "Exec=mytool" is a substring of "Exec=mytool-gui": score 2.
        assert_eq!(resolver.resolve("mytool").unwrap().score, 2);
        assert!(resolver.resolve_app_info("mytool").is_none());
    }

    #[test]
    fn test_bare_stem_hit_is_rejected() {
        let dir = tempdir().unwrap();
        write_entry(dir.path(), "libreoffice-writer.desktop", "Exec=soffice --writer\n");
        let resolver = resolver_for(&[&dir]);

        assert_eq!(resolver.resolve("writer").unwrap().score, 0);
        assert!(resolver.resolve_app_info("writer").is_none());
    }

    #[test]
    fn test_no_match() {
        let dir = tempdir().unwrap();
        write_entry(dir.path(), "gimp.desktop", "Exec=gimp\n");
        let resolver = resolver_for(&[&dir]);

        assert!(resolver.resolve("kitty").is_none());
        assert!(resolver.resolve_app_info("kitty").is_none());
    }

    #[test]
    fn test_skips_undecodable_files_and_missing_dirs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.desktop"), [0xc3, 0x28, b'E']).unwrap();
        let good = write_entry(dir.path(), "kitty.desktop", "Exec=kitty\nIcon=kitty\n");

        let resolver = DesktopEntryResolver::with_directories(vec![
            dir.path().join("does-not-exist"),
            dir.path().to_path_buf(),
        ]);

        assert_eq!(resolver.resolve("kitty").unwrap().path, good);
        assert_eq!(resolver.resolve_app_info("kitty").unwrap().icon, "kitty");
    }

    #[test]
    fn test_ignores_other_extensions_and_subdirectories() {
        let dir = tempdir().unwrap();
        write_entry(dir.path(), "kitty.desktop.bak", "StartupWMClass=kitty\n");
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_entry(&dir.path().join("nested"), "kitty.desktop", "StartupWMClass=kitty\n");
        let resolver = resolver_for(&[&dir]);

        assert!(resolver.resolve("kitty").is_none());
    }

    #[test]
    fn test_search_paths_feed_application_dirs() {
        let home = tempdir().unwrap();
        let apps = home.path().join("applications");
        fs::create_dir(&apps).unwrap();
        write_entry(&apps, "foot.desktop", "Exec=foot\nIcon=foot\n");

        let paths = SearchPaths::new(home.path(), vec![]);
        let resolver = DesktopEntryResolver::new(&paths);

        assert_eq!(resolver.directories(), &[apps]);
        assert_eq!(resolver.resolve_app_info("foot").unwrap().icon, "foot");
    }
}
