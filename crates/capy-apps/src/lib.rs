//! capy-apps: Desktop entry resolver for Linux desktops.
//!
//! Maps window class names to installed applications:
//! - Scans XDG `applications` directories for matching `.desktop` files
//! - Scores candidates and picks the primary launcher
//! - Caches results per class for the lifetime of the process

mod cache;
mod desktop_entry;
mod error;
mod paths;
mod resolver;

pub use cache::ResolutionCache;
pub use desktop_entry::{AppInfo, DesktopEntryCandidate, is_main_entry, read_icon};
pub use error::EntryError;
pub use paths::{SearchPaths, split_data_dirs};
pub use resolver::{AppResolver, DesktopEntryResolver, MATCH_THRESHOLD};
