//! App resolution service shim.
//!
//! Wraps the capy-apps crate to build the class name cache from config.

use crate::config::TaskListConfig;
use capy_apps::{DesktopEntryResolver, ResolutionCache};
use log::info;

/// Build the resolution cache over the configured application directories.
pub fn build_cache(config: &TaskListConfig) -> ResolutionCache<DesktopEntryResolver> {
    let resolver = DesktopEntryResolver::new(&config.search_paths());
    info!(
        "Resolving apps from {} directories: {:?}",
        resolver.directories().len(),
        resolver.directories()
    );
    ResolutionCache::new(resolver)
}
