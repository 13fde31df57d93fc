//! Memoized class name lookups.

use crate::desktop_entry::AppInfo;
use crate::resolver::AppResolver;
use log::debug;
use std::collections::HashMap;

/// Caches resolver results per window class, misses included.
///
/// Entries live for the whole process. Desktop files edited while the shell
/// runs are not picked up.
pub struct ResolutionCache<R> {
    resolver: R,
    entries: HashMap<String, Option<AppInfo>>,
}

impl<R: AppResolver> ResolutionCache<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            entries: HashMap::new(),
        }
    }

    /// Resolve `class_name`, hitting the resolver only the first time.
    pub fn lookup(&mut self, class_name: &str) -> Option<AppInfo> {
        if let Some(cached) = self.entries.get(class_name) {
            return cached.clone();
        }

        let result = self.resolver.resolve_app_info(class_name);
        debug!("Resolved '{}' -> {:?}", class_name, result);
        self.entries.insert(class_name.to_string(), result.clone());
        result
    }

    /// Whether `class_name` has been looked up before.
    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}
