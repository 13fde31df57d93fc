//! Registry of resolved, currently open windows.

use capy_apps::AppInfo;

/// Window address → app info, in first-insertion order.
///
/// The task list is tiny (one entry per open window), so a Vec with linear
/// lookup keeps the order for free.
#[derive(Clone, Debug, Default)]
pub struct RunningApps {
    entries: Vec<(String, AppInfo)>,
}

impl RunningApps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update an entry. Updating keeps the original position.
    pub fn insert(&mut self, address: impl Into<String>, info: AppInfo) {
        let address = address.into();
        match self.entries.iter_mut().find(|(a, _)| *a == address) {
            Some((_, existing)) => *existing = info,
            None => self.entries.push((address, info)),
        }
    }

    /// Remove an entry, returning it if it was present.
    pub fn remove(&mut self, address: &str) -> Option<AppInfo> {
        let idx = self.entries.iter().position(|(a, _)| a == address)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, address: &str) -> Option<&AppInfo> {
        self.entries
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, info)| info)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.get(address).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AppInfo)> {
        self.entries.iter().map(|(a, info)| (a.as_str(), info))
    }

    /// Addresses in insertion order.
    pub fn addresses(&self) -> Vec<&str> {
        self.entries.iter().map(|(a, _)| a.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
