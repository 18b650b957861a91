use crate::preset::Preset;

/// Ordered, in-memory list of saved presets.
///
/// Rows shown in the main view are derived from [`Registry::rows`] so that a
/// row index always refers to the entry at the same index.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: Vec<Preset>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Preset> {
        self.entries.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Labels of all rows in display order.
    pub fn rows(&self) -> Vec<String> {
        self.entries.iter().map(Preset::row_label).collect()
    }

    /// Append `preset` as a new row and return the name it was stored under.
    ///
    /// A name already in use gets a ` (2)`, ` (3)`, ... suffix.
    pub fn add(&mut self, mut preset: Preset) -> String {
        preset.name = self.unique_name(&preset.name);
        let name = preset.name.clone();
        tracing::info!(name = %name, "preset added");
        self.entries.push(preset);
        name
    }

    /// Remove the first entry named like `preset` and append `preset`.
    pub fn replace_or_add(&mut self, preset: Preset) {
        if let Some(idx) = self.position(&preset.name) {
            self.entries.remove(idx);
            tracing::info!(name = %preset.name, "preset replaced");
        } else {
            tracing::info!(name = %preset.name, "preset added");
        }
        self.entries.push(preset);
    }

    /// Remove the entry at `index`. Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) -> Option<Preset> {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "ignoring stale row index");
            return None;
        }
        let removed = self.entries.remove(index);
        tracing::info!(name = %removed.name, "preset deleted");
        Some(removed)
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{base} ({n})"))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}
