//! The loaded bench collection and its selection state.

use std::path::PathBuf;

use benchmap_core::{Bench, BenchId};

/// Where the current collection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Nothing loaded yet.
    None,
    /// Loaded from a GeoJSON file.
    File(PathBuf),
    /// The embedded sample dataset.
    Fallback,
}

impl DataSource {
    /// Short label for the status bar.
    pub fn label(&self) -> String {
        match self {
            DataSource::None => "no data".to_string(),
            DataSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            DataSource::Fallback => "built-in samples".to_string(),
        }
    }
}

/// All loaded benches, in source order, plus the active selection.
/// Replaced wholesale on every load; records are never mutated.
pub struct BenchCollection {
    benches: Vec<Bench>,
    source: DataSource,
    /// The currently selected bench (highlighted marker and list row).
    pub selected: Option<BenchId>,
}

impl Default for BenchCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchCollection {
    pub fn new() -> Self {
        Self {
            benches: Vec::new(),
            source: DataSource::None,
            selected: None,
        }
    }

    /// Replace the whole collection. Clears the selection.
    pub fn replace(&mut self, benches: Vec<Bench>, source: DataSource) {
        self.benches = benches;
        self.source = source;
        self.selected = None;
    }

    pub fn benches(&self) -> &[Bench] {
        &self.benches
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Get a bench by ID.
    pub fn get(&self, id: BenchId) -> Option<&Bench> {
        self.benches.iter().find(|b| b.id == id)
    }

    /// The currently selected bench.
    pub fn selected_bench(&self) -> Option<&Bench> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select a bench (no-op if the id is unknown).
    pub fn select(&mut self, id: BenchId) {
        if self.get(id).is_some() {
            self.selected = Some(id);
        }
    }

    /// The first bench in source order, if any.
    pub fn first(&self) -> Option<&Bench> {
        self.benches.first()
    }

    pub fn len(&self) -> usize {
        self.benches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benches.is_empty()
    }

    /// Geographic bounds of the collection as (west, south, east, north).
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut iter = self.benches.iter();
        let first = iter.next()?;
        let mut west = first.lng();
        let mut east = first.lng();
        let mut south = first.lat();
        let mut north = first.lat();
        for bench in iter {
            west = west.min(bench.lng());
            east = east.max(bench.lng());
            south = south.min(bench.lat());
            north = north.max(bench.lat());
        }
        Some((west, south, east, north))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchmap_core::fallback::fallback_benches;

    #[test]
    fn replace_clears_selection() {
        let mut collection = BenchCollection::new();
        collection.replace(fallback_benches(), DataSource::Fallback);
        collection.select(BenchId(3));
        assert!(collection.selected_bench().is_some());

        collection.replace(fallback_benches(), DataSource::Fallback);
        assert_eq!(collection.selected, None);
    }

    #[test]
    fn select_unknown_id_is_ignored() {
        let mut collection = BenchCollection::new();
        collection.replace(fallback_benches(), DataSource::Fallback);
        collection.select(BenchId(999));
        assert_eq!(collection.selected, None);
    }

    #[test]
    fn bounds_cover_all_records() {
        let mut collection = BenchCollection::new();
        assert_eq!(collection.bounds(), None);

        collection.replace(fallback_benches(), DataSource::Fallback);
        let (west, south, east, north) = collection.bounds().unwrap();
        for bench in collection.benches() {
            assert!(bench.lng() >= west && bench.lng() <= east);
            assert!(bench.lat() >= south && bench.lat() <= north);
        }
    }
}
