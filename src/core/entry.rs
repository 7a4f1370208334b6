//! Chart entries and their store.

use serde::{Deserialize, Serialize};

use crate::core::color::random_hex_color;
use crate::core::geometry::ChartPoint;

/// Stable identifier of a chart entry.
///
/// Ids are assigned monotonically per store and never reused, so hosts can
/// key UI rows and drag gestures on them safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One labeled, colored point placed on the chart, in chart space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub id: EntryId,
    pub name: String,
    pub color: String,
    pub coords: ChartPoint,
}

/// Payload for adding an entry; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub name: String,
    pub color: String,
    pub coords: ChartPoint,
}

impl NewEntry {
    /// Default draft for the host's "add entry" action: unnamed, at the
    /// origin, with a randomly picked color.
    #[must_use]
    pub fn random() -> Self {
        Self {
            name: String::new(),
            color: random_hex_color(),
            coords: ChartPoint::ORIGIN,
        }
    }
}

/// Partial entry update keyed by id; unset fields keep their current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    pub id: EntryId,
    pub name: Option<String>,
    pub color: Option<String>,
    pub coords: Option<ChartPoint>,
}

impl EntryPatch {
    #[must_use]
    pub fn coords(id: EntryId, coords: ChartPoint) -> Self {
        Self {
            id,
            name: None,
            color: None,
            coords: Some(coords),
        }
    }
}

/// Ordered collection of chart entries.
///
/// Insertion order is back-to-front draw order; hit-testing walks it in
/// reverse so the most recently added entry wins ties.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    current_id: u64,
    entries: Vec<ChartEntry>,
    revision: u64,
}

impl EntryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&ChartEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Monotonic change counter, bumped on every applied mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends an entry and returns its freshly assigned id.
    pub fn add(&mut self, entry: NewEntry) -> EntryId {
        self.current_id += 1;
        let id = EntryId::new(self.current_id);
        self.entries.push(ChartEntry {
            id,
            name: entry.name,
            color: entry.color,
            coords: entry.coords,
        });
        self.revision += 1;
        id
    }

    /// Merges patch fields into the matching entry.
    ///
    /// Returns `false` (silent no-op) when no entry has the patched id.
    pub fn update(&mut self, patch: EntryPatch) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == patch.id) else {
            return false;
        };

        if let Some(name) = patch.name {
            entry.name = name;
        }
        if let Some(color) = patch.color {
            entry.color = color;
        }
        if let Some(coords) = patch.coords {
            entry.coords = coords;
        }
        self.revision += 1;
        true
    }

    /// Removes the matching entry. Returns `false` (silent no-op) when absent.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.revision += 1;
        true
    }
}
