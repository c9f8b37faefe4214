use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Event categories shown on every chart axis, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Workshop,
    Webinar,
    Conference,
    Fdp,
    Seminar,
    Hackathon,
}

impl EventCategory {
    /// The canonical axis. Every count mapping and chart iterates this order.
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Workshop,
        EventCategory::Webinar,
        EventCategory::Conference,
        EventCategory::Fdp,
        EventCategory::Seminar,
        EventCategory::Hackathon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshop",
            EventCategory::Webinar => "Webinar",
            EventCategory::Conference => "Conference",
            EventCategory::Fdp => "FDP",
            EventCategory::Seminar => "Seminar",
            EventCategory::Hackathon => "Hackathon",
        }
    }

    /// Exact match on the stored `type_of_event` value. Anything else is not ours.
    pub fn from_store(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category participation counts. Always holds all six categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    counts: [i64; 6],
}

impl CategoryCounts {
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, category: EventCategory) -> i64 {
        self.counts[category.index()]
    }

    /// Negative inputs are clamped so the mapping stays non-negative.
    pub fn set(&mut self, category: EventCategory, count: i64) {
        self.counts[category.index()] = count.max(0);
    }

    pub fn add(&mut self, category: EventCategory, count: i64) {
        let slot = &mut self.counts[category.index()];
        *slot = slot.saturating_add(count.max(0));
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventCategory, i64)> + '_ {
        EventCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> i64 {
        self.counts.iter().copied().fold(0, i64::saturating_add)
    }

    pub fn max(&self) -> i64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn is_all_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl FromIterator<(EventCategory, i64)> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = (EventCategory, i64)>>(iter: I) -> Self {
        let mut counts = Self::zeroed();
        for (category, count) in iter {
            counts.add(category, count);
        }
        counts
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(EventCategory::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.as_str(), &count)?;
        }
        map.end()
    }
}
