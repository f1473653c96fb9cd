use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::clubs::ClubSet;
use super::window::RollingWindow;

pub type Recent5 = RollingWindow<5>;
pub type Recent15 = RollingWindow<15>;

/// Running statistics for a single club
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClubStats {
    /// Derived from the totals, rounded to 2 decimal places
    #[serde(rename = "Average Distance")]
    pub average_distance: f64,

    #[serde(rename = "Total Distance")]
    pub total_distance: u64,

    #[serde(rename = "Total Shots")]
    pub total_shots: u64,

    #[serde(rename = "Past 5 Shots", default)]
    pub recent_5: Recent5,

    #[serde(rename = "Past 15 Shots", default)]
    pub recent_15: Recent15,
}

impl ClubStats {
    /// Add one shot to the totals and both rolling windows.
    /// The average is not touched; call `recompute_average` afterwards.
    pub fn push_shot(&mut self, distance: u32) {
        self.total_shots += 1;
        self.total_distance += u64::from(distance);
        self.recent_5.push(distance);
        self.recent_15.push(distance);
    }

    /// Recompute the average from the totals (0 when no shots are recorded)
    pub fn recompute_average(&mut self) {
        self.average_distance = if self.total_shots == 0 {
            0.0
        } else {
            round2(self.total_distance as f64 / self.total_shots as f64)
        };
    }

    /// True when the last-15 window is full and a trend line can be drawn
    pub fn has_full_trend(&self) -> bool {
        self.recent_15.is_full()
    }
}

/// Round to 2 decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Statistics for every tracked club, keyed by club identifier.
///
/// Keys keep their insertion order, which is the order of the club set the
/// summary was initialized from (or the order found in the data file).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsSummary {
    entries: IndexMap<String, ClubStats>,
}

impl StatsSummary {
    /// Zeroed statistics for every club in the set
    pub fn initialize(clubs: &ClubSet) -> Self {
        Self {
            entries: clubs
                .iter()
                .map(|club| (club.to_string(), ClubStats::default()))
                .collect(),
        }
    }

    pub fn get(&self, club: &str) -> Option<&ClubStats> {
        self.entries.get(club)
    }

    pub fn get_mut(&mut self, club: &str) -> Option<&mut ClubStats> {
        self.entries.get_mut(club)
    }

    pub fn contains(&self, club: &str) -> bool {
        self.entries.contains_key(club)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClubStats)> {
        self.entries
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn clubs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
