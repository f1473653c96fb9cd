use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::input::{DistanceRange, DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE};
use crate::stats::ClubSet;

/// User configuration.
///
/// Every field is optional; a missing config file is the same as an empty one.
///
/// Example YAML:
/// ```yaml
/// data_file: ~/golf/stats.json
/// clubs: [driver, 3w, 5i, 7i, 9i, pw, sw, putter]
/// min_distance: 0
/// max_distance: 400
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where statistics are stored (default: ~/.config/rangeline/golf_clubs_statistics.json)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Clubs to track, in display order (default: the standard 29-club list)
    #[serde(default)]
    pub clubs: Option<Vec<String>>,

    /// Smallest accepted distance in yards (default: 0)
    #[serde(default)]
    pub min_distance: Option<u32>,

    /// Largest accepted distance in yards (default: 600)
    #[serde(default)]
    pub max_distance: Option<u32>,
}

impl Config {
    pub fn club_set(&self) -> ClubSet {
        match &self.clubs {
            Some(clubs) => ClubSet::new(clubs),
            None => ClubSet::standard(),
        }
    }

    pub fn distance_range(&self) -> DistanceRange {
        DistanceRange {
            min: self.min_distance.unwrap_or(DEFAULT_MIN_DISTANCE),
            max: self.max_distance.unwrap_or(DEFAULT_MAX_DISTANCE),
        }
    }

    /// Resolve the data file path: explicit override, then config, then default.
    /// A leading `~/` is expanded to the home directory.
    pub fn data_path(&self, override_path: Option<PathBuf>) -> PathBuf {
        match override_path.or_else(|| self.data_file.clone()) {
            Some(path) => expand_home(path),
            None => crate::stats::get_data_path(),
        }
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path,
    }
}
