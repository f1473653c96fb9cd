use anyhow::{Context, Result};
use std::collections::HashMap;

use super::storage::StatsStore;
use super::types::{ClubStats, StatsSummary};

/// Record new shot distances for one club and persist the whole summary.
///
/// Distances are applied in order: totals grow, both rolling windows take the
/// value, then the average is recomputed from the totals. An empty slice is a
/// valid pass that still recomputes the average and still writes the file.
///
/// Returns a copy of the club's updated statistics.
pub fn record_distances(
    summary: &mut StatsSummary,
    store: &StatsStore,
    club: &str,
    distances: &[u32],
) -> Result<ClubStats> {
    let stats = summary
        .get_mut(club)
        .with_context(|| format!("Unknown club '{}'", club))?;

    for &distance in distances {
        stats.push_shot(distance);
    }
    stats.recompute_average();

    let updated = stats.clone();
    store.save(summary)?;

    Ok(updated)
}

/// Remove a multiset of values from `current`, preserving the order of what is kept.
///
/// Each value is dropped at most as many times as it appears in `to_remove`.
/// Values that are not present, or requested more times than they occur,
/// are ignored.
pub fn remove_distances(current: &[u32], to_remove: &[u32]) -> Vec<u32> {
    let mut pending: HashMap<u32, usize> = HashMap::new();
    for &distance in to_remove {
        *pending.entry(distance).or_insert(0) += 1;
    }

    let mut kept = Vec::with_capacity(current.len());
    for (i, &distance) in current.iter().enumerate() {
        if pending.is_empty() {
            kept.extend_from_slice(&current[i..]);
            break;
        }

        match pending.get_mut(&distance) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                pending.remove(&distance);
            }
            None => kept.push(distance),
        }
    }

    kept
}
