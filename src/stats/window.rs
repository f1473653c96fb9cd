use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::VecDeque;

/// Fixed-capacity sequence of distances that evicts the oldest value when full.
///
/// Values are kept oldest first. On disk a window is a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RollingWindow<const N: usize> {
    values: VecDeque<u32>,
}

impl<const N: usize> RollingWindow<N> {
    pub const CAPACITY: usize = N;

    /// Create an empty window
    pub fn new() -> Self {
        Self {
            values: VecDeque::with_capacity(N),
        }
    }

    /// Append a value at the back, evicting from the front to stay within capacity
    pub fn push(&mut self, value: u32) {
        if N == 0 {
            return;
        }
        // A loaded file may hold more than N values; trim them here too
        while self.values.len() >= N {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once the window holds exactly its capacity
    pub fn is_full(&self) -> bool {
        self.values.len() == N
    }

    /// Copy the values out, oldest first
    pub fn to_vec(&self) -> Vec<u32> {
        self.values.iter().copied().collect()
    }
}

impl<const N: usize> FromIterator<u32> for RollingWindow<N> {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut window = Self::new();
        for value in iter {
            window.push(value);
        }
        window
    }
}

impl<const N: usize> Serialize for RollingWindow<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.values)
    }
}

impl<'de, const N: usize> Deserialize<'de> for RollingWindow<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Stored data is trusted as written
        let values = VecDeque::<u32>::deserialize(deserializer)?;
        Ok(Self { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_below_capacity_keeps_everything() {
        let mut window = RollingWindow::<5>::new();
        window.push(100);
        window.push(200);
        assert_eq!(window.to_vec(), vec![100, 200]);
        assert!(!window.is_full());
    }

    #[test]
    fn test_push_evicts_oldest_when_full() {
        let mut window = RollingWindow::<3>::new();
        for value in [1, 2, 3, 4, 5] {
            window.push(value);
        }
        assert_eq!(window.to_vec(), vec![3, 4, 5]);
        assert!(window.is_full());
        assert_eq!(window.len(), RollingWindow::<3>::CAPACITY);
    }

    #[test]
    fn test_from_iter_applies_capacity() {
        let window: RollingWindow<5> = (0..20).collect();
        assert_eq!(window.to_vec(), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let window: RollingWindow<5> = [190, 210].into_iter().collect();
        assert_eq!(serde_json::to_string(&window).unwrap(), "[190,210]");

        let empty = RollingWindow::<15>::new();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn test_oversized_loaded_window_is_trimmed_on_next_push() {
        let mut window: RollingWindow<3> = serde_json::from_str("[1,2,3,4,5]").unwrap();
        assert_eq!(window.len(), 5);

        window.push(6);
        assert_eq!(window.to_vec(), vec![4, 5, 6]);
    }
}
