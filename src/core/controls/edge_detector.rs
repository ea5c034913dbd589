use std::collections::HashSet;
use std::hash::Hash;

/// Turns level-triggered button state into one-shot rising edges.
///
/// Keyboard auto-repeat, held gamepad buttons and analogue axes held past a
/// threshold all report "pressed" every poll; only the first poll after a
/// release counts as an edge.
#[derive(Debug, Clone)]
pub struct EdgeDetector<K> {
    held: HashSet<K>,
}

impl<K: Copy + Eq + Hash> EdgeDetector<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    /// Records the new level and returns true only on a released-to-pressed transition.
    pub fn update(&mut self, key: K, pressed: bool) -> bool {
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key);
            false
        }
    }

    /// Same contract for an analogue input: "pressed" while `value >= threshold`.
    pub fn axis(&mut self, key: K, value: f64, threshold: f64) -> bool {
        self.update(key, value >= threshold)
    }

    #[must_use]
    pub fn is_held(&self, key: K) -> bool {
        self.held.contains(&key)
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl<K: Copy + Eq + Hash> Default for EdgeDetector<K> {
    fn default() -> Self {
        Self::new()
    }
}
