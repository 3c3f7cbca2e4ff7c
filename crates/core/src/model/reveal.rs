/// Remembers which observed elements have already been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Record an intersection entry. Returns `true` only the first time
    /// element `index` is seen intersecting.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_most_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, false));
        assert!(!tracker.observe(0, true));
        assert!(tracker.observe(1, true));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(5, true));
    }
}
