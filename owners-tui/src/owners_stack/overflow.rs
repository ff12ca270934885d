//! Overflow latch for the owners-stack bar.
//!
//! The bar measures its inline items on every render until it first
//! overflows. From then on neither the measurement nor the threshold is
//! recomputed until the stack is replaced or changes length: a stack can only
//! grow while drilling in, so a collapsed bar stays collapsed for the rest of
//! that stack's life.

use tracing::debug;

use owners_core::OwnerNavigator;

/// Identity of an owner stack for measurement purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackKey {
    pub generation: u64,
    pub len: usize,
}

impl StackKey {
    pub fn of(tree: &dyn OwnerNavigator) -> Self {
        Self {
            generation: tree.stack_generation(),
            len: tree.owner_stack().len(),
        }
    }
}

/// Whether items needing `required` cells overflow a bar `available` wide.
pub fn is_overflowing(available: u16, required: u16) -> bool {
    required > available
}

#[derive(Debug, Default, Clone)]
pub struct OverflowTracker {
    key: Option<StackKey>,
    elements_total_width: u16,
    overflowing: bool,
    measurements: usize,
}

impl OverflowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one layout pass for `key` in a bar `available` cells wide.
    ///
    /// `measure` is called only while the tracker is not latched.
    pub fn update(&mut self, key: StackKey, available: u16, measure: impl FnOnce() -> u16) -> bool {
        if self.key != Some(key) {
            self.key = Some(key);
            self.overflowing = false;
            self.elements_total_width = 0;
        }
        if self.overflowing {
            return true;
        }

        self.elements_total_width = measure();
        self.measurements += 1;
        self.overflowing = is_overflowing(available, self.elements_total_width);
        if self.overflowing {
            debug!(
                required = self.elements_total_width,
                available,
                len = key.len,
                "owners stack overflows, collapsing"
            );
        }
        self.overflowing
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    /// Width the inline items needed at the last measurement.
    pub fn elements_total_width(&self) -> u16 {
        self.elements_total_width
    }

    /// Number of measurements taken so far.
    pub fn measurements(&self) -> usize {
        self.measurements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: StackKey = StackKey { generation: 1, len: 3 };

    #[test]
    fn test_threshold() {
        assert!(!is_overflowing(10, 10));
        assert!(!is_overflowing(10, 0));
        assert!(is_overflowing(10, 11));
        assert!(is_overflowing(0, 1));
    }

    #[test]
    fn test_measures_while_fitting() {
        let mut tracker = OverflowTracker::new();
        assert!(!tracker.update(KEY, 40, || 20));
        assert!(!tracker.update(KEY, 40, || 25));
        assert_eq!(tracker.measurements(), 2);
        assert_eq!(tracker.elements_total_width(), 25);
    }

    #[test]
    fn test_latches_once_overflowing() {
        let mut tracker = OverflowTracker::new();
        assert!(tracker.update(KEY, 10, || 30));
        assert_eq!(tracker.measurements(), 1);

        // Wider bar, same stack: no re-measure, still collapsed.
        assert!(tracker.update(KEY, 100, || panic!("must not measure while latched")));
        assert!(tracker.is_overflowing());
        assert_eq!(tracker.elements_total_width(), 30);
        assert_eq!(tracker.measurements(), 1);
    }

    #[test]
    fn test_new_stack_releases_latch() {
        let mut tracker = OverflowTracker::new();
        assert!(tracker.update(KEY, 10, || 30));

        let replaced = StackKey { generation: 2, ..KEY };
        assert!(!tracker.update(replaced, 10, || 8));
        assert_eq!(tracker.measurements(), 2);

        let longer = StackKey { len: 4, ..replaced };
        assert!(tracker.update(longer, 10, || 12));
        assert_eq!(tracker.measurements(), 3);
    }
}
