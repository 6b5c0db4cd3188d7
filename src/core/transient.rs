//! Short-lived UI flags such as "Copied!".
//!
//! A flag is set with [`TransientFlag::mark`], which returns a generation.
//! The expiry timer later calls [`TransientFlag::expire`] with that
//! generation; if the flag was re-marked in between, the stale expiry is a
//! no-op and the newer mark keeps its full duration.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientFlag<T> {
    current: Option<T>,
    generation: u64,
}

impl<T> Default for TransientFlag<T> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<T: PartialEq> TransientFlag<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.current = Some(value);
        self.generation
    }

    /// Clear the flag if `generation` is still the latest mark.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is(&self, value: &T) -> bool {
        self.current.as_ref() == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_expire() {
        let mut flag = TransientFlag::new();
        let generation = flag.mark(3usize);
        assert!(flag.is(&3));
        assert!(flag.expire(generation));
        assert!(flag.current().is_none());
    }

    #[test]
    fn test_stale_expiry_ignored() {
        let mut flag = TransientFlag::new();
        let first = flag.mark(0usize);
        let second = flag.mark(1usize);
        assert!(!flag.expire(first));
        assert!(flag.is(&1));
        assert!(!flag.is(&0));
        assert!(flag.expire(second));
    }

    #[test]
    fn test_remark_same_value_extends() {
        let mut flag = TransientFlag::new();
        let first = flag.mark("all");
        flag.mark("all");
        assert!(!flag.expire(first));
        assert!(flag.is(&"all"));
    }
}
