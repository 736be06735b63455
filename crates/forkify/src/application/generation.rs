use std::sync::atomic::{AtomicUsize, Ordering};

/// Handed out when a fetch starts; compared on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(usize);

/// Counter fencing off stale fetches: only the most recently issued
/// ticket may commit its result.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicUsize,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let generation = RequestGeneration::new();

        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
