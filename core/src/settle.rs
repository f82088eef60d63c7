/// Armed timer request returned by [`SettleTimer::signal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTicket {
    pub generation: u64,
    pub delay_ms: u32,
}

/// Trailing-edge debounce bookkeeping for resize signals. The platform owns
/// the actual timer; every signal bumps the generation, so only the callback
/// armed by the latest signal is allowed to rebuild.
#[derive(Clone, Debug)]
pub struct SettleTimer {
    delay_ms: u32,
    generation: u64,
    pending: bool,
}

impl SettleTimer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn signal(&mut self) -> SettleTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        SettleTicket {
            generation: self.generation,
            delay_ms: self.delay_ms,
        }
    }

    /// Consumes the pending signal when `generation` is the latest one.
    pub fn fire(&mut self, generation: u64) -> bool {
        if !self.pending || generation != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_signal_fires() {
        let mut timer = SettleTimer::new(1000);
        let first = timer.signal();
        let second = timer.signal();
        let last = timer.signal();
        assert_eq!(last.delay_ms, 1000);
        assert!(!timer.fire(first.generation));
        assert!(!timer.fire(second.generation));
        assert!(timer.fire(last.generation));
        assert!(!timer.fire(last.generation));
    }

    #[test]
    fn latest_callback_fires_without_consulting_the_clock() {
        let mut timer = SettleTimer::new(1000);
        let ticket = timer.signal();
        // The callback may run early or after a clock step; it still rebuilds.
        assert!(timer.fire(ticket.generation));
    }

    #[test]
    fn fire_without_signal_does_nothing() {
        let mut timer = SettleTimer::new(200);
        assert!(!timer.fire(0));
    }

    #[test]
    fn cancel_drops_pending_signal() {
        let mut timer = SettleTimer::new(200);
        let ticket = timer.signal();
        timer.cancel();
        assert!(!timer.fire(ticket.generation));
    }
}
