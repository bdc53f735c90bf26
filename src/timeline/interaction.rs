use crate::foundation::core::Timestamp;

/// Tracks manual scroll/touch activity and exposes a debounced idle signal.
///
/// Every interaction replaces the pending idle deadline, so continuous
/// interaction postpones resumption indefinitely and at most one deadline is
/// ever armed. `reset` is the teardown pairing for every armed deadline.
#[derive(Clone, Copy, Debug)]
pub struct InteractionMonitor {
    debounce_ms: f64,
    interacting: bool,
    idle_deadline: Option<Timestamp>,
}

impl InteractionMonitor {
    pub fn new(debounce_ms: f64) -> Self {
        Self {
            debounce_ms,
            interacting: false,
            idle_deadline: None,
        }
    }

    /// Record user activity. `true` suppresses immediately and (re)arms the
    /// idle deadline. `false` signals the gesture ended; the deadline keeps
    /// running so a released touch still waits out the idle delay.
    pub fn set_interacting(&mut self, interacting: bool, now: Timestamp) {
        if interacting {
            self.interacting = true;
            self.idle_deadline = Some(now.offset(self.debounce_ms));
        }
    }

    /// Whether autoplay is currently suppressed. Crossing the idle deadline
    /// clears the flag as a side effect.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if !self.interacting {
            return false;
        }
        match self.idle_deadline {
            Some(deadline) if now >= deadline => {
                self.interacting = false;
                self.idle_deadline = None;
                false
            }
            Some(_) => true,
            // Suppressed with no deadline armed only happens after reset.
            None => false,
        }
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Cancel any pending resume. Called on stop/destroy so no stale
    /// deadline outlives the controller.
    pub fn reset(&mut self) {
        self.interacting = false;
        self.idle_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppresses_immediately_and_clears_after_debounce() {
        let mut mon = InteractionMonitor::new(3_000.0);
        assert!(!mon.poll(Timestamp(0.0)));

        mon.set_interacting(true, Timestamp(100.0));
        assert!(mon.poll(Timestamp(100.0)));
        assert!(mon.poll(Timestamp(3_099.0)));
        assert!(!mon.poll(Timestamp(3_100.0)));
        assert!(!mon.is_interacting());
    }

    #[test]
    fn repeated_interaction_replaces_the_deadline() {
        let mut mon = InteractionMonitor::new(3_000.0);
        mon.set_interacting(true, Timestamp(0.0));
        mon.set_interacting(true, Timestamp(2_000.0));
        // The first deadline (3000) must not fire.
        assert!(mon.poll(Timestamp(3_500.0)));
        assert!(!mon.poll(Timestamp(5_000.0)));
    }

    #[test]
    fn gesture_end_still_waits_out_the_delay() {
        let mut mon = InteractionMonitor::new(3_000.0);
        mon.set_interacting(true, Timestamp(0.0));
        mon.set_interacting(false, Timestamp(500.0));
        assert!(mon.poll(Timestamp(2_999.0)));
        assert!(!mon.poll(Timestamp(3_000.0)));
    }

    #[test]
    fn reset_cancels_the_pending_resume() {
        let mut mon = InteractionMonitor::new(3_000.0);
        mon.set_interacting(true, Timestamp(0.0));
        mon.reset();
        assert!(!mon.is_interacting());
        assert!(!mon.poll(Timestamp(1.0)));
    }
}
