//! Fixed-interval timers driven by the simulation clock

/// Fires every `period_ms`, starting at `next_due_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    pub period_ms: f64,
    pub next_due_ms: f64,
}

impl IntervalTimer {
    /// First firing at time zero, then every period
    pub fn immediate(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_due_ms: 0.0,
        }
    }

    /// Peek at the next firing time if it is due by `now`
    #[inline]
    pub fn due(&self, now: f64) -> Option<f64> {
        (self.next_due_ms <= now).then_some(self.next_due_ms)
    }

    /// Pop the next firing time if it is due by `now`.
    /// Call repeatedly to catch up after a long frame.
    pub fn take_due(&mut self, now: f64) -> Option<f64> {
        let at = self.due(now)?;
        self.next_due_ms += self.period_ms;
        Some(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_immediately_then_periodically() {
        let mut timer = IntervalTimer::immediate(50.0);
        assert_eq!(timer.take_due(0.0), Some(0.0));
        assert_eq!(timer.take_due(0.0), None);
        assert_eq!(timer.take_due(49.9), None);
        assert_eq!(timer.take_due(50.0), Some(50.0));
    }

    #[test]
    fn test_catch_up() {
        let mut timer = IntervalTimer::immediate(50.0);
        let mut fired = Vec::new();
        while let Some(at) = timer.take_due(175.0) {
            fired.push(at);
        }
        assert_eq!(fired, vec![0.0, 50.0, 100.0, 150.0]);
        assert_eq!(timer.next_due_ms, 200.0);
    }
}
