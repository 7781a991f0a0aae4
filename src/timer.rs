//! The one-second round timer.
//!
//! The host schedules the actual callback (an interval, or a per-frame
//! update). Every round start hands out a fresh [`TimerTicket`]; every exit
//! path (round end, reset, mode change, teardown) bumps the generation so a
//! callback still holding an old ticket can no longer drive the round.

use serde::{Deserialize, Serialize};

/// Proof that a timer callback belongs to the round that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerTicket {
    generation: u64,
}

impl TimerTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoundTimer {
    generation: u64,
    active: bool,
    carry: f64,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self) -> TimerTicket {
        self.generation += 1;
        self.active = true;
        self.carry = 0.0;
        TimerTicket {
            generation: self.generation,
        }
    }

    /// Invalidates the outstanding ticket, if any.
    pub fn release(&mut self) {
        if self.active {
            self.generation += 1;
            self.active = false;
            self.carry = 0.0;
        }
    }

    pub fn ticket(&self) -> Option<TimerTicket> {
        self.active.then_some(TimerTicket {
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: TimerTicket) -> bool {
        self.active && ticket.generation == self.generation
    }

    /// Adds `dt` seconds of host time and returns how many whole seconds
    /// elapsed. Leftover fractions carry into the next call.
    pub fn accumulate(&mut self, dt: f64) -> u32 {
        if !self.active || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        self.carry += dt;
        let whole = self.carry.floor();
        self.carry -= whole;
        whole as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_invalidates_ticket() {
        let mut timer = RoundTimer::new();
        let ticket = timer.acquire();
        assert!(timer.is_current(ticket));
        assert_eq!(timer.ticket(), Some(ticket));

        timer.release();
        assert!(!timer.is_current(ticket));
        assert_eq!(timer.ticket(), None);

        let next = timer.acquire();
        assert_ne!(next, ticket);
        assert!(!timer.is_current(ticket));
        assert!(timer.is_current(next));
    }

    #[test]
    fn test_release_when_idle_keeps_generation() {
        let mut timer = RoundTimer::new();
        timer.release();
        timer.release();
        assert_eq!(timer.acquire().generation(), 1);
    }

    #[test]
    fn test_accumulate_carries_fractions() {
        let mut timer = RoundTimer::new();
        assert_eq!(timer.accumulate(5.0), 0);

        timer.acquire();
        assert_eq!(timer.accumulate(0.5), 0);
        assert_eq!(timer.accumulate(0.75), 1);
        assert_eq!(timer.accumulate(2.25), 2);
        assert_eq!(timer.accumulate(-1.0), 0);
        assert_eq!(timer.accumulate(f64::NAN), 0);
    }
}
