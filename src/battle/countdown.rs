//! Whole-second countdown for `timed` games, advanced by the host's ticks.

use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    carry: Duration,
    running: bool,
}

impl Countdown {
    /// A running countdown starting at `limit` seconds.
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
            carry: Duration::ZERO,
            running: true,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Freeze the clock where it is.
    pub fn stop(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    /// Start again from the full limit.
    pub fn rearm(&mut self) {
        self.remaining = self.limit;
        self.carry = Duration::ZERO;
        self.running = true;
    }

    /// Advance by `delta`, decrementing once per whole second.
    /// Returns true on the call that reaches zero.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.carry += delta;
        while self.carry >= ONE_SECOND && self.remaining > 0 {
            self.carry -= ONE_SECOND;
            self.remaining -= 1;
        }

        if self.remaining == 0 {
            self.stop();
            return true;
        }
        false
    }
}
