//! Failed-login throttling for the single admin account.
//!
//! After [`MAX_FAILED_ATTEMPTS`] consecutive wrong passwords for the admin
//! username, admin logins are refused for [`LOCK_DURATION`] regardless of the
//! password supplied. Attempts with any other username never count. State is
//! held in memory and resets on restart.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Maximum consecutive failed login attempts before locking.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// How long logins stay locked once the threshold is hit.
pub const LOCK_DURATION: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Default)]
struct LockState {
    failed: u32,
    locked_until: Option<Instant>,
}

#[derive(Debug)]
pub struct LoginThrottle {
    max_attempts: u32,
    lock_for: Duration,
    state: Mutex<LockState>,
}

impl Default for LoginThrottle {
    fn default() -> Self {
        Self::new(MAX_FAILED_ATTEMPTS, LOCK_DURATION)
    }
}

impl LoginThrottle {
    pub fn new(max_attempts: u32, lock_for: Duration) -> Self {
        Self {
            max_attempts,
            lock_for,
            state: Mutex::new(LockState::default()),
        }
    }

    /// Whether logins are currently refused. An expired lock is cleared.
    pub fn is_locked(&self) -> bool {
        self.is_locked_at(Instant::now())
    }

    /// Record a failed attempt. Returns `true` if this failure triggered a lock.
    pub fn record_failure(&self) -> bool {
        self.record_failure_at(Instant::now())
    }

    /// Reset the failure counter after a successful login.
    pub fn record_success(&self) {
        let mut state = self.lock_state();
        *state = LockState::default();
    }

    fn is_locked_at(&self, now: Instant) -> bool {
        let mut state = self.lock_state();
        match state.locked_until {
            Some(until) if until > now => true,
            Some(_) => {
                *state = LockState::default();
                false
            }
            None => false,
        }
    }

    fn record_failure_at(&self, now: Instant) -> bool {
        let mut state = self.lock_state();
        state.failed += 1;
        if state.failed >= self.max_attempts {
            state.failed = 0;
            state.locked_until = Some(now + self.lock_for);
            return true;
        }
        false
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LockState> {
        // Poisoned state is still two valid fields.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
