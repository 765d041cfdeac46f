use std::time::Duration;

/// Idle time after the last keystroke before the query preview refreshes.
pub const QUERY_PREVIEW_DELAY: Duration = Duration::from_millis(2000);

/// Trailing-edge debounce over a single slot.
///
/// Each call to [`Debouncer::arm`] hands out a fresh token and silently
/// invalidates the previous one, so however many wakeups are in flight, at
/// most one (the last) fires. The caller owns the clock: production code
/// sleeps for [`Debouncer::delay`] and then checks its token, tests drive
/// `should_fire` with explicit timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register an input at `now` and restart the window. Returns the token
    /// the matching wakeup must present.
    pub fn arm_at(&mut self, now: Duration) -> u64 {
        self.generation += 1;
        self.deadline = Some(now + self.delay);
        self.generation
    }

    /// Register an input without a timestamp. For callers that sleep for
    /// exactly [`Self::delay`], the token check alone decides firing.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.deadline = None;
        self.generation
    }

    /// Drop the pending slot without scheduling anything new.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.deadline = None;
    }

    /// Whether `token` still names the most recent input.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    /// Whether a wakeup holding `token` should fire at time `now`. Firing
    /// consumes the slot so a second wakeup cannot fire again.
    pub fn should_fire(&mut self, token: u64, now: Duration) -> bool {
        if token != self.generation {
            return false;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Runtime-appropriate sleep for debounce wakeups.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
