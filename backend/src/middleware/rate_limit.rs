use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory rate limiter guarding the shared-secret entry point against
/// brute forcing.
pub struct RateLimiter {
    /// Maps keys (peer address) to timestamps of recent failed attempts
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
    /// Maximum number of failed attempts allowed within the time window
    max_attempts: usize,
    /// Time window for rate limiting
    window: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    /// * `max_attempts` - Maximum attempts allowed within the window
    /// * `window_secs` - Time window in seconds
    pub fn new(max_attempts: usize, window_secs: u64) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts,
            window: Duration::from_secs(window_secs),
        }
    }

    /// Check if a request is allowed (returns true if allowed, false if rate limited)
    pub fn check(&self, key: &str) -> bool {
        let mut attempts = self.attempts.lock().unwrap();
        let now = Instant::now();

        let recent = match attempts.get_mut(key) {
            Some(entry) => {
                entry.retain(|&time| now.duration_since(time) < self.window);
                entry.len()
            }
            None => return true,
        };

        if recent == 0 {
            attempts.remove(key);
        }

        recent < self.max_attempts
    }

    /// Record an attempt for a key (call after a failed secret check)
    pub fn record(&self, key: &str) {
        let mut attempts = self.attempts.lock().unwrap();
        let now = Instant::now();

        // Sweep keys whose attempts have all aged out, so the map stays
        // bounded by the number of peers failing within one window.
        attempts.retain(|_, entry| {
            entry.retain(|&time| now.duration_since(time) < self.window);
            !entry.is_empty()
        });

        attempts.entry(key.to_string()).or_default().push(now);
    }

    /// Clear all attempts for a key (after a successful secret check)
    pub fn clear(&self, key: &str) {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.remove(key);
    }
}
