use std::{
    thread,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Enforces a minimum interval between consecutive requests.
///
/// The mutex is held while waiting, so concurrent callers queue up
/// behind the delay and the interval holds process-wide, not just
/// within a single call chain.
#[derive(Debug)]
pub struct RequestThrottle {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Blocks until the minimum interval since the previous request
    /// has elapsed, then records the current request.
    pub fn acquire(&self) {
        let mut last_request = self.last_request.lock();
        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        *last_request = Some(Instant::now());
    }
}
