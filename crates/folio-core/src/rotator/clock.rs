//! Time sources for the typewriter loop.

use std::cell::Cell;
use std::future::Future;
use std::time::Duration;

/// Something the scheduling loop can sleep on.
///
/// The browser binary implements this with timer futures; tests and the CLI
/// use [`VirtualClock`] or tokio's paused clock.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Clock whose sleeps complete immediately while accumulating virtual time.
#[derive(Debug, Default)]
pub struct VirtualClock {
    elapsed: Cell<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time slept so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Clock for VirtualClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.elapsed.set(self.elapsed.get() + duration);
        std::future::ready(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_virtual_clock_accumulates() {
        let clock = VirtualClock::new();
        clock.sleep(Duration::from_millis(100)).await;
        clock.sleep(Duration::from_millis(2000)).await;
        assert_eq!(clock.elapsed(), Duration::from_millis(2100));
    }
}
