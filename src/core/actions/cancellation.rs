use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// How many pixels the colourizer emits between cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 4096;

/// A render was abandoned before it produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl Error for Cancelled {}

/// Polled by the escape pass and the colourizer. Once it reports `true` the
/// computation drops its partial results and returns [`Cancelled`].
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    #[inline]
    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancels a render once a newer viewport has been requested or the worker
/// is shutting down.
#[derive(Debug, Clone, Copy)]
pub struct SupersededRender<'a> {
    pub generation: u64,
    pub latest_generation: &'a AtomicU64,
    pub shutdown: &'a AtomicBool,
}

impl CancelToken for SupersededRender<'_> {
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.generation != self.latest_generation.load(Ordering::Relaxed)
    }
}

/// Consults a token only on every `interval`-th call to [`IntervalPoller::poll`],
/// starting with the first.
pub struct IntervalPoller<'a, C: CancelToken> {
    token: &'a C,
    interval: usize,
    calls: usize,
}

impl<'a, C: CancelToken> IntervalPoller<'a, C> {
    pub fn new(token: &'a C, interval: usize) -> Self {
        Self {
            token,
            interval: interval.max(1),
            calls: 0,
        }
    }

    pub fn poll(&mut self) -> Result<(), Cancelled> {
        let due = self.calls % self.interval == 0;
        self.calls += 1;

        if due { self.token.check() } else { Ok(()) }
    }
}
