//! Timing instrumentation for hot paths.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! cropboard = { features = ["profiling"] }
//! ```
//!
//! Use [`profile_scope!`](crate::profile_scope) for zero-cost
//! instrumentation - the timer compiles away entirely when the feature is
//! off.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Scopes slower than this are logged at warn level
const SLOW_SCOPE_MS: f64 = 8.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// fn handle_mouse_move() {
///     profile_scope!("handle_mouse_move");
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that logs its scope's duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > SLOW_SCOPE_MS {
            warn!(scope = self.name, elapsed_ms, "Slow scope");
        } else {
            #[cfg(feature = "profiling")]
            trace!(scope = self.name, elapsed_ms, "Scope timing");
        }
    }
}
