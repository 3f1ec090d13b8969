//! Stack growth for recursive evaluation.
//!
//! Evaluating a node recurses once per nesting level of the expression, so
//! a pathologically deep tree (say `-(-(-(...)))` a hundred thousand levels
//! down) would exhaust a fixed thread stack. Each node visit goes through
//! [`ensure_sufficient_stack`], which allocates a fresh stack segment on
//! native targets whenever the remaining space drops below a red zone.
//!
//! On wasm32 there is no `stacker`; the closure is called directly.

/// Ensure sufficient stack space is available before executing `f`.
///
/// - **Native**: `stacker::maybe_grow` with a 64KB red zone and 1MB segments
/// - **WASM**: calls `f()` directly
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow once less than this much stack remains.
    const RED_ZONE: usize = 64 * 1024;

    /// Size of each newly allocated stack segment.
    const SEGMENT_SIZE: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
