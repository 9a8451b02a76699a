//! Panic-free helpers for the render loop.
//!
//! Display text is cut by character count, never by raw byte index, so a
//! multi-byte glyph (`×`, `÷`, `√`) can never split a slice. Frame rendering
//! runs under [`catch_or`] so a bug in one frame does not take the window down.

/// Byte offset just past the first `max_chars` characters of `s`.
/// Returns `s.len()` when `s` is shorter.
pub fn char_boundary_after(s: &str, max_chars: usize) -> usize {
    s.char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// The first `max_chars` characters of `s`.
pub fn prefix_chars(s: &str, max_chars: usize) -> &str {
    &s[..char_boundary_after(s, max_chars)]
}

/// Number of characters (not bytes) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%msg, "caught panic in frame, recovered");
            fallback
        }
    }
}
