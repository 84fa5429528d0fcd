//! Stack growth guard for the recognizer's mutual recursion.
//!
//! Every `(` and every unary `-` in the input costs one level of recursion
//! in the recognizer, so input like `((((...a))))` or `----...a` recurses
//! once per character. On native targets the guard grows the stack on
//! demand through `stacker`; on WASM it is a passthrough.
//!
//! ```text
//! fn recognize_factor(&mut self) -> Result<(), RecognizeError> {
//!     ensure_sufficient_stack(|| {
//!         // ... may call back into recognize_expression ...
//!     })
//! }
//! ```

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
