//! Descent - expression recognizer driver.
//!
//! ```text
//! CharSource ──► Recognizer::recognize_expression (repeated) ──► Outcome
//!                                                                  │
//!                                                                  ▼
//!                                                     status sink (error, "Success")
//! ```
//!
//! The recognizer itself lives in `descent_parse`; this crate owns the
//! top-level read loop, the status sink, argument parsing, and logging
//! setup for the `descent` binary.

pub mod cli;
pub mod session;

pub use session::{recognize_all, run, Outcome, SessionConfig};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable that switches on the hierarchical trace, like `--trace`.
pub const TREE_ENV: &str = "DESCENT_TREE";

/// Initialize tracing for diagnostic output on stderr.
///
/// Safe to call multiple times. Plain logging is enabled with `RUST_LOG`
/// (e.g. `RUST_LOG=descent=debug`). With `tree` set, the recursive descent
/// is rendered as an indented call tree, defaulting to
/// `descent_parse=trace` when `RUST_LOG` is unset.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if tree {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("descent_parse=trace"));
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
