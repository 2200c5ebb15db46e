//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders segments as stable, line-per-segment text for
//!   `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (spans in
//!   bounds, ordered, contiguous, lossless)
//!
//! ## Testing Strategy
//!
//! Parsing behaviour is pinned by fixture snapshots rather than a separate
//! formal grammar. Snapshots record each segment's kind, span, and the
//! fields a renderer relies on (mention target, display name, tag).

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
