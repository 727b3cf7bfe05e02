//! Test suites exercising the public codec surface.
//!
//! Leaf modules carry their own unit tests; the suites here drive `parse`
//! and `stringify` end to end against the pinned accept/reject tables and
//! the round-trip properties.

mod property;
mod serde_roundtrip;
