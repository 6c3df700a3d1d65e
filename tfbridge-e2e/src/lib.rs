//! # tfbridge end-to-end bindings
//!
//! Bindings generated at build time from `tests/fixtures/widget_provider.json`
//! under the `Example` namespace. The tests in `tests/widget_bridge.rs` drive
//! them against the in-memory provider.

/// Generated `Widget` and `Gadget` types, handlers and `initialize`.
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/widget_bridge.rs"));
}
