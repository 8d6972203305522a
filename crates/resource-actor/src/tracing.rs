//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! The framework uses a compact format that hides the crate/module prefix (`with_target(false)`);
//! the actor tags every event with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with collection key and id policy) and shutdown
//! - **Operations**: List/Get at `debug`, completed Create/Update/Patch/Delete at `info`
//!   with the collection size
//! - **Failures**: misses, id conflicts and storage errors at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a create followed by a patch looks like:
//!
//! ```text
//! INFO Actor started entity_type="Product" collection="products" policy=Sequential
//! INFO Created entity_type="Product" id=4 size=4
//! INFO Updated entity_type="Product" id=4
//! ```

/// Initializes the global subscriber, reading the filter from `RUST_LOG`.
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
