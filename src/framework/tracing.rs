//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with the restored item count) and shutdown
//! - **Store Operations**: Create, Update, Delete, Action at `info`; failures at `warn`
//!   with the message that also lands in the error slot
//! - **Persistence**: each save at `debug`, save and load problems at `warn`
//! - **Notifications**: every emitted notification at `debug`
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads (params, updates, actions)
//! RUST_LOG=debug cargo run
//!
//! # Only the store framework
//! RUST_LOG=shopping_list::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Actor started entity_type="Item" size=0
//! INFO Created entity_type="Item" id=4f1c... size=1
//! WARN Create failed entity_type="Item" error=Item name cannot be empty
//! INFO Action ok entity_type="Item" id=4f1c...
//! ```

/// Initializes the tracing subscriber for the application.
///
/// Call once, from the binary. Tests rely on the default no-op subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
