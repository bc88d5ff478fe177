//! # Shopping List
//!
//! > **A single-writer store for a shopping list, with local persistence.**
//!
//! Items (name, quantity, purchased flag, timestamps) live in one actor task that owns the
//! list and applies every change in order. Invalid input never reaches the list: it lands
//! in an error slot that the notification bridge reports and then clears. Every committed
//! change is mirrored to durable storage in the background and restored on the next start.
//!
//! ## Core Concepts
//!
//! ### One writer
//! The list is owned by a [`ResourceActor`](framework::ResourceActor). Callers talk to it
//! through a cloneable [`ItemClient`](clients::ItemClient), so no lock guards the list and
//! two changes never interleave.
//!
//! ### All-or-nothing transitions
//! Each operation either applies completely or leaves the list untouched and records its
//! failure message in the error slot. The next successful operation clears the slot.
//!
//! ### Injected time
//! Timestamps come from a [`Clock`](clock::Clock) passed to the actor at `run()`, so tests
//! pin time with [`ManualClock`](clock::ManualClock).
//!
//! ## Module Tour
//!
//! - [`framework`] - the generic store: entity trait, pure state, actor, client, errors
//! - [`model`] - the [`Item`](model::Item) type and its payloads
//! - [`validation`] - name and quantity rules
//! - [`item_actor`] - the `ActorEntity` implementation for items
//! - [`clients`] - [`ItemClient`](clients::ItemClient), the action surface for the UI
//! - [`persistence`] - key-value storage, the persisted record, the persist task
//! - [`notify`] - success/error/info notifications and the error watcher
//! - [`config`] - TOML configuration with defaults
//! - [`lifecycle`] - [`ShoppingListSystem`](lifecycle::ShoppingListSystem): startup and
//!   shutdown
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod clock;
pub mod config;
pub mod framework;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod persistence;
pub mod validation;
