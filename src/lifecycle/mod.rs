//! # System Lifecycle & Orchestration
//!
//! Starting the shopping list is a fixed sequence:
//!
//! 1. **Restore** - read the persisted record; anything unusable counts as an empty list
//! 2. **Seed** - build the item actor with the restored items (error and loading cleared)
//! 3. **Wire** - hand the actor's commit channel to the persist task and its snapshots to
//!    the error watcher
//! 4. **Run** - spawn all three tasks; only now does the store accept requests
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the watcher** - it holds a client clone and would keep the actor alive
//! 2. **Drop the client** - closes the actor's request channel
//! 3. **Actor exits** - its commit sender is dropped with it
//! 4. **Persist task drains** - saves any commit it has not seen yet, then ends
//!
//! So the last committed list is in storage when [`ShoppingListSystem::shutdown`] returns.
//!
//! Logging is set up separately with [`setup_tracing`](crate::framework::setup_tracing).

pub mod shopping_list_system;

pub use shopping_list_system::*;
