//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod item_client;

pub use item_client::*;
