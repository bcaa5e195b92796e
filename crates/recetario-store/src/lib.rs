//! Remote document store abstraction for Recetario.
//!
//! This crate defines the contract the rest of the workspace programs
//! against, [`RemoteStore`], and the two in-tree backends:
//!
//! - **Local First**: [`MemoryStore`], a process-local JSON tree. The
//!   reference semantics of the contract; what the tests run against.
//! - **Cloud Ready**: [`RestStore`], the Realtime Database REST
//!   protocol over HTTPS.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  RecipesService (recetario-service)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Storage Abstraction                      │
//! │  RemoteStore trait: read / write / delete / push_key /      │
//! │                     watch                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!           ┌────────────────┴────────────────┐
//!           ▼                                 ▼
//!     ┌──────────┐                     ┌──────────┐
//!     │  Memory  │                     │   REST   │
//!     │  Store   │                     │  Store   │
//!     └──────────┘                     └──────────┘
//! ```
//!
//! # Data model
//!
//! The store is a single JSON tree addressed by [`StorePath`]. A read
//! returns a [`Snapshot`]: the full value of the addressed subtree, or
//! absence. Writes replace the addressed subtree wholesale. There are
//! no transactions and no cross-path atomicity; concurrent writers to
//! the same path are last-writer-wins.
//!
//! # Subscriptions
//!
//! [`RemoteStore::watch`] opens a standing subscription on a path: the
//! returned [`StoreWatch`] yields the current snapshot immediately and
//! a fresh full snapshot after every change under the path (not a
//! delta). Backends may coalesce rapid successive changes; the latest
//! state is always eventually delivered.
//!
//! [`StorePath`]: recetario_types::StorePath

mod error;
mod memory;
mod push_key;
mod rest;
mod snapshot;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use push_key::push_key;
pub use rest::{RestStore, DEFAULT_POLL_INTERVAL};
pub use snapshot::Snapshot;
pub use store::{RemoteStore, StoreWatch};
