// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Pure derivations the views are built from
//! - [`store`]: The authoritative collection and fetch ordering
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use smart_gallery::application::query::DateGrouper;
//! use smart_gallery::application::store::CollectionStore;
//!
//! let mut store = CollectionStore::new();
//! let ticket = store.begin_fetch();
//! store.complete_fetch(ticket, Ok(items));
//! let buckets = DateGrouper::default().group(store.items());
//! ```

pub mod port;
pub mod query;
pub mod store;
