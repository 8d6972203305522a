//! # Cart State Manager
//!
//! The shopping cart lives on the client, independent of the catalog actor. It keeps the
//! current snapshot of [`CartItem`](crate::model::CartItem)s, persists the whole snapshot
//! under a fixed key on every mutation, and then notifies its listeners.
//!
//! ## Structure
//!
//! - [`manager`] - [`CartManager`], the state machine and publish point
//! - [`storage`] - [`CartStorage`] with [`MemoryStorage`] and [`FileStorage`]
//! - [`error`] - [`CartError`]
//!
//! ```rust
//! use storefront::cart::{CartManager, MemoryStorage};
//! use storefront::model::{Product, ProductId};
//!
//! let mut cart = CartManager::load(MemoryStorage::default());
//! let watch = Product::new(ProductId(1), "Bamboo Watch", 65.0);
//!
//! cart.add_to_cart(&watch).unwrap();
//! cart.add_to_cart(&watch).unwrap();
//!
//! assert_eq!(cart.items().len(), 1);
//! assert_eq!(cart.get_item_count(), 2);
//! assert_eq!(cart.get_total(), 130.0);
//! ```

pub mod error;
pub mod manager;
pub mod storage;

pub use error::*;
pub use manager::*;
pub use storage::*;
