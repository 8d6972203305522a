//! # Domain Model
//!
//! Pure data structures shared by the catalog and the cart. The catalog side
//! ([`Product`], [`ProductDraft`]) is served by the product actor; the cart side
//! ([`CartItem`]) lives entirely on the client.

pub mod cart_item;
pub mod product;

pub use cart_item::*;
pub use product::*;
