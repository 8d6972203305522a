//! # System Lifecycle
//!
//! This module starts the storefront's actors and shuts them down again.
//!
//! Only the catalog is served by an actor. The cart is client-side state and is opened
//! on demand with [`StorefrontSystem::open_cart`].
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the product channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for the actor task to finish
//!
//! Requests already queued are answered before the actor exits, so no acknowledged write
//! is lost. Clones of `product_client` held elsewhere keep the actor alive until they are
//! dropped too.

pub mod storefront_system;

pub use storefront_system::*;
