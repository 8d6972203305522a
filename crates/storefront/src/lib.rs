//! # Storefront
//!
//! The e-commerce side of the workspace: a product catalog served by a
//! [`ResourceActor`](resource_actor::ResourceActor) over a JSON document, a client-side
//! shopping cart, and the contact form.
//!
//! - **[model]**: [`Product`](model::Product), [`ProductDraft`](model::ProductDraft) and
//!   [`CartItem`](model::CartItem).
//! - **[product_actor]**: the catalog's entity wiring and [`ProductError`](product_actor::ProductError).
//! - **[clients]**: [`ProductClient`](clients::ProductClient), the catalog operations.
//! - **[cart]**: [`CartManager`](cart::CartManager) and its local storage.
//! - **[contact]**: contact form validation.
//! - **[config]** and **[lifecycle]**: environment configuration and
//!   [`StorefrontSystem`](lifecycle::StorefrontSystem).

pub mod cart;
pub mod clients;
pub mod config;
pub mod contact;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
