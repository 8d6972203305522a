//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod product_client;

pub use product_client::*;
