//! Fluent async hashing API
//!
//! Usage: `Hash::sha256().on_result(handler).compute(data).await`

pub mod hash_entry;
pub(crate) mod hash_functions;
pub mod sha256_builder;

pub use hash_entry::Hash;

pub use sha256_builder::{
    Sha256Builder, Sha256BuilderWithChunk, Sha256BuilderWithError, Sha256BuilderWithHandler,
};
