// handlers/mod.rs - HTTP handlers
//
// Everything the storefront auth server exposes is public: service info,
// health, and the retired verification route.

pub mod public;

pub use public::*;
