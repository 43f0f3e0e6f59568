//! Storefront authorization boundary: the session role model and how it is
//! resolved from client-side storage.

pub mod provider;
pub mod role;

pub use provider::{RoleProvider, ROLE_KEY};
pub use role::Role;
