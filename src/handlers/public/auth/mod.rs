// handlers/public/auth/mod.rs - Public authentication handlers
//
// Only the retired verification route lives here. The live WhatsApp login and
// magic-link endpoints are served elsewhere; this module just advertises them.

pub mod deprecated;

pub use deprecated::{
    legacy_verify_response, verify_deprecated, DeprecationResponse, LegacyResponse, NewEndpoints,
    DEPRECATION_MESSAGE, LOGIN_ENDPOINT, VERIFY_ENDPOINT,
};
