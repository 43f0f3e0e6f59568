// handlers/public/auth/deprecated.rs - retired verification route
//
// Answers every request to the old verification endpoint with 410 Gone and
// points the caller at the WhatsApp login endpoints. No verification happens
// here and nothing is read or written.

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::routes::AppState;

pub const DEPRECATION_MESSAGE: &str =
    "This endpoint has been deprecated. Please use the new WhatsApp authentication system.";
pub const LOGIN_ENDPOINT: &str = "/api/auth/whatsapp-login";
pub const VERIFY_ENDPOINT: &str = "/api/auth/verify-magic-link";

/// CORS headers attached to every response from the retired route,
/// preflight or not.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Replacement endpoints advertised to legacy callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEndpoints {
    pub login: String,
    pub verify: String,
}

/// Body of the 410 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationResponse {
    pub error: String,
    pub new_endpoints: NewEndpoints,
}

impl DeprecationResponse {
    pub fn current() -> Self {
        Self {
            error: DEPRECATION_MESSAGE.to_string(),
            new_endpoints: NewEndpoints {
                login: LOGIN_ENDPOINT.to_string(),
                verify: VERIFY_ENDPOINT.to_string(),
            },
        }
    }
}

/// Transport-independent result for the retired route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyResponse {
    pub status: StatusCode,
    pub body: Option<DeprecationResponse>,
}

/// Pure decision on the request method. Nothing else about the request matters.
pub fn legacy_verify_response(method: &Method) -> LegacyResponse {
    if method == Method::OPTIONS {
        return LegacyResponse {
            status: StatusCode::OK,
            body: None,
        };
    }

    LegacyResponse {
        status: StatusCode::GONE,
        body: Some(DeprecationResponse::current()),
    }
}

impl IntoResponse for LegacyResponse {
    fn into_response(self) -> Response {
        let headers = CORS_HEADERS.map(|(name, value)| (name, HeaderValue::from_static(value)));

        match self.body {
            Some(body) => (self.status, headers, Json(body)).into_response(),
            None => (self.status, headers).into_response(),
        }
    }
}

/// ANY <legacy verify path>
pub async fn verify_deprecated(State(config): State<AppState>, method: Method) -> Response {
    if config.legacy.log_hits {
        tracing::info!(%method, "request to deprecated verification endpoint");
    }

    legacy_verify_response(&method).into_response()
}
