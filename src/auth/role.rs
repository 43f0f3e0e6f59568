use serde::{Deserialize, Serialize};

/// Authorization level attached to a storefront session.
///
/// Parsing is a whitelist: only the exact literals `admin` and `super_admin`
/// produce an elevated role, everything else is `Guest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Role {
    #[default]
    Guest,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Parse a raw stored value. Never fails; unknown input is `Guest`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Role::Admin,
            "super_admin" => Role::SuperAdmin,
            _ => Role::Guest,
        }
    }

    /// Resolve an optional stored value (absent key included).
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.map(Role::parse).unwrap_or_default()
    }

    /// Admin and super admin share the same capability set.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
