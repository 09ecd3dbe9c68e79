//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User roles; write operations require admin, user management superadmin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// Admins and superadmins may create and edit inventory records
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }

    pub fn is_superadmin(&self) -> bool {
        matches!(self, Role::Superadmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::Superadmin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// AssetType (tipo_bien)
// ---------------------------------------------------------------------------

/// Equipment asset type. The vocabulary is open: the tipos_bien catalog can
/// grow at runtime, so values outside the canonical five are carried
/// verbatim in `Otro`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Computadora,
    Periferico,
    ComponenteRed,
    DispositivoMovil,
    InsumoCritico,
    Otro(String),
}

impl AssetType {
    /// Canonical type names, in display order
    pub const CANONICAL: [&'static str; 5] = [
        "computadora",
        "periferico",
        "componente_red",
        "dispositivo_movil",
        "insumo_critico",
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AssetType::Computadora => "computadora",
            AssetType::Periferico => "periferico",
            AssetType::ComponenteRed => "componente_red",
            AssetType::DispositivoMovil => "dispositivo_movil",
            AssetType::InsumoCritico => "insumo_critico",
            AssetType::Otro(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for AssetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "computadora" => AssetType::Computadora,
            "periferico" => AssetType::Periferico,
            "componente_red" => AssetType::ComponenteRed,
            "dispositivo_movil" => AssetType::DispositivoMovil,
            "insumo_critico" => AssetType::InsumoCritico,
            _ => AssetType::Otro(s),
        }
    }
}

impl From<&str> for AssetType {
    fn from(s: &str) -> Self {
        AssetType::from(s.to_string())
    }
}

impl From<AssetType> for String {
    fn from(t: AssetType) -> Self {
        t.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// OperationalStatus (estado_operativo)
// ---------------------------------------------------------------------------

/// Equipment lifecycle status. Open vocabulary like [`AssetType`]: unknown
/// values pass through verbatim so aggregation totals always reconcile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(from = "String", into = "String")]
pub enum OperationalStatus {
    Disponible,
    Asignado,
    EnMantenimiento,
    DadoDeBaja,
    EnResguardo,
    Otro(String),
}

impl OperationalStatus {
    /// Canonical status names, in display order
    pub const CANONICAL: [&'static str; 5] = [
        "disponible",
        "asignado",
        "en_mantenimiento",
        "dado_de_baja",
        "en_resguardo",
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OperationalStatus::Disponible => "disponible",
            OperationalStatus::Asignado => "asignado",
            OperationalStatus::EnMantenimiento => "en_mantenimiento",
            OperationalStatus::DadoDeBaja => "dado_de_baja",
            OperationalStatus::EnResguardo => "en_resguardo",
            OperationalStatus::Otro(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for OperationalStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "disponible" => OperationalStatus::Disponible,
            "asignado" => OperationalStatus::Asignado,
            "en_mantenimiento" => OperationalStatus::EnMantenimiento,
            "dado_de_baja" => OperationalStatus::DadoDeBaja,
            "en_resguardo" => OperationalStatus::EnResguardo,
            _ => OperationalStatus::Otro(s),
        }
    }
}

impl From<&str> for OperationalStatus {
    fn from(s: &str) -> Self {
        OperationalStatus::from(s.to_string())
    }
}

impl From<OperationalStatus> for String {
    fn from(s: OperationalStatus) -> Self {
        s.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_round_trips_canonical_and_unknown_values() {
        for name in AssetType::CANONICAL {
            assert_eq!(AssetType::from(name).as_str(), name);
        }
        let custom = AssetType::from("proyector");
        assert_eq!(custom, AssetType::Otro("proyector".to_string()));
        assert_eq!(custom.as_str(), "proyector");
    }

    #[test]
    fn status_round_trips_canonical_and_unknown_values() {
        for name in OperationalStatus::CANONICAL {
            assert_eq!(OperationalStatus::from(name).as_str(), name);
        }
        assert_eq!(OperationalStatus::from("prestado").as_str(), "prestado");
    }

    #[test]
    fn role_parsing_and_privileges() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("root".parse::<Role>().is_err());
        assert!(Role::Admin.is_admin());
        assert!(Role::Superadmin.is_admin());
        assert!(!Role::User.is_admin());
        assert!(!Role::Admin.is_superadmin());
    }
}
