//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::enums::Role;

/// Internal row structure for database queries (role as plain text)
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role.parse().unwrap_or(Role::User),
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Full user model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request (superadmin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub name: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Update user request (superadmin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub name: String,
    pub role: Role,
    /// When present, the password is replaced
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: Option<String>,
}

/// Change own password request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePassword {
    #[validate(length(min = 1, message = "La contraseña actual es requerida"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub new_password: String,
}

/// JWT claims for authenticated users.
///
/// The token carries identity and role, so handlers authorize with a plain
/// role comparison and never re-read the user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// User email
    pub sub: String,
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Require admin or superadmin privileges
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Se requieren permisos de administrador".to_string(),
            ))
        }
    }

    /// Require superadmin privileges
    pub fn require_superadmin(&self) -> Result<(), AppError> {
        if self.role.is_superadmin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Solo el superadmin puede realizar esta operación".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims(role: Role) -> UserClaims {
        let now = Utc::now().timestamp();
        UserClaims {
            sub: "test@universidad.edu".to_string(),
            user_id: Uuid::new_v4(),
            name: "Test".to_string(),
            role,
            exp: now + 1800,
            iat: now,
        }
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let original = claims(Role::Admin);
        let token = original.create_token("secret").unwrap();
        let decoded = UserClaims::from_token(&token, "secret").unwrap();
        assert_eq!(decoded.sub, original.sub);
        assert_eq!(decoded.user_id, original.user_id);
        assert_eq!(decoded.role, Role::Admin);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = claims(Role::User).create_token("secret").unwrap();
        assert!(UserClaims::from_token(&token, "other").is_err());
    }

    #[test]
    fn role_gates() {
        assert!(claims(Role::User).require_admin().is_err());
        assert!(claims(Role::Admin).require_admin().is_ok());
        assert!(claims(Role::Admin).require_superadmin().is_err());
        assert!(claims(Role::Superadmin).require_superadmin().is_ok());
    }
}
