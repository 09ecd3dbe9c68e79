//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        enums::Role,
        user::{ChangePassword, CreateUser, UpdateUser, User, UserClaims},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by email and password, returning a JWT token and the user
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Credenciales incorrectas".to_string()))?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication(
                "Credenciales incorrectas".to_string(),
            ));
        }

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    /// Create a user account (superadmin operation)
    pub async fn register(&self, data: CreateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.exists_email(&data.email, None).await? {
            return Err(AppError::Validation(
                "El email ya está registrado".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            name: data.name,
            role: data.role,
            password_hash: self.hash_password(&data.password)?,
            created_at: now,
            updated_at: now,
        };
        self.repository.users.insert(&user).await?;
        Ok(user)
    }

    /// Change the caller's own password after verifying the current one
    pub async fn change_password(&self, user_id: Uuid, data: ChangePassword) -> AppResult<()> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let user = self.repository.users.get_by_id(user_id).await?;
        if !self.verify_password(&user, &data.current_password)? {
            return Err(AppError::Validation(
                "La contraseña actual es incorrecta".to_string(),
            ));
        }

        let hash = self.hash_password(&data.new_password)?;
        self.repository
            .users
            .update_password(user_id, &hash, Utc::now())
            .await
    }

    /// List all users (superadmin operation)
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Update a user account (superadmin operation)
    pub async fn update(&self, id: Uuid, data: UpdateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self.repository.users.get_by_id(id).await?;

        if data.email != existing.email
            && self
                .repository
                .users
                .exists_email(&data.email, Some(id))
                .await?
        {
            return Err(AppError::Validation(
                "El email ya está registrado".to_string(),
            ));
        }

        let password_hash = match &data.password {
            Some(password) => self.hash_password(password)?,
            None => existing.password_hash.clone(),
        };

        let updated = User {
            id,
            email: data.email,
            name: data.name,
            role: data.role,
            password_hash,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.repository.users.update(&updated).await?;
        Ok(updated)
    }

    /// Delete a user account; a superadmin cannot delete their own account
    pub async fn delete(&self, id: Uuid, actor_id: Uuid) -> AppResult<()> {
        if id == actor_id {
            return Err(AppError::Validation(
                "No puedes eliminar tu propia cuenta".to_string(),
            ));
        }
        self.repository.users.delete(id).await
    }

    /// Reset a user's password to a random temporary one and return it
    pub async fn reset_password(&self, id: Uuid) -> AppResult<String> {
        // Ensure the account exists before touching the password
        self.repository.users.get_by_id(id).await?;

        let temporary: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();
        let hash = self.hash_password(&temporary)?;
        self.repository
            .users
            .update_password(id, &hash, Utc::now())
            .await?;
        Ok(temporary)
    }

    /// Create the default superadmin account when none exists yet
    pub async fn bootstrap_superadmin(&self) -> AppResult<()> {
        if self.repository.users.superadmin_exists().await? {
            return Ok(());
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: self.config.bootstrap_admin_email.clone(),
            name: "Super Administrador".to_string(),
            role: Role::Superadmin,
            password_hash: self.hash_password(&self.config.bootstrap_admin_password)?,
            created_at: now,
            updated_at: now,
        };
        self.repository.users.insert(&user).await?;
        tracing::info!("Superadmin account created: {}", user.email);
        Ok(())
    }

    fn create_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            name: user.name.clone(),
            role: user.role,
            exp: now + self.config.jwt_expiration_minutes * 60,
            iat: now,
        };
        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
