//! User registration and credential verification.

use model::entities::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    Set, SqlErr,
};
use tracing::{debug, info, instrument, trace, warn};

use crate::auth::password;
use crate::error::ApiError;
use crate::validation;

/// A registration payload after JSON extraction, before validation.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub category: String,
}

// Custom Debug keeps the clear-text password out of logs and spans.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("category", &self.category)
            .finish()
    }
}

/// Register a new user and return the stored row.
///
/// The uniqueness pre-check on username OR email gives the common case a
/// deterministic error; the unique indexes stay the arbiter under
/// concurrent registration, so an insert-time violation maps to the same
/// error.
#[instrument(skip_all)]
pub async fn register_user(
    db: &DatabaseConnection,
    new_user: NewUser,
) -> Result<user::Model, ApiError> {
    trace!("Entering register_user");

    validation::validate_registration(&new_user).map_err(ApiError::Validation)?;

    debug!(
        "Checking availability of username {} and email {}",
        new_user.username, new_user.email
    );
    let existing = user::Entity::find()
        .filter(
            Condition::any()
                .add(user::Column::Username.eq(&new_user.username))
                .add(user::Column::Email.eq(&new_user.email)),
        )
        .one(db)
        .await?;

    if existing.is_some() {
        warn!(
            "User registration failed for {}: User already exists",
            new_user.username
        );
        return Err(ApiError::DuplicateUser);
    }

    let password_hash = password::hash_password(&new_user.password)?;

    let user = user::ActiveModel {
        username: Set(new_user.username),
        email: Set(new_user.email),
        password_hash: Set(password_hash),
        category: Set(new_user.category),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|err| match err.sql_err() {
        // Lost a race with a concurrent registration of the same
        // username or email
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::DuplicateUser,
        _ => ApiError::from(err),
    })?;

    info!(
        "User {} registered successfully with id {}",
        user.username, user.id
    );
    Ok(user)
}

/// Verify a username/password pair and return the matching user.
///
/// Unknown username and wrong password collapse into the same error so a
/// caller cannot probe which usernames exist.
#[instrument(skip_all)]
pub async fn authenticate_credentials(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<user::Model, ApiError> {
    trace!("Entering authenticate_credentials");
    debug!("Looking up user: {}", username);

    let user = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;

    let Some(user) = user else {
        debug!("No user named {}", username);
        return Err(ApiError::InvalidCredentials);
    };

    if !password::verify_password(&user.password_hash, password)? {
        debug!("Password mismatch for user {}", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    Ok(user)
}

/// Look up a user by primary key. Used when resolving a bearer token.
pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, DbErr> {
    user::Entity::find_by_id(id).one(db).await
}
