use crate::errors::AppError;
use crate::storage::CredentialStore;
use tracing::info;

/// Store a new user with a bcrypt hash. The username check and insert are
/// one atomic store operation.
pub async fn register(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    if !store.try_insert_user(username, &password_hash).await? {
        return Err(AppError::username_taken());
    }
    info!("registered user {username}");
    Ok(())
}

pub async fn authenticate(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> Result<bool, AppError> {
    match store.password_hash(username).await? {
        Some(hash) => Ok(bcrypt::verify(password, &hash)?),
        None => Ok(false),
    }
}
