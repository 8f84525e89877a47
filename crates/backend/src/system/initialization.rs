use anyhow::Result;

use crate::system::auth::password;
use crate::system::users::repository;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";
const DEFAULT_ADMIN_NAME: &str = "Admin User";
const DEFAULT_ADMIN_ROLE: &str = "Administrator";

/// Ensure admin user exists (create if table is empty)
pub async fn ensure_admin_user_exists() -> Result<()> {
    if repository::count_users().await? > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating default admin user...");
    let hash = password::hash_password(DEFAULT_ADMIN_PASSWORD)?;
    let id = repository::create(
        DEFAULT_ADMIN_USERNAME,
        DEFAULT_ADMIN_NAME,
        DEFAULT_ADMIN_ROLE,
        &hash,
    )
    .await?;

    tracing::warn!("Default admin user created (id {})", id);
    tracing::warn!("  Username: {}", DEFAULT_ADMIN_USERNAME);
    tracing::warn!("  Password: {}", DEFAULT_ADMIN_PASSWORD);
    tracing::warn!("  Change the password before using this console on a network.");

    Ok(())
}
