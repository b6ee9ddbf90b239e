use std::time::Duration;

use eyre::{Result, bail};
use types::auth::AuthUser;

use crate::config::Config;

/// Simulated round trip of the mock sign-in.
const LOGIN_DELAY: Duration = Duration::from_secs(1);

/// The configured admin profile. There is no real session: every visitor is
/// this user until they sign out client-side.
pub fn current_user(config: &Config) -> AuthUser {
    AuthUser {
        id: "1".into(),
        name: config.admin_name.clone(),
        email: config.admin_email.clone(),
        role: config.admin_role.clone(),
    }
}

pub async fn login(config: &Config, email: &str) -> Result<AuthUser> {
    let email = validate_email(email)?;

    tokio::time::sleep(LOGIN_DELAY).await;
    tracing::info!(email, "mock sign-in");

    Ok(AuthUser {
        email: email.to_string(),
        ..current_user(config)
    })
}

fn validate_email(email: &str) -> Result<&str> {
    let email = email.trim();

    if email.is_empty() {
        bail!("email is required");
    }
    if !email.contains('@') {
        bail!("'{email}' is not an email address");
    }

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_base_url: "https://fakerapi.it/api/v2/".parse().unwrap(),
            api_token: None,
            users_quantity: 50,
            reports_quantity: 50,
            cache_ttl_secs: 300,
            admin_name: "Admin User".into(),
            admin_email: "admin@example.com".into(),
            admin_role: "Admin".into(),
        }
    }

    #[test]
    fn current_user_is_configured_admin() {
        let user = current_user(&config());

        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.role, "Admin");
    }

    #[test]
    fn email_validation() {
        assert_eq!(validate_email("  ops@example.com ").unwrap(), "ops@example.com");
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
        assert!(validate_email("ops.example.com").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn login_uses_given_email() {
        let user = login(&config(), "ops@example.com").await.unwrap();

        assert_eq!(user.email, "ops@example.com");
        assert_eq!(user.name, "Admin User");
    }
}
