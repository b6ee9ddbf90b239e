use config::builder::{ConfigBuilder, DefaultState};
use config::{Environment, File};
use eyre::{Result, WrapErr};
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "https://fakerapi.it/api/v2/";

/// Server settings, layered from defaults, `dashboard.toml` and
/// `DASHBOARD_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Root of the record API. Endpoint paths are joined onto it.
    pub api_base_url: Url,
    pub api_token: Option<SecretString>,
    pub users_quantity: u32,
    pub reports_quantity: u32,
    pub cache_ttl_secs: u64,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_role: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        with_defaults()?
            .add_source(File::with_name("dashboard").required(false))
            .add_source(Environment::with_prefix("DASHBOARD").try_parsing(true))
            .build()
            .wrap_err("failed to read configuration")?
            .try_deserialize()
            .wrap_err("invalid configuration")
    }

    #[cfg(test)]
    fn from_toml(source: &str) -> Result<Self> {
        use config::FileFormat;

        with_defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
            .wrap_err("invalid configuration")
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder()
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("users_quantity", 50)?
        .set_default("reports_quantity", 50)?
        .set_default("cache_ttl_secs", 300)?
        .set_default("admin_name", "Admin User")?
        .set_default("admin_email", "admin@example.com")?
        .set_default("admin_role", "Admin")?)
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.api_base_url.as_str(), "https://fakerapi.it/api/v2/");
        assert!(config.api_token.is_none());
        assert_eq!(config.users_quantity, 50);
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.admin_email, "admin@example.com");
    }

    #[test]
    fn file_overrides_defaults() {
        let config = Config::from_toml(
            r#"
            api_base_url = "http://localhost:9000/api/"
            api_token = "s3cret"
            users_quantity = 120
            admin_name = "Ada"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url.as_str(), "http://localhost:9000/api/");
        assert_eq!(
            config.api_token.as_ref().map(|t| t.expose_secret()),
            Some("s3cret")
        );
        assert_eq!(config.users_quantity, 120);
        assert_eq!(config.reports_quantity, 50);
        assert_eq!(config.admin_name, "Ada");
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(Config::from_toml(r#"api_base_url = "not a url""#).is_err());
    }
}
