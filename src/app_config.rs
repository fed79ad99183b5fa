use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    oneview: OneView,
    #[serde(default)]
    support: Support,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn oneview(&self) -> &OneView {
        &self.oneview
    }

    pub fn support(&self) -> &Support {
        &self.support
    }
}

#[derive(Debug, Deserialize)]
pub struct OneView {
    endpoint: String,
    user: String,
    password: String,
    #[serde(default = "default_domain")]
    domain: String,
    api_version: u32,
    #[serde(default)]
    accept_invalid_certs: bool,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

fn default_domain() -> String {
    "LOCAL".to_string()
}

impl OneView {
    pub fn endpoint(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Support {
    #[serde(default)]
    server_hardware_ids: Vec<String>,
}

impl Support {
    pub fn server_hardware_ids(&self) -> &[String] {
        &self.server_hardware_ids
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                oneview: OneView {
                    endpoint: "https://oneview.url/".to_string(),
                    user: "administrator".to_string(),
                    password: "secret".to_string(),
                    domain: default_domain(),
                    api_version: 2400,
                    accept_invalid_certs: true,
                    timeout: Duration::from_secs(5),
                },
                support: Support::default(),
            },
        }
    }

    pub fn endpoint(mut self, endpoint: String) -> Self {
        self.config.oneview.endpoint = endpoint;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, config::ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn parses_a_complete_configuration() -> Result<(), config::ConfigError> {
        let config = from_toml(
            r#"
            [oneview]
            endpoint = "https://oneview.example.com/"
            user = "administrator"
            password = "secret"
            domain = "CORP"
            api_version = 2400
            accept_invalid_certs = true
            timeout = "30s"

            [support]
            server_hardware_ids = ["30373737-3237-4D32-3230-313530314752"]
            "#,
        )?;

        assert_eq!(config.oneview().endpoint(), "https://oneview.example.com");
        assert_eq!(config.oneview().domain(), "CORP");
        assert_eq!(config.oneview().api_version(), 2400);
        assert!(config.oneview().accept_invalid_certs());
        assert_eq!(config.oneview().timeout(), Duration::from_secs(30));
        assert_eq!(config.support().server_hardware_ids(), ["30373737-3237-4D32-3230-313530314752"]);
        Ok(())
    }

    #[test]
    fn applies_defaults_for_optional_settings() -> Result<(), config::ConfigError> {
        let config = from_toml(
            r#"
            [oneview]
            endpoint = "https://oneview.example.com"
            user = "administrator"
            password = "secret"
            api_version = 2400
            timeout = "1m"

            [support]
            "#,
        )?;

        assert_eq!(config.oneview().domain(), "LOCAL");
        assert!(!config.oneview().accept_invalid_certs());
        assert!(config.support().server_hardware_ids().is_empty());
        Ok(())
    }

    #[test]
    fn rejects_an_unparseable_timeout() {
        let result = from_toml(
            r#"
            [oneview]
            endpoint = "https://oneview.example.com"
            user = "administrator"
            password = "secret"
            api_version = 2400
            timeout = "soon"

            [support]
            "#,
        );

        assert!(result.is_err());
    }
}
