use super::constants::*;
use crate::context::Context;

/// Config carries all the configuration for the Omniture client.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `username` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OMNITURE_USERNAME`]
    ///
    /// Omniture usernames take the form `user:Company`.
    pub username: Option<String>,
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OMNITURE_SECRET`]
    pub secret: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OMNITURE_ENDPOINT`]
    ///
    /// The data-center base URL, e.g. `https://api2.omniture.com`.
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(OMNITURE_USERNAME) {
            self.username.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OMNITURE_SECRET) {
            self.secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OMNITURE_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticEnv;
    use crate::context::{Context, OsEnv};
    use std::collections::HashMap;

    #[test]
    fn test_from_env_fills_unset_fields() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (OMNITURE_USERNAME.to_string(), "user:Company".to_string()),
                (OMNITURE_SECRET.to_string(), "top-secret".to_string()),
                (
                    OMNITURE_ENDPOINT.to_string(),
                    "https://api.omniture.com".to_string(),
                ),
            ]),
        });

        let config = Config::default().from_env(&ctx);
        assert_eq!(config.username.as_deref(), Some("user:Company"));
        assert_eq!(config.secret.as_deref(), Some("top-secret"));
        assert_eq!(config.endpoint.as_deref(), Some("https://api.omniture.com"));
    }

    #[test]
    fn test_explicit_fields_win_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(OMNITURE_USERNAME.to_string(), "env:User".to_string())]),
        });

        let config = Config {
            username: Some("explicit:User".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);
        assert_eq!(config.username.as_deref(), Some("explicit:User"));
    }

    #[test]
    fn test_from_os_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        temp_env::with_vars(
            vec![
                (OMNITURE_USERNAME, Some("user:Company")),
                (OMNITURE_SECRET, Some("top-secret")),
            ],
            || {
                let ctx = Context::new().with_env(OsEnv);
                let config = Config::default().from_env(&ctx);
                assert_eq!(config.username.as_deref(), Some("user:Company"));
                assert_eq!(config.secret.as_deref(), Some("top-secret"));
                assert!(config.endpoint.is_none());
            },
        );
    }
}
