use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub roster: RosterRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphqlConfig {
    #[serde(default = "default_true")]
    pub graphiql: bool,
    #[serde(default = "default_true")]
    pub introspection: bool,
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,
    #[serde(default = "default_complexity_limit")]
    pub complexity_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_store_provider")]
    pub provider: String,
    #[serde(default = "default_true")]
    pub seed: bool,
}

/// Integrity checks applied to `addTeam` / `addPlayer`. Both are off unless
/// configured, which keeps inserts permissive.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterRules {
    #[serde(default)]
    pub enforce_unique_ids: bool,
    #[serde(default)]
    pub enforce_team_reference: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            graphiql: true,
            introspection: true,
            depth_limit: default_depth_limit(),
            complexity_limit: default_complexity_limit(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_store_provider(),
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("ROSTER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins")
                    .try_parsing(true),
            );
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;

        if config.graphql.depth_limit == 0 || config.graphql.complexity_limit == 0 {
            return Err(config::ConfigError::Message(
                "GraphQL depth and complexity limits must be greater than zero.".into(),
            ));
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3005
}

fn default_true() -> bool {
    true
}

fn default_depth_limit() -> usize {
    16
}

fn default_complexity_limit() -> usize {
    256
}

fn default_store_provider() -> String {
    "memory".to_string()
}

#[cfg(test)]
mod tests {
    use super::Config;
    use config::ConfigError;
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "ROSTER__APP__PORT",
        "ROSTER__APP__CORS_ORIGINS",
        "ROSTER__GRAPHQL__GRAPHIQL",
        "ROSTER__GRAPHQL__DEPTH_LIMIT",
        "ROSTER__STORE__SEED",
        "ROSTER__ROSTER__ENFORCE_UNIQUE_IDS",
    ];

    fn clear_env_vars() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_overrides() {
        clear_env_vars();

        let config = Config::from_env().expect("expected configuration to load");

        assert_eq!(config.bind_address(), "0.0.0.0:3005");
        assert!(config.graphql.graphiql);
        assert!(config.graphql.introspection);
        assert_eq!(config.store.provider, "memory");
        assert!(config.store.seed);
        assert!(!config.roster.enforce_unique_ids);
        assert!(!config.roster.enforce_team_reference);
        assert!(config.app.cors_origins.is_empty());
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        clear_env_vars();
        env::set_var("ROSTER__APP__PORT", "4000");
        env::set_var("ROSTER__GRAPHQL__GRAPHIQL", "false");
        env::set_var("ROSTER__STORE__SEED", "false");
        env::set_var("ROSTER__ROSTER__ENFORCE_UNIQUE_IDS", "true");
        env::set_var(
            "ROSTER__APP__CORS_ORIGINS",
            "http://localhost:3000,http://localhost:5173",
        );

        let config = Config::from_env().expect("expected configuration to load");

        assert_eq!(config.app.port, 4000);
        assert!(!config.graphql.graphiql);
        assert!(!config.store.seed);
        assert!(config.roster.enforce_unique_ids);
        assert_eq!(
            config.app.cors_origins,
            vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string()
            ]
        );

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn errors_when_depth_limit_is_zero() {
        clear_env_vars();
        env::set_var("ROSTER__GRAPHQL__DEPTH_LIMIT", "0");

        let error = Config::from_env().expect_err("expected configuration to fail");

        match error {
            ConfigError::Message(message) => assert_eq!(
                message,
                "GraphQL depth and complexity limits must be greater than zero.".to_string()
            ),
            other => panic!("unexpected error: {:?}", other),
        }

        clear_env_vars();
    }
}
