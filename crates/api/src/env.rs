use cardweaver_common::EnvVars;

pub struct ApiServerEnv {
    pub port: String,
    pub seed_delay_secs: String,
}

impl EnvVars for ApiServerEnv {
    fn load() -> Self {
        Self {
            port: std::env::var("PORT").unwrap_or_else(|_| "3033".to_string()),
            seed_delay_secs: std::env::var("SEED_DELAY_SECS").unwrap_or_else(|_| "2".to_string()),
        }
    }

    fn get_env_var(&self, key: &str) -> String {
        match key {
            "PORT" => self.port.clone(),
            "SEED_DELAY_SECS" => self.seed_delay_secs.clone(),
            _ => panic!("{} is not set", key),
        }
    }
}
