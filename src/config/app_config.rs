use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub log_level: String,
    pub environment: String,
    pub revocation_sla_target_seconds: u64,
    pub catalog_inactivity_days: u32,
    pub catalog_source_page_size: usize,
    pub synthetic_test_count: usize,
    pub synthetic_propagation_delay_ms: u64,
    pub tool_registry_path: Option<String>,
    pub principal_inventory_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            environment: "dev".to_string(),
            revocation_sla_target_seconds: 300,
            catalog_inactivity_days: 90,
            catalog_source_page_size: 100,
            synthetic_test_count: 5,
            synthetic_propagation_delay_ms: 0,
            tool_registry_path: None,
            principal_inventory_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            environment: std::env::var("GOVERNANCE_ENVIRONMENT")
                .unwrap_or_else(|_| "dev".to_string()),
            revocation_sla_target_seconds: std::env::var("REVOCATION_SLA_TARGET_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            catalog_inactivity_days: std::env::var("CATALOG_INACTIVITY_DAYS")
                .unwrap_or_else(|_| "90".to_string())
                .parse()
                .unwrap_or(90),
            catalog_source_page_size: std::env::var("CATALOG_SOURCE_PAGE_SIZE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
            synthetic_test_count: std::env::var("SYNTHETIC_TEST_COUNT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            synthetic_propagation_delay_ms: std::env::var("SYNTHETIC_PROPAGATION_DELAY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),
            tool_registry_path: std::env::var("TOOL_REGISTRY_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),
            principal_inventory_path: std::env::var("PRINCIPAL_INVENTORY_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        }
    }

    pub fn sla_target(&self) -> Duration {
        Duration::from_secs(self.revocation_sla_target_seconds)
    }

    pub fn synthetic_propagation_delay(&self) -> Duration {
        Duration::from_millis(self.synthetic_propagation_delay_ms)
    }
}
