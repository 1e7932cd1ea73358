use crate::core::ConfigProvider;
use crate::domain::model::{FilterCriteria, SearchPoint};
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_urls: Vec<String>,
    #[serde(default)]
    pub add_uuid_parameter: bool,
    pub search_latitude: f64,
    pub search_longitude: f64,
    #[serde(default)]
    pub num_nearest_locations_to_log: usize,
    #[serde(default)]
    pub filter_provider: String,
    #[serde(default)]
    pub filter_distance_miles: f64,
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl SearchConfig {
    /// 依副檔名載入：`.toml` 用 TOML，其餘一律視為 JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("📁 Reading config file {}", path.display());

        let content = std::fs::read_to_string(path).map_err(FinderError::IoError)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        serde_json::from_str(&processed_content).map_err(|e| FinderError::ConfigParseError {
            format: "JSON".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigParseError {
            format: "TOML".to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${FEED_URL})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Single-URL form first, then the list.
    pub fn feed_urls(&self) -> Vec<String> {
        self.api_url
            .iter()
            .chain(self.api_urls.iter())
            .cloned()
            .collect()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn validate_config(&self) -> Result<()> {
        let urls = self.feed_urls();
        validation::validate_non_empty("api_urls", &urls)?;
        for (i, url) in urls.iter().enumerate() {
            validation::validate_url(&format!("api_urls[{}]", i), url)?;
        }

        validation::validate_range("search_latitude", self.search_latitude, -90.0, 90.0)?;
        validation::validate_range("search_longitude", self.search_longitude, -180.0, 180.0)?;
        validation::validate_finite("filter_distance_miles", self.filter_distance_miles)?;

        Ok(())
    }
}

impl ConfigProvider for SearchConfig {
    fn feed_urls(&self) -> Vec<String> {
        SearchConfig::feed_urls(self)
    }

    fn add_uuid_parameter(&self) -> bool {
        self.add_uuid_parameter
    }

    fn search_point(&self) -> SearchPoint {
        SearchPoint::new(self.search_latitude, self.search_longitude)
    }

    fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.filter_provider.clone(), self.filter_distance_miles)
    }

    fn result_limit(&self) -> usize {
        self.num_nearest_locations_to_log
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
