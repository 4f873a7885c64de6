//! Client configuration. The API key is the only required input.

/// Daily box-office endpoint of the KOBIS open API.
pub const DEFAULT_BASE_URL: &str =
    "https://www.kobis.or.kr/kobisopenapi/webservice/rest/boxoffice/searchDailyBoxOfficeList.json";

const API_KEY_VAR: &str = "KOBIS_API_KEY";
const BASE_URL_VAR: &str = "KOBIS_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: non_blank(Some(api_key.into())),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `KOBIS_API_KEY` / `KOBIS_BASE_URL` from the process environment,
    /// falling back to values baked in at compile time (the only option on wasm).
    pub fn from_env() -> Self {
        let api_key = non_blank(std::env::var(API_KEY_VAR).ok())
            .or_else(|| non_blank(option_env!("KOBIS_API_KEY").map(str::to_string)));
        let base_url = non_blank(std::env::var(BASE_URL_VAR).ok())
            .or_else(|| non_blank(option_env!("KOBIS_BASE_URL").map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if api_key.is_none() {
            tracing::warn!("{API_KEY_VAR} is not set; ranking requests will fail");
        }

        Self { base_url, api_key }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
