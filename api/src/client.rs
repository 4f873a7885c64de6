use reqwest::Url;

use crate::config::ApiConfig;
use crate::date::TargetDate;
use crate::error::FetchError;
use crate::model::RankingResult;

/// Characters of a failed response body kept for display.
const BODY_EXCERPT_CHARS: usize = 120;

/// Anything that can answer "what was the ranking on this day".
#[allow(async_fn_in_trait)]
pub trait RankingSource {
    async fn daily_ranking(&self, target: &TargetDate) -> Result<RankingResult, FetchError>;
}

impl<T: RankingSource + ?Sized> RankingSource for &T {
    async fn daily_ranking(&self, target: &TargetDate) -> Result<RankingResult, FetchError> {
        (**self).daily_ranking(target).await
    }
}

/// HTTP client for the KOBIS daily ranking endpoint. One GET per call,
/// no retries and no timeout.
#[derive(Debug, Clone)]
pub struct RankingClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RankingClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn request_url(&self, target: &TargetDate) -> Result<Url, FetchError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey)?;

        Url::parse_with_params(
            &self.config.base_url,
            &[("key", key), ("targetDt", target.as_str())],
        )
        .map_err(|err| FetchError::Network(format!("invalid base url: {err}")))
    }
}

impl RankingSource for RankingClient {
    async fn daily_ranking(&self, target: &TargetDate) -> Result<RankingResult, FetchError> {
        let url = self.request_url(target)?;
        tracing::debug!(target_dt = %target, "requesting daily box office ranking");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|err| FetchError::Network(format!("failed to read response: {err}")))?;

        if !status.is_success() {
            tracing::warn!(target_dt = %target, %status, "ranking request failed");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body: body_excerpt(&body),
            });
        }

        match RankingResult::from_body(&body) {
            Ok(result) => {
                tracing::info!(target_dt = %target, entries = result.len(), "ranking received");
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(target_dt = %target, error = %err, "ranking response unusable");
                Err(err)
            }
        }
    }
}

/// `body` with whitespace collapsed and cut to a short prefix so an
/// HTML error page cannot flood the error panel.
fn body_excerpt(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= BODY_EXCERPT_CHARS {
        return collapsed;
    }
    let mut excerpt: String = collapsed.chars().take(BODY_EXCERPT_CHARS).collect();
    excerpt.push('…');
    excerpt
}
