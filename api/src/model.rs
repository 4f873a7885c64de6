//! KOBIS wire envelope and the ranking types rendered by the UI.

use serde::Deserialize;

use crate::error::FetchError;

/// One movie's box-office record for the requested day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub rank: u32,
    pub movie_title: String,
    pub admission_count: u64,
    /// Release date exactly as delivered (`YYYY-MM-DD`, sometimes blank).
    pub open_date: String,
}

/// Ranking for one day, rank-ascending as delivered by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankingResult {
    pub entries: Vec<RankingEntry>,
    pub show_range: Option<String>,
}

impl RankingResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a raw response body. Fault envelopes become `Rejected`; anything
    /// not matching the ranking shape becomes `Malformed`.
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        let envelope: Envelope =
            serde_json::from_str(body).map_err(|err| FetchError::Malformed(err.to_string()))?;
        envelope.into_result()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    box_office_result: Option<BoxOfficeResult>,
    fault_info: Option<FaultInfo>,
}

impl Envelope {
    fn into_result(self) -> Result<RankingResult, FetchError> {
        if let Some(fault) = self.fault_info {
            return Err(FetchError::Rejected {
                code: fault.error_code.unwrap_or_default(),
                message: fault.message.unwrap_or_default(),
            });
        }

        let result = self
            .box_office_result
            .ok_or_else(|| FetchError::Malformed("missing boxOfficeResult".to_string()))?;

        let entries = result
            .daily_box_office_list
            .into_iter()
            .map(DailyBoxOffice::into_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RankingResult {
            entries,
            show_range: result.show_range.filter(|range| !range.trim().is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoxOfficeResult {
    #[serde(default)]
    show_range: Option<String>,
    daily_box_office_list: Vec<DailyBoxOffice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyBoxOffice {
    rank: Counter,
    movie_nm: String,
    audi_cnt: Counter,
    #[serde(default)]
    open_dt: String,
}

impl DailyBoxOffice {
    fn into_entry(self) -> Result<RankingEntry, FetchError> {
        let rank = self.rank.value("rank")?;
        let rank = u32::try_from(rank)
            .ok()
            .filter(|rank| *rank >= 1)
            .ok_or_else(|| FetchError::Malformed(format!("rank out of range: {rank}")))?;

        Ok(RankingEntry {
            rank,
            movie_title: self.movie_nm,
            admission_count: self.audi_cnt.value("audiCnt")?,
            open_date: self.open_dt.trim().to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Counter {
    Number(u64),
    Text(String),
}

impl Counter {
    fn value(&self, field: &str) -> Result<u64, FetchError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text.trim().parse::<u64>().map_err(|_| {
                FetchError::Malformed(format!("{field} is not a non-negative integer: {text:?}"))
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaultInfo {
    message: Option<String>,
    error_code: Option<String>,
}
