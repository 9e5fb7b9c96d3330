use crate::error::{ResolverError, Result};
use crate::planner::SearchTerm;
use crate::record::CountryRecord;
use async_trait::async_trait;
use reqwest::{Client, Url};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.eu";

/// Source of country records for a single search term.
///
/// Implementations never fail: any error is logged and reported as an empty
/// result so one bad term cannot abort a resolution.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn lookup(&self, term: &SearchTerm) -> Vec<CountryRecord>;
}

/// REST v2 `GET /rest/v2/name/{term}` client.
///
/// Holds a clone of a process-wide [`Client`]; clones share one connection
/// pool and carry no per-request state.
#[derive(Clone, Debug)]
pub struct RestCountriesGateway {
    client: Client,
    base_url: Url,
}

impl RestCountriesGateway {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|err| ResolverError::InvalidUrl(format!("{base_url}: {err}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ResolverError::InvalidUrl(format!(
                "{base_url}: not a base URL"
            )));
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// URL for one term; the term is encoded as a single path segment.
    pub fn endpoint(&self, term: &SearchTerm) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ResolverError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["rest", "v2", "name", term.as_str()]);
        Ok(url)
    }

    /// Single attempt, no retry. Non-2xx and undecodable bodies are errors.
    pub async fn try_lookup(&self, term: &SearchTerm) -> Result<Vec<CountryRecord>> {
        let url = self.endpoint(term)?;
        log::debug!("Attempting to fetch data from {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolverError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        log::trace!("Response from {url}:\n{body}");
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CountryLookup for RestCountriesGateway {
    async fn lookup(&self, term: &SearchTerm) -> Vec<CountryRecord> {
        match self.try_lookup(term).await {
            Ok(records) => records,
            Err(err) => {
                log::warn!("Lookup for '{term}' failed: {err}");
                Vec::new()
            }
        }
    }
}

/// Offline lookup over a fixed list of records.
///
/// Mirrors the REST endpoint's partial-name search: a record matches when the
/// term occurs in its name or in one of its alternative spellings.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLookup {
    records: Vec<CountryRecord>,
}

impl InMemoryLookup {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CountryLookup for InMemoryLookup {
    async fn lookup(&self, term: &SearchTerm) -> Vec<CountryRecord> {
        let needle = term.as_str().to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record
                        .alt_spellings
                        .iter()
                        .any(|alt| alt.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}
