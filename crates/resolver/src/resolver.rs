use crate::candidates::CandidateSet;
use crate::error::Result;
use crate::gateway::CountryLookup;
use crate::planner::{plan, SearchTerm};
use crate::ranker::{rank, MatchTier};
use crate::record::CountryRecord;
use std::sync::Arc;

/// Outcome of resolving one phrase. Never ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Match {
        record: CountryRecord,
        tier: MatchTier,
    },
    NoMatch,
}

impl Resolution {
    pub fn record(&self) -> Option<&CountryRecord> {
        match self {
            Self::Match { record, .. } => Some(record),
            Self::NoMatch => None,
        }
    }

    pub fn into_record(self) -> Option<CountryRecord> {
        match self {
            Self::Match { record, .. } => Some(record),
            Self::NoMatch => None,
        }
    }
}

/// Plans lookups for a phrase, runs them, and ranks what comes back.
pub struct CountryResolver<L> {
    lookup: Arc<L>,
}

impl<L> Clone for CountryResolver<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}

impl<L> CountryResolver<L>
where
    L: CountryLookup + 'static,
{
    pub fn new(lookup: L) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    pub fn from_shared(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Resolve a raw spoken phrase.
    ///
    /// `NoMatch` is a normal outcome. An `Err` means a lookup task died,
    /// which callers treat as fatal for the request.
    pub async fn resolve(&self, raw_phrase: &str) -> Result<Resolution> {
        let plan = plan(raw_phrase);
        log::debug!("Resolving '{}' with terms {:?}", plan.query, plan.terms);

        let candidates = self.gather(plan.terms).await?;
        let resolution = match rank(&plan.query, &candidates) {
            Some(ranked) => {
                log::debug!(
                    "'{}' matched '{}' ({} tier, {} candidates)",
                    plan.query,
                    ranked.record.name,
                    ranked.tier,
                    candidates.len()
                );
                Resolution::Match {
                    record: ranked.record.clone(),
                    tier: ranked.tier,
                }
            }
            None => {
                log::info!("No country found for '{}'", plan.query);
                Resolution::NoMatch
            }
        };
        Ok(resolution)
    }

    /// One task per term; results are joined in term order.
    async fn gather(&self, terms: Vec<SearchTerm>) -> Result<CandidateSet> {
        let mut tasks = Vec::with_capacity(terms.len());
        for term in terms {
            let lookup = Arc::clone(&self.lookup);
            tasks.push(tokio::spawn(async move { lookup.lookup(&term).await }));
        }

        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(task.await?);
        }
        Ok(CandidateSet::aggregate(results))
    }
}
