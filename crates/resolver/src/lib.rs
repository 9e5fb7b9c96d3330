//! Country-name resolution: turn a spoken phrase into one country record.
//!
//! A phrase is split into lookup terms, every term is looked up
//! independently, the results are concatenated, and a three-tier ranker
//! (exact, substring, fallback) picks a single record.

mod candidates;
mod error;
mod gateway;
mod planner;
mod ranker;
mod record;
mod resolver;

pub use candidates::CandidateSet;
pub use error::{ResolverError, Result};
pub use gateway::{CountryLookup, InMemoryLookup, RestCountriesGateway, DEFAULT_BASE_URL};
pub use planner::{plan, SearchPlan, SearchTerm};
pub use ranker::{rank, MatchTier, RankedMatch};
pub use record::{CountryRecord, Currency, Language};
pub use resolver::{CountryResolver, Resolution};
