use crate::candidates::CandidateSet;
use crate::record::CountryRecord;
use std::fmt;

/// Which precedence level produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Name equals the query, or demonym equals the query plus "n".
    Exact,
    /// Query occurs inside name or demonym, past the first character.
    Substring,
    /// Nothing matched; first candidate wins.
    Fallback,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::Substring => "substring",
            Self::Fallback => "fallback",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMatch<'a> {
    pub tier: MatchTier,
    pub record: &'a CountryRecord,
}

/// Pick the single best candidate for a normalized (lower-case) query.
///
/// Returns `None` only when `candidates` is empty.
pub fn rank<'a>(query: &str, candidates: &'a CandidateSet) -> Option<RankedMatch<'a>> {
    let demonym_query = format!("{query}n");

    let exact = most_populous(candidates.iter().filter(|c| {
        c.name.to_lowercase() == query || c.demonym.to_lowercase() == demonym_query
    }));
    if let Some(record) = exact {
        return Some(RankedMatch {
            tier: MatchTier::Exact,
            record,
        });
    }

    let substring = most_populous(candidates.iter().filter(|c| {
        occurs_past_start(&c.name, query) || occurs_past_start(&c.demonym, query)
    }));
    if let Some(record) = substring {
        return Some(RankedMatch {
            tier: MatchTier::Substring,
            record,
        });
    }

    candidates.iter().next().map(|record| RankedMatch {
        tier: MatchTier::Fallback,
        record,
    })
}

/// The first occurrence must start after index 0; a field that begins with
/// the query does not count.
fn occurs_past_start(field: &str, query: &str) -> bool {
    field
        .to_lowercase()
        .find(query)
        .is_some_and(|index| index > 0)
}

/// Highest population wins; on a tie the earlier record is kept.
fn most_populous<'a>(
    records: impl Iterator<Item = &'a CountryRecord>,
) -> Option<&'a CountryRecord> {
    records.fold(None, |best, record| match best {
        Some(current) if current.population >= record.population => Some(current),
        _ => Some(record),
    })
}
