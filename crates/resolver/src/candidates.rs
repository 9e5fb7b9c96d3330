use crate::record::CountryRecord;

/// Every record returned for one resolution, in term order.
///
/// Duplicates are kept; the ranker decides between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet(Vec<CountryRecord>);

impl CandidateSet {
    pub fn aggregate<I>(results_per_term: I) -> Self
    where
        I: IntoIterator<Item = Vec<CountryRecord>>,
    {
        Self(results_per_term.into_iter().flatten().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.0.iter()
    }
}

impl From<Vec<CountryRecord>> for CandidateSet {
    fn from(records: Vec<CountryRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
