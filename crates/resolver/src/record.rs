use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One country as returned by the REST v2 `name` endpoint.
///
/// Only `name`, `demonym`, `capital` and `population` take part in matching;
/// everything else is carried through untouched. Equality compares `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub demonym: String,
    #[serde(deserialize_with = "null_as_default")]
    pub capital: String,
    #[serde(deserialize_with = "null_as_default")]
    pub population: u64,

    pub top_level_domain: Vec<String>,
    pub alpha2_code: Option<String>,
    pub alpha3_code: Option<String>,
    pub calling_codes: Vec<String>,
    pub alt_spellings: Vec<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub latlng: Vec<f64>,
    pub area: Option<f64>,
    pub gini: Option<f64>,
    pub timezones: Vec<String>,
    pub borders: Vec<String>,
    pub native_name: Option<String>,
    pub numeric_code: Option<String>,
    pub currencies: Vec<Currency>,
    pub languages: Vec<Language>,
    pub translations: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Currency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Language {
    #[serde(rename = "iso639_1")]
    pub iso639_1: Option<String>,
    #[serde(rename = "iso639_2")]
    pub iso639_2: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "nativeName")]
    pub native_name: Option<String>,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, demonym: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            demonym: demonym.into(),
            population,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = capital.into();
        self
    }
}

impl PartialEq for CountryRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CountryRecord {}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
