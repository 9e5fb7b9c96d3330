use anyhow::{Context as AnyhowContext, Result};
use country_protocol::{RequestKind, SkillRequest, SkillResponse};
use country_resolver::{CountryLookup, CountryRecord, CountryResolver, Resolution};

use crate::config::DEFAULT_INVOCATION_NAME;

/// Slot holding the spoken country name.
pub const COUNTRY_SLOT: &str = "Country";

pub const REPROMPT: &str = "Just say, tell me about Canada to learn more. To exit, say, exit.";

pub const NOT_UNDERSTOOD: &str =
    "I'm sorry, but I didn't understand the country you were asking for. Please ask again.";

pub fn describe(record: &CountryRecord) -> String {
    format!(
        "About {}. The capital is {} and the population is {}.",
        record.name, record.capital, record.population
    )
}

pub fn unsupported_request(invocation_name: &str) -> String {
    format!(
        "I don't know how to handle this intent. Please say something like Alexa, ask {invocation_name} about Canada."
    )
}

/// Turns skill requests into spoken answers.
pub struct SkillHandler<L> {
    resolver: CountryResolver<L>,
    invocation_name: String,
}

impl<L> Clone for SkillHandler<L> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            invocation_name: self.invocation_name.clone(),
        }
    }
}

impl<L> SkillHandler<L>
where
    L: CountryLookup + 'static,
{
    pub fn new(resolver: CountryResolver<L>) -> Self {
        Self {
            resolver,
            invocation_name: DEFAULT_INVOCATION_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_invocation_name(mut self, name: impl Into<String>) -> Self {
        self.invocation_name = name.into();
        self
    }

    pub fn resolver(&self) -> &CountryResolver<L> {
        &self.resolver
    }

    pub async fn handle(&self, request: &SkillRequest) -> Result<SkillResponse> {
        let RequestKind::IntentRequest(intent_request) = &request.request else {
            log::info!("Unsupported request type {}", request.request.type_name());
            return Ok(SkillResponse::speak(
                unsupported_request(&self.invocation_name),
                true,
                Some(REPROMPT),
            ));
        };

        match intent_request.intent.slot_value(COUNTRY_SLOT) {
            Some(phrase) => self.answer(phrase).await,
            None => {
                log::info!("The country was not understood");
                Ok(not_understood())
            }
        }
    }

    /// Resolve a phrase and render the spoken answer.
    pub async fn answer(&self, phrase: &str) -> Result<SkillResponse> {
        let resolution = self
            .resolver
            .resolve(phrase)
            .await
            .with_context(|| format!("Failed to resolve '{phrase}'"))?;

        Ok(match resolution {
            Resolution::Match { record, .. } => {
                SkillResponse::speak(describe(&record), true, Some(REPROMPT))
            }
            Resolution::NoMatch => {
                log::info!("No country matched '{phrase}'");
                not_understood()
            }
        })
    }
}

fn not_understood() -> SkillResponse {
    SkillResponse::speak(NOT_UNDERSTOOD, false, Some(REPROMPT))
}
