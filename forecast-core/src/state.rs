use serde::{Deserialize, Serialize};
use std::fmt;

/// Text placed between the city and the condition in a forecast sentence.
pub const CONDITION_SEPARATOR: &str = " - current weather condition: ";

/// Build the forecast sentence for a city/condition pair.
///
/// No trimming or normalization is applied; empty inputs are kept as-is.
pub fn format_forecast(city: &str, condition: &str) -> String {
    let mut out = String::with_capacity(city.len() + CONDITION_SEPARATOR.len() + condition.len());
    out.push_str(city);
    out.push_str(CONDITION_SEPARATOR);
    out.push_str(condition);
    out
}

/// The most recently recorded location and weather condition.
///
/// Owned by the caller and updated through [`ForecastState::record`] (or the
/// free function [`crate::forecast`]). A fresh state holds two empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastState {
    /// Last recorded city/location.
    pub location: String,
    /// Last recorded weather condition.
    pub condition: String,
}

impl ForecastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Overwrite the recorded pair and return the display sentence.
    pub fn record(&mut self, city: &str, condition: &str) -> String {
        self.location = city.to_owned();
        self.condition = condition.to_owned();

        tracing::debug!(location = %self.location, condition = %self.condition, "recorded forecast");

        self.summary()
    }

    /// Sentence for the currently recorded pair. Does not modify the state.
    pub fn summary(&self) -> String {
        format_forecast(&self.location, &self.condition)
    }
}

impl fmt::Display for ForecastState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
