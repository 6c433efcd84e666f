use crate::state::ForecastState;

/// Record `city` and `condition` into `state` and return the forecast sentence.
pub fn forecast(state: &mut ForecastState, city: &str, condition: &str) -> String {
    state.record(city, condition)
}
