use crate::error::{AssistantError, Result};

/// What the user typed at the city prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityInput {
    Single(String),
    /// Travel from the first city to the second.
    Pair { origin: String, destination: String },
}

impl CityInput {
    /// One city, or exactly two separated by a comma. Empty input means
    /// `default_city`.
    pub fn parse(input: &str, default_city: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::Single(default_city.to_string()));
        }
        if !input.contains(',') {
            return Ok(Self::Single(input.to_string()));
        }

        let fields: Vec<&str> = input.split(',').map(str::trim).collect();
        match fields.as_slice() {
            [origin, destination] if !origin.is_empty() && !destination.is_empty() => {
                Ok(Self::Pair {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                })
            }
            _ => Err(AssistantError::InvalidCityInput(
                "Please enter exactly two cities separated by a comma.".to_string(),
            )),
        }
    }
}
