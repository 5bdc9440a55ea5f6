//! Birth-year entry
//!
//! The only user input that creates state. Anything non-numeric or outside
//! the configured range is rejected before a journey exists.

use serde::{Deserialize, Serialize};

use crate::config::JourneyConfig;
use crate::error::InputError;

/// A birth year that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthYear(i32);

impl BirthYear {
    pub fn new(year: i32, config: &JourneyConfig) -> Result<Self, InputError> {
        if year < config.birth_year_min || year > config.birth_year_max {
            return Err(InputError::OutOfRange {
                year,
                min: config.birth_year_min,
                max: config.birth_year_max,
            });
        }
        Ok(Self(year))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Parse the raw text of the entry field
pub fn parse_birth_year(raw: &str, config: &JourneyConfig) -> Result<BirthYear, InputError> {
    let trimmed = raw.trim();
    let year: i32 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    BirthYear::new(year, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_range_bounds() {
        let config = JourneyConfig::default();
        assert_eq!(parse_birth_year("1950", &config).unwrap().get(), 1950);
        assert_eq!(parse_birth_year(" 2020 ", &config).unwrap().get(), 2020);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let config = JourneyConfig::default();
        assert_eq!(
            parse_birth_year("1949", &config),
            Err(InputError::OutOfRange {
                year: 1949,
                min: 1950,
                max: 2020
            })
        );
        assert!(parse_birth_year("2021", &config).is_err());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let config = JourneyConfig::default();
        assert!(matches!(
            parse_birth_year("nineteen ninety", &config),
            Err(InputError::NotANumber(_))
        ));
        assert!(parse_birth_year("", &config).is_err());
        assert!(parse_birth_year("1990.5", &config).is_err());
    }
}
