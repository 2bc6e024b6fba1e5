//! Reporting period definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Period type for income statements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    /// Annual reporting period.
    #[default]
    Annual,
    /// Quarterly reporting period.
    Quarterly,
}

impl PeriodType {
    /// The value of the `period` query parameter.
    #[must_use]
    pub const fn as_query(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarter",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for PeriodType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "year" | "fy" => Ok(Self::Annual),
            "quarter" | "quarterly" | "q" => Ok(Self::Quarterly),
            other => Err(InputError::Unknown(format!("period {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_values() {
        assert_eq!(PeriodType::Annual.as_query(), "annual");
        assert_eq!(PeriodType::Quarterly.as_query(), "quarter");
        assert_eq!(PeriodType::default(), PeriodType::Annual);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Annual".parse::<PeriodType>(), Ok(PeriodType::Annual));
        assert_eq!("quarter".parse::<PeriodType>(), Ok(PeriodType::Quarterly));
        assert!("weekly".parse::<PeriodType>().is_err());
    }
}
