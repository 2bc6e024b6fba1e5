//! Filter and sort criteria.
//!
//! Bounds typed by the user are free-form text. An empty bound is normalized
//! to `0` for a minimum and to `+infinity` for a maximum, so a range is never
//! left undefined.

use std::fmt;

use crate::error::InputError;

/// The years a year range may be set to.
pub const YEAR_OPTIONS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];

/// Inclusive range of fiscal years.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    /// First year included.
    pub start: i32,
    /// Last year included.
    pub end: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: YEAR_OPTIONS[0],
            end: YEAR_OPTIONS[YEAR_OPTIONS.len() - 1],
        }
    }
}

impl YearRange {
    /// Creates a range from two selectable years.
    pub fn new(start: i32, end: i32) -> Result<Self, InputError> {
        Ok(Self {
            start: selectable(start)?,
            end: selectable(end)?,
        })
    }

    /// Returns true if `year` lies within the range.
    #[must_use]
    pub fn contains(&self, year: Option<i32>) -> bool {
        year.is_some_and(|y| self.start <= y && y <= self.end)
    }

    /// Sets the first year.
    pub fn set_start(&mut self, year: i32) -> Result<(), InputError> {
        self.start = selectable(year)?;
        Ok(())
    }

    /// Sets the last year.
    pub fn set_end(&mut self, year: i32) -> Result<(), InputError> {
        self.end = selectable(year)?;
        Ok(())
    }
}

fn selectable(year: i32) -> Result<i32, InputError> {
    if YEAR_OPTIONS.contains(&year) {
        Ok(year)
    } else {
        Err(InputError::YearOutOfRange(year))
    }
}

/// Inclusive numeric range. Missing values never fall inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

impl ValueRange {
    /// Creates a range from explicit bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a range from user-entered text.
    pub fn parse(min: &str, max: &str) -> Result<Self, InputError> {
        Ok(Self {
            min: parse_bound("min", min, 0.0)?,
            max: parse_bound("max", max, f64::INFINITY)?,
        })
    }

    /// Returns true if `value` is present and lies within the range.
    #[must_use]
    pub fn contains(&self, value: Option<f64>) -> bool {
        value.is_some_and(|v| self.min <= v && v <= self.max)
    }

    /// Sets the lower bound from user-entered text.
    pub fn set_min(&mut self, text: &str) -> Result<(), InputError> {
        self.min = parse_bound("min", text, 0.0)?;
        Ok(())
    }

    /// Sets the upper bound from user-entered text.
    pub fn set_max(&mut self, text: &str) -> Result<(), InputError> {
        self.max = parse_bound("max", text, f64::INFINITY)?;
        Ok(())
    }
}

fn parse_bound(field: &'static str, text: &str, empty: f64) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(empty);
    }
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(InputError::InvalidNumber {
            field,
            value: text.to_string(),
        }),
    }
}

/// The three independent ranges a record must satisfy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    /// Fiscal year range.
    pub year_range: YearRange,
    /// Revenue range.
    pub revenue_range: ValueRange,
    /// Net income range.
    pub net_income_range: ValueRange,
}

/// Column a table can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Period end date.
    #[default]
    Date,
    /// Revenue.
    Revenue,
    /// Net income.
    NetIncome,
    /// A key no column answers to. Sorting by it keeps the input order.
    Unrecognized,
}

impl SortKey {
    /// Resolves a column name. Unknown names map to [`SortKey::Unrecognized`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "date" | "year" => Self::Date,
            "revenue" => Self::Revenue,
            "net-income" | "netincome" => Self::NetIncome,
            _ => Self::Unrecognized,
        }
    }

    /// Name used in commands and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Revenue => "revenue",
            Self::NetIncome => "net-income",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort key and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortCriteria {
    /// Column to sort by.
    pub key: SortKey,
    /// Direction to sort in.
    pub direction: SortDirection,
}

impl SortCriteria {
    /// Creates sort criteria.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Applies a header click: the active key flips direction, any other key
    /// becomes active in ascending order.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }
}
