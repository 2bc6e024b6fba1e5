//! Presentation formatting for table cells.

use crate::criteria::SortKey;
use crate::types::FinancialRecord;

const BILLION: f64 = 1_000_000_000.0;

/// Formats a currency amount in billions with three decimals, e.g. `"383.285 B"`.
///
/// A missing amount formats as `"N/A"`. Halfway values round away from
/// zero, and amounts that round to zero print without a sign.
#[must_use]
pub fn format_magnitude(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let scaled = (v / BILLION * 1000.0).round() / 1000.0;
            let scaled = if scaled == 0.0 { 0.0 } else { scaled };
            format!("{scaled:.3} B")
        }
        None => "N/A".to_string(),
    }
}

/// Formats EPS verbatim. A missing EPS renders as an empty cell.
#[must_use]
pub fn format_eps(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// A table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// Raw period end date.
    Year,
    /// Revenue in billions.
    Revenue,
    /// Net income in billions.
    NetIncome,
    /// Gross profit in billions.
    GrossProfit,
    /// Operating income in billions.
    OperatingIncome,
    /// Earnings per share, unscaled.
    Eps,
}

/// Columns of the rendered table, left to right.
pub const COLUMNS: [Column; 7] = [
    Column::Year,
    Column::Revenue,
    Column::NetIncome,
    Column::GrossProfit,
    Column::OperatingIncome,
    Column::Eps,
    Column::OperatingIncome,
];

impl Column {
    /// Header label.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Revenue => "Revenue",
            Self::NetIncome => "Net Income",
            Self::GrossProfit => "Gross Profit",
            Self::OperatingIncome => "Operating Income",
            Self::Eps => "EPS",
        }
    }

    /// The sort key a click on this header selects, if the column is sortable.
    #[must_use]
    pub const fn sort_key(&self) -> Option<SortKey> {
        match self {
            Self::Year => Some(SortKey::Date),
            Self::Revenue => Some(SortKey::Revenue),
            Self::NetIncome => Some(SortKey::NetIncome),
            Self::GrossProfit | Self::OperatingIncome | Self::Eps => None,
        }
    }

    /// Display text of this column for `record`.
    #[must_use]
    pub fn cell(&self, record: &FinancialRecord) -> String {
        match self {
            Self::Year => record.date.clone(),
            Self::Revenue => format_magnitude(record.revenue),
            Self::NetIncome => format_magnitude(record.net_income),
            Self::GrossProfit => format_magnitude(record.gross_profit),
            Self::OperatingIncome => format_magnitude(record.operating_income),
            Self::Eps => format_eps(record.eps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(None), "N/A");
        assert_eq!(format_magnitude(Some(1_000_000_000.0)), "1.000 B");
        assert_eq!(format_magnitude(Some(383_285_000_000.0)), "383.285 B");
        assert_eq!(format_magnitude(Some(0.0)), "0.000 B");
        assert_eq!(format_magnitude(Some(-2_500_000_000.0)), "-2.500 B");
        assert_eq!(format_magnitude(Some(96_995_400_000.0)), "96.995 B");
    }

    #[test]
    fn test_format_magnitude_rounds_halves_away_from_zero() {
        assert_eq!(format_magnitude(Some(1_062_500_000.0)), "1.063 B");
        assert_eq!(format_magnitude(Some(62_500_000.0)), "0.063 B");
        assert_eq!(format_magnitude(Some(-62_500_000.0)), "-0.063 B");
        assert_eq!(format_magnitude(Some(-1.0)), "0.000 B");
        assert_eq!(format_magnitude(Some(-0.0)), "0.000 B");
    }

    #[test]
    fn test_format_eps_is_verbatim() {
        assert_eq!(format_eps(Some(6.16)), "6.16");
        assert_eq!(format_eps(Some(-0.5)), "-0.5");
        assert_eq!(format_eps(None), "");
    }

    #[test]
    fn test_cells() {
        let record = FinancialRecord::new("2023-09-30")
            .with_revenue(383_285_000_000.0)
            .with_operating_income(114_301_000_000.0)
            .with_eps(6.16);
        let cells: Vec<String> = COLUMNS.iter().map(|c| c.cell(&record)).collect();
        assert_eq!(
            cells,
            [
                "2023-09-30",
                "383.285 B",
                "N/A",
                "N/A",
                "114.301 B",
                "6.16",
                "114.301 B",
            ]
        );
    }

    #[test]
    fn test_sortable_headers() {
        let sortable: Vec<_> = COLUMNS.iter().filter_map(Column::sort_key).collect();
        assert_eq!(sortable, [SortKey::Date, SortKey::Revenue, SortKey::NetIncome]);
    }
}
