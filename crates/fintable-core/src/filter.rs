//! Filter stage.

use crate::criteria::FilterCriteria;
use crate::types::FinancialRecord;

impl FilterCriteria {
    /// Returns true if `record` satisfies all three ranges.
    ///
    /// A missing revenue or net income, or a date without a leading year,
    /// fails the corresponding range.
    #[must_use]
    pub fn matches(&self, record: &FinancialRecord) -> bool {
        self.year_range.contains(record.year())
            && self.revenue_range.contains(record.revenue)
            && self.net_income_range.contains(record.net_income)
    }
}

/// Returns the records that satisfy `criteria`, in input order.
#[must_use]
pub fn filter_records(
    records: &[FinancialRecord],
    criteria: &FilterCriteria,
) -> Vec<FinancialRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
