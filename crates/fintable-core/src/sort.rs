//! Sort stage.
//!
//! Missing figures and unparseable dates rank below every present value, so
//! they lead an ascending sort and trail a descending one. The direction
//! flips the comparator, never the output, which keeps ties in input order
//! both ways.

use std::cmp::Ordering;

use crate::criteria::{SortCriteria, SortDirection, SortKey};
use crate::types::FinancialRecord;

/// Returns a stably sorted copy of `records`.
///
/// An unrecognized key returns the records in input order.
#[must_use]
pub fn sort_records(records: &[FinancialRecord], criteria: &SortCriteria) -> Vec<FinancialRecord> {
    let mut sorted = records.to_vec();
    if criteria.key == SortKey::Unrecognized {
        return sorted;
    }

    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, criteria.key);
        match criteria.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &FinancialRecord, b: &FinancialRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.period_end().cmp(&b.period_end()),
        SortKey::Revenue => compare_figures(a.revenue, b.revenue),
        SortKey::NetIncome => compare_figures(a.net_income, b.net_income),
        SortKey::Unrecognized => Ordering::Equal,
    }
}

fn compare_figures(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dates(records: &[FinancialRecord]) -> Vec<&str> {
        records.iter().map(|r| r.date.as_str()).collect()
    }

    #[test]
    fn test_sort_by_date_compares_calendar_dates() {
        let records = vec![
            FinancialRecord::new("2023-09-30"),
            FinancialRecord::new("2021-09-25"),
            FinancialRecord::new("2023-01-15"),
        ];
        let asc = sort_records(&records, &SortCriteria::default());
        assert_eq!(dates(&asc), ["2021-09-25", "2023-01-15", "2023-09-30"]);

        let desc = sort_records(&records, &SortCriteria::new(SortKey::Date, SortDirection::Desc));
        assert_eq!(dates(&desc), ["2023-09-30", "2023-01-15", "2021-09-25"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = vec![
            FinancialRecord::new("2024-09-28").with_revenue(2.0),
            FinancialRecord::new("2020-09-26").with_revenue(1.0),
        ];
        let before = records.clone();
        let _ = sort_records(&records, &SortCriteria::new(SortKey::Revenue, SortDirection::Asc));
        assert_eq!(records, before);
    }

    #[test]
    fn test_missing_figures_rank_lowest() {
        let records = vec![
            FinancialRecord::new("2021-01-01").with_revenue(5.0),
            FinancialRecord::new("2022-01-01"),
            FinancialRecord::new("2023-01-01").with_revenue(1.0),
        ];
        let asc = sort_records(&records, &SortCriteria::new(SortKey::Revenue, SortDirection::Asc));
        assert_eq!(dates(&asc), ["2022-01-01", "2023-01-01", "2021-01-01"]);

        let desc = sort_records(
            &records,
            &SortCriteria::new(SortKey::Revenue, SortDirection::Desc),
        );
        assert_eq!(dates(&desc), ["2021-01-01", "2023-01-01", "2022-01-01"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let records = vec![
            FinancialRecord::new("2021-01-01").with_net_income(7.0),
            FinancialRecord::new("2022-01-01").with_net_income(3.0),
            FinancialRecord::new("2023-01-01").with_net_income(7.0),
            FinancialRecord::new("2024-01-01").with_net_income(3.0),
        ];
        let asc = sort_records(
            &records,
            &SortCriteria::new(SortKey::NetIncome, SortDirection::Asc),
        );
        assert_eq!(dates(&asc), ["2022-01-01", "2024-01-01", "2021-01-01", "2023-01-01"]);

        let desc = sort_records(
            &records,
            &SortCriteria::new(SortKey::NetIncome, SortDirection::Desc),
        );
        assert_eq!(dates(&desc), ["2021-01-01", "2023-01-01", "2022-01-01", "2024-01-01"]);
    }

    #[test]
    fn test_unrecognized_key_keeps_order() {
        let records = vec![
            FinancialRecord::new("2024-01-01").with_revenue(1.0),
            FinancialRecord::new("2020-01-01").with_revenue(9.0),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_records(
                &records,
                &SortCriteria::new(SortKey::Unrecognized, direction),
            );
            assert_eq!(sorted, records);
        }
    }

    #[test]
    fn test_unparseable_dates_rank_lowest() {
        let records = vec![
            FinancialRecord::new("2022-01-01"),
            FinancialRecord::new("garbage"),
        ];
        let asc = sort_records(&records, &SortCriteria::default());
        assert_eq!(dates(&asc), ["garbage", "2022-01-01"]);
    }

    proptest! {
        #[test]
        fn desc_is_reverse_of_asc_without_ties(
            revenues in proptest::collection::hash_set(-1_000i64..1_000, 0..25),
        ) {
            let records: Vec<FinancialRecord> = revenues
                .into_iter()
                .map(|r| FinancialRecord::new("2022-01-01").with_revenue(r as f64))
                .collect();
            let asc = sort_records(
                &records,
                &SortCriteria::new(SortKey::Revenue, SortDirection::Asc),
            );
            let mut desc = sort_records(
                &records,
                &SortCriteria::new(SortKey::Revenue, SortDirection::Desc),
            );
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn sort_is_stable(
            incomes in proptest::collection::vec(proptest::option::of(0i64..4), 0..25),
            descending in any::<bool>(),
        ) {
            let records: Vec<FinancialRecord> = incomes
                .iter()
                .enumerate()
                .map(|(i, income)| FinancialRecord {
                    net_income: income.map(|v| v as f64),
                    symbol: Some(i.to_string()),
                    ..FinancialRecord::new("2022-01-01")
                })
                .collect();
            let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };
            let sorted = sort_records(&records, &SortCriteria::new(SortKey::NetIncome, direction));

            for pair in sorted.windows(2) {
                if pair[0].net_income == pair[1].net_income {
                    let first: usize = pair[0].symbol.as_deref().unwrap().parse().unwrap();
                    let second: usize = pair[1].symbol.as_deref().unwrap().parse().unwrap();
                    prop_assert!(first < second);
                }
            }
        }
    }
}
