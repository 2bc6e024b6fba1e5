//! Terminal rendering of the derived view.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use fintable::{
    COLUMNS, Column, FinancialRecord, PipelineState, SortDirection, Symbol, ValueRange, View,
};

pub(crate) const LOADING: &str = "Loading…";
pub(crate) const EMPTY: &str = "No data available";

/// Render the filter panel (when shown) and the current view.
pub(crate) fn render(state: &PipelineState, symbol: &Symbol) -> String {
    let mut out = format!("{symbol} income statements\n");
    if state.show_filters() {
        out.push_str(&filter_panel(state));
    }
    match state.derive_view() {
        View::Loading => out.push_str(LOADING),
        View::Failed(message) => out.push_str(&format!("Error: {message}")),
        View::Empty => out.push_str(EMPTY),
        View::Table(rows) => out.push_str(&table(state, &rows).to_string()),
    }
    out
}

/// Render the filtered and sorted records as JSON.
pub(crate) fn render_json(view: &View) -> serde_json::Result<String> {
    let rows: &[FinancialRecord] = match view {
        View::Table(rows) => rows,
        _ => &[],
    };
    serde_json::to_string_pretty(rows)
}

fn filter_panel(state: &PipelineState) -> String {
    let filters = state.filters();
    let sort = state.sort();
    format!(
        "Filters\n  Year:       {} - {}\n  Revenue:    {}\n  Net income: {}\n  Sort:       {} {}\n",
        filters.year_range.start,
        filters.year_range.end,
        range(&filters.revenue_range),
        range(&filters.net_income_range),
        sort.key,
        marker(sort.direction),
    )
}

fn range(range: &ValueRange) -> String {
    format!("{} - {}", bound(range.min), bound(range.max))
}

fn bound(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "∞" } else { "-∞" }.to_string()
    } else {
        value.to_string()
    }
}

const fn marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

fn header(column: Column, state: &PipelineState) -> String {
    let sort = state.sort();
    if column.sort_key() == Some(sort.key) {
        format!("{} {}", column.header(), marker(sort.direction))
    } else {
        column.header().to_string()
    }
}

fn table(state: &PipelineState, rows: &[FinancialRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(COLUMNS.iter().map(|&c| Cell::new(header(c, state))));

    for record in rows {
        table.add_row(COLUMNS.iter().map(|c| {
            let cell = Cell::new(c.cell(record));
            if *c == Column::Year {
                cell
            } else {
                cell.set_alignment(CellAlignment::Right)
            }
        }));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintable::{ControlEvent, FetchError, SortKey};

    fn ready(records: Vec<FinancialRecord>) -> PipelineState {
        let mut state = PipelineState::new();
        let ticket = state.begin_fetch();
        state.complete_fetch(ticket, Ok(records));
        state
    }

    fn apple() -> Vec<FinancialRecord> {
        vec![
            FinancialRecord::new("2023-09-30")
                .with_revenue(383_285_000_000.0)
                .with_net_income(96_995_000_000.0)
                .with_gross_profit(169_148_000_000.0)
                .with_operating_income(114_301_000_000.0)
                .with_eps(6.16),
            FinancialRecord::new("2022-09-24")
                .with_revenue(394_328_000_000.0)
                .with_net_income(99_803_000_000.0)
                .with_eps(6.15),
        ]
    }

    #[test]
    fn test_non_table_states() {
        let mut state = PipelineState::new();
        assert!(render(&state, &Symbol::default()).ends_with(LOADING));

        let ticket = state.begin_fetch();
        state.complete_fetch(ticket, Err(FetchError::Api("Invalid API KEY.".into())));
        assert!(render(&state, &Symbol::default()).ends_with("Error: API error: Invalid API KEY."));

        assert!(render(&ready(Vec::new()), &Symbol::default()).ends_with(EMPTY));
    }

    #[test]
    fn test_table_contents() {
        let out = render(&ready(apple()), &Symbol::default());
        assert!(out.starts_with("AAPL income statements\n"));
        assert!(out.contains("Year ▲"));
        assert!(out.contains("383.285 B"));
        assert!(out.contains("114.301 B"));
        assert!(out.contains("N/A"));
        assert!(out.contains("6.16"));
        assert!(!out.contains("Filters"));

        let first = out.find("2022-09-24").unwrap();
        let second = out.find("2023-09-30").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_sort_marker_follows_active_column() {
        let mut state = ready(apple());
        state.apply(ControlEvent::SortBy(SortKey::Revenue)).unwrap();
        state.apply(ControlEvent::SortBy(SortKey::Revenue)).unwrap();
        let out = render(&state, &Symbol::default());
        assert!(out.contains("Revenue ▼"));
        assert!(!out.contains("Year ▲"));
        assert!(out.find("2022-09-24").unwrap() < out.find("2023-09-30").unwrap());
    }

    #[test]
    fn test_filter_panel() {
        let mut state = ready(apple());
        state.apply(ControlEvent::ToggleFilters).unwrap();
        state.apply(ControlEvent::SetRevenueMin("1000".into())).unwrap();
        let out = render(&state, &Symbol::default());
        assert!(out.contains("Year:       2020 - 2024"));
        assert!(out.contains("Revenue:    1000 - ∞"));
        assert!(out.contains("Net income: 0 - ∞"));
        assert!(out.contains("Sort:       date ▲"));
    }

    #[test]
    fn test_json_output() {
        let state = ready(apple());
        let json = render_json(&state.derive_view()).unwrap();
        let parsed: Vec<FinancialRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].date, "2022-09-24");

        assert_eq!(render_json(&View::Empty).unwrap(), "[]");
    }
}
