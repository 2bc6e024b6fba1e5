//! Interactive command parsing.
//!
//! Each line is one command. Numeric bounds accept `-` for an empty bound.

use fintable::{ControlEvent, InputError, SortKey};

pub(crate) const HELP: &str = "\
Commands:
  filters                    show or hide the filter panel
  year <start> <end>         fiscal years, 2020-2024
  revenue <min> <max>        revenue bounds, '-' for none
  net-income <min> <max>     net income bounds, '-' for none
  sort <date|revenue|net-income>
                             sort by a column; repeat to flip direction
  reset                      restore default filters
  reload                     fetch the statements again
  show                       redraw the table
  help                       this text
  quit                       exit";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Apply these inputs in order.
    Events(Vec<ControlEvent>),
    /// Start a new fetch.
    Reload,
    /// Redraw without changes.
    Show,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

pub(crate) fn parse(line: &str) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(Command::Show);
    };
    let args: Vec<&str> = words.collect();
    let arg = |i: usize| args.get(i).map_or("", |a| if *a == "-" { "" } else { *a }).to_string();

    let command = match name.to_ascii_lowercase().as_str() {
        "filters" | "f" => Command::Events(vec![ControlEvent::ToggleFilters]),
        "year" | "years" => {
            let start = year(args.first())?;
            let end = year(args.get(1).or(args.first()))?;
            Command::Events(vec![
                ControlEvent::SetYearStart(start),
                ControlEvent::SetYearEnd(end),
            ])
        }
        "revenue" => Command::Events(vec![
            ControlEvent::SetRevenueMin(arg(0)),
            ControlEvent::SetRevenueMax(arg(1)),
        ]),
        "net-income" | "netincome" | "ni" => Command::Events(vec![
            ControlEvent::SetNetIncomeMin(arg(0)),
            ControlEvent::SetNetIncomeMax(arg(1)),
        ]),
        "sort" => {
            let key = args
                .first()
                .ok_or_else(|| InputError::Unknown("sort needs a column".to_string()))?;
            Command::Events(vec![ControlEvent::SortBy(SortKey::from_name(key))])
        }
        "reset" => Command::Events(vec![ControlEvent::ResetFilters]),
        "reload" | "r" => Command::Reload,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn year(word: Option<&&str>) -> Result<i32, InputError> {
    let word = word.copied().unwrap_or_default();
    word.parse().map_err(|_| InputError::InvalidNumber {
        field: "year",
        value: word.to_string(),
    })
}
