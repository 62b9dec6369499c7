use tabled::settings::object::Rows;
use tabled::settings::style::Style;
use tabled::settings::themes::Colorization;
use tabled::settings::Color;
use tabled::{Table, Tabled};

use timetracker::bootstrap::{Report, Status};

/// Basic function that creates a list table
fn build_table<I, T>(rows: I) -> Table
where
    I: IntoIterator<Item = T>,
    T: Tabled,
{
    Table::new(rows)
        .with(Style::sharp())
        .with(Colorization::exact([Color::BOLD], Rows::first()))
        .to_owned()
}

/// Bootstrap result row.
#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Table")]
    name: String,
    #[tabled(rename = "Status")]
    #[tabled(display_with = "display_status")]
    status: Status,
}

fn display_status(x: &Status) -> String {
    match x {
        Status::Created => "Created".into(),
        Status::Existing => "Existing".into(),
    }
}

/// Creates a table of bootstrap results.
pub fn report(report: &Report) -> String {
    if report.tables.is_empty() {
        return "No Tables".into();
    }

    let rows = report.tables.iter().map(|(name, status)| StatusRow {
        name: name.clone(),
        status: *status,
    });
    build_table(rows).to_string()
}

/// Table name row.
#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Table")]
    name: String,
}

/// Creates a table listing table names.
pub fn table_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No Tables".into();
    }

    let rows = names.iter().map(|name| NameRow { name: name.clone() });
    build_table(rows).to_string()
}
