//! Ensures the tables an application needs exist before it is used.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::repository::{Catalog, Result};

/// Tables the timetracker stores its documents in.
pub const DEFAULT_TABLES: [&str; 2] = ["work", "projects"];

/// What happened to a desired table.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Status {
    Created,
    Existing,
}

/// Outcome of a bootstrap run, in desired order.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Report {
    pub tables: Vec<(String, Status)>,
}

impl Report {
    /// Names of the tables created by the run.
    pub fn created(&self) -> impl Iterator<Item = &str> {
        self.with_status(Status::Created)
    }

    /// Names of the tables that were already present.
    pub fn existing(&self) -> impl Iterator<Item = &str> {
        self.with_status(Status::Existing)
    }

    fn with_status(&self, status: Status) -> impl Iterator<Item = &str> {
        self.tables
            .iter()
            .filter(move |(_, s)| *s == status)
            .map(|(name, _)| name.as_str())
    }
}

/// Creates every table in `desired` that is missing from `db`.
///
/// The existing tables are listed once; missing ones are then created in the
/// given order. Names are compared by [`Catalog::table_key`], so a desired
/// name that resolves to an existing table is reported as existing. The first failure stops the run and is returned as is, so
/// tables created before it stay in place.
pub fn ensure_tables<C, I, S>(db: &C, desired: I) -> Result<Report>
where
    C: Catalog + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let existing: HashSet<String> = db
        .table_list()?
        .iter()
        .map(|name| db.table_key(name))
        .collect();
    debug!(count = existing.len(), "existing tables listed");

    let mut seen = HashSet::new();
    let mut report = Report::default();

    for name in desired {
        let name = name.as_ref();
        let key = db.table_key(name);
        if !seen.insert(key.clone()) {
            continue;
        }

        let status = if existing.contains(&key) {
            Status::Existing
        } else {
            db.table_create(name)?;
            Status::Created
        };
        report.tables.push((name.to_owned(), status));
    }

    info!(
        created = report.created().count(),
        existing = report.existing().count(),
        "tables ensured"
    );
    Ok(report)
}
