use std::io::Write;

use anyhow::Result;

use timetracker::bootstrap::ensure_tables;
use timetracker::sqlite_db::SQLiteDatabase;

use crate::table;

pub fn run(db: &SQLiteDatabase, tables: &[String], mut writer: impl Write) -> Result<()> {
    let report = ensure_tables(db, tables)?;
    writeln!(writer, "{}", table::report(&report))?;
    Ok(())
}
