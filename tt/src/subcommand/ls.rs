use std::io::Write;

use anyhow::Result;

use timetracker::repository::Catalog;
use timetracker::sqlite_db::SQLiteDatabase;

use crate::table;

pub fn run(db: &SQLiteDatabase, mut writer: impl Write) -> Result<()> {
    let tables = db.table_list()?;
    writeln!(writer, "{}", table::table_list(&tables))?;
    Ok(())
}
