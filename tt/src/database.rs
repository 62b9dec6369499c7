use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use timetracker::sqlite_db::SQLiteDatabase;

/// Resolves the data directory, falling back to the platform one for `app_name`.
pub fn data_dir(app_name: &str, custom: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = custom {
        return Ok(dir.to_owned());
    }
    let proj_dirs =
        ProjectDirs::from("", "", app_name).context("Unable to locate data directory")?;
    Ok(proj_dirs.data_dir().to_owned())
}

/// Path of the database file named `db_name`.
pub fn db_path(data_dir: &Path, db_name: &str) -> PathBuf {
    data_dir.join(format!("{}.db", db_name))
}

/// Creates the database named `db_name` if it does not exist yet.
pub fn setup_db(data_dir: &Path, db_name: &str, mut writer: impl Write) -> Result<PathBuf> {
    let db_path = db_path(data_dir, db_name);

    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir).with_context(|| {
            format!("Unable to create data directory {}", data_dir.display())
        })?;
    }

    if !db_path.exists() {
        SQLiteDatabase::open_rwc(&db_path)?.close()?;

        writeln!(
            &mut writer,
            "Database created: {}",
            db_path.to_string_lossy()
        )?;
    }

    Ok(db_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::result::Result;

    #[test]
    fn test_data_dir_custom() -> Result<(), Box<dyn Error>> {
        let dir = data_dir("timetracker", Some(Path::new("/tmp/tt")))?;
        assert_eq!(dir, PathBuf::from("/tmp/tt"));
        Ok(())
    }

    #[test]
    fn test_db_path() {
        let path = db_path(Path::new("/data"), "timetracker");
        assert_eq!(path, PathBuf::from("/data/timetracker.db"));
    }

    #[test]
    fn test_setup_db_creates_once() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let data_dir = dir.path().join("nested");

        let mut out = Vec::new();
        let path = setup_db(&data_dir, "timetracker", &mut out)?;
        assert!(path.exists());
        assert_eq!(
            String::from_utf8(out)?,
            format!("Database created: {}\n", path.to_string_lossy())
        );

        let mut out = Vec::new();
        setup_db(&data_dir, "timetracker", &mut out)?;
        assert!(out.is_empty());
        Ok(())
    }
}
