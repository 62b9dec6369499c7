use std::io::{stderr, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use timetracker::bootstrap::DEFAULT_TABLES;
use timetracker::sqlite_db::SQLiteDatabase;

use tt::database::{data_dir, db_path, setup_db};
use tt::logging;
use tt::subcommand;

/// Timetracker database setup
#[derive(Debug, Parser)]
#[command(name = "tt")]
#[command(version, about, long_about = None)]
#[command(flatten_help = true)]
struct Cli {
    /// Database name
    #[arg(long, value_name = "NAME", default_value = "timetracker", global = true)]
    db: String,
    /// Directory holding the database files
    #[arg(long, value_name = "DIR", env = "TIMETRACKER_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,
    /// Increase diagnostics output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create missing tables (default)
    Init(InitArgs),
    /// List existing tables
    Ls,
}

#[derive(Debug, Args)]
struct InitArgs {
    /// Table to ensure, may be repeated
    #[arg(
        short,
        long = "table",
        value_name = "NAME",
        default_values = DEFAULT_TABLES,
        value_parser = NonEmptyStringValueParser::new()
    )]
    tables: Vec<String>,
}

impl Default for InitArgs {
    fn default() -> Self {
        Self {
            tables: DEFAULT_TABLES.map(String::from).to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let data_dir = data_dir("timetracker", args.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), db = %args.db, "database resolved");

    match args.command.unwrap_or(Commands::Init(InitArgs::default())) {
        Commands::Init(init) => {
            let db_path = setup_db(&data_dir, &args.db, stderr())?;
            let db = SQLiteDatabase::open_rw(&db_path)?;
            subcommand::init::run(&db, &init.tables, stdout())?;
            db.close()?;
        }
        Commands::Ls => {
            let db = SQLiteDatabase::open_r(db_path(&data_dir, &args.db))?;
            subcommand::ls::run(&db, stdout())?;
            db.close()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_default_tables() {
        let args = Cli::parse_from(["tt", "init"]);
        match args.command {
            Some(Commands::Init(init)) => assert_eq!(init.tables, vec!["work", "projects"]),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.db, "timetracker");
    }

    #[test]
    fn test_init_tables() {
        let args = Cli::parse_from(["tt", "--db", "staging", "init", "-t", "work"]);
        match args.command {
            Some(Commands::Init(init)) => assert_eq!(init.tables, vec!["work"]),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.db, "staging");
    }

    #[test]
    fn test_init_empty_table_name() {
        let result = Cli::try_parse_from(["tt", "init", "-t", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Cli::parse_from(["tt", "-vv"]);
        assert!(args.command.is_none());
        assert_eq!(args.verbose, 2);
        assert_eq!(InitArgs::default().tables, vec!["work", "projects"]);
    }
}
