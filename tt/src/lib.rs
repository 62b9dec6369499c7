pub mod database;
pub mod logging;
pub mod subcommand;
pub mod table;
