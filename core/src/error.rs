use std::path::PathBuf;

/// Errors raised while connecting to or bootstrapping a database.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to open database {}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("unable to list tables")]
    ListTables(#[source] rusqlite::Error),

    #[error("unable to create table `{name}`")]
    CreateTable {
        name: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("unable to close database")]
    Close(#[source] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
