pub mod bootstrap;
pub mod error;
pub mod repository;
pub mod sqlite_db;
