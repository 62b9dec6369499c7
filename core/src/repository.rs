pub use crate::error::Result;

/// Table directory of a document database.
pub trait Catalog {
    /// Gets the names of all user tables, sorted by name.
    fn table_list(&self) -> Result<Vec<String>>;
    /// Creates a table. Fails if a table with the same name already exists.
    fn table_create(&self, name: &str) -> Result<()>;
    /// Key under which the backend resolves a table name.
    /// Two names with the same key refer to the same table.
    fn table_key(&self, name: &str) -> String {
        name.to_owned()
    }
}
