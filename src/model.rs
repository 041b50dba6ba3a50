use serde::{Deserialize, Serialize};

/// Default status of a freshly added book.
pub const STATUS_AVAILABLE: &str = "available";
/// The other recognized status value. The field itself stays free text;
/// the catalog never validates it against a closed set.
pub const STATUS_CHECKED_OUT: &str = "checked out";

/// One catalog entry. Ids are assigned by the catalog, never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: String,
}

impl Book {
    pub fn new(id: u64, title: String, author: String, year: i32) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: STATUS_AVAILABLE.to_string(),
        }
    }
}
