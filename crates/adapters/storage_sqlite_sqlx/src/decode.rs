//! Column decoding helpers shared by the row wrappers.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use minipoll_domain::time::{self, Timestamp};

/// Read an RFC 3339 `TEXT` column as a UTC timestamp.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    time::parse(&raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Read a `COUNT(...)` column as an unsigned count.
pub(crate) fn count(row: &SqliteRow, column: &str) -> Result<u64, sqlx::Error> {
    let raw: i64 = row.try_get(column)?;
    u64::try_from(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
