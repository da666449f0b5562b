//! SQL schema for the Ferry SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Insertion order is the table's `rowid`, which is what `list` sorts by.
/// `status` is only ever changed by conditional updates that name the
/// expected current value in their WHERE clause.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS deliveries (
    delivery_id TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    from_place  TEXT NOT NULL,
    to_place    TEXT NOT NULL,
    date        TEXT NOT NULL,              -- YYYY-MM-DD
    time        TEXT NOT NULL,              -- HH:MM wall clock
    category    TEXT NOT NULL,
    details     TEXT NOT NULL DEFAULT '',
    status      TEXT NOT NULL DEFAULT 'open', -- 'open' | 'in-progress' | 'done'
    created_by  TEXT NOT NULL,
    taken_by    TEXT,                       -- NULL exactly while status = 'open'
    created_at  TEXT NOT NULL               -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS deliveries_status_idx     ON deliveries(status);
CREATE INDEX IF NOT EXISTS deliveries_created_by_idx ON deliveries(created_by);
CREATE INDEX IF NOT EXISTS deliveries_taken_by_idx   ON deliveries(taken_by);

PRAGMA user_version = 1;
";
