//! Match request storage - byte-level API for match request documents.
//!
//! Besides plain CRUD, exposes a whole-table read-modify-write that runs
//! inside a single write transaction. Lookup-then-write sequences built on it
//! cannot interleave: redb's write lock serializes concurrent callers.

use anyhow::Result;
use redb::ReadableTable;

use crate::define_simple_storage;

define_simple_storage! {
    /// Low-level match request storage with byte-level API
    pub struct MatchRequestStorage { table: "match_requests" }
}

impl MatchRequestStorage {
    /// Scan every stored request, let `apply` pick or build the single row to
    /// write back, and persist it — all within one write transaction.
    ///
    /// `apply` receives the full (id, data) listing and returns the (id, data)
    /// pair to insert. Returns the bytes that were written.
    pub fn update_with<F>(&self, apply: F) -> Result<Vec<u8>>
    where
        F: FnOnce(Vec<(String, Vec<u8>)>) -> Result<(String, Vec<u8>)>,
    {
        let write_txn = self.db.begin_write()?;
        let written = {
            let mut table = write_txn.open_table(TABLE)?;

            let mut rows = Vec::new();
            for item in table.iter()? {
                let (key, value) = item?;
                rows.push((key.value().to_string(), value.value().to_vec()));
            }

            let (id, data) = apply(rows)?;
            table.insert(id.as_str(), data.as_slice())?;
            data
        };
        write_txn.commit()?;
        Ok(written)
    }
}
