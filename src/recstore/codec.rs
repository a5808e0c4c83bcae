//! JSON encoding for the backing file and for single-record payloads.
//!
//! The backing file is either zero bytes (an empty store) or a compact JSON
//! array of records. Nothing here touches the filesystem.

use crate::error::Result;
use crate::model::{Record, Store};

pub fn decode_store(bytes: &[u8]) -> Result<Store> {
    if bytes.is_empty() {
        return Ok(Store::new());
    }
    // `null` is an empty array, a `null` element is a zero-valued record
    let records: Option<Vec<Option<Record>>> = serde_json::from_slice(bytes)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>()
        .into())
}

pub fn encode_store(store: &Store) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(store.records())?)
}

pub fn decode_record(payload: &str) -> Result<Record> {
    Ok(serde_json::from_str(payload)?)
}

pub fn encode_record(record: &Record) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}
