use crate::codec::encode_record;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Store;

/// Encodes the first record with `id`. No match produces empty output.
pub fn run(store: &Store, id: &str) -> Result<CmdResult> {
    match store.find(id) {
        Some(record) => Ok(CmdResult::default().with_output(encode_record(record)?)),
        None => Ok(CmdResult::default()),
    }
}
