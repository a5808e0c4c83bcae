use crate::codec::decode_record;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Store;

/// Appends the decoded record unless its id is already taken.
/// A duplicate id is reported, not treated as an error.
pub fn run(store: &mut Store, payload: &str) -> Result<CmdResult> {
    let record = decode_record(payload)?;

    if store.contains(&record.id) {
        let mut result = CmdResult::default();
        result.add_message(format!("Item with id {} already exists", record.id));
        return Ok(result);
    }

    store.push(record);
    Ok(CmdResult::changed())
}
