use crate::commands::CmdResult;
use crate::model::Store;

/// Drops the first record with `id`. Absence is reported, not an error.
pub fn run(store: &mut Store, id: &str) -> CmdResult {
    match store.remove(id) {
        Some(_) => CmdResult::changed(),
        None => {
            let mut result = CmdResult::default();
            result.add_message(format!("Item with id {} not found", id));
            result
        }
    }
}
