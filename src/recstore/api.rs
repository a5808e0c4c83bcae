//! # API Facade
//!
//! [`perform`] is the single entry point: it turns a parameter mapping into a
//! validated [`Operation`], binds a [`FsBackend`] to the operation's path and
//! runs it through [`RecordStore`].
//!
//! `RecordStore<B: StorageBackend>` owns the load → command → persist cycle:
//! - the store is decoded fresh from the backend on every call
//! - the command in `commands/*.rs` mutates it in memory
//! - the whole store is re-encoded and written back only if it changed
//!
//! Nothing is cached between calls. Tests run the same facade over
//! [`crate::store::memory::MemBackend`].

use crate::codec::{decode_store, encode_store};
use crate::commands::{self, CmdResult};
use crate::error::{RecStoreError, Result};
use crate::model::Store;
use crate::operation::{Operation, Params};
use crate::store::fs::FsBackend;
use crate::store::StorageBackend;
use std::io::Write;

/// Validates `params`, runs the operation against the file it names and writes
/// the outcome to `sink`.
pub fn perform<W: Write>(params: &Params, sink: &mut W) -> Result<()> {
    let op = Operation::from_params(params)?;
    log::debug!("{} on {}", op.kind(), op.path().display());
    let store = RecordStore::new(FsBackend::new(op.path()));
    store.execute(&op, sink)
}

pub struct RecordStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs `op` against this store's backend. The path carried by `op` is
    /// not consulted; the backend is already bound to a file.
    pub fn execute<W: Write>(&self, op: &Operation, sink: &mut W) -> Result<()> {
        let result = match op {
            Operation::Add { payload, .. } => self.add(payload)?,
            Operation::List { .. } => self.list()?,
            Operation::FindById { id, .. } => self.find_by_id(id)?,
            Operation::Remove { id, .. } => self.remove(id)?,
        };
        render(&result, sink)
    }

    pub fn add(&self, payload: &str) -> Result<CmdResult> {
        let mut store = self.load()?;
        let result = commands::add::run(&mut store, payload)?;
        self.persist(&store, &result)?;
        Ok(result)
    }

    pub fn list(&self) -> Result<CmdResult> {
        let raw = self.backend.read()?;
        Ok(commands::list::run(&raw))
    }

    pub fn find_by_id(&self, id: &str) -> Result<CmdResult> {
        let store = self.load()?;
        commands::find::run(&store, id)
    }

    pub fn remove(&self, id: &str) -> Result<CmdResult> {
        let mut store = self.load()?;
        let result = commands::remove::run(&mut store, id);
        self.persist(&store, &result)?;
        Ok(result)
    }

    fn load(&self) -> Result<Store> {
        let raw = self.backend.read()?;
        let store = decode_store(&raw)?;
        log::debug!(
            "loaded {} record(s) ({} bytes) from {}",
            store.len(),
            raw.len(),
            self.backend.location().display()
        );
        Ok(store)
    }

    fn persist(&self, store: &Store, result: &CmdResult) -> Result<()> {
        if !result.changed {
            return Ok(());
        }
        let encoded = encode_store(store)?;
        self.backend.write(&encoded)?;
        log::info!(
            "wrote {} record(s) to {}",
            store.len(),
            self.backend.location().display()
        );
        Ok(())
    }
}

/// Writes raw output first, then status sentences, with no added separators.
pub fn render<W: Write>(result: &CmdResult, sink: &mut W) -> Result<()> {
    sink.write_all(&result.output).map_err(RecStoreError::Output)?;
    for message in &result.messages {
        sink.write_all(message.as_bytes()).map_err(RecStoreError::Output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use std::io;
    use std::path::PathBuf;

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn store_with(contents: &str) -> RecordStore<MemBackend> {
        RecordStore::new(MemBackend::with_contents(contents))
    }

    fn run(store: &RecordStore<MemBackend>, op: Operation) -> Result<String> {
        let mut sink = Vec::new();
        store.execute(&op, &mut sink)?;
        Ok(String::from_utf8(sink).unwrap())
    }

    fn add(payload: &str) -> Operation {
        Operation::Add {
            path: PathBuf::from("mem"),
            payload: payload.to_string(),
        }
    }

    fn find(id: &str) -> Operation {
        Operation::FindById {
            path: PathBuf::from("mem"),
            id: id.to_string(),
        }
    }

    fn remove(id: &str) -> Operation {
        Operation::Remove {
            path: PathBuf::from("mem"),
            id: id.to_string(),
        }
    }

    fn list() -> Operation {
        Operation::List {
            path: PathBuf::from("mem"),
        }
    }

    fn file(store: &RecordStore<MemBackend>) -> String {
        String::from_utf8(store.backend().contents().unwrap_or_default()).unwrap()
    }

    #[test]
    fn full_scenario() {
        let store = RecordStore::new(MemBackend::new());

        let out = run(&store, add(r#"{"id":"1","email":"a@x.com","age":30}"#)).unwrap();
        assert_eq!(out, "");
        assert_eq!(file(&store), r#"[{"id":"1","email":"a@x.com","age":30}]"#);

        let out = run(&store, add(r#"{"id":"1","email":"b@y.com","age":1}"#)).unwrap();
        assert_eq!(out, "Item with id 1 already exists");
        assert_eq!(file(&store), r#"[{"id":"1","email":"a@x.com","age":30}]"#);

        let out = run(&store, find("1")).unwrap();
        assert_eq!(out, r#"{"id":"1","email":"a@x.com","age":30}"#);

        let out = run(&store, remove("2")).unwrap();
        assert_eq!(out, "Item with id 2 not found");

        let out = run(&store, remove("1")).unwrap();
        assert_eq!(out, "");
        assert_eq!(file(&store), "[]");
    }

    #[test]
    fn unchanged_operations_do_not_write() {
        let store = store_with(r#"[{"id":"1","email":"a@x.com","age":30}]"#);
        run(&store, add(r#"{"id":"1"}"#)).unwrap();
        run(&store, remove("nope")).unwrap();
        run(&store, find("1")).unwrap();
        run(&store, list()).unwrap();
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn list_matches_file_after_mutations() {
        let store = RecordStore::new(MemBackend::new());
        run(&store, add(r#"{"id":"a","email":"a","age":1}"#)).unwrap();
        run(&store, add(r#"{"id":"b","email":"b","age":2}"#)).unwrap();
        run(&store, remove("a")).unwrap();

        let out = run(&store, list()).unwrap();
        assert_eq!(out, file(&store));
        assert_eq!(out, r#"[{"id":"b","email":"b","age":2}]"#);
    }

    #[test]
    fn list_passes_corrupt_file_through() {
        let store = store_with("{{{ not json");
        assert_eq!(run(&store, list()).unwrap(), "{{{ not json");
    }

    #[test]
    fn any_operation_bootstraps_empty_file() {
        let store = RecordStore::new(MemBackend::new());
        assert_eq!(run(&store, find("1")).unwrap(), "");
        assert_eq!(store.backend().contents(), Some(Vec::new()));
        assert_eq!(run(&store, list()).unwrap(), "");
    }

    #[test]
    fn corrupt_file_fails_decoding_mutations() {
        let store = store_with("not json");
        let err = run(&store, remove("1")).unwrap_err();
        assert!(matches!(err, RecStoreError::Decode(_)));
        assert_eq!(file(&store), "not json");
    }

    #[test]
    fn bad_payload_writes_nothing() {
        let store = store_with("[]");
        let err = run(&store, add("nope")).unwrap_err();
        assert!(matches!(err, RecStoreError::Decode(_)));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let store = RecordStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        let err = run(&store, add(r#"{"id":"1"}"#)).unwrap_err();
        assert!(matches!(err, RecStoreError::Io { .. }));
        assert_eq!(file(&store), "");
    }

    #[test]
    fn add_appends_in_order() {
        let store = store_with(r#"[{"id":"2","email":"","age":0}]"#);
        let result = store.add(r#"{"id":"1","email":"x","age":9}"#).unwrap();
        assert!(result.changed);
        assert_eq!(
            file(&store),
            r#"[{"id":"2","email":"","age":0},{"id":"1","email":"x","age":9}]"#
        );
    }

    #[test]
    fn failing_sink_is_output_error() {
        let store = store_with(r#"[{"id":"1","email":"a@x.com","age":30}]"#);
        let err = store.execute(&find("1"), &mut BrokenSink).unwrap_err();
        assert!(matches!(err, RecStoreError::Output(_)));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn failing_sink_after_mutation_keeps_the_write() {
        let store = store_with("[]");
        let op = add(r#"{"id":"1","email":"a@x.com","age":30}"#);
        // add has nothing to print, so the sink is never touched
        store.execute(&op, &mut BrokenSink).unwrap();
        let err = store.execute(&op, &mut BrokenSink).unwrap_err();
        assert!(matches!(err, RecStoreError::Output(_)));
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn perform_rejects_before_touching_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("items.json");
        let mut params = Params::new();
        params.insert("operation".into(), "remove".into());
        params.insert("fileName".into(), path.to_string_lossy().into_owned());

        let mut sink = Vec::new();
        let err = perform(&params, &mut sink).unwrap_err();
        assert_eq!(err.to_string(), "-id flag has to be specified");
        assert!(!path.exists());
    }

    #[test]
    fn perform_runs_against_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("items.json");
        let mut params = Params::new();
        params.insert("operation".into(), "add".into());
        params.insert("fileName".into(), path.to_string_lossy().into_owned());
        params.insert("item".into(), r#"{"id":"1","email":"a@x.com","age":30}"#.into());

        let mut sink = Vec::new();
        perform(&params, &mut sink).unwrap();
        assert!(sink.is_empty());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"[{"id":"1","email":"a@x.com","age":30}]"#
        );
    }
}
