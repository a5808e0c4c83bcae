//! # Recstore Architecture
//!
//! Recstore keeps a list of uniquely identified records in one JSON file and
//! exposes four operations on it: `add`, `list`, `findById` and `remove`. Each
//! process run performs exactly one operation as a full read → modify → write
//! cycle and exits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, logging.rs)                   │
//! │  - Parses flags, installs the logger, owns stdout/stderr    │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Params
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, operation.rs)                           │
//! │  - Validates params into a typed Operation                  │
//! │  - Load → command → persist-if-changed → render to sink     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over an in-memory Store or raw bytes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - StorageBackend: raw bytes, FsBackend / MemBackend        │
//! │  - codec: JSON array <-> Store                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes vs errors
//!
//! "Item with id X already exists" and "Item with id X not found" are
//! successful outcomes written to the sink. Errors ([`error::RecStoreError`])
//! are reserved for bad parameters, undecodable JSON and I/O failures.
//!
//! ## `list` does not decode
//!
//! `list` hands back the file bytes untouched, so a hand-corrupted file still
//! lists. Every other operation decodes and fails on bad content.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point ([`api::perform`]) and the [`api::RecordStore`] facade
//! - [`operation`]: typed operations built from the parameter mapping
//! - [`commands`]: per-operation logic
//! - [`codec`]: JSON encoding of records and stores
//! - [`store`]: backing-file I/O
//! - [`model`]: `Record` and `Store`
//! - [`error`]: error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod model;
pub mod operation;
pub mod store;
