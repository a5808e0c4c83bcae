//! Typed, validated operations.
//!
//! The CLI hands over a loose [`Params`] mapping. [`Operation::from_params`]
//! checks it once, before any file is touched, so the commands never have to
//! re-check presence or emptiness of their inputs.

use crate::error::{RecStoreError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const OPERATION: &str = "operation";
pub const FILE_NAME: &str = "fileName";
pub const ITEM: &str = "item";
pub const ID: &str = "id";

/// Parameter mapping as produced by the argument source.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    List,
    FindById,
    Remove,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::List => "list",
            OperationKind::FindById => "findById",
            OperationKind::Remove => "remove",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = RecStoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(OperationKind::Add),
            "list" => Ok(OperationKind::List),
            "findById" => Ok(OperationKind::FindById),
            "remove" => Ok(OperationKind::Remove),
            other => Err(RecStoreError::Config(format!(
                "Operation {} not allowed!",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { path: PathBuf, payload: String },
    List { path: PathBuf },
    FindById { path: PathBuf, id: String },
    Remove { path: PathBuf, id: String },
}

impl Operation {
    pub fn from_params(params: &Params) -> Result<Self> {
        let name = required(params, OPERATION)?;
        let path = PathBuf::from(required(params, FILE_NAME)?);
        let kind: OperationKind = name.parse()?;

        let op = match kind {
            OperationKind::Add => Operation::Add {
                path,
                payload: required(params, ITEM)?.to_string(),
            },
            OperationKind::List => Operation::List { path },
            OperationKind::FindById => Operation::FindById {
                path,
                id: required(params, ID)?.to_string(),
            },
            OperationKind::Remove => Operation::Remove {
                path,
                id: required(params, ID)?.to_string(),
            },
        };
        Ok(op)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Add { .. } => OperationKind::Add,
            Operation::List { .. } => OperationKind::List,
            Operation::FindById { .. } => OperationKind::FindById,
            Operation::Remove { .. } => OperationKind::Remove,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Operation::Add { path, .. }
            | Operation::List { path }
            | Operation::FindById { path, .. }
            | Operation::Remove { path, .. } => path,
        }
    }
}

// Absent and empty are the same thing.
fn required<'a>(params: &'a Params, key: &str) -> Result<&'a str> {
    match params.get(key) {
        Some(value) if !value.is_empty() => Ok(value.as_str()),
        _ => Err(RecStoreError::missing_flag(key)),
    }
}
