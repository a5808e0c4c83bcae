use clap::Parser;
use recstore::operation::{Params, FILE_NAME, ID, ITEM, OPERATION};
use std::ffi::OsString;

const VALUE_FLAGS: [&str; 4] = [OPERATION, FILE_NAME, ITEM, ID];
const SWITCH_FLAGS: [&str; 2] = ["verbose", "help"];

#[derive(Parser, Debug)]
#[command(name = "recstore", version)]
#[command(about = "Flat-file JSON record store", long_about = None)]
pub struct Cli {
    /// One of: add, list, findById, remove
    #[arg(long, allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// Backing JSON file
    #[arg(long = "fileName", allow_hyphen_values = true)]
    pub file_name: Option<String>,

    /// JSON-encoded record (add)
    #[arg(long, allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Record id (findById, remove)
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Non-empty flags as a parameter mapping. Empty values are dropped so
    /// they are reported as missing.
    pub fn params(&self) -> Params {
        [
            (OPERATION, &self.operation),
            (FILE_NAME, &self.file_name),
            (ITEM, &self.item),
            (ID, &self.id),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v.clone()))
        })
        .collect()
    }
}

/// Accept Go-style single-dash long flags (`-fileName x`, `-id=3`) by
/// rewriting them to `--fileName x` before clap sees them. A token that is
/// the value of a preceding flag is never rewritten.
pub fn normalize<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut out = Vec::new();
    let mut expect_value = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str().map(str::to_string) else {
            out.push(arg);
            continue;
        };

        let name = text
            .strip_prefix("--")
            .or_else(|| text.strip_prefix('-'))
            .map(|rest| rest.split('=').next().unwrap_or(rest));

        match name {
            Some(name) if VALUE_FLAGS.contains(&name) || SWITCH_FLAGS.contains(&name) => {
                expect_value = VALUE_FLAGS.contains(&name) && !text.contains('=');
                if text.starts_with("--") {
                    out.push(arg);
                } else {
                    out.push(OsString::from(format!("-{}", text)));
                }
            }
            _ => out.push(arg),
        }
    }

    out
}
