use crate::commands::CmdResult;

/// Hands back the file contents verbatim. Deliberately skips decoding, so a
/// corrupt file is still listed as-is.
pub fn run(raw: &[u8]) -> CmdResult {
    CmdResult::default().with_output(raw.to_vec())
}
