pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// What a command produced. The API layer persists the store when `changed`
/// is set and writes `output` followed by `messages` to the sink.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Raw payload bytes: file contents for `list`, one encoded record for `findById`.
    pub output: Vec<u8>,
    /// Plain status sentences.
    pub messages: Vec<String>,
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn with_output(mut self, output: Vec<u8>) -> Self {
        self.output = output;
        self
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }
}
