/// Longest text the field accepts, in characters.
pub const MAX_INPUT_LEN: usize = 40;

/// What a line typed at the prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Replace the field contents with this text and press Done.
    TypeAndSubmit(String),
    /// Press Done again without editing the field.
    Resubmit,
    /// Edit longer than [`MAX_INPUT_LEN`]; the field keeps its old contents.
    TooLong { len: usize },
    Quit,
}

pub fn parse_line(line: &str) -> UserAction {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    match line {
        ":q" | ":quit" => UserAction::Quit,
        ":submit" => UserAction::Resubmit,
        text => match text.chars().count() {
            len if len > MAX_INPUT_LEN => UserAction::TooLong { len },
            _ => UserAction::TypeAndSubmit(text.to_string()),
        },
    }
}
