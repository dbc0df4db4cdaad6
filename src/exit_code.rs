use std::fmt::Display;

use crate::argument_list::ArgumentList;

/// The status the process terminates with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Takes the exit code from the first argument, falling back to zero
    /// when there isn't one or it isn't an integer.
    pub fn from_arguments(args: &ArgumentList) -> Self {
        let Some(first) = args.first() else {
            return ExitCode::default();
        };
        match ExitCode::try_parse(first) {
            Some(value) => ExitCode(value),
            None => {
                log::debug!("First argument {:?} is not an integer, using 0.", first);
                ExitCode::default()
            }
        }
    }

    /// Parses a base-10 32-bit signed integer, allowing surrounding
    /// whitespace and a single leading sign.
    pub fn try_parse(value: &str) -> Option<i32> {
        let trimmed = value.trim_matches(|ch: char| matches!(ch, ' ' | '\t'..='\r'));
        trimmed.parse().ok()
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for ExitCode {
    fn from(value: i32) -> Self {
        ExitCode(value)
    }
}

impl Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
