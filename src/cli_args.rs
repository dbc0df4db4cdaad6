use std::ffi::OsString;

use clap::Parser;
use console_demo::{ArgumentList, ConsoleDemo};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Arguments to echo back. The first one, if it's an integer, becomes
    /// the exit code.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl CliArgs {
    /// Parses the process's arguments so that every one of them, including
    /// a literal `--`, ends up in `args` unchanged.
    pub fn parse_verbatim() -> Self {
        Self::try_parse_verbatim_from(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Like `try_parse_from`, but puts an end-of-options marker ahead of the
    /// user's arguments so clap never consumes one of them as its own.
    pub fn try_parse_verbatim_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next();
        let marked = program
            .into_iter()
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv);
        Self::try_parse_from(marked)
    }

    pub fn create_demo(self) -> ConsoleDemo {
        ConsoleDemo::new(ArgumentList::new(self.args))
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;

    fn parse(args: &[&str]) -> Vec<String> {
        let argv = std::iter::once("console-demo").chain(args.iter().copied());
        CliArgs::try_parse_verbatim_from(argv).unwrap().args
    }

    #[test]
    fn no_arguments_is_empty() {
        assert!(parse(&[]).is_empty());
    }

    #[test]
    fn arguments_are_kept_in_order() {
        assert_eq!(parse(&["3", "x", "y"]), vec!["3", "x", "y"]);
    }

    #[test]
    fn hyphenated_values_are_positional() {
        assert_eq!(parse(&["-5"]), vec!["-5"]);
        assert_eq!(parse(&["x", "--verbose", "-q"]), vec!["x", "--verbose", "-q"]);
    }

    #[test]
    fn help_and_version_are_ordinary_arguments() {
        assert_eq!(parse(&["--help"]), vec!["--help"]);
        assert_eq!(parse(&["-V", "--version"]), vec!["-V", "--version"]);
    }

    #[test]
    fn leading_double_dash_is_an_ordinary_argument() {
        assert_eq!(parse(&["--", "5"]), vec!["--", "5"]);
        assert_eq!(parse(&["--"]), vec!["--"]);
        assert_eq!(parse(&["x", "--", "y"]), vec!["x", "--", "y"]);
    }

    #[test]
    fn creates_demo_with_same_arguments() {
        let argv = ["console-demo", "1", "two"];
        let demo = CliArgs::try_parse_verbatim_from(argv).unwrap().create_demo();
        assert_eq!(demo.arguments().iter().collect::<Vec<_>>(), vec!["1", "two"]);
    }
}
