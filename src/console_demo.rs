use std::io::{self, Write};

use crate::argument_list::ArgumentList;
use crate::exit_code::ExitCode;
use crate::stdio_printer::StdioPrinter;

/// Number of lines in each of the counted blocks printed around the error.
pub const COUNTED_LINES: usize = 10;

pub const ERROR_MESSAGE: &str = "ERROR!!";

/// Prints a fixed sequence of lines to stdout, one error line to stderr
/// partway through, and works out the exit code from the arguments.
pub struct ConsoleDemo {
    args: ArgumentList,
}

impl ConsoleDemo {
    pub fn new(args: ArgumentList) -> Self {
        ConsoleDemo { args }
    }

    pub fn arguments(&self) -> &ArgumentList {
        &self.args
    }

    /// Writes all of the demo's output and returns the exit code the
    /// process should terminate with.
    pub fn run<O: Write, E: Write>(
        &self,
        printer: &mut StdioPrinter<O, E>,
    ) -> io::Result<ExitCode> {
        log::debug!("Received {} command line argument(s).", self.args.len());

        log::trace!("Greeting.");
        printer.println("Hello World!")?;
        printer.println("")?;

        log::trace!("Listing arguments.");
        self.print_arguments(printer)?;
        printer.println("")?;

        log::trace!("Printing lines before the error.");
        print_counted_lines(printer, "Before error")?;
        printer.println("")?;

        log::trace!("Writing the error.");
        printer.eprintln(ERROR_MESSAGE)?;
        printer.println("")?;

        log::trace!("Printing lines after the error.");
        print_counted_lines(printer, "After")?;
        printer.println("")?;

        let exit_code = ExitCode::from_arguments(&self.args);
        log::debug!("Computed exit code {}.", exit_code);
        printer.println(format!("Expected exit code: {}", exit_code))?;
        printer.flush()?;

        Ok(exit_code)
    }

    fn print_arguments<O: Write, E: Write>(
        &self,
        printer: &mut StdioPrinter<O, E>,
    ) -> io::Result<()> {
        if self.args.is_empty() {
            return printer.println("No command line arguments passed in.");
        }

        printer.println("Command line arguments supplied:")?;
        for (i, arg) in self.args.entries() {
            printer.println(format!("    {}: {}", i, arg))?;
        }
        Ok(())
    }
}

fn print_counted_lines<O: Write, E: Write>(
    printer: &mut StdioPrinter<O, E>,
    prefix: &str,
) -> io::Result<()> {
    for i in 0..COUNTED_LINES {
        printer.println(format!("{} {}", prefix, i))?;
    }
    Ok(())
}
