use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use colored::Colorize;

/// Buffers stdout a line at a time so that everything printed so far can
/// be pushed out before anything is written to stderr. Without that, a
/// terminal showing both streams can display error output ahead of lines
/// that were printed before it.
pub struct StdioPrinter<O: Write, E: Write> {
    out: O,
    err: E,
    line_buffer: String,
    color_errors: bool,
}

impl StdioPrinter<Stdout, Stderr> {
    /// Creates a printer for the process's own stdout and stderr.
    ///
    /// Error output is only colored when stderr is a terminal, so redirected
    /// output contains exactly the text that was printed.
    pub fn stdio() -> Self {
        let err = io::stderr();
        let color_errors = err.is_terminal();
        StdioPrinter::new(io::stdout(), err).with_colored_errors(color_errors)
    }
}

impl<O: Write, E: Write> StdioPrinter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        StdioPrinter {
            out,
            err,
            line_buffer: String::new(),
            color_errors: false,
        }
    }

    pub fn with_colored_errors(mut self, color_errors: bool) -> Self {
        self.color_errors = color_errors;
        self
    }

    fn flush_line_buffer(&mut self) -> io::Result<()> {
        self.out.write_all(self.line_buffer.as_bytes())?;
        self.line_buffer.clear();
        Ok(())
    }

    /// Print out any buffered output followed by a newline.
    pub fn print_buffered_output(&mut self) -> io::Result<()> {
        if !self.line_buffer.is_empty() {
            self.line_buffer.push('\n');
            self.flush_line_buffer()?;
        }
        Ok(())
    }

    /// Print the given string to stdout in a line-buffered way.
    pub fn print<T: AsRef<str>>(&mut self, value: T) -> io::Result<()> {
        for ch in value.as_ref().chars() {
            self.line_buffer.push(ch);
            if ch == '\n' {
                self.flush_line_buffer()?;
            }
        }
        Ok(())
    }

    pub fn println<T: AsRef<str>>(&mut self, value: T) -> io::Result<()> {
        self.print(value)?;
        self.print("\n")
    }

    /// Print any buffered output, then write the given string to stderr
    /// followed by a newline.
    pub fn eprintln<T: AsRef<str>>(&mut self, value: T) -> io::Result<()> {
        self.print_buffered_output()?;
        self.out.flush()?;
        if self.color_errors {
            writeln!(self.err, "{}", value.as_ref().red())?;
        } else {
            writeln!(self.err, "{}", value.as_ref())?;
        }
        self.err.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.print_buffered_output()?;
        self.out.flush()?;
        self.err.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
