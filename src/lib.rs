mod argument_list;
mod console_demo;
mod exit_code;
mod stdio_printer;

pub use argument_list::ArgumentList;
pub use console_demo::{ConsoleDemo, COUNTED_LINES, ERROR_MESSAGE};
pub use exit_code::ExitCode;
pub use stdio_printer::StdioPrinter;
