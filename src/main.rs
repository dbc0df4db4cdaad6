mod cli_args;

use std::io::{self, ErrorKind, Write};

use cli_args::CliArgs;
use console_demo::StdioPrinter;
use env_logger::Env;

const LOG_ENV_VAR: &str = "CONSOLE_DEMO_LOG";

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV_VAR, "off")).init();

    let args = CliArgs::parse_verbatim();
    let demo = args.create_demo();
    let mut printer = StdioPrinter::stdio();

    let exit_code = match demo.run(&mut printer) {
        Ok(exit_code) => exit_code.value(),
        Err(err) => {
            report_output_error(err);
            1
        }
    };
    std::process::exit(exit_code);
}

fn report_output_error(err: io::Error) {
    // Nobody is left to read a message about a closed pipe.
    if err.kind() != ErrorKind::BrokenPipe {
        // If stderr is broken too there is nowhere left to report it.
        let _ = writeln!(io::stderr(), "Error writing output: {}", err);
    }
}
