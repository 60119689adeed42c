mod entry;
mod system;

use std::process::ExitCode;

fn main() -> ExitCode {
    entry::run()
}
