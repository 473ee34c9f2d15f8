use std::process::ExitCode;

fn main() -> ExitCode {
    shredspace_updater_lib::run()
}
