mod convert;
mod echo;
mod inspect;

use anyhow::Result;
use qub_args::CommandLineArguments;
use qub_process::{CommandLineActions, Process};
use qub_streams::IoCharacterStream;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    init_tracing();

    let arguments = CommandLineArguments::create(std::env::args().skip(1));
    let mut process = Process::create(arguments);
    process.add_output_stream(IoCharacterStream::create(std::io::stdout()));
    process.add_error_stream(IoCharacterStream::create(std::io::stderr()));

    let actions = build_actions();
    actions.run(&mut process)?;

    process.dispose();
    if process.exit_code() != 0 {
        std::process::exit(process.exit_code());
    }
    Ok(())
}

fn build_actions() -> CommandLineActions {
    let mut actions =
        CommandLineActions::create("qub", "Demonstration application for the qub framework");
    actions.add_action(convert::action());
    actions.add_action(echo::action());
    actions.add_action(inspect::action());
    actions
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
