use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use qub_args::{CommandLineParameter, CommandLineParameterList};
use qub_process::{CommandLineAction, Process};
use qub_streams::{CharacterWriteStream, IoCharacterStream};

pub fn action() -> CommandLineAction {
    CommandLineAction::new("echo", run)
        .with_description("Write the arguments back, one per line")
}

fn run(process: &mut Process) -> Result<()> {
    tracing::debug!("executing echo action");

    let log = CommandLineParameter::<PathBuf>::new("log")
        .with_value_name("file")
        .value_required()
        .with_description("Also write every line to this file");

    // The log file becomes another member of the output fan-out, so each
    // line lands on the console and in the file through one write.
    if let Some(path) = log.remove_value(process.arguments_mut())? {
        let file = File::create(&path)
            .with_context(|| format!("failed to create log file: {}", path.display()))?;
        process.add_output_stream(IoCharacterStream::create(file));
    }

    let text = CommandLineParameterList::<String>::positional("text", 0);
    for line in text.remove_values(process.arguments_mut())? {
        process.output().write_line(&line)?;
    }
    Ok(())
}
