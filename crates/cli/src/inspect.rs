use anyhow::Result;
use qub_process::{CommandLineAction, Process};
use qub_streams::CharacterWriteStream;

pub fn action() -> CommandLineAction {
    CommandLineAction::new("args", run)
        .with_description("Show how the arguments were parsed")
}

fn run(process: &mut Process) -> Result<()> {
    tracing::debug!("executing args action");

    let arguments = process.arguments().clone();
    process.output().write_line(&arguments.to_string())?;

    qub_json::write_object(process.output(), |object| {
        object.array_property("named", |named| {
            for argument in arguments.iter().filter(|argument| !argument.is_anonymous()) {
                named.object_element(|entry| {
                    entry.string_property("name", argument.name())?;
                    match argument.value() {
                        Some(value) => entry.string_property("value", value),
                        None => entry.null_property("value"),
                    }
                })?;
            }
            Ok(())
        })?;
        object.array_property("anonymous", |anonymous| {
            for argument in arguments.iter().filter(|argument| argument.is_anonymous()) {
                anonymous.string_element(argument.value().unwrap_or(""))?;
            }
            Ok(())
        })
    })?;
    process.output().write_line("")?;
    Ok(())
}
