use anyhow::{Context, Result, bail};
use qub_args::{CommandLineParameter, CommandLineParameters};
use qub_process::{CommandLineAction, Process};
use qub_streams::CharacterWriteStream;
use qub_units::{Distance, DistanceUnit, Volume, VolumeUnit};

pub fn action() -> CommandLineAction {
    CommandLineAction::new("convert", run)
        .with_alias("c")
        .with_description("Convert a measure into another unit")
}

fn run(process: &mut Process) -> Result<()> {
    tracing::debug!("executing convert action");

    let mut parameters = CommandLineParameters::create("qub convert");
    let measure = parameters.add(
        CommandLineParameter::<String>::positional("measure", 0)
            .required()
            .value_required()
            .with_description("The measure to convert, e.g. 5km or 2.5l"),
    );
    let to = parameters.add(
        CommandLineParameter::<String>::new("to")
            .required()
            .value_required()
            .with_value_name("unit")
            .with_description("The unit to convert into"),
    );
    let json = parameters.add(
        CommandLineParameter::<bool>::new("json")
            .with_description("Emit the result as a JSON document"),
    );

    let Some(measure_text) = measure.value(process.arguments())? else {
        bail!("usage: {}", parameters.usage_string());
    };
    let Some(unit_text) = to.value(process.arguments())? else {
        bail!("usage: {}", parameters.usage_string());
    };
    let as_json = json.flag_value(process.arguments())?;

    // A measure is linear or liquid; try the linear dimension first and
    // only then fall back, so the error message names the right parse.
    if let Ok(distance) = measure_text.parse::<Distance>() {
        let unit: DistanceUnit = unit_text
            .parse()
            .with_context(|| format!("cannot convert {distance} to \"{unit_text}\""))?;
        let converted = distance.convert_to(unit);
        return write_result(
            process,
            &distance.to_string(),
            converted.value(),
            converted.unit().label(),
            as_json,
        );
    }

    let volume: Volume = measure_text
        .parse()
        .with_context(|| format!("could not parse measure \"{measure_text}\""))?;
    let unit: VolumeUnit = unit_text
        .parse()
        .with_context(|| format!("cannot convert {volume} to \"{unit_text}\""))?;
    let converted = volume.convert_to(unit);
    write_result(
        process,
        &volume.to_string(),
        converted.value(),
        converted.unit().label(),
        as_json,
    )
}

fn write_result(
    process: &mut Process,
    from: &str,
    value: f64,
    unit: &str,
    as_json: bool,
) -> Result<()> {
    if as_json {
        qub_json::write_object(process.output(), |object| {
            object.string_property("from", from)?;
            object.number_property("value", value)?;
            object.string_property("unit", unit)
        })?;
        process.output().write_line("")?;
    } else {
        process.output().write_line(&format!("{from} = {value} {unit}"))?;
    }
    Ok(())
}
