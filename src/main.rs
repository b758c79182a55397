use std::{path::Path, process::ExitCode};

use log::{debug, error, log_enabled, Level};

use sia::{
    cli::{ArgumentParser, OptionDescription, ParseOutcome, ValueCount, ValueType},
    error::ArgError,
    lex, logger,
};

const SOURCE: &str = "source";
const OPTIMIZATION: &str = "optimization";

fn command_line() -> Result<ArgumentParser, ArgError> {
    let mut parser = ArgumentParser::new();
    parser.add_option(OptionDescription::new(
        SOURCE,
        "list of sources to compile to one file",
    ))?;
    parser.add_option(OptionDescription::typed(
        OPTIMIZATION,
        "optimization level to be used in optimization stage",
        ValueType::Integer,
        ValueCount::Exactly(1),
    ))?;
    // program name, one flag and one value
    parser.set_minimum_argument_count(3);
    Ok(parser)
}

fn run<S: AsRef<str>>(args: &[S]) -> Result<(), ArgError> {
    let parser = command_line()?;
    let parsed = match parser.parse(args) {
        Ok(ParseOutcome::Parsed(parsed)) => parsed,
        Ok(ParseOutcome::Help) => {
            parser.print_help()?;
            return Ok(());
        }
        Err(err) => {
            if err.is_user_input() {
                parser.print_help()?;
            }
            return Err(err);
        }
    };
    if log_enabled!(Level::Debug) {
        parsed.print()?;
    }

    let sources = parsed
        .get(SOURCE)
        .filter(|sources| !sources.values().is_empty())
        .ok_or_else(|| ArgError::MissingRequiredOption(SOURCE.to_owned()))?;
    if let Some(level) = parsed.get(OPTIMIZATION).and_then(|opt| opt.next_as::<u32>()) {
        match level {
            Ok(level) => debug!("optimization level {}", level),
            Err(err) => debug!("optimization level out of range: {}", err),
        }
    }
    while let Some(path) = sources.next_value() {
        lex::lex_file(Path::new(path))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    logger::init();
    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
