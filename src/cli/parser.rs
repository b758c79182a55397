use std::io::{self, Write};

use log::{debug, error, info};

use crate::error::ArgError;

use super::{
    option::{OptionDescription, ParsedOption, ValueCount, ValueType},
    registry::OptionRegistry,
};

/// name of the option registered by every parser
pub const HELP: &str = "help";

/// a single raw argument, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputArg<'a> {
    /// `--name`, at least two chars after the dashes
    Long(&'a str),
    /// `-x`
    Short(char),
    Value(&'a str),
}

impl<'a> InputArg<'a> {
    fn parse(arg: &'a str) -> Self {
        if let Some(name) = arg.strip_prefix("--").filter(|_| arg.len() > 3) {
            Self::Long(name)
        } else if let Some(short) = arg
            .strip_prefix('-')
            .filter(|rest| rest.len() == 1)
            .and_then(|rest| rest.chars().next())
        {
            Self::Short(short)
        } else {
            Self::Value(arg)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<'a> {
    Parsed(ParsedArgs<'a>),
    /// help was requested; the caller should print it and stop
    Help,
}

/// the options of one invocation in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs<'a> {
    options: Vec<ParsedOption<'a>>,
}

impl<'a> ParsedArgs<'a> {
    pub fn get(&self, name: &str) -> Option<&ParsedOption<'a>> {
        self.options.iter().find(|opt| opt.name() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParsedOption<'a>> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        info!("below are the detected values");
        for opt in self.options.iter() {
            write!(out, "\t{} \t : ", opt.name().unwrap_or_default())?;
            for value in opt.values() {
                write!(out, "{} ", value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

pub struct ArgumentParser {
    registry: OptionRegistry,
    min_argument_count: usize,
}

impl Default for ArgumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentParser {
    pub fn new() -> Self {
        let mut registry = OptionRegistry::new();
        registry
            .add(OptionDescription::typed(
                HELP,
                "show this help message",
                ValueType::String,
                ValueCount::Exactly(0),
            ))
            .unwrap_or_default();
        Self {
            registry,
            min_argument_count: 0,
        }
    }

    pub fn add_option(&mut self, description: OptionDescription) -> Result<(), ArgError> {
        self.registry.add(description)
    }

    /// `argv` shorter than `n`, program name included, fails before any parsing
    pub fn set_minimum_argument_count(&mut self, n: usize) {
        self.min_argument_count = n;
    }

    /// parse a full `argv`; the first element is the program name and is skipped.
    ///
    /// every user input error is logged as it is found and returned together
    /// in [`ArgError::Invalid`]. a request for help wins over any such errors.
    pub fn parse<'a, S: AsRef<str>>(
        &'a self,
        args: &'a [S],
    ) -> Result<ParseOutcome<'a>, ArgError> {
        if args.len() < self.min_argument_count {
            return Err(ArgError::BelowMinimumArgumentCount {
                required: self.min_argument_count,
                given: args.len(),
            });
        }

        let options = self.group(args.iter().skip(1).map(|arg| arg.as_ref()));
        debug!("grouped {} option(s)", options.len());
        let errors = self.validate(&options)?;

        if options.iter().any(|opt| opt.name() == Some(HELP)) {
            Ok(ParseOutcome::Help)
        } else if errors.is_empty() {
            Ok(ParseOutcome::Parsed(ParsedArgs { options }))
        } else {
            Err(ArgError::Invalid(errors))
        }
    }

    fn group<'a>(&'a self, args: impl Iterator<Item = &'a str>) -> Vec<ParsedOption<'a>> {
        let mut options = Vec::new();
        let mut last = ParsedOption::empty();
        for arg in args {
            let name = match InputArg::parse(arg) {
                InputArg::Value(value) => {
                    last.push(value);
                    continue;
                }
                InputArg::Long(name) => Some(name),
                InputArg::Short(short) => self
                    .registry
                    .resolve_short_hand(short)
                    .map(|desc| desc.name()),
            };
            if !last.is_empty() {
                options.push(last);
            }
            last = ParsedOption::start(arg, name);
        }
        if !last.is_empty() {
            options.push(last);
        }
        options
    }

    fn validate(&self, options: &[ParsedOption<'_>]) -> Result<Vec<ArgError>, ArgError> {
        let mut errors = Vec::new();
        let mut report = |err: ArgError| {
            error!("{}", err);
            errors.push(err);
        };

        let mut known = Vec::new();
        for opt in options {
            match opt.name().filter(|name| self.registry.find(name).is_some()) {
                Some(name) => known.push((name, opt)),
                None => report(ArgError::UnknownOptionName(
                    opt.name().or(opt.flag()).unwrap_or_default().to_owned(),
                )),
            }
        }

        for (name, opt) in known {
            let description = self.registry.describe(name)?;
            let value_type = description.value_type();
            for value in opt.values() {
                if !value_type.accepts(value) {
                    report(ArgError::InvalidValueType {
                        option: name.to_owned(),
                        value: (*value).to_owned(),
                        expected: value_type,
                    });
                }
            }
            if let ValueCount::Exactly(expected) = description.value_count() {
                if opt.values().len() != expected {
                    report(ArgError::WrongValueCount {
                        option: name.to_owned(),
                        expected,
                        given: opt.values().len(),
                    });
                }
            }
        }
        Ok(errors)
    }

    pub fn write_help(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n\tList of valid options :")?;
        for desc in self.registry.iter() {
            if desc.name() == HELP {
                writeln!(out, "\t--{} \t\t {}", desc.name(), desc.help())?;
            } else {
                writeln!(
                    out,
                    "\t--{} \t ({}) {}",
                    desc.name(),
                    desc.value_type(),
                    desc.help()
                )?;
            }
        }
        writeln!(out)
    }

    pub fn print_help(&self) -> io::Result<()> {
        self.write_help(&mut io::stdout().lock())
    }
}
