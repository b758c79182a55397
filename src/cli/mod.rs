mod option;
mod parser;
mod registry;

pub use option::{OptionDescription, ParsedOption, ValueCount, ValueType};
pub use parser::{ArgumentParser, ParseOutcome, ParsedArgs, HELP};
pub use registry::OptionRegistry;
