use crate::error::ArgError;

use super::option::OptionDescription;

/// the options an invocation accepts, in registration order.
/// duplicate names or shorthands are kept; the first registration wins
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    descriptions: Vec<OptionDescription>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, description: OptionDescription) -> Result<(), ArgError> {
        if description.name().is_empty() {
            return Err(ArgError::EmptyOptionName);
        }
        self.descriptions.push(description);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&OptionDescription> {
        self.descriptions.iter().find(|desc| desc.name() == name)
    }

    /// lookup for names already known to be registered
    pub fn describe(&self, name: &str) -> Result<&OptionDescription, ArgError> {
        self.find(name)
            .ok_or_else(|| ArgError::UnregisteredDescription(name.to_owned()))
    }

    pub fn resolve_short_hand(&self, short_hand: char) -> Option<&OptionDescription> {
        self.descriptions
            .iter()
            .find(|desc| desc.short_hand() == Some(short_hand))
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDescription> {
        self.descriptions.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        cli::{OptionDescription, ValueCount, ValueType},
        error::ArgError,
    };

    use super::OptionRegistry;

    #[test]
    fn first_registration_wins() -> Result<(), ArgError> {
        let mut registry = OptionRegistry::new();
        registry.add(OptionDescription::new("source", "first"))?;
        registry.add(OptionDescription::typed(
            "source",
            "second",
            ValueType::Integer,
            ValueCount::Exactly(1),
        ))?;
        registry.add(OptionDescription::new("sink", "shares a shorthand"))?;

        assert_eq!("first", registry.describe("source")?.help());
        assert_eq!(
            Some("source"),
            registry.resolve_short_hand('s').map(|desc| desc.name())
        );
        assert_eq!(3, registry.iter().count());
        Ok(())
    }

    #[test]
    fn exact_names_only() -> Result<(), ArgError> {
        let mut registry = OptionRegistry::new();
        registry.add(OptionDescription::new("optimization", "level"))?;

        assert!(registry.find("opt").is_none());
        assert!(registry.find("optimizations").is_none());
        assert!(matches!(
            registry.describe("opt"),
            Err(ArgError::UnregisteredDescription(name)) if name == "opt"
        ));
        Ok(())
    }

    #[test]
    fn rejects_empty_name() {
        let mut registry = OptionRegistry::new();
        assert!(matches!(
            registry.add(OptionDescription::new("", "nameless")),
            Err(ArgError::EmptyOptionName)
        ));
        assert_eq!(0, registry.iter().count());
    }
}
