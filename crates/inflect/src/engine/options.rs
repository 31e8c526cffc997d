//! Scalar engine configuration.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Gender used to resolve third-person plural pronouns back to a singular.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    #[default]
    Neuter,
    /// Singular "they".
    They,
}

impl Gender {
    pub const ALL: &'static [Gender] = &[
        Gender::Masculine,
        Gender::Feminine,
        Gender::Neuter,
        Gender::They,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::They => "they",
        }
    }

    /// Column of this gender in the gendered pronoun table.
    pub(crate) fn index(self) -> usize {
        match self {
            Gender::Masculine => 0,
            Gender::Feminine => 1,
            Gender::Neuter => 2,
            Gender::They => 3,
        }
    }
}

/// How singular words ending in `s` take a possessive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessiveStyle {
    /// `James's`
    #[default]
    Modern,
    /// `James'`
    Traditional,
}

impl PossessiveStyle {
    pub fn name(self) -> &'static str {
        match self {
            PossessiveStyle::Modern => "modern",
            PossessiveStyle::Traditional => "traditional",
        }
    }
}

/// One independently switchable classical behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassicalMode {
    /// Enables every classical behavior below.
    General,
    /// Latin and Greek plurals: `formula` -> `formulae`.
    Ancient,
    /// Herd animals stay unchanged: `bison` -> `bison`.
    Herd,
    /// Proper names ending in `s` stay unchanged: `Jones` -> `Jones`.
    Names,
    /// `person` -> `persons` instead of `people`.
    Persons,
    /// A count of zero selects the singular: `no error`.
    Zero,
}

impl ClassicalMode {
    pub const ALL: &'static [ClassicalMode] = &[
        ClassicalMode::General,
        ClassicalMode::Ancient,
        ClassicalMode::Herd,
        ClassicalMode::Names,
        ClassicalMode::Persons,
        ClassicalMode::Zero,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClassicalMode::General => "general",
            ClassicalMode::Ancient => "ancient",
            ClassicalMode::Herd => "herd",
            ClassicalMode::Names => "names",
            ClassicalMode::Persons => "persons",
            ClassicalMode::Zero => "zero",
        }
    }
}

/// The classical flags of an engine.
///
/// A specific behavior is active when its own flag or `general` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassicalFlags {
    pub general: bool,
    pub ancient: bool,
    pub herd: bool,
    pub names: bool,
    pub persons: bool,
    pub zero: bool,
}

impl ClassicalFlags {
    /// Every flag set.
    pub const ALL: ClassicalFlags = ClassicalFlags {
        general: true,
        ancient: true,
        herd: true,
        names: true,
        persons: true,
        zero: true,
    };

    /// The stored value of one flag.
    pub fn get(&self, mode: ClassicalMode) -> bool {
        match mode {
            ClassicalMode::General => self.general,
            ClassicalMode::Ancient => self.ancient,
            ClassicalMode::Herd => self.herd,
            ClassicalMode::Names => self.names,
            ClassicalMode::Persons => self.persons,
            ClassicalMode::Zero => self.zero,
        }
    }

    pub fn set(&mut self, mode: ClassicalMode, enabled: bool) {
        let flag = match mode {
            ClassicalMode::General => &mut self.general,
            ClassicalMode::Ancient => &mut self.ancient,
            ClassicalMode::Herd => &mut self.herd,
            ClassicalMode::Names => &mut self.names,
            ClassicalMode::Persons => &mut self.persons,
            ClassicalMode::Zero => &mut self.zero,
        };
        *flag = enabled;
    }

    /// Whether the behavior of `mode` is in effect.
    pub fn is_active(&self, mode: ClassicalMode) -> bool {
        self.general || self.get(mode)
    }

    /// Whether every flag is set.
    pub fn all(&self) -> bool {
        *self == ClassicalFlags::ALL
    }
}

/// Serializable scalar configuration of an [`Engine`](crate::Engine).
///
/// Custom word overrides are not part of the options; they are registered
/// on the engine directly.
///
/// # Example
///
/// ```
/// use inflect::{Engine, EngineOptions, Gender};
///
/// let options = EngineOptions::builder().gender(Gender::Feminine).build();
/// let engine = Engine::with_options(options);
/// assert_eq!(engine.singular_noun("they"), "she");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    #[builder(default)]
    pub classical: ClassicalFlags,
    #[builder(default)]
    pub gender: Gender,
    #[builder(default)]
    pub possessive_style: PossessiveStyle,
    /// Count applied when an agreement function is called without one.
    pub default_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_flag_activates_every_mode() {
        let flags = ClassicalFlags {
            general: true,
            ..ClassicalFlags::default()
        };
        for mode in ClassicalMode::ALL {
            assert!(flags.is_active(*mode));
        }
        assert!(!flags.get(ClassicalMode::Herd));
        assert!(!flags.all());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: EngineOptions =
            serde_json::from_str(r#"{"gender": "they", "classical": {"ancient": true}}"#).unwrap();
        assert_eq!(options.gender, Gender::They);
        assert!(options.classical.ancient);
        assert!(!options.classical.herd);
        assert_eq!(options.possessive_style, PossessiveStyle::Modern);
        assert_eq!(options.default_count, None);
    }
}
