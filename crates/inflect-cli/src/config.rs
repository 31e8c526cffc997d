//! Engine configuration from `--config` and the global override flags.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use inflect::{ClassicalFlags, ClassicalMode, Engine, EngineOptions, Gender, PossessiveStyle};
use log::debug;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::output::ConfigDiagnostic;

/// Global flags that configure the engine every command runs on.
#[derive(Debug, clap::Args)]
pub struct EngineArgs {
    /// JSON file with engine options (classical, gender, possessive_style,
    /// default_count)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Classical modes to enable (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',', global = true)]
    pub classical: Vec<ClassicalArg>,

    /// Gender used to resolve singular "they", "them" and "their"
    #[arg(long, value_enum, global = true)]
    pub gender: Option<GenderArg>,

    /// Possessive of singular words ending in "s"
    #[arg(long, value_enum, global = true)]
    pub possessive_style: Option<PossessiveStyleArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ClassicalArg {
    /// Every classical behavior
    All,
    General,
    Ancient,
    Herd,
    Names,
    Persons,
    Zero,
}

impl ClassicalArg {
    fn enable(self, flags: &mut ClassicalFlags) {
        let mode = match self {
            ClassicalArg::All => {
                *flags = ClassicalFlags::ALL;
                return;
            }
            ClassicalArg::General => ClassicalMode::General,
            ClassicalArg::Ancient => ClassicalMode::Ancient,
            ClassicalArg::Herd => ClassicalMode::Herd,
            ClassicalArg::Names => ClassicalMode::Names,
            ClassicalArg::Persons => ClassicalMode::Persons,
            ClassicalArg::Zero => ClassicalMode::Zero,
        };
        flags.set(mode, true);
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Masculine,
    Feminine,
    Neuter,
    They,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Masculine => Gender::Masculine,
            GenderArg::Feminine => Gender::Feminine,
            GenderArg::Neuter => Gender::Neuter,
            GenderArg::They => Gender::They,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PossessiveStyleArg {
    /// James's
    Modern,
    /// James'
    Traditional,
}

impl From<PossessiveStyleArg> for PossessiveStyle {
    fn from(arg: PossessiveStyleArg) -> Self {
        match arg {
            PossessiveStyleArg::Modern => PossessiveStyle::Modern,
            PossessiveStyleArg::Traditional => PossessiveStyle::Traditional,
        }
    }
}

impl EngineArgs {
    /// Builds an engine from the config file, then applies the flags on top.
    pub fn build(&self) -> Result<Engine> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => EngineOptions::default(),
        };
        for mode in &self.classical {
            mode.enable(&mut options.classical);
        }
        if let Some(gender) = self.gender {
            options.gender = gender.into();
        }
        if let Some(style) = self.possessive_style {
            options.possessive_style = style.into();
        }
        debug!("Engine options: {options:?}");
        Ok(Engine::with_options(options))
    }
}

fn load_options(path: &Path) -> Result<EngineOptions> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|error| ConfigDiagnostic::from_json_error(path, &content, &error).into())
}
