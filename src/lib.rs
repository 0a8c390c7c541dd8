mod errors;
pub mod generator;
pub mod utils;

use std::fmt;

use clap::ValueEnum;
pub use errors::GeneratorError;
use serde::{Deserialize, Serialize};

/// Language of the emitted source file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Deserialize, Serialize)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Rust,
}

impl Language {
    /// Go constants of every generated enum share the package namespace, so
    /// they get the type name prefix. Rust variants are scoped by their enum.
    pub fn needs_prefix(&self) -> bool {
        matches!(self, Language::Go)
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rs",
        }
    }
}

/// Underlying type of the generated enumeration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    #[value(name = "0", alias = "int")]
    Int,
    #[value(name = "1", alias = "string")]
    String,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Int => f.write_str("int"),
            Representation::String => f.write_str("string"),
        }
    }
}
