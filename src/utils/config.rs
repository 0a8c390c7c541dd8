use serde::Deserialize;
use serde_aux::prelude::*;
use std::{fs::File, path::Path};

use crate::{GeneratorError, Language, Representation};

use super::name_mapping::NameMapping;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub name_mapping: NameMapping,
    #[serde(default = "default_package_name")]
    pub package_name: String,
    #[serde(default = "bool_true", deserialize_with = "deserialize_bool_from_anything")]
    pub use_prefix: bool,
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_representation")]
    pub representation: Representation,
}

pub fn default_package_name() -> String {
    "main".to_string()
}

pub fn default_language() -> Language {
    Language::Go
}

pub fn default_representation() -> Representation {
    Representation::Int
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name_mapping: NameMapping::new(),
            package_name: default_package_name(),
            use_prefix: true,
            language: default_language(),
            representation: default_representation(),
        }
    }
}

impl Config {
    pub fn from(config_file_path: &Path) -> Result<Self, GeneratorError> {
        let path = config_file_path.to_string_lossy().to_string();
        let file = match File::open(config_file_path) {
            Ok(file) => file,
            Err(err) => return Err(GeneratorError::ConfigError(path, err.to_string())),
        };
        match serde_json::from_reader(file) {
            Ok(config_object) => Ok(config_object),
            Err(err) => Err(GeneratorError::ConfigError(path, err.to_string())),
        }
    }

    pub fn new() -> Self {
        Config::default()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_representation(&mut self, representation: Representation) {
        self.representation = representation;
    }

    /// Prefix put in front of every constant name of `type_name`, empty when
    /// prefixing is disabled or the target language scopes its variants.
    pub fn constant_prefix(&self, type_name: &str) -> String {
        if self.use_prefix && self.language.needs_prefix() {
            super::name_mapping::extract_prefix(type_name)
        } else {
            String::new()
        }
    }
}
