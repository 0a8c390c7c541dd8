use std::{io::BufRead, path::Path};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    utils::{
        config::Config,
        file::open_filename,
        name_mapping::{fix_identifier, trim_value},
    },
    GeneratorError,
};

/// Type name, raw values and the constant names derived from them.
///
/// `names[i]` is the identifier of `values[i]`; emitters refuse to render a
/// spec where the two lengths differ.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSpec {
    pub type_name: String,
    pub values: Vec<String>,
    pub names: Vec<String>,
}

impl EnumSpec {
    pub fn new(type_name: &str, values: Vec<String>, config: &Config) -> Self {
        let type_name = fix_identifier(type_name, config.language);
        let prefix = config.constant_prefix(&type_name);
        let names = values
            .iter()
            .map(|value| {
                config
                    .name_mapping
                    .value_to_constant_name(&prefix, value, config.language)
            })
            .collect();
        EnumSpec {
            type_name,
            values,
            names,
        }
    }

    pub fn from_path(path: &Path, config: &Config) -> Result<Self, GeneratorError> {
        let reader = open_filename(path)?;
        Self::from_reader(reader, &path.to_string_lossy(), config)
    }

    /// First non blank line is the type name, every following non blank line
    /// one value. Lines are trimmed of surrounding punctuation.
    pub fn from_reader<R: BufRead>(
        reader: R,
        source: &str,
        config: &Config,
    ) -> Result<Self, GeneratorError> {
        let mut type_name: Option<String> = None;
        let mut values = vec![];

        for (line_number, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|err| GeneratorError::FileReadError(source.to_owned(), err.to_string()))?;
            let line = trim_value(&line);
            if line.is_empty() {
                debug!("{}:{} blank line skipped", source, line_number + 1);
                continue;
            }
            match type_name {
                None => {
                    trace!("type name {}", line);
                    type_name = Some(line.to_owned());
                }
                Some(_) => values.push(line.to_owned()),
            }
        }

        match type_name {
            Some(type_name) => Ok(EnumSpec::new(&type_name, values, config)),
            None => Err(GeneratorError::MissingTypeName(source.to_owned())),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.names.len() == self.values.len()
    }

    /// Identifiers produced by more than one value.
    pub fn duplicate_names(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(|name| name.as_str())
            .duplicates()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;
    use pretty_assertions::assert_eq;

    fn parse(input: &str, config: &Config) -> Result<EnumSpec, GeneratorError> {
        EnumSpec::from_reader(input.as_bytes(), "test", config)
    }

    #[test]
    fn first_line_is_type_name() {
        let spec = parse("CarBrand\naudi\nmercedes benz\nbmw\n", &Config::new()).unwrap();
        assert_eq!(spec.type_name, "CarBrand");
        assert_eq!(spec.values, vec!["audi", "mercedes benz", "bmw"]);
        assert_eq!(spec.names, vec!["CBAudi", "CBMercedesBenz", "CBBmw"]);
        assert!(spec.is_consistent());
    }

    #[test]
    fn lines_are_trimmed_and_blank_lines_skipped() {
        let spec = parse("  Color;\r\n\r\n'red',\n\n  green.\n(blue)\n", &Config::new()).unwrap();
        assert_eq!(spec.type_name, "Color");
        assert_eq!(spec.values, vec!["red", "green", "blue"]);
        assert_eq!(spec.names, vec!["CRed", "CGreen", "CBlue"]);
    }

    #[test]
    fn rust_names_have_no_prefix() {
        let mut config = Config::new();
        config.set_language(Language::Rust);
        let spec = parse("CarBrand\naudi\n2cv\n", &config).unwrap();
        assert_eq!(spec.names, vec!["Audi", "_2cv"]);
    }

    #[test]
    fn type_name_only() {
        let spec = parse("Empty\n", &Config::new()).unwrap();
        assert_eq!(spec.type_name, "Empty");
        assert!(spec.values.is_empty());
        assert!(spec.names.is_empty());
    }

    #[test]
    fn missing_type_name() {
        let result = parse("\n  \n", &Config::new());
        assert!(matches!(result, Err(GeneratorError::MissingTypeName(_))));
    }

    #[test]
    fn duplicates_reported() {
        let spec = parse("Mode\nread-only\nread only\nwrite\n", &Config::new()).unwrap();
        assert_eq!(spec.duplicate_names(), vec!["MReadOnly"]);
    }
}
