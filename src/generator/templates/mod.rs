use tracing::warn;

use crate::{generator::enum_spec::EnumSpec, utils::config::Config, GeneratorError, Language};

pub mod go;
pub mod rust;

/// One generated constant as the templates see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub value: String,
    /// `value` as a string literal of the target language
    pub quoted: String,
    pub ordinal: usize,
}

/// Pairs names with values. `None` when the two sequences differ in length.
pub fn enum_constants(
    enum_spec: &EnumSpec,
    quote: fn(&str) -> String,
) -> Option<Vec<EnumConstant>> {
    if !enum_spec.is_consistent() {
        return None;
    }
    Some(
        enum_spec
            .names
            .iter()
            .zip(enum_spec.values.iter())
            .enumerate()
            .map(|(ordinal, (name, value))| EnumConstant {
                name: name.clone(),
                value: value.clone(),
                quoted: quote(value),
                ordinal,
            })
            .collect(),
    )
}

/// Full source file for `enum_spec` in the configured language and
/// representation. `None` when `enum_spec` is inconsistent.
pub fn render_enum(
    enum_spec: &EnumSpec,
    config: &Config,
) -> Result<Option<String>, GeneratorError> {
    if !enum_spec.is_consistent() {
        warn!(
            "{} has {} names for {} values, nothing emitted",
            enum_spec.type_name,
            enum_spec.names.len(),
            enum_spec.values.len()
        );
        return Ok(None);
    }

    let parts = match config.language {
        Language::Go => [
            go::write_type_source(enum_spec, config)?,
            go::write_constructor_source(enum_spec)?,
            go::write_string_source(enum_spec, config.representation)?,
        ],
        Language::Rust => [
            rust::write_type_source(enum_spec, config.representation)?,
            rust::write_constructor_source(enum_spec)?,
            rust::write_string_source(enum_spec, config.representation)?,
        ],
    };

    let mut source = String::new();
    for part in parts.into_iter().flatten() {
        if !source.is_empty() {
            source.push('\n');
        }
        source.push_str(part.trim_end());
        source.push('\n');
    }
    Ok(Some(source))
}

pub(crate) fn render_error(part: &str, err: askama::Error) -> GeneratorError {
    GeneratorError::CodeGenerationError(part.to_owned(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::name_mapping::go_quote;

    fn mismatched() -> EnumSpec {
        EnumSpec {
            type_name: "Color".to_string(),
            values: vec!["red".to_string(), "green".to_string()],
            names: vec!["CRed".to_string()],
        }
    }

    #[test]
    fn constants_are_numbered_from_zero() {
        let spec = EnumSpec::new(
            "Color",
            vec!["red".to_string(), "dark green".to_string()],
            &Config::new(),
        );
        let constants = enum_constants(&spec, go_quote).unwrap();
        assert_eq!(
            constants,
            vec![
                EnumConstant {
                    name: "CRed".to_string(),
                    value: "red".to_string(),
                    quoted: "\"red\"".to_string(),
                    ordinal: 0,
                },
                EnumConstant {
                    name: "CDarkGreen".to_string(),
                    value: "dark green".to_string(),
                    quoted: "\"dark green\"".to_string(),
                    ordinal: 1,
                },
            ]
        );
    }

    #[test]
    fn mismatched_spec_emits_nothing() {
        assert_eq!(enum_constants(&mismatched(), go_quote), None);
        assert!(render_enum(&mismatched(), &Config::new()).unwrap().is_none());

        let mut config = Config::new();
        config.set_language(Language::Rust);
        assert!(render_enum(&mismatched(), &config).unwrap().is_none());
    }
}
