use convert_case::Casing;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::trace;

use crate::Language;

/// Characters stripped from both ends of every input line.
pub const TRIM_CHARS: &[char] = &[
    ' ', '+', ',', '.', '-', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ';', ':',
    '\'',
];

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NameMapping {
    /// Raw value to identifier, bypassing the identifier builder.
    #[serde(default)]
    pub value_mapping: HashMap<String, String>,
}

impl NameMapping {
    pub fn new() -> Self {
        NameMapping {
            value_mapping: HashMap::new(),
        }
    }

    /// Constant name for `value`: the configured mapping if any, otherwise the
    /// built identifier, in both cases behind `prefix`.
    pub fn value_to_constant_name(
        &self,
        prefix: &str,
        value: &str,
        language: Language,
    ) -> String {
        let name = match self.value_mapping.get(value) {
            Some(name) => {
                trace!("value {:?} mapped to {}", value, name);
                name.clone()
            }
            None => build_enum_from_value(value),
        };
        fix_identifier(&format!("{}{}", prefix, name), language)
    }
}

pub fn trim_value(line: &str) -> &str {
    line.trim_matches(TRIM_CHARS)
}

/// The first character upper-cased followed by every other upper-case letter
/// of the (camel case) type name.
pub fn extract_prefix(type_name: &str) -> String {
    let mut prefix = String::new();
    for (pos, c) in type_name.chars().enumerate() {
        if pos == 0 {
            prefix.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            prefix.push(c);
        }
    }
    prefix
}

pub fn upcase_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lowcase_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits `value` into runs of letters and digits and joins them back with
/// the first letter of every run upper-cased.
pub fn build_enum_from_value(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphabetic() && !c.is_numeric())
        .filter(|fragment| !fragment.is_empty())
        .map(upcase_first_letter)
        .collect()
}

/// Makes `name` a legal identifier of `language`.
pub fn fix_identifier(name: &str, language: Language) -> String {
    if name.is_empty() {
        return "Unnamed".to_string();
    }
    if name.starts_with(|c: char| c.is_numeric()) {
        return format!("_{}", name);
    }
    if language == Language::Rust && name == "Self" {
        return "Self_".to_string();
    }
    name.to_string()
}

/// File the enumeration `type_name` is written to.
pub fn type_name_to_file_name(type_name: &str, language: Language) -> String {
    let stem = match language {
        Language::Go => lowcase_first_letter(type_name),
        Language::Rust => type_name.to_case(convert_case::Case::Snake),
    };
    format!("{}.{}", stem, language.file_extension())
}

/// String literal of `value` the way Go's `%q` verb writes it.
pub fn go_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x80 => {
                quoted.push_str(&format!("\\x{:02x}", c as u32))
            }
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// String literal of `value` in Rust syntax.
pub fn rust_quote(value: &str) -> String {
    format!("{:?}", value)
}
