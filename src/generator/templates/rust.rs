use askama::Template;

use crate::{
    generator::enum_spec::EnumSpec, utils::name_mapping::rust_quote, GeneratorError,
    Representation,
};

use super::{enum_constants, render_error, EnumConstant};

#[derive(Template, Debug)]
#[template(path = "rust/int_type.j2", escape = "none")]
pub struct RustIntTypeTemplate<'a> {
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

#[derive(Template, Debug)]
#[template(path = "rust/string_type.j2", escape = "none")]
pub struct RustStringTypeTemplate<'a> {
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

#[derive(Template, Debug)]
#[template(path = "rust/constructor.j2", escape = "none")]
pub struct RustFromStrTemplate<'a> {
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

#[derive(Template, Debug)]
#[template(path = "rust/string.j2", escape = "none")]
pub struct RustDisplayTemplate<'a> {
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

/// `#[repr(i32)]` enum, or a `&'static str` newtype with associated constants.
pub fn write_type_source(
    enum_spec: &EnumSpec,
    representation: Representation,
) -> Result<Option<String>, GeneratorError> {
    let constants = match enum_constants(enum_spec, rust_quote) {
        Some(constants) => constants,
        None => return Ok(None),
    };
    let type_name = enum_spec.type_name.as_str();
    let source = match representation {
        Representation::Int => RustIntTypeTemplate {
            type_name,
            constants,
        }
        .render(),
        Representation::String => RustStringTypeTemplate {
            type_name,
            constants,
        }
        .render(),
    }
    .map_err(|err| render_error("rust type", err))?;
    Ok(Some(source))
}

pub fn write_constructor_source(enum_spec: &EnumSpec) -> Result<Option<String>, GeneratorError> {
    let constants = match enum_constants(enum_spec, rust_quote) {
        Some(constants) => constants,
        None => return Ok(None),
    };
    let source = RustFromStrTemplate {
        type_name: &enum_spec.type_name,
        constants,
    }
    .render()
    .map_err(|err| render_error("rust from_str", err))?;
    Ok(Some(source))
}

pub fn write_string_source(
    enum_spec: &EnumSpec,
    representation: Representation,
) -> Result<Option<String>, GeneratorError> {
    if representation != Representation::Int {
        return Ok(None);
    }
    let constants = match enum_constants(enum_spec, rust_quote) {
        Some(constants) => constants,
        None => return Ok(None),
    };
    let source = RustDisplayTemplate {
        type_name: &enum_spec.type_name,
        constants,
    }
    .render()
    .map_err(|err| render_error("rust display", err))?;
    Ok(Some(source))
}
