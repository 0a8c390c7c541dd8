use askama::Template;

use crate::{
    generator::enum_spec::EnumSpec, utils::config::Config, utils::name_mapping::go_quote,
    GeneratorError, Representation,
};

use super::{enum_constants, render_error, EnumConstant};

#[derive(Template, Debug)]
#[template(path = "go/int_type.j2", escape = "none")]
pub struct GoIntTypeTemplate<'a> {
    pub package_name: &'a str,
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

#[derive(Template, Debug)]
#[template(path = "go/string_type.j2", escape = "none")]
pub struct GoStringTypeTemplate<'a> {
    pub package_name: &'a str,
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

#[derive(Template, Debug)]
#[template(path = "go/constructor.j2", escape = "none")]
pub struct GoConstructorTemplate<'a> {
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

#[derive(Template, Debug)]
#[template(path = "go/string.j2", escape = "none")]
pub struct GoStringTemplate<'a> {
    pub type_name: &'a str,
    pub constants: Vec<EnumConstant>,
}

/// Package header, type declaration and the `const` block.
pub fn write_type_source(
    enum_spec: &EnumSpec,
    config: &Config,
) -> Result<Option<String>, GeneratorError> {
    let constants = match enum_constants(enum_spec, go_quote) {
        Some(constants) => constants,
        None => return Ok(None),
    };
    let source = match config.representation {
        Representation::Int => GoIntTypeTemplate {
            package_name: &config.package_name,
            type_name: &enum_spec.type_name,
            constants,
        }
        .render(),
        Representation::String => GoStringTypeTemplate {
            package_name: &config.package_name,
            type_name: &enum_spec.type_name,
            constants,
        }
        .render(),
    }
    .map_err(|err| render_error("go type", err))?;
    Ok(Some(source))
}

/// `New<Type>(s string)` switching over the original values.
pub fn write_constructor_source(enum_spec: &EnumSpec) -> Result<Option<String>, GeneratorError> {
    let constants = match enum_constants(enum_spec, go_quote) {
        Some(constants) => constants,
        None => return Ok(None),
    };
    let source = GoConstructorTemplate {
        type_name: &enum_spec.type_name,
        constants,
    }
    .render()
    .map_err(|err| render_error("go constructor", err))?;
    Ok(Some(source))
}

/// `String()` method, int representation only.
pub fn write_string_source(
    enum_spec: &EnumSpec,
    representation: Representation,
) -> Result<Option<String>, GeneratorError> {
    if representation != Representation::Int {
        return Ok(None);
    }
    let constants = match enum_constants(enum_spec, go_quote) {
        Some(constants) => constants,
        None => return Ok(None),
    };
    let source = GoStringTemplate {
        type_name: &enum_spec.type_name,
        constants,
    }
    .render()
    .map_err(|err| render_error("go string", err))?;
    Ok(Some(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn car_brand(config: &Config) -> EnumSpec {
        EnumSpec::new(
            "CarBrand",
            vec!["audi".to_string(), "mercedes benz".to_string()],
            config,
        )
    }

    #[test]
    fn int_type_source() {
        let config = Config::new();
        let source = write_type_source(&car_brand(&config), &config).unwrap().unwrap();
        assert_eq!(
            source.trim_end(),
            indoc! {r#"
                package main

                import (
                	"fmt"
                )

                //CarBrand Enumeration type
                type CarBrand int

                const (
                	// CBAudi = "audi"
                	CBAudi int = iota
                	// CBMercedesBenz = "mercedes benz"
                	CBMercedesBenz
                )"#}
        );
    }

    #[test]
    fn string_type_source() {
        let mut config = Config::new();
        config.set_representation(Representation::String);
        config.package_name = "cars".to_string();
        let source = write_type_source(&car_brand(&config), &config).unwrap().unwrap();
        assert!(source.starts_with("package cars\n"));
        assert!(source.contains("type CarBrand string\n"));
        assert!(source.contains("\t// CBAudi = \"audi\"\n\tCBAudi string = \"audi\"\n"));
        assert!(source.contains("\tCBMercedesBenz string = \"mercedes benz\"\n"));
    }

    #[test]
    fn constructor_source() {
        let config = Config::new();
        let source = write_constructor_source(&car_brand(&config)).unwrap().unwrap();
        assert_eq!(
            source.trim_end(),
            indoc! {r#"
                //NewCarBrand : Construct a new CarBrand Object
                func NewCarBrand(s string) (CarBrand, error) {
                	var r CarBrand
                	switch s {
                	case "audi":
                		r = CarBrand(CBAudi)
                	case "mercedes benz":
                		r = CarBrand(CBMercedesBenz)
                	default:
                		return r, fmt.Errorf("%q is not a valid CarBrand", s)
                	}
                	return r, nil
                }"#}
        );
    }

    #[test]
    fn string_source_for_int_enums_only() {
        let config = Config::new();
        let spec = car_brand(&config);
        let source = write_string_source(&spec, Representation::Int).unwrap().unwrap();
        assert!(source.contains("func (enum CarBrand) String() string {"));
        assert!(source.contains("\tcase CBAudi:\n\t\tr = \"audi\"\n"));
        assert!(source.contains("\tcase CBMercedesBenz:\n\t\tr = \"mercedes benz\"\n"));
        assert_eq!(write_string_source(&spec, Representation::String).unwrap(), None);
    }

    #[test]
    fn values_are_quoted() {
        let config = Config::new();
        let spec = EnumSpec::new("Quote", vec!["say \"hi\"".to_string()], &config);
        let source = write_constructor_source(&spec).unwrap().unwrap();
        assert!(source.contains("\tcase \"say \\\"hi\\\"\":\n\t\tr = Quote(QSayHi)\n"));
    }

    #[test]
    fn mismatched_lengths_emit_nothing() {
        let config = Config::new();
        let mut spec = car_brand(&config);
        spec.names.pop();
        assert_eq!(write_type_source(&spec, &config).unwrap(), None);
        assert_eq!(write_constructor_source(&spec).unwrap(), None);
        assert_eq!(write_string_source(&spec, Representation::Int).unwrap(), None);
    }
}
