use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    generator::{enum_spec::EnumSpec, templates::render_enum},
    utils::{config::Config, file::write_filename, name_mapping::type_name_to_file_name},
    GeneratorError,
};

#[derive(Debug)]
pub struct Generator {
    config: Config,
    output_dir: PathBuf,
    input: PathBuf,
}

impl Generator {
    pub fn new(config: Config, output_dir: PathBuf, input: PathBuf) -> Self {
        Self {
            config,
            output_dir,
            input,
        }
    }

    /// Reads the input, renders it and writes the source file. Returns the
    /// written path, or `None` when nothing was emitted.
    pub fn generate(&self) -> Result<Option<PathBuf>, GeneratorError> {
        info!(
            "Generate {:?} enum use {} as under type",
            self.config.language, self.config.representation
        );

        let enum_spec = EnumSpec::from_path(&self.input, &self.config)?;
        info!(
            "{} with {} values read from {}",
            enum_spec.type_name,
            enum_spec.values.len(),
            self.input.display()
        );
        for name in enum_spec.duplicate_names() {
            warn!("{} is generated for more than one value", name);
        }

        self.write_enum(&enum_spec)
    }

    pub fn write_enum(&self, enum_spec: &EnumSpec) -> Result<Option<PathBuf>, GeneratorError> {
        let source = match render_enum(enum_spec, &self.config)? {
            Some(source) => source,
            None => return Ok(None),
        };
        let target_file = self.target_file(&enum_spec.type_name);
        info!("Writing to {}", target_file.display());
        write_filename(&target_file, &source)?;
        Ok(Some(target_file))
    }

    pub fn target_file(&self, type_name: &str) -> PathBuf {
        self.output_dir
            .join(type_name_to_file_name(type_name, self.config.language))
    }
}
