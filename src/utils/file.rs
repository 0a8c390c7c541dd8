use std::{
    fs::{self, File},
    io::{BufReader, Write},
    path::Path,
};

use crate::GeneratorError;

pub fn open_filename(name: &Path) -> Result<BufReader<File>, GeneratorError> {
    match File::open(name) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) => Err(GeneratorError::FileOpenError(
            name.to_string_lossy().to_string(),
            err.to_string(),
        )),
    }
}

pub fn write_filename(name: &Path, content: &str) -> Result<(), GeneratorError> {
    let creation_error = |err: std::io::Error| {
        GeneratorError::FileCreationError(name.to_string_lossy().to_string(), err.to_string())
    };

    if let Some(parent) = name.parent() {
        fs::create_dir_all(parent).map_err(creation_error)?;
    }
    let mut output_file = File::create(name).map_err(creation_error)?;
    output_file.write_all(content.as_bytes()).map_err(creation_error)?;
    output_file.sync_all().map_err(creation_error)?;
    Ok(())
}
