use std::{fs, path::Path};

use crate::{definitions::rom, RomError};

#[derive(Clone, Debug)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw program, already checked to fit into the memory
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data
    ///
    /// Fails if there is no data or it does not fit between the program start and the end of
    /// the memory.
    pub fn new(name: &str, data: &[u8]) -> Result<Self, RomError> {
        validate(data)?;
        Ok(Rom {
            name: name.to_string(),
            data: data.into(),
        })
    }

    /// Will read the rom from the given file, the file name is used as the rom name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|err| RomError::Unreadable {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("Read rom '{}' with {} bytes", name, data.len());
        Self::new(&name, &data)
    }

    /// Will return a slice internal values of the given data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

/// Checks that the data can be loaded as a program.
pub fn validate(data: &[u8]) -> Result<(), RomError> {
    if data.is_empty() {
        Err(RomError::Empty)
    } else if data.len() > rom::MAX_SIZE {
        Err(RomError::TooLarge {
            len: data.len(),
            max: rom::MAX_SIZE,
        })
    } else {
        Ok(())
    }
}
