use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    time::Instant,
};
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;

mod config;
pub mod models;
pub use config::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

/// Where a trip extract lives.
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    File(PathBuf),
    /// A csv member of a zip archive. Without a member name the one from
    /// [`Config`] is used.
    Zip {
        path: PathBuf,
        member: Option<String>,
    },
}

impl Storage {
    /// Picks [`Storage::Zip`] for paths ending in `.zip`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let is_zip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("zip"))
            .unwrap_or(false);
        if is_zip {
            Self::Zip { path, member: None }
        } else {
            Self::File(path)
        }
    }
}

#[derive(Default)]
pub struct TripSource {
    config: Config,
}

impl TripSource {
    pub fn new(config: self::Config) -> Self {
        Self { config }
    }

    pub fn load_legacy(&self, storage: &Storage) -> Result<Vec<RawTripV1>, self::Error> {
        debug!("Loading legacy trips from {:?}...", storage);
        let now = Instant::now();
        let rows = load(storage, &self.config.legacy_file_name)?;
        debug!("Loading {} legacy trips took {:?}", rows.len(), now.elapsed());
        Ok(rows)
    }

    pub fn load_current(&self, storage: &Storage) -> Result<Vec<RawTripV2>, self::Error> {
        debug!("Loading current trips from {:?}...", storage);
        let now = Instant::now();
        let rows = load(storage, &self.config.current_file_name)?;
        debug!("Loading {} current trips took {:?}", rows.len(), now.elapsed());
        Ok(rows)
    }

    pub fn read_legacy<R: Read>(&self, reader: R) -> Result<Vec<RawTripV1>, self::Error> {
        parse_csv(reader)
    }

    pub fn read_current<R: Read>(&self, reader: R) -> Result<Vec<RawTripV2>, self::Error> {
        parse_csv(reader)
    }
}

fn load<T>(storage: &Storage, default_member: &str) -> Result<Vec<T>, self::Error>
where
    T: DeserializeOwned,
{
    match storage {
        Storage::File(path) => {
            let file = File::open(path)?;
            parse_csv(file)
        }
        Storage::Zip { path, member } => {
            let name = member.as_deref().unwrap_or(default_member);
            let zip_file = File::open(path)?;
            let mut archive = ZipArchive::new(zip_file)?;
            let index = archive
                .index_for_name(name)
                .ok_or(self::Error::FileNotFound(name.to_string()))?;
            let file = archive.by_index(index)?;
            parse_csv(file)
        }
    }
}

fn parse_csv<R, T>(reader: R) -> Result<Vec<T>, self::Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);
    let mut buf = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result?;
        buf.push(record);
    }
    Ok(buf)
}
