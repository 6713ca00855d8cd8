//! solardat.uoregon.edu archive access.
use polars::prelude::DataFrame;

use crate::{
    errors::{Error, ParsingError},
    parsing::read_srml,
};

/// Monthly archive download root.
pub const ARCHIVE_URL: &str = "http://solardat.uoregon.edu/download/Archive/";

/// Archive products published at minute resolution.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Processed observations, the default archive product.
    #[default]
    PO,

    /// Raw observations.
    RO,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PO => f.write_str("PO"),
            Self::RO => f.write_str("RO"),
        }
    }
}

impl std::str::FromStr for FileType {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq("PO") {
            Ok(Self::PO)
        } else if s.eq("RO") {
            Ok(Self::RO)
        } else {
            Err(ParsingError::UnknownFileType)
        }
    }
}

/// Archive file name for one station-month: `<STATION><TYPE><YY><MM>.txt`.
pub fn archive_filename(station: &str, filetype: FileType, year: i32, month: u32) -> String {
    format!(
        "{}{}{:02}{:02}.txt",
        station,
        filetype,
        year.rem_euclid(100),
        month,
    )
}

/// Requests one month of data for `station` (e.g. `"EU"` for Eugene)
/// from the solardat archive and reads it with [read_srml].
pub fn read_srml_month_from_solardat(
    station: &str,
    year: i32,
    month: u32,
    filetype: FileType,
) -> Result<DataFrame, Error> {
    let url = format!(
        "{}{}",
        ARCHIVE_URL,
        archive_filename(station, filetype, year, month),
    );

    read_srml(&url)
}
