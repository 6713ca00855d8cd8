//! University of Oregon SRML solar radiation archive reader.
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * Reader for the University of Oregon Solar Radiation Monitoring
 * Laboratory (SRML) monthly archive format, published on
 * http://solardat.uoregon.edu.
 * This crate is shipped under Mozilla Public V2 license.
 */


mod channels;
mod errors;
mod parsing;
mod solardat;

pub use channels::map_columns;
pub use errors::{Error, ParsingError};
pub use parsing::{read_srml, ARCHIVE_TIME_ZONE};
pub use solardat::{archive_filename, read_srml_month_from_solardat, FileType, ARCHIVE_URL};

pub mod prelude {
    pub use crate::{
        channels::map_columns,
        errors::{Error, ParsingError},
        parsing::{read_srml, ARCHIVE_TIME_ZONE},
        solardat::{archive_filename, read_srml_month_from_solardat, FileType, ARCHIVE_URL},
    };

    // Pub re-export
    pub use polars::prelude::DataFrame;
}
