//! Archive parsing utilities.
use itertools::Itertools;
use log::debug;

use chrono::NaiveDate;
use polars::prelude::*;

use std::path::Path;

use crate::{
    channels::map_columns,
    errors::{Error, ParsingError},
};

/// All archive timestamps are expressed in this fixed-offset timezone,
/// 8 hours behind UTC. The laboratory never observes daylight saving.
pub const ARCHIVE_TIME_ZONE: &str = "Etc/GMT+8";

const UTC_OFFSET_MILLIS: i64 = 8 * 3_600_000;

/// Quality flag marking bad or missing data.
const MISSING_FLAG: i64 = 99;

/// Reads one monthly SRML archive file into a [DataFrame].
///
/// `path_or_url` is either a local file path or an `http(s)://` URL,
/// fetched with a blocking GET. Local files ending in `.gz` are
/// decompressed on the fly (`flate2` feature, enabled by default).
///
/// The frame holds one row per minute of the covered month: a leading
/// `datetime` column (millisecond resolution, localized to
/// [ARCHIVE_TIME_ZONE]) followed by one measurement column and one
/// `_flag` column per channel. Data element numbers are renamed with
/// [map_columns]; measurements whose flag reads 99 are null.
///
/// Note that the time index is shifted back one minute to account for
/// 2400 hours: each row's values cover the interval from its timestamp
/// until the next row's.
pub fn read_srml(path_or_url: &str) -> Result<DataFrame, Error> {
    let content = if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
        debug!("GET {}", path_or_url);
        reqwest::blocking::get(path_or_url)?
            .error_for_status()?
            .text()?
    } else {
        read_local(Path::new(path_or_url))?
    };

    parse(&content)
}

fn read_local(path: &Path) -> Result<String, std::io::Error> {
    #[cfg(feature = "flate2")]
    if path.extension().map_or(false, |ext| ext == "gz") {
        use std::io::Read;
        let mut reader = flate2::read::GzDecoder::new(std::fs::File::open(path)?);
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        return Ok(content);
    }

    std::fs::read_to_string(path)
}

/// Parses complete archive file content.
pub(crate) fn parse(content: &str) -> Result<DataFrame, Error> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or(ParsingError::MissingHeader)?;
    let header_fields: Vec<&str> = header.split('\t').map(str::trim).collect();

    if header_fields.len() < 2 {
        return Err(ParsingError::MissingHeader.into());
    }

    // Column 0 labels the day-of-year column. Column 1 is labeled with
    // the file's year, its cells hold times: the year must not survive
    // as a column name.
    let year = header_fields[1]
        .parse::<i32>()
        .map_err(|_| ParsingError::Year(header_fields[1].to_string()))?;

    let element_fields = &header_fields[2..];
    if element_fields.len() % 2 != 0 {
        return Err(ParsingError::UnpairedChannel.into());
    }

    // Flag columns are all labeled 0 in the raw header, each one
    // qualifying the element column immediately before it.
    let names: Vec<String> = element_fields
        .iter()
        .tuples()
        .map(|(element, _flag)| map_columns(element))
        .collect();

    let channels = names.len();
    let width = header_fields.len();

    let mut stamps = Vec::<i64>::new();
    let mut values = vec![Vec::<Option<f64>>::new(); channels];
    let mut flags = vec![Vec::<i64>::new(); channels];

    for (index, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() != width {
            return Err(ParsingError::ColumnCount(index + 2, width, fields.len()).into());
        }

        let doy = fields[0]
            .parse::<f64>()
            .map_err(|_| ParsingError::DayOfYear(fields[0].to_string()))? as u32;

        let time = fields[1]
            .parse::<f64>()
            .map_err(|_| ParsingError::Time(fields[1].to_string()))? as i64;

        stamps.push(timestamp_millis(year, doy, time)?);

        for (channel, (value, flag)) in fields[2..].iter().tuples().enumerate() {
            let value = value
                .parse::<f64>()
                .map_err(|_| ParsingError::Value(value.to_string()))?;

            let flag = flag
                .parse::<f64>()
                .map_err(|_| ParsingError::Flag(flag.to_string()))?
                as i64;

            values[channel].push(if flag == MISSING_FLAG { None } else { Some(value) });
            flags[channel].push(flag);
        }
    }

    debug!("parsed {} rows, {} channels", stamps.len(), channels);

    let mut columns = Vec::<Column>::with_capacity(1 + 2 * channels);

    let datetime = Int64Chunked::from_vec(PlSmallStr::from_static("datetime"), stamps)
        .into_datetime(
            TimeUnit::Milliseconds,
            Some(PlSmallStr::from_static(ARCHIVE_TIME_ZONE)),
        )
        .into_series();
    columns.push(datetime.into());

    for ((name, values), flags) in names.iter().zip(values).zip(flags) {
        columns.push(Series::new(name.as_str().into(), values).into());
        columns.push(Series::new(format!("{}_flag", name).into(), flags).into());
    }

    Ok(DataFrame::new(columns)?)
}

/// UTC milliseconds for one archive row.
///
/// Times are encoded 0001..=2400: shift back one minute so 2400 rolls to
/// 2359 of the same day, correcting the minute at each former whole hour.
fn timestamp_millis(year: i32, doy: u32, raw_time: i64) -> Result<i64, ParsingError> {
    let mut time = raw_time - 1;
    if time % 100 == 99 {
        time -= 40;
    }

    let (hour, minute) = ((time / 100) as u32, (time % 100) as u32);

    let date = NaiveDate::from_yo_opt(year, doy).ok_or(ParsingError::Date(year, doy))?;

    let naive = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| ParsingError::Time(format!("{:04}", raw_time)))?;

    // Etc/GMT+8 is a whole-hour offset behind UTC, so localizing is a
    // plain shift with no fold or gap to resolve.
    Ok(naive.and_utc().timestamp_millis() + UTC_OFFSET_MILLIS)
}
