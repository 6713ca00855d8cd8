//! SRML data element numbering.
//!
//! Archive columns are labeled with 4-digit data element numbers. For most
//! elements the first three digits select the measured quantity and the
//! fourth selects the instrument. Spectral channels (7xxx) use all four
//! digits for the quantity. The full numbering is published on the
//! laboratory's Data Element Numbers page
//! <http://solardat.uoregon.edu/DataElementNumbers.html>.

/// Quantity table, keyed by 3-digit prefix for broadband elements and by
/// the full 4-digit number for spectral (7xxx) elements. No spectral
/// channel has a semantic name yet, so 7xxx numbers fall through.
fn quantity(key: &str) -> Option<&'static str> {
    match key {
        "100" => Some("ghi"),
        "201" => Some("dni"),
        "300" => Some("dhi"),
        "920" => Some("wind_dir"),
        "921" => Some("wind_speed"),
        "930" => Some("temp_air"),
        "931" => Some("temp_dew"),
        "933" => Some("relative_humidity"),
        "937" => Some("temp_cell"),
        _ => None,
    }
}

/// Maps an SRML data element number to its semantic column name.
///
/// Recognized elements become `<quantity>_<instrument>` (`"1001"` is the
/// second GHI instrument, `"ghi_1"`). Unrecognized elements are returned
/// unchanged, so this never fails.
///
/// ```
/// use srml::map_columns;
///
/// assert_eq!(map_columns("1001"), "ghi_1");
/// assert_eq!(map_columns("2017"), "dni_7");
/// assert_eq!(map_columns("7324"), "7324");
/// ```
pub fn map_columns(code: &str) -> String {
    if code.starts_with('7') {
        return match quantity(code) {
            Some(name) => name.to_string(),
            None => code.to_string(),
        };
    }

    match code.get(..3).and_then(quantity) {
        Some(name) => format!("{}_{}", name, &code[3..]),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::map_columns;

    #[test]
    fn recognized_elements() {
        for (code, expected) in [
            ("1000", "ghi_0"),
            ("1001", "ghi_1"),
            ("2010", "dni_0"),
            ("2011", "dni_1"),
            ("2017", "dni_7"),
            ("3000", "dhi_0"),
            ("9201", "wind_dir_1"),
            ("9211", "wind_speed_1"),
            ("9300", "temp_air_0"),
            ("9312", "temp_dew_2"),
            ("9330", "relative_humidity_0"),
            ("9370", "temp_cell_0"),
        ] {
            assert_eq!(map_columns(code), expected, "bad mapping for {}", code);
        }
    }

    #[test]
    fn unrecognized_elements_pass_through() {
        for code in ["2001", "7324", "7008", "9999", "42", ""] {
            assert_eq!(map_columns(code), code);
        }
    }
}
