//! Country name → three-letter region code, plus a map anchor per code.
//!
//! The code table matches the one the dashboard has always used. A few entries are
//! approximations: `England` shares `GBR` with the rest of the United Kingdom, and the
//! joint 2002 host has no single region, so it is left out. Anything without a code is
//! simply not drawn on the map.

const COUNTRY_CODES: &[(&str, &str)] = &[
    ("Argentina", "ARG"),
    ("Brazil", "BRA"),
    ("Chile", "CHL"),
    ("Croatia", "HRV"),
    ("Czechoslovakia", "CZE"),
    ("England", "GBR"),
    ("France", "FRA"),
    ("Germany", "DEU"),
    ("Hungary", "HUN"),
    ("Italy", "ITA"),
    ("Mexico", "MEX"),
    ("Netherlands", "NLD"),
    ("Qatar", "QAT"),
    ("Russia", "RUS"),
    ("South Africa", "ZAF"),
    ("Spain", "ESP"),
    ("Sweden", "SWE"),
    ("Switzerland", "CHE"),
    ("United States", "USA"),
    ("Uruguay", "URY"),
];

// (code, longitude, latitude)
const ANCHORS: &[(&str, f64, f64)] = &[
    ("ARG", -64.0, -34.0),
    ("BRA", -52.0, -10.0),
    ("CHL", -71.0, -35.0),
    ("HRV", 15.5, 45.1),
    ("CZE", 15.5, 49.8),
    ("GBR", -1.5, 52.8),
    ("FRA", 2.2, 46.2),
    ("DEU", 10.4, 51.2),
    ("HUN", 19.5, 47.2),
    ("ITA", 12.6, 42.8),
    ("MEX", -102.0, 23.6),
    ("NLD", 5.3, 52.1),
    ("QAT", 51.2, 25.3),
    ("RUS", 100.0, 60.0),
    ("ZAF", 24.0, -29.0),
    ("ESP", -3.7, 40.4),
    ("SWE", 16.0, 62.0),
    ("CHE", 8.2, 46.8),
    ("USA", -98.0, 39.0),
    ("URY", -56.0, -32.8),
];

pub fn region_code(country: &str) -> Option<&'static str> {
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}

/// Longitude/latitude where the marker for `code` is drawn.
pub fn anchor(code: &str) -> Option<(f64, f64)> {
    ANCHORS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, lon, lat)| (*lon, *lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries_have_codes_and_anchors() {
        for (country, code) in COUNTRY_CODES {
            assert_eq!(region_code(country), Some(*code));
            let (lon, lat) = anchor(code).expect("every code should have an anchor");
            assert!((-180.0..=180.0).contains(&lon));
            assert!((-90.0..=90.0).contains(&lat));
        }
    }

    #[test]
    fn unknown_names_have_no_code() {
        assert_eq!(region_code("South Korea/Japan"), None);
        assert_eq!(region_code("Atlantis"), None);
        assert_eq!(anchor("XXX"), None);
    }
}
