//! Airport identifiers.

use std::fmt;

/// Reasons an IATA code fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIata {
    /// Input was not exactly three bytes long.
    #[error("IATA code must be exactly 3 letters, got {0} bytes")]
    WrongLength(usize),

    /// Input contained something other than uppercase ASCII letters.
    #[error("IATA code must be uppercase ASCII letters")]
    NotUppercaseAscii,
}

/// An IATA airport code: exactly three uppercase ASCII letters.
///
/// Codes arrive as free-form strings on the query string and in upstream
/// route listings. Parsing them once at those boundaries lets the planner
/// key route and timetable lookups on `Iata` pairs without re-checking.
///
/// ```
/// use flight_server::domain::Iata;
///
/// let wro = Iata::parse("WRO")?;
/// assert_eq!(wro.as_str(), "WRO");
/// # Ok::<(), flight_server::domain::InvalidIata>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse a code from raw input.
    ///
    /// No normalization is applied: lowercase input, surrounding
    /// whitespace, and digits are rejected rather than repaired.
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidIata::WrongLength(s.len()))?;

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidIata::NotUppercaseAscii);
        }

        Ok(Iata(bytes))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Stored bytes are uppercase ASCII, checked in `parse`.
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheduled_airport_codes() {
        for code in ["DUB", "STN", "WRO", "KRK", "BGY", "SXF"] {
            assert_eq!(Iata::parse(code).unwrap().as_str(), code);
        }
    }

    #[test]
    fn reports_wrong_length_in_bytes() {
        assert_eq!(Iata::parse("").unwrap_err(), InvalidIata::WrongLength(0));
        assert_eq!(Iata::parse("DU").unwrap_err(), InvalidIata::WrongLength(2));
        assert_eq!(
            Iata::parse("DUBLIN").unwrap_err(),
            InvalidIata::WrongLength(6)
        );
    }

    #[test]
    fn does_not_normalize_query_input() {
        // Raw query-string values are rejected, not repaired.
        assert_eq!(
            Iata::parse("dub").unwrap_err(),
            InvalidIata::NotUppercaseAscii
        );
        assert_eq!(
            Iata::parse("Wro").unwrap_err(),
            InvalidIata::NotUppercaseAscii
        );
        assert_eq!(
            Iata::parse(" DU").unwrap_err(),
            InvalidIata::NotUppercaseAscii
        );
        assert_eq!(Iata::parse("DUB ").unwrap_err(), InvalidIata::WrongLength(4));
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        assert!(Iata::parse("DU1").is_err());
        assert!(Iata::parse("D-B").is_err());
        assert!(Iata::parse("D B").is_err());
    }

    #[test]
    fn rejects_multibyte_input() {
        // Three chars but four bytes; must error, not panic.
        assert!(Iata::parse("DÜB").is_err());
    }

    #[test]
    fn debug_and_display() {
        let krk = Iata::parse("KRK").unwrap();
        assert_eq!(krk.to_string(), "KRK");
        assert_eq!(format!("{krk:?}"), "Iata(KRK)");
    }

    #[test]
    fn keys_schedule_maps_by_value() {
        use std::collections::HashMap;

        // The planner keys timetables on (from, to) pairs.
        let dub = Iata::parse("DUB").unwrap();
        let wro = Iata::parse("WRO").unwrap();

        let mut schedules: HashMap<(Iata, Iata), u32> = HashMap::new();
        schedules.insert((dub, wro), 3);

        assert_eq!(schedules.get(&(dub, wro)), Some(&3));
        assert!(!schedules.contains_key(&(wro, dub)));
    }
}
