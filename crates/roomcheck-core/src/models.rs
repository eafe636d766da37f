use chrono::NaiveDate;

/// Validation failures for a user-entered date range. These render
/// verbatim inside the dialog, so the wording is user-facing.
#[derive(Debug, PartialEq, Clone)]
pub enum DateRangeError {
    MissingStart,
    MissingEnd,
    InvalidDate(String),
    EndBeforeStart,
    StartBeforeMinimum,
}

impl DateRangeError {
    pub fn to_string(&self) -> String {
        match self {
            Self::MissingStart => String::from("Please choose an arrival date"),
            Self::MissingEnd => String::from("Please choose a departure date"),
            Self::InvalidDate(s) => format!("'{}' is not a valid date", s.clone()),
            Self::EndBeforeStart => String::from("Departure cannot be before arrival"),
            Self::StartBeforeMinimum => String::from("Arrival cannot be in the past"),
        }
    }
}

/// A validated arrival/departure pair. Construction is the only validation
/// gate: a `DateRange` value always satisfies start <= end and start >= the
/// minimum date it was parsed against.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn parse(
        start: &str,
        end: &str,
        format: &str,
        min_date: NaiveDate,
    ) -> Result<Self, DateRangeError> {
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() {
            return Err(DateRangeError::MissingStart);
        };
        if end.is_empty() {
            return Err(DateRangeError::MissingEnd);
        };
        let start = NaiveDate::parse_from_str(start, format)
            .map_err(|_| DateRangeError::InvalidDate(start.to_string()))?;
        let end = NaiveDate::parse_from_str(end, format)
            .map_err(|_| DateRangeError::InvalidDate(end.to_string()))?;
        if end < start {
            return Err(DateRangeError::EndBeforeStart);
        };
        if start < min_date {
            return Err(DateRangeError::StartBeforeMinimum);
        };
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Everything the availability endpoint needs for one check. Built from a
/// confirmed `DateRange` plus the ambient room id and CSRF token.
#[derive(Debug, PartialEq, Clone)]
pub struct AvailabilityRequest {
    pub room_id: String,
    pub csrf_token: String,
    pub dates: DateRange,
}

impl AvailabilityRequest {
    /// The form-encoded body fields, in wire order.
    pub fn form_fields(&self, date_format: &str) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.dates.start().format(date_format).to_string()),
            ("end", self.dates.end().format(date_format).to_string()),
            ("csrf_token", self.csrf_token.clone()),
            ("room_id", self.room_id.clone()),
        ]
    }
}

/// The server's answer to an availability check. The `Available` fields are
/// echoed back by the server and feed straight into the booking link, so they
/// stay as opaque strings rather than re-parsed dates.
#[derive(Debug, PartialEq, Clone)]
pub enum AvailabilityOutcome {
    Available {
        room_id: String,
        start_date: String,
        end_date: String,
    },
    Unavailable,
}

impl AvailabilityOutcome {
    /// Relative booking URL for an available room. `None` when the room is
    /// not available.
    pub fn booking_link(&self) -> Option<String> {
        match self {
            Self::Available {
                room_id,
                start_date,
                end_date,
            } => Some(format!(
                "/book-room?id={}&s={}&e={}",
                room_id, start_date, end_date
            )),
            Self::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_parse_valid_range() {
        let range = DateRange::parse("2024-06-01", "2024-06-05", "%Y-%m-%d", min()).unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
    }

    #[test]
    fn test_parse_single_night_same_day() {
        // start == end is a legal range
        assert!(DateRange::parse("2024-06-01", "2024-06-01", "%Y-%m-%d", min()).is_ok());
    }

    #[test]
    fn test_parse_missing_fields() {
        assert_eq!(
            DateRange::parse("", "2024-06-05", "%Y-%m-%d", min()),
            Err(DateRangeError::MissingStart)
        );
        assert_eq!(
            DateRange::parse("2024-06-01", "   ", "%Y-%m-%d", min()),
            Err(DateRangeError::MissingEnd)
        );
    }

    #[test]
    fn test_parse_garbage_date() {
        let err = DateRange::parse("sometime", "2024-06-05", "%Y-%m-%d", min()).unwrap_err();
        assert_eq!(err, DateRangeError::InvalidDate("sometime".to_string()));
    }

    #[test]
    fn test_parse_inverted_range() {
        assert_eq!(
            DateRange::parse("2024-06-05", "2024-06-01", "%Y-%m-%d", min()),
            Err(DateRangeError::EndBeforeStart)
        );
    }

    #[test]
    fn test_parse_start_before_minimum() {
        assert_eq!(
            DateRange::parse("2024-05-30", "2024-06-05", "%Y-%m-%d", min()),
            Err(DateRangeError::StartBeforeMinimum)
        );
    }

    #[test]
    fn test_form_fields_wire_shape() {
        let request = AvailabilityRequest {
            room_id: "7".to_string(),
            csrf_token: "abc".to_string(),
            dates: DateRange::parse("2024-06-01", "2024-06-05", "%Y-%m-%d", min()).unwrap(),
        };
        assert_eq!(
            request.form_fields("%Y-%m-%d"),
            vec![
                ("start", "2024-06-01".to_string()),
                ("end", "2024-06-05".to_string()),
                ("csrf_token", "abc".to_string()),
                ("room_id", "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_booking_link() {
        let outcome = AvailabilityOutcome::Available {
            room_id: "7".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-05".to_string(),
        };
        assert_eq!(
            outcome.booking_link(),
            Some("/book-room?id=7&s=2024-06-01&e=2024-06-05".to_string())
        );
        assert_eq!(AvailabilityOutcome::Unavailable.booking_link(), None);
    }
}
