//! Interactive trip parameter intake
//!
//! Collects origin, destination, dates, budget, and interests through
//! line-based prompts. Invalid entries are re-prompted a bounded number of
//! times before intake fails, so a stuck loop cannot be mistaken for a
//! hang. The reader/writer pair is generic so tests can drive intake with
//! in-memory buffers.

use crate::TripAiError;
use crate::config::IntakeConfig;
use crate::models::{Location, TripRequest};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// The only accepted date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(input: &str) -> crate::Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        TripAiError::validation(format!("'{}' is not a YYYY-MM-DD date", input.trim()))
    })
}

/// Parse a decimal number (budget, latitude, longitude)
pub fn parse_number(input: &str) -> crate::Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| TripAiError::validation(format!("'{}' is not a number", input.trim())))
}

/// Split comma-separated interests, trimming whitespace and dropping
/// empty fragments
#[must_use]
pub fn parse_interests(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Line-based interactive intake over an arbitrary reader/writer pair
pub struct Intake<R, W> {
    reader: R,
    writer: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    /// Create an intake session with the configured attempt bound
    pub fn new(reader: R, writer: W, config: &IntakeConfig) -> Self {
        Self {
            reader,
            writer,
            max_attempts: config.max_input_attempts,
        }
    }

    /// Collect a full trip request from the user
    pub fn collect_trip_request(&mut self) -> crate::Result<TripRequest> {
        let origin = self.prompt_location("Enter origin location details:")?;
        let destination = self.prompt_location("Enter destination location details:")?;

        let start_date = self.prompt_date("\nEnter start date")?;
        let end_date = self.prompt_date("Enter end date")?;

        let budget = self.prompt_number("\nEnter your budget in USD: ")?;
        let interests = self.prompt_interests()?;

        TripRequest::new(
            origin,
            vec![destination],
            start_date,
            end_date,
            budget,
            interests,
        )
    }

    /// Write a prompt and read one trimmed line back
    fn prompt_line(&mut self, prompt: &str) -> crate::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(TripAiError::input("Input stream closed".to_string()));
        }

        Ok(line.trim().to_string())
    }

    /// Prompt for a date until it parses or attempts run out
    fn prompt_date(&mut self, label: &str) -> crate::Result<NaiveDate> {
        for _ in 0..self.max_attempts {
            let line = self.prompt_line(&format!("{label} (YYYY-MM-DD): "))?;
            match parse_date(&line) {
                Ok(date) => return Ok(date),
                Err(_) => {
                    writeln!(self.writer, "Invalid date format. Please use YYYY-MM-DD")?;
                }
            }
        }

        Err(TripAiError::input(format!(
            "No valid date entered after {} attempts",
            self.max_attempts
        )))
    }

    /// Prompt for a number until it parses or attempts run out
    fn prompt_number(&mut self, prompt: &str) -> crate::Result<f64> {
        for _ in 0..self.max_attempts {
            let line = self.prompt_line(prompt)?;
            match parse_number(&line) {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(self.writer, "Please enter a valid number")?;
                }
            }
        }

        Err(TripAiError::input(format!(
            "No valid number entered after {} attempts",
            self.max_attempts
        )))
    }

    /// Prompt for a location as city name plus coordinates
    fn prompt_location(&mut self, heading: &str) -> crate::Result<Location> {
        writeln!(self.writer, "\n{heading}")?;

        let name = self.prompt_line("Enter city name: ")?;
        let latitude = self.prompt_number("Enter latitude: ")?;
        let longitude = self.prompt_number("Enter longitude: ")?;

        Ok(Location::with_coordinates(name, latitude, longitude))
    }

    /// Prompt for comma-separated interests
    fn prompt_interests(&mut self) -> crate::Result<Vec<String>> {
        writeln!(self.writer, "\nEnter your interests (comma-separated)")?;
        writeln!(
            self.writer,
            "Examples: art, food, history, nature, shopping, music, sports"
        )?;

        let line = self.prompt_line("Interests: ")?;
        Ok(parse_interests(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn intake_over(input: &str) -> Intake<Cursor<Vec<u8>>, Vec<u8>> {
        Intake::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            &IntakeConfig::default(),
        )
    }

    #[test]
    fn test_parse_date_accepts_iso_format() {
        let date = parse_date("2024-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("03/01/2024").is_err());
        assert!(parse_date("2024-3-1 extra").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3000").unwrap(), 3000.0);
        assert_eq!(parse_number(" 40.7128 ").unwrap(), 40.7128);
        assert!(parse_number("a lot").is_err());
    }

    #[test]
    fn test_parse_interests_trims_and_drops_empty() {
        assert_eq!(
            parse_interests("art, food , ,history"),
            vec!["art", "food", "history"]
        );
        assert!(parse_interests("  ").is_empty());
    }

    #[test]
    fn test_collect_trip_request_happy_path() {
        let input = "New York\n40.7128\n-74.0060\n\
                     Paris\n48.8566\n2.3522\n\
                     2024-03-01\n2024-03-10\n\
                     3000\nart, food\n";
        let mut intake = intake_over(input);

        let request = intake.collect_trip_request().unwrap();
        assert_eq!(request.origin.name, "New York");
        assert_eq!(request.origin.latitude, Some(40.7128));
        assert_eq!(request.destinations[0].name, "Paris");
        assert_eq!(request.budget, 3000.0);
        assert_eq!(request.interests, vec!["art", "food"]);
    }

    #[test]
    fn test_invalid_date_is_reprompted() {
        let input = "New York\n40.7128\n-74.0060\n\
                     Paris\n48.8566\n2.3522\n\
                     03/01/2024\n2024-03-01\n2024-03-10\n\
                     3000\nart\n";
        let mut intake = intake_over(input);

        let request = intake.collect_trip_request().unwrap();
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );

        let transcript = String::from_utf8(intake.writer).unwrap();
        assert!(transcript.contains("Invalid date format. Please use YYYY-MM-DD"));
    }

    #[test]
    fn test_attempts_are_bounded() {
        let input = "New York\n40.7128\n-74.0060\n\
                     Paris\n48.8566\n2.3522\n\
                     bad\nworse\nstill bad\n";
        let mut intake = intake_over(input);

        let result = intake.collect_trip_request();
        assert!(matches!(result, Err(TripAiError::Input { .. })));
    }

    #[test]
    fn test_closed_stream_is_an_input_error() {
        let mut intake = intake_over("New York\n");
        let result = intake.collect_trip_request();
        assert!(matches!(result, Err(TripAiError::Input { .. })));
    }
}
