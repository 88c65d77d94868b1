use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::domain::{Field, ParsedFields};

/// Marker that identifies a transport or API failure in raw reply text.
pub const ERROR_MARKER: &str = "Error:";

pub const NO_RESPONSE_RECEIVED: &str = "No response received";

/// Values a model writes when it has nothing to put after a tag.
const PLACEHOLDER_VALUES: [&str; 2] = ["[Not specified]", "N/A"];

/// A tag only counts at the start of a line (leading blanks allowed).
fn single_line_tag(tag: &str) -> Regex {
    Regex::new(&format!(r"(?im)^[ \t]*{tag}:[ \t]*(.*?)[ \t]*\r?$")).expect("valid regex")
}

static SENDER_RE: LazyLock<Regex> = LazyLock::new(|| single_line_tag(Field::Sender.tag()));
static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| single_line_tag(Field::Type.tag()));
static AIRCRAFT_RE: LazyLock<Regex> = LazyLock::new(|| single_line_tag(Field::Aircraft.tag()));
static RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| single_line_tag(Field::Response.tag()));
// Details may wrap over several lines; it runs until a line opening with RESPONSE.
static DETAILS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ims)^[ \t]*DETAILS:[ \t]*(.*?)(?:^[ \t]*RESPONSE:|\z)").expect("valid regex")
});

fn pattern(field: Field) -> &'static Regex {
    match field {
        Field::Sender => &SENDER_RE,
        Field::Type => &TYPE_RE,
        Field::Aircraft => &AIRCRAFT_RE,
        Field::Details => &DETAILS_RE,
        Field::Response => &RESPONSE_RE,
    }
}

/// Turns the model's tagged free text into [`ParsedFields`].
///
/// Every function here is total: malformed, partial or reordered replies
/// yield whatever tags could be found, with defaults for the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser;

impl ResponseParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw reply text, treating empty text or any text containing
    /// `Error:` as a failed round-trip.
    pub fn parse(&self, raw: &str) -> ParsedFields {
        if raw.contains(ERROR_MARKER) {
            warn!("No valid response to parse: {raw}");
            return self.failure(raw);
        }
        self.extract(raw)
    }

    /// Extract the tagged fields without looking for the error marker.
    /// Used when the caller already knows the round-trip succeeded.
    pub fn extract(&self, raw: &str) -> ParsedFields {
        if raw.is_empty() {
            warn!("Empty reply from chat model");
            return self.failure(raw);
        }

        debug!("Parsing reply of {} characters", raw.len());

        let mut fields = ParsedFields::default();
        for field in Field::ALL {
            if let Some(value) = Self::extract_field(raw, field) {
                debug!("Extracted {field}: {value}");
                fields.set(field, value);
            }
        }
        fields
    }

    /// Defaulted fields carrying `detail` as the failure description.
    pub fn failure(&self, detail: &str) -> ParsedFields {
        let details = if detail.is_empty() {
            NO_RESPONSE_RECEIVED
        } else {
            detail
        };
        ParsedFields::default().with_details(details)
    }

    fn extract_field(raw: &str, field: Field) -> Option<String> {
        let captures = pattern(field).captures(raw)?;
        let value = captures.get(1)?.as_str().trim();
        if value.is_empty() || PLACEHOLDER_VALUES.contains(&value) {
            return None;
        }
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMERGENCY_REPLY: &str = "SENDER: PILOT\nTYPE: EMERGENCY\nAIRCRAFT: N123AB\nDETAILS: engine fire\nRESPONSE: Declare emergency, cleared direct, N123AB";

    fn parse(raw: &str) -> ParsedFields {
        ResponseParser::new().parse(raw)
    }

    #[test]
    fn test_well_formed_reply() {
        let fields = parse(EMERGENCY_REPLY);
        assert_eq!(
            fields,
            ParsedFields::new(
                "PILOT",
                "EMERGENCY",
                "N123AB",
                "engine fire",
                "Declare emergency, cleared direct, N123AB",
            )
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(parse(EMERGENCY_REPLY), parse(EMERGENCY_REPLY));
    }

    #[test]
    fn test_empty_reply_uses_no_response_fallback() {
        let fields = parse("");
        assert_eq!(fields.details(), "No response received");
        assert_eq!(fields.sender(), "Unknown");
        assert_eq!(fields.response(), "No response generated");
    }

    #[test]
    fn test_error_text_short_circuits() {
        for raw in [
            "Error: HTTP 500 - Internal Server Error",
            "Error: Connection Error: connection refused",
            "SENDER: PILOT\nTYPE: EMERGENCY\nError: truncated",
            "prefix Error: suffix",
        ] {
            let fields = parse(raw);
            assert_eq!(fields, ParsedFields::default().with_details(raw), "raw: {raw}");
        }
    }

    #[test]
    fn test_extract_ignores_error_marker() {
        let raw = "SENDER: ATC\nTYPE: COMMUNICATION\nAIRCRAFT: N1\nDETAILS: Error: say again\nRESPONSE: Say again, N1";
        let fields = ResponseParser::new().extract(raw);
        assert_eq!(fields.sender(), "ATC");
        assert_eq!(fields.details(), "Error: say again");
        assert_eq!(fields.response(), "Say again, N1");
    }

    #[test]
    fn test_missing_aircraft_keeps_default() {
        let fields = parse(
            "SENDER: ATC\nTYPE: RUNWAY\nDETAILS: cleared to land\nRESPONSE: Cleared to land 09L, United 456",
        );
        assert_eq!(fields.aircraft(), "Not specified");
        assert_eq!(fields.sender(), "ATC");
        assert_eq!(fields.message_type(), "RUNWAY");
        assert_eq!(fields.details(), "cleared to land");
        assert_eq!(fields.response(), "Cleared to land 09L, United 456");
    }

    #[test]
    fn test_placeholder_values_keep_defaults() {
        let fields = parse("SENDER: N/A\nTYPE: NORMAL\nAIRCRAFT: N/A\nDETAILS: [Not specified]\nRESPONSE: Roger");
        assert_eq!(fields.aircraft(), "Not specified");
        assert_eq!(fields.sender(), "Unknown");
        assert_eq!(fields.details(), "No details provided");
        assert_eq!(fields.message_type(), "NORMAL");
    }

    #[test]
    fn test_empty_tag_value_keeps_default() {
        let fields = parse("SENDER:\nTYPE:   \nAIRCRAFT: N1\nRESPONSE: Roger");
        assert_eq!(fields.sender(), "Unknown");
        assert_eq!(fields.message_type(), "Unknown");
        assert_eq!(fields.aircraft(), "N1");
    }

    #[test]
    fn test_tags_are_case_insensitive() {
        let fields = parse("sender: pilot\nType: Weather\naircraft: Delta 890");
        assert_eq!(fields.sender(), "pilot");
        assert_eq!(fields.message_type(), "Weather");
        assert_eq!(fields.aircraft(), "Delta 890");
    }

    #[test]
    fn test_reordered_tags() {
        let fields = parse(
            "RESPONSE: Roger, N1\nAIRCRAFT: N1\nSENDER: ATC\nTYPE: NORMAL\nDETAILS: routine check",
        );
        assert_eq!(fields.response(), "Roger, N1");
        assert_eq!(fields.aircraft(), "N1");
        assert_eq!(fields.sender(), "ATC");
        assert_eq!(fields.message_type(), "NORMAL");
        assert_eq!(fields.details(), "routine check");
    }

    #[test]
    fn test_details_span_lines_until_response() {
        let fields = parse(
            "SENDER: PILOT\nDETAILS: engine fire on the left side\nreturning to the field\nRESPONSE: Cleared direct, N1",
        );
        assert_eq!(
            fields.details(),
            "engine fire on the left side\nreturning to the field"
        );
        assert_eq!(fields.response(), "Cleared direct, N1");
    }

    #[test]
    fn test_surrounding_prose_is_tolerated() {
        let raw = "Here is the classification:\n\nSENDER: ATC\nTYPE: TRAFFIC\nAIRCRAFT: Southwest 123\nDETAILS: traffic at 2 o'clock\nRESPONSE: Looking for traffic, Southwest 123\n\nLet me know if you need more.";
        let fields = parse(raw);
        assert_eq!(fields.sender(), "ATC");
        assert_eq!(fields.message_type(), "TRAFFIC");
        assert_eq!(fields.response(), "Looking for traffic, Southwest 123");
    }

    #[test]
    fn test_crlf_line_endings() {
        let fields = parse("SENDER: PILOT\r\nTYPE: FUEL\r\nAIRCRAFT: JetBlue 456\r\n");
        assert_eq!(fields.sender(), "PILOT");
        assert_eq!(fields.message_type(), "FUEL");
        assert_eq!(fields.aircraft(), "JetBlue 456");
    }

    #[test]
    fn test_no_tags_at_all_yields_defaults() {
        let fields = parse("I am not sure what this transmission means.");
        assert_eq!(fields, ParsedFields::default());
    }

    #[test]
    fn test_partial_reply() {
        let fields = parse("SENDER: ATC\nTYPE: NAVIG");
        assert_eq!(fields.sender(), "ATC");
        assert_eq!(fields.message_type(), "NAVIG");
        assert_eq!(fields.aircraft(), "Not specified");
        assert_eq!(fields.response(), "No response generated");
    }

    #[test]
    fn test_failure_uses_detail() {
        let parser = ResponseParser::new();
        assert_eq!(parser.failure("Error: x").details(), "Error: x");
        assert_eq!(parser.failure("").details(), "No response received");
    }

    #[test]
    fn test_tag_word_inside_details_is_not_a_tag() {
        let fields = parse("SENDER: ATC\nDETAILS: pilot awaiting response: urgent\nRESPONSE: Roger, N1");
        assert_eq!(fields.details(), "pilot awaiting response: urgent");
        assert_eq!(fields.response(), "Roger, N1");
    }

    #[test]
    fn test_tags_must_start_a_line() {
        let fields = parse(
            "The sender: is unclear and the type: too\n  SENDER: PILOT\nTYPE: WEATHER\nAIRCRAFT: Delta 890",
        );
        assert_eq!(fields.sender(), "PILOT");
        assert_eq!(fields.message_type(), "WEATHER");
        assert_eq!(fields.aircraft(), "Delta 890");
    }

    #[test]
    fn test_mid_line_tag_alone_keeps_default() {
        let fields = parse("SENDER: PILOT\nDETAILS: no aircraft: given");
        assert_eq!(fields.aircraft(), "Not specified");
        assert_eq!(fields.details(), "no aircraft: given");
    }
}
