use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageIndicator {
    Emergency,
    Traffic,
    Fuel,
    Runway,
    Taxi,
    Takeoff,
    Landing,
}

impl MessageIndicator {
    pub const ALL: [MessageIndicator; 7] = [
        MessageIndicator::Emergency,
        MessageIndicator::Traffic,
        MessageIndicator::Fuel,
        MessageIndicator::Runway,
        MessageIndicator::Taxi,
        MessageIndicator::Takeoff,
        MessageIndicator::Landing,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            MessageIndicator::Emergency => "EMERGENCY",
            MessageIndicator::Traffic => "TRAFFIC",
            MessageIndicator::Fuel => "FUEL",
            MessageIndicator::Runway => "RUNWAY",
            MessageIndicator::Taxi => "TAXI",
            MessageIndicator::Takeoff => "TAKEOFF",
            MessageIndicator::Landing => "LANDING",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageIndicator::Emergency => "Emergency",
            MessageIndicator::Traffic => "Traffic",
            MessageIndicator::Fuel => "Fuel",
            MessageIndicator::Runway => "Runway",
            MessageIndicator::Taxi => "Taxi",
            MessageIndicator::Takeoff => "Takeoff",
            MessageIndicator::Landing => "Landing",
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, MessageIndicator::Emergency)
    }

    /// Every indicator whose keyword occurs in `message_type`, ignoring case.
    /// A compound type such as `RUNWAY/TAKEOFF` lights several indicators.
    pub fn matching(message_type: &str) -> Vec<MessageIndicator> {
        let normalized = message_type.to_uppercase();
        Self::ALL
            .into_iter()
            .filter(|i| normalized.contains(i.keyword()))
            .collect()
    }
}

impl std::fmt::Display for MessageIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which counterpart the generated response speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseRole {
    /// The message came from a pilot, so the response is ATC's.
    AtcResponse,
    /// The message came from ATC, so the response is the pilot's read-back.
    PilotResponse,
    Recommended,
}

impl ResponseRole {
    pub fn for_sender(sender: &str) -> Self {
        match sender.trim().to_uppercase().as_str() {
            "PILOT" => ResponseRole::AtcResponse,
            "ATC" => ResponseRole::PilotResponse,
            _ => ResponseRole::Recommended,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResponseRole::AtcResponse => "ATC Response",
            ResponseRole::PilotResponse => "Pilot Response",
            ResponseRole::Recommended => "Recommended Response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_substring_and_case_insensitive() {
        assert_eq!(
            MessageIndicator::matching("emergency"),
            vec![MessageIndicator::Emergency]
        );
        assert_eq!(
            MessageIndicator::matching("RUNWAY/TAKEOFF"),
            vec![MessageIndicator::Runway, MessageIndicator::Takeoff]
        );
        assert!(MessageIndicator::matching("NORMAL").is_empty());
        assert!(MessageIndicator::matching("Unknown").is_empty());
    }

    #[test]
    fn test_only_emergency_is_alert() {
        let alerts: Vec<_> = MessageIndicator::ALL
            .into_iter()
            .filter(MessageIndicator::is_alert)
            .collect();
        assert_eq!(alerts, vec![MessageIndicator::Emergency]);
    }

    #[test]
    fn test_response_role_for_sender() {
        assert_eq!(ResponseRole::for_sender("PILOT"), ResponseRole::AtcResponse);
        assert_eq!(ResponseRole::for_sender("atc"), ResponseRole::PilotResponse);
        assert_eq!(ResponseRole::for_sender("Unknown"), ResponseRole::Recommended);
        assert_eq!(ResponseRole::AtcResponse.title(), "ATC Response");
    }
}
