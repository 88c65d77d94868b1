use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::SenderHint;

/// A labelled sample transmission for demos and smoke tests.
///
/// Serializes as `{"message", "sender_hint"}`; the label is the key it is
/// filed under in [`ExampleCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleMessage {
    #[serde(skip)]
    label: &'static str,
    message: &'static str,
    #[serde(rename = "sender_hint")]
    sender: SenderHint,
}

impl ExampleMessage {
    const fn new(label: &'static str, message: &'static str, sender: SenderHint) -> Self {
        Self {
            label,
            message,
            sender,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn sender(&self) -> SenderHint {
        self.sender
    }
}

const CATALOG: [ExampleMessage; 8] = [
    ExampleMessage::new(
        "Emergency (Pilot)",
        "Mayday, Mayday, Mayday, Airbus A320, engine fire, returning to airport.",
        SenderHint::Pilot,
    ),
    ExampleMessage::new(
        "Normal Request (Pilot)",
        "San Francisco Tower, United 456, ready for takeoff runway 28R.",
        SenderHint::Pilot,
    ),
    ExampleMessage::new(
        "Weather Request (Pilot)",
        "Approach, Delta 890, request weather at destination.",
        SenderHint::Pilot,
    ),
    ExampleMessage::new(
        "Fuel Priority (Pilot)",
        "Declaring minimum fuel, JetBlue 456, need priority handling.",
        SenderHint::Pilot,
    ),
    ExampleMessage::new(
        "Runway Clearance (ATC)",
        "United 456, runway 28R, cleared for takeoff.",
        SenderHint::Atc,
    ),
    ExampleMessage::new(
        "Traffic Alert (ATC)",
        "Southwest 123, traffic, 2 o'clock, 5 miles, Boeing 737.",
        SenderHint::Atc,
    ),
    ExampleMessage::new(
        "Landing Clearance (ATC)",
        "United 456, cleared to land runway 09L.",
        SenderHint::Atc,
    ),
    ExampleMessage::new(
        "Frequency Change (ATC)",
        "Delta 789, contact departure on 121.9.",
        SenderHint::Atc,
    ),
];

/// The example catalog, keyed by label and kept in display order.
#[derive(Debug, Clone, Copy)]
pub struct ExampleCatalog(&'static [ExampleMessage]);

impl ExampleCatalog {
    pub fn iter(&self) -> std::slice::Iter<'static, ExampleMessage> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an example by label, ignoring ASCII case and surrounding blanks.
    pub fn get(&self, label: &str) -> Option<&'static ExampleMessage> {
        let wanted = label.trim();
        self.0.iter().find(|e| e.label.eq_ignore_ascii_case(wanted))
    }
}

impl Serialize for ExampleCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for example in self.0 {
            map.serialize_entry(example.label, example)?;
        }
        map.end()
    }
}

pub fn example_messages() -> ExampleCatalog {
    ExampleCatalog(&CATALOG)
}

pub fn find_example(label: &str) -> Option<&'static ExampleMessage> {
    example_messages().get(label)
}
