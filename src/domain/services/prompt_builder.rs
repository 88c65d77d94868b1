use crate::domain::{ClassificationRequest, Field, Prompt, SenderHint};

const INTRO: &str = "\
You are an air traffic control message classification system. Analyse the \
aviation radio transmission below and classify it.";

const AUTO_SENDER_STEP: &str = "\
1. Decide whether the message comes from a PILOT or from ATC (Air Traffic Control). \
ATC transmissions issue instructions, clearances or information to an aircraft \
(e.g. 'cleared for takeoff', 'squawk 7700', 'contact tower'). Pilot transmissions \
read back instructions, make requests or give reports \
(e.g. 'ready for departure', 'requesting higher altitude', 'Mayday').";
const AUTO_RESPONSE_STEP: &str = "\
4. Provide the counterpart response: an ATC response if the sender is a PILOT, \
a PILOT response if the sender is ATC.";

const PILOT_SENDER_STEP: &str = "1. The message is from a PILOT.";
const PILOT_RESPONSE_STEP: &str = "4. Provide the appropriate ATC response to this pilot message.";

const ATC_SENDER_STEP: &str = "1. The message is from ATC (Air Traffic Control).";
const ATC_RESPONSE_STEP: &str = "4. Provide the appropriate PILOT response to this ATC message.";

const CLASSIFY_STEP: &str = "\
2. Classify the message type (EMERGENCY, NORMAL, WEATHER, TRAFFIC, NAVIGATION, \
FUEL, RUNWAY, COMMUNICATION).";
const EXTRACT_STEP: &str = "\
3. Extract the key information (aircraft call sign, runway, altitude, heading, frequency).";

const PILOT_RESPONSE_RULES: &str = "\
PILOT RESPONSE RULES:
- A pilot response is a concise read-back of the key instruction, never a long sentence.
- The flight number or call sign must always come at the end.
- If there is nothing specific to read back, reply exactly: COPY <call sign>.";

/// Worked ATC instruction / pilot read-back pairs.
const READ_BACK_EXAMPLES: [(&str, &str); 10] = [
    (
        "Airbus AI101 San Francisco Tower. Altimeter 2992 make straight in.",
        "Straight in runway 28R, Airbus AI101.",
    ),
    (
        "Cessna VT-YSU Approach, squawk 4307.",
        "Squawk 4307, Cessna YSU.",
    ),
    ("N300EP radio check.", "Five by five, N300EP."),
    (
        "Boeing BA202 altimeter 2992, departure to the west approved.",
        "Departure to the west approved, Boeing BA202.",
    ),
    (
        "Delta 789, contact departure on 121.9.",
        "Contact departure 121.9, Delta 789.",
    ),
    (
        "United 456, climb and maintain one zero thousand feet.",
        "Climbing to one zero thousand, United 456.",
    ),
    (
        "Southwest 123, turn right heading two five zero.",
        "Right heading two five zero, Southwest 123.",
    ),
    (
        "American 789, hold short of runway two eight right.",
        "Holding short two eight right, American 789.",
    ),
    (
        "N350KA you are off course, correct and resume own navigation.",
        "Correcting and resuming own navigation, N350KA.",
    ),
    ("Speedbird 15, standby.", "COPY Speedbird 15."),
];

const FORMAT_HINTS: [(Field, &str); 5] = [
    (Field::Sender, "[PILOT/ATC]"),
    (
        Field::Type,
        "[EMERGENCY/NORMAL/WEATHER/TRAFFIC/NAVIGATION/FUEL/RUNWAY/COMMUNICATION]",
    ),
    (Field::Aircraft, "[Call sign if mentioned]"),
    (Field::Details, "[Brief description]"),
    (
        Field::Response,
        "[ATC response if the sender is PILOT, PILOT response if the sender is ATC]",
    ),
];

/// Renders the classification instructions for one transmission.
///
/// Output depends only on the message and the sender hint, so the same
/// request always yields the same prompt. The message is embedded verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, message: &str, sender_hint: SenderHint) -> Prompt {
        let (sender_step, response_step) = match sender_hint {
            SenderHint::Auto => (AUTO_SENDER_STEP, AUTO_RESPONSE_STEP),
            SenderHint::Pilot => (PILOT_SENDER_STEP, PILOT_RESPONSE_STEP),
            SenderHint::Atc => (ATC_SENDER_STEP, ATC_RESPONSE_STEP),
        };

        let mut text = String::with_capacity(2048 + message.len());
        text.push_str(INTRO);
        text.push_str("\n\n");
        text.push_str(&format!("Message: \"{message}\"\n"));
        text.push_str(&format!("Sender Type: {sender_hint}\n\n"));

        text.push_str("Your task:\n");
        for step in [sender_step, CLASSIFY_STEP, EXTRACT_STEP, response_step] {
            text.push_str(step);
            text.push('\n');
        }
        text.push('\n');

        text.push_str(PILOT_RESPONSE_RULES);
        text.push_str("\n\nExamples:\n");
        for (atc, pilot) in READ_BACK_EXAMPLES {
            text.push_str(&format!("- ATC: {atc}\n- PILOT: {pilot}\n"));
        }
        text.push('\n');

        text.push_str("Respond in exactly this format, one tag per line and nothing else:\n");
        for (field, hint) in FORMAT_HINTS {
            text.push_str(&format!("{}: {hint}\n", field.tag()));
        }

        Prompt::new(text)
    }

    pub fn build_request(&self, request: &ClassificationRequest) -> Prompt {
        self.build(request.message(), request.sender_hint())
    }
}
