use clap::{Subcommand, ValueEnum};

use crate::domain::{SenderHint, SuccessPolicy};

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a transmission and draft the counterpart response
    Classify {
        /// Transmission text; may be omitted when --example is given
        message: Option<String>,

        /// Who sent the transmission (auto, pilot, atc); overrides the example's sender
        #[arg(short, long)]
        sender: Option<SenderHint>,

        /// Classify a catalog example by label (see `examples`)
        #[arg(short, long)]
        example: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check that the chat endpoint is reachable with the configured model
    TestConnection {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the built-in example transmissions
    Examples {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Report success whenever a reply was parsed, even a failed round-trip
    #[default]
    Structural,
    /// Report failure whenever the chat request failed
    ClientOutcome,
}

impl From<PolicyArg> for SuccessPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Structural => SuccessPolicy::Structural,
            PolicyArg::ClientOutcome => SuccessPolicy::ClientOutcome,
        }
    }
}
