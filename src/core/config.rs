//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::contact::{DEFAULT_MAX_MESSAGE_LEN, SIMULATED_DELAY};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address contact messages are meant for, included in the log line
    /// Example: jagan05@vt.edu
    pub contact_inbox: Option<String>,

    /// Artificial latency added to every contact submission, in milliseconds.
    /// Defaults to [`SIMULATED_DELAY`]; 0 disables it.
    pub contact_simulated_delay_ms: u64,

    /// Longest accepted contact message, in characters
    pub contact_max_message_len: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            contact_inbox: std::env::var("CONTACT_INBOX").ok(),
            contact_simulated_delay_ms: parse_or(
                std::env::var("CONTACT_SIMULATED_DELAY_MS").ok(),
                SIMULATED_DELAY.as_millis() as u64,
            ),
            contact_max_message_len: parse_or(
                std::env::var("CONTACT_MAX_MESSAGE_LEN").ok(),
                DEFAULT_MAX_MESSAGE_LEN,
            ),
        }
    }

    /// Check if a contact inbox is configured
    pub fn has_contact_inbox(&self) -> bool {
        self.contact_inbox.is_some()
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
