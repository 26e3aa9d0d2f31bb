use std::time::Duration;
use tracing::warn;

use crate::output::{Message, QuizOutput};

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub time_limit: Duration,
    pub warning_delay: Duration,
    pub startup_delay: Duration,
    pub shuffle: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_limit: Duration::from_secs(30),
            warning_delay: Duration::from_secs(15),
            startup_delay: Duration::from_secs(3),
            shuffle: false,
        }
    }
}

impl Settings {
    /// Builds settings for a per-question time limit given in whole seconds.
    ///
    /// Non-positive limits fall back to `DEFAULT_TIME_LIMIT` and the player is
    /// warned. The half-time warning is scheduled at `seconds / 2`, rounded
    /// down, so a one second limit warns right away.
    pub fn from_time_limit<O: QuizOutput>(seconds: i64, output: &O) -> Self {
        let seconds = if seconds <= 0 {
            warn!(
                "Invalid time limit of {} seconds, using {:?} instead",
                seconds, DEFAULT_TIME_LIMIT
            );
            output.say(&Message::InvalidTimeLimit {
                requested: seconds,
                fallback: DEFAULT_TIME_LIMIT,
            });
            DEFAULT_TIME_LIMIT.as_secs()
        } else {
            seconds as u64
        };
        Settings {
            time_limit: Duration::from_secs(seconds),
            warning_delay: Duration::from_secs(seconds / 2),
            ..Default::default()
        }
    }

    pub fn time_remaining_at_warning(&self) -> Duration {
        self.time_limit.saturating_sub(self.warning_delay)
    }
}
