use serde::Deserialize;

/// Display format for computed record times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// `h:mm AM/PM`, matching the en-US rendering of the original UI.
    TwelveHour,
    /// `HH:MM`.
    TwentyFourHour,
}

impl TimeFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwelveHour => "twelve_hour",
            Self::TwentyFourHour => "twenty_four_hour",
        }
    }
}

impl std::fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
