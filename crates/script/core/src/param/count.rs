//! Which on/off transitions a counting behavior reacts to.

/// Set of message kinds that advance a counter.
///
/// Accepts the numeric forms `0`..`3` or the names `None`, `On`, `Off` and
/// `Both` in any case.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::FromRepr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum CountMode {
    #[strum(serialize = "None")]
    Nothing = 0,
    #[strum(serialize = "On")]
    TurnOn = 1,
    #[strum(serialize = "Off")]
    TurnOff = 2,
    #[default]
    #[strum(serialize = "Both")]
    Both = 3,
}

impl CountMode {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        match text.parse::<u8>() {
            Ok(index) => Self::from_repr(index),
            Err(_) => text.parse().ok(),
        }
    }

    pub fn counts_on(self) -> bool {
        matches!(self, Self::TurnOn | Self::Both)
    }

    pub fn counts_off(self) -> bool {
        matches!(self, Self::TurnOff | Self::Both)
    }
}
