//! Argue-the-call table (fouls only).

/// Referee's response when the coach argues a send-off.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum ArgueTheCall {
    /// The coach is sent off along with the player.
    Ejected,
    /// The send-off stands.
    Ignored,
    /// The send-off is avoided.
    Swayed,
}

impl ArgueTheCall {
    /// 1 Ejected, 2–5 Ignored, 6 Swayed.
    pub fn from_d6(value: u8) -> Self {
        match value {
            0..=1 => Self::Ejected,
            2..=5 => Self::Ignored,
            _ => Self::Swayed,
        }
    }

    /// True when the player stays on the pitch.
    pub const fn avoids_send_off(&self) -> bool {
        matches!(self, Self::Swayed)
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Ejected => "\"You're Outta Here!\" The coach is ejected along with the player.",
            Self::Ignored => "\"I Don't Care!\" The referee ignores the argument.",
            Self::Swayed => "\"Well, When You Put It Like That...\" The referee relents.",
        }
    }
}
