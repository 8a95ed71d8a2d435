//! Block die faces.

/// One face of a block die.
///
/// A block die is a d6 with five distinct outcomes; push is printed twice.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BlockFace {
    /// Attacker down.
    Skull,
    /// Both players down.
    BothDown,
    /// Defender down.
    Pow,
    /// Defender down unless they dodge.
    Stumble,
    /// Defender pushed back.
    Push,
}

/// Face printed on each pip of the physical die, pip 1 first.
const PIP_FACES: [BlockFace; 6] = [
    BlockFace::Skull,
    BlockFace::BothDown,
    BlockFace::Pow,
    BlockFace::Stumble,
    BlockFace::Push,
    BlockFace::Push,
];

impl BlockFace {
    /// Maps a d6 pip onto its block face. Out-of-range pips are clamped.
    pub fn from_pip(pip: u8) -> Self {
        PIP_FACES[usize::from(pip.clamp(1, 6) - 1)]
    }

    /// Number of die sides showing this face.
    pub const fn sides(&self) -> u8 {
        match self {
            Self::Push => 2,
            _ => 1,
        }
    }

    /// Long-run share of this face on a fair die, in percent.
    pub fn theoretical_percent(&self) -> f64 {
        f64::from(self.sides()) / 6.0 * 100.0
    }

    /// Index into face-keyed arrays.
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Skull => "Skull",
            Self::BothDown => "Both Down",
            Self::Pow => "POW!",
            Self::Stumble => "Stumble",
            Self::Push => "Push",
        }
    }

    /// Display glyph used by front ends.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Skull => "💀",
            Self::BothDown => "⚔️",
            Self::Pow => "💥",
            Self::Stumble => "❗",
            Self::Push => "↗️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn pips_map_one_to_one_except_push() {
        assert_eq!(BlockFace::from_pip(1), BlockFace::Skull);
        assert_eq!(BlockFace::from_pip(2), BlockFace::BothDown);
        assert_eq!(BlockFace::from_pip(3), BlockFace::Pow);
        assert_eq!(BlockFace::from_pip(4), BlockFace::Stumble);
        assert_eq!(BlockFace::from_pip(5), BlockFace::Push);
        assert_eq!(BlockFace::from_pip(6), BlockFace::Push);
    }

    #[test]
    fn sides_cover_the_whole_die() {
        let total: u8 = BlockFace::iter().map(|face| face.sides()).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("both-down".parse::<BlockFace>(), Ok(BlockFace::BothDown));
        assert_eq!("POW".parse::<BlockFace>(), Ok(BlockFace::Pow));
        assert_eq!(BlockFace::Stumble.to_string(), "stumble");
    }
}
