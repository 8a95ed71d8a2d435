//! Immutable roll records.

use arrayvec::ArrayVec;

use super::BlockFace;

/// Which dice produced a [`DieRoll`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum DieKind {
    /// One to three block dice.
    Block,
    /// A single d6.
    PlainD6,
    /// Two d6 summed (armour, injury).
    TwoD6,
    /// A single d16 for the casualty table.
    CasualtyD16,
}

/// Pip values of one roll together with their kind.
///
/// Block rolls keep the raw d6 pips; [`DieRoll::faces`] maps them onto
/// [`BlockFace`]s. The casualty die stores its 1..=16 value as a single pip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DieRoll {
    kind: DieKind,
    pips: ArrayVec<u8, 3>,
}

impl DieRoll {
    pub(crate) fn new(kind: DieKind, pips: ArrayVec<u8, 3>) -> Self {
        Self { kind, pips }
    }

    pub fn kind(&self) -> DieKind {
        self.kind
    }

    pub fn pips(&self) -> &[u8] {
        &self.pips
    }

    /// Sum of all pips.
    pub fn total(&self) -> u8 {
        self.pips.iter().sum()
    }

    /// First (or only) pip.
    pub fn value(&self) -> u8 {
        self.pips.first().copied().unwrap_or_default()
    }

    /// Both dice of a two-d6 roll.
    pub fn pair(&self) -> Option<(u8, u8)> {
        match (self.kind, self.pips.as_slice()) {
            (DieKind::TwoD6, [first, second]) => Some((*first, *second)),
            _ => None,
        }
    }

    /// True when a two-d6 roll shows the same value on both dice.
    pub fn is_double(&self) -> bool {
        self.pair().is_some_and(|(first, second)| first == second)
    }

    /// Block faces of a block roll; empty for every other kind.
    pub fn faces(&self) -> ArrayVec<BlockFace, 3> {
        if self.kind != DieKind::Block {
            return ArrayVec::new();
        }
        self.pips.iter().map(|&pip| BlockFace::from_pip(pip)).collect()
    }
}

impl core::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            DieKind::Block => {
                let faces = self.faces();
                for (index, face) in faces.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{face}")?;
                }
                Ok(())
            }
            DieKind::TwoD6 => match self.pair() {
                Some((first, second)) => write!(f, "{first} + {second} = {}", self.total()),
                None => write!(f, "{}", self.total()),
            },
            DieKind::PlainD6 | DieKind::CasualtyD16 => write!(f, "{}", self.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(kind: DieKind, pips: &[u8]) -> DieRoll {
        DieRoll::new(kind, pips.iter().copied().collect())
    }

    #[test]
    fn two_d6_exposes_pair_and_total() {
        let roll = roll(DieKind::TwoD6, &[3, 5]);
        assert_eq!(roll.pair(), Some((3, 5)));
        assert_eq!(roll.total(), 8);
        assert!(!roll.is_double());
        assert_eq!(roll.to_string(), "3 + 5 = 8");
    }

    #[test]
    fn doubles_are_detected() {
        assert!(roll(DieKind::TwoD6, &[4, 4]).is_double());
        assert!(!roll(DieKind::PlainD6, &[4]).is_double());
    }

    #[test]
    fn block_roll_maps_faces() {
        let roll = roll(DieKind::Block, &[1, 6]);
        assert_eq!(
            roll.faces().as_slice(),
            &[BlockFace::Skull, BlockFace::Push]
        );
        assert_eq!(roll.to_string(), "skull, push");
    }

    #[test]
    fn non_block_roll_has_no_faces() {
        assert!(roll(DieKind::CasualtyD16, &[12]).faces().is_empty());
    }
}
