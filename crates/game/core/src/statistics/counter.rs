//! Named statistics counters.
//!
//! Counter names double as the keys of the persisted statistics record, so
//! renaming a variant's serialized name is a schema change.

use crate::dice::BlockFace;
use crate::rules::{CasualtyResult, InjuryResult};

/// One monotonically increasing statistics counter.
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
#[strum(serialize_all = "snake_case")]
pub enum Counter {
    BlockSkull,
    BlockBothDown,
    BlockPow,
    BlockStumble,
    BlockPush,
    #[strum(serialize = "d6_1")]
    D6One,
    #[strum(serialize = "d6_2")]
    D6Two,
    #[strum(serialize = "d6_3")]
    D6Three,
    #[strum(serialize = "d6_4")]
    D6Four,
    #[strum(serialize = "d6_5")]
    D6Five,
    #[strum(serialize = "d6_6")]
    D6Six,
    #[strum(serialize = "two_d6_2")]
    TwoD6Sum2,
    #[strum(serialize = "two_d6_3")]
    TwoD6Sum3,
    #[strum(serialize = "two_d6_4")]
    TwoD6Sum4,
    #[strum(serialize = "two_d6_5")]
    TwoD6Sum5,
    #[strum(serialize = "two_d6_6")]
    TwoD6Sum6,
    #[strum(serialize = "two_d6_7")]
    TwoD6Sum7,
    #[strum(serialize = "two_d6_8")]
    TwoD6Sum8,
    #[strum(serialize = "two_d6_9")]
    TwoD6Sum9,
    #[strum(serialize = "two_d6_10")]
    TwoD6Sum10,
    #[strum(serialize = "two_d6_11")]
    TwoD6Sum11,
    #[strum(serialize = "two_d6_12")]
    TwoD6Sum12,
    ArmourBroken,
    ArmourHeld,
    InjuryStunned,
    InjuryKnockedOut,
    InjuryBadlyHurt,
    InjuryCasualty,
    CasualtyBadlyHurt,
    CasualtyMissNextGame,
    CasualtyNigglingInjury,
    CasualtyLastingInjury,
    CasualtyDead,
    ActionsStarted,
    ActionsCompleted,
    TotalRolls,
}

pub(crate) const BLOCK: [Counter; 5] = [
    Counter::BlockSkull,
    Counter::BlockBothDown,
    Counter::BlockPow,
    Counter::BlockStumble,
    Counter::BlockPush,
];

pub(crate) const D6: [Counter; 6] = [
    Counter::D6One,
    Counter::D6Two,
    Counter::D6Three,
    Counter::D6Four,
    Counter::D6Five,
    Counter::D6Six,
];

pub(crate) const TWO_D6: [Counter; 11] = [
    Counter::TwoD6Sum2,
    Counter::TwoD6Sum3,
    Counter::TwoD6Sum4,
    Counter::TwoD6Sum5,
    Counter::TwoD6Sum6,
    Counter::TwoD6Sum7,
    Counter::TwoD6Sum8,
    Counter::TwoD6Sum9,
    Counter::TwoD6Sum10,
    Counter::TwoD6Sum11,
    Counter::TwoD6Sum12,
];

pub(crate) const INJURY: [Counter; 4] = [
    Counter::InjuryStunned,
    Counter::InjuryKnockedOut,
    Counter::InjuryBadlyHurt,
    Counter::InjuryCasualty,
];

pub(crate) const CASUALTY: [Counter; 5] = [
    Counter::CasualtyBadlyHurt,
    Counter::CasualtyMissNextGame,
    Counter::CasualtyNigglingInjury,
    Counter::CasualtyLastingInjury,
    Counter::CasualtyDead,
];

impl Counter {
    pub const fn block(face: BlockFace) -> Self {
        BLOCK[face.index()]
    }

    /// Counter for a single d6 face; `None` outside `1..=6`.
    pub fn d6(value: u8) -> Option<Self> {
        let index = usize::from(value).checked_sub(1)?;
        D6.get(index).copied()
    }

    /// Counter for a 2d6 sum; `None` outside `2..=12`.
    pub fn two_d6(sum: u8) -> Option<Self> {
        let index = usize::from(sum).checked_sub(2)?;
        TWO_D6.get(index).copied()
    }

    pub const fn armour(broken: bool) -> Self {
        if broken {
            Self::ArmourBroken
        } else {
            Self::ArmourHeld
        }
    }

    pub const fn injury(result: InjuryResult) -> Self {
        match result {
            InjuryResult::Stunned => Self::InjuryStunned,
            InjuryResult::KnockedOut => Self::InjuryKnockedOut,
            InjuryResult::BadlyHurt => Self::InjuryBadlyHurt,
            InjuryResult::Casualty => Self::InjuryCasualty,
        }
    }

    pub const fn casualty(result: CasualtyResult) -> Self {
        match result {
            CasualtyResult::BadlyHurt => Self::CasualtyBadlyHurt,
            CasualtyResult::MissNextGame => Self::CasualtyMissNextGame,
            CasualtyResult::NigglingInjury => Self::CasualtyNigglingInjury,
            CasualtyResult::LastingInjury => Self::CasualtyLastingInjury,
            CasualtyResult::Dead => Self::CasualtyDead,
        }
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn names_are_stable_keys() {
        assert_eq!(Counter::BlockBothDown.to_string(), "block_both_down");
        assert_eq!(Counter::D6Four.to_string(), "d6_4");
        assert_eq!(Counter::TwoD6Sum12.to_string(), "two_d6_12");
        assert_eq!("total_rolls".parse::<Counter>(), Ok(Counter::TotalRolls));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<String> = Counter::iter().map(|counter| counter.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Counter::COUNT);
    }

    #[test]
    fn dice_lookups_reject_out_of_range() {
        assert_eq!(Counter::d6(0), None);
        assert_eq!(Counter::d6(7), None);
        assert_eq!(Counter::d6(6), Some(Counter::D6Six));
        assert_eq!(Counter::two_d6(1), None);
        assert_eq!(Counter::two_d6(13), None);
        assert_eq!(Counter::two_d6(7), Some(Counter::TwoD6Sum7));
    }

    #[test]
    fn block_lookup_follows_face_order() {
        assert_eq!(Counter::block(BlockFace::Push), Counter::BlockPush);
        assert_eq!(Counter::block(BlockFace::Skull), Counter::BlockSkull);
    }
}
