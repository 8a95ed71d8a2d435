//! Skills, block-face transforms and roll modifiers.
//!
//! A skill is active iff it is present in its side's [`SkillSet`]; there are
//! no stacking rules beyond "presence implies effect".

use arrayvec::ArrayVec;
use bitflags::bitflags;

use super::RuleError;
use crate::dice::BlockFace;

bitflags! {
    /// Skills held by one side of the action.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SkillSet: u16 {
        const BLOCK       = 1 << 0;
        const WRESTLE     = 1 << 1;
        const MIGHTY_BLOW = 1 << 2;
        const PILING_ON   = 1 << 3;
        const DECAY       = 1 << 4;
        const DODGE       = 1 << 5;
        const THICK_SKULL = 1 << 6;
    }
}

/// Individual skill identifier, as typed by the user.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Skill {
    Block,
    Wrestle,
    MightyBlow,
    PilingOn,
    Decay,
    Dodge,
    ThickSkull,
}

/// Which player of the action holds a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Attacker,
    Defender,
}

impl Skill {
    pub const fn flag(&self) -> SkillSet {
        match self {
            Self::Block => SkillSet::BLOCK,
            Self::Wrestle => SkillSet::WRESTLE,
            Self::MightyBlow => SkillSet::MIGHTY_BLOW,
            Self::PilingOn => SkillSet::PILING_ON,
            Self::Decay => SkillSet::DECAY,
            Self::Dodge => SkillSet::DODGE,
            Self::ThickSkull => SkillSet::THICK_SKULL,
        }
    }

    /// Side on which the skill takes effect.
    pub const fn side(&self) -> Side {
        match self {
            Self::Block | Self::Wrestle | Self::MightyBlow | Self::PilingOn | Self::Decay => {
                Side::Attacker
            }
            Self::Dodge | Self::ThickSkull => Side::Defender,
        }
    }

    /// Short rules reminder.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Block => "Both Down becomes Push for the attacker",
            Self::Wrestle => "Push becomes Both Down",
            Self::MightyBlow => "+1 to injury and casualty rolls",
            Self::PilingOn => "+1 to the armour OR the injury roll",
            Self::Decay => "+1 to casualty rolls",
            Self::Dodge => "Stumble becomes Push for the defender",
            Self::ThickSkull => "+1 to armour value",
        }
    }
}

impl From<Skill> for SkillSet {
    fn from(skill: Skill) -> Self {
        skill.flag()
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SkillSet::empty(), |set, skill| set | skill.flag())
    }
}

/// Skill sets of both players in the action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skills {
    pub attacker: SkillSet,
    pub defender: SkillSet,
}

impl Skills {
    pub const NONE: Self = Self {
        attacker: SkillSet::empty(),
        defender: SkillSet::empty(),
    };

    pub fn new(attacker: SkillSet, defender: SkillSet) -> Self {
        Self { attacker, defender }
    }

    #[must_use]
    pub fn with_attacker(mut self, skill: Skill) -> Self {
        self.attacker |= skill.flag();
        self
    }

    #[must_use]
    pub fn with_defender(mut self, skill: Skill) -> Self {
        self.defender |= skill.flag();
        self
    }

    /// Adds or removes `skill` on `side`.
    pub fn toggle(&mut self, side: Side, skill: Skill) {
        self.side_mut(side).toggle(skill.flag());
    }

    pub fn side(&self, side: Side) -> SkillSet {
        match side {
            Side::Attacker => self.attacker,
            Side::Defender => self.defender,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SkillSet {
        match side {
            Side::Attacker => &mut self.attacker,
            Side::Defender => &mut self.defender,
        }
    }

    /// True when `skill` is present on the side where it takes effect.
    pub fn active(&self, skill: Skill) -> bool {
        self.side(skill.side()).contains(skill.flag())
    }
}

/// A flat bonus granted by a skill to one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub skill: Skill,
    pub value: u8,
}

impl Modifier {
    pub const fn plus_one(skill: Skill) -> Self {
        Self { skill, value: 1 }
    }
}

impl core::fmt::Display for Modifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} +{}", self.skill, self.value)
    }
}

/// Collects `+1` modifiers for every active skill in `candidates`.
pub(crate) fn collect_modifiers<const N: usize>(
    skills: &Skills,
    candidates: &[Skill],
) -> ArrayVec<Modifier, N> {
    candidates
        .iter()
        .filter(|skill| skills.active(**skill))
        .map(|skill| Modifier::plus_one(*skill))
        .take(N)
        .collect()
}

/// Sum of modifier values.
pub(crate) fn modifier_total(modifiers: &[Modifier]) -> u8 {
    modifiers.iter().map(|modifier| modifier.value).sum()
}

/// A skill that rewrites one rolled block face into another.
#[derive(Clone, Copy, Debug)]
struct FaceTransform {
    skill: Skill,
    from: BlockFace,
    to: BlockFace,
}

const FACE_TRANSFORMS: [FaceTransform; 3] = [
    FaceTransform {
        skill: Skill::Block,
        from: BlockFace::BothDown,
        to: BlockFace::Push,
    },
    FaceTransform {
        skill: Skill::Wrestle,
        from: BlockFace::Push,
        to: BlockFace::BothDown,
    },
    FaceTransform {
        skill: Skill::Dodge,
        from: BlockFace::Stumble,
        to: BlockFace::Push,
    },
];

/// Applies block-face skill transforms to the face chosen from a roll.
///
/// Every transform is matched against the originally rolled face and the
/// output of one is never fed into another, so Block and Wrestle together
/// still turn Both Down into Push and Push into Both Down. Two active skills
/// triggering on the same rolled face is ambiguous and yields
/// [`RuleError::ConflictingSkillTransform`].
pub fn resolve_face(face: BlockFace, skills: &Skills) -> Result<BlockFace, RuleError> {
    let mut firing = FACE_TRANSFORMS
        .iter()
        .filter(|transform| transform.from == face && skills.active(transform.skill));
    let Some(transform) = firing.next() else {
        return Ok(face);
    };

    if let Some(other) = firing.next() {
        return Err(RuleError::ConflictingSkillTransform {
            face,
            first: transform.skill,
            second: other.skill,
        });
    }

    Ok(transform.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn block_turns_both_down_into_push() {
        let skills = Skills::NONE.with_attacker(Skill::Block);
        assert_eq!(resolve_face(BlockFace::BothDown, &skills), Ok(BlockFace::Push));
        assert_eq!(
            resolve_face(BlockFace::BothDown, &Skills::NONE),
            Ok(BlockFace::BothDown)
        );
    }

    #[test]
    fn dodge_turns_stumble_into_push() {
        let skills = Skills::NONE.with_defender(Skill::Dodge);
        assert_eq!(resolve_face(BlockFace::Stumble, &skills), Ok(BlockFace::Push));
        assert_eq!(
            resolve_face(BlockFace::Stumble, &Skills::NONE),
            Ok(BlockFace::Stumble)
        );
    }

    #[test]
    fn wrestle_turns_push_into_both_down() {
        let skills = Skills::NONE.with_attacker(Skill::Wrestle);
        assert_eq!(resolve_face(BlockFace::Push, &skills), Ok(BlockFace::BothDown));
    }

    #[test]
    fn skill_on_the_wrong_side_has_no_effect() {
        let skills = Skills::NONE.with_attacker(Skill::Dodge);
        assert_eq!(resolve_face(BlockFace::Stumble, &skills), Ok(BlockFace::Stumble));
    }

    #[test]
    fn untouched_faces_pass_through() {
        let skills = Skills::NONE
            .with_attacker(Skill::Block)
            .with_defender(Skill::Dodge);
        assert_eq!(resolve_face(BlockFace::Pow, &skills), Ok(BlockFace::Pow));
        assert_eq!(resolve_face(BlockFace::Skull, &skills), Ok(BlockFace::Skull));
    }

    #[test]
    fn block_and_wrestle_each_fire_off_the_rolled_face() {
        let skills = Skills::NONE
            .with_attacker(Skill::Block)
            .with_attacker(Skill::Wrestle);

        assert_eq!(resolve_face(BlockFace::BothDown, &skills), Ok(BlockFace::Push));
        assert_eq!(resolve_face(BlockFace::Push, &skills), Ok(BlockFace::BothDown));
    }

    #[test]
    fn dodge_is_not_chained_into_wrestle() {
        let skills = Skills::NONE
            .with_attacker(Skill::Wrestle)
            .with_defender(Skill::Dodge);
        assert_eq!(resolve_face(BlockFace::Stumble, &skills), Ok(BlockFace::Push));
        assert_eq!(resolve_face(BlockFace::Push, &skills), Ok(BlockFace::BothDown));
    }

    #[test]
    fn every_skill_has_a_distinct_flag() {
        let all: SkillSet = Skill::iter().collect();
        assert_eq!(all.bits().count_ones() as usize, Skill::iter().count());
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut skills = Skills::NONE;
        skills.toggle(Side::Defender, Skill::ThickSkull);
        assert!(skills.active(Skill::ThickSkull));
        skills.toggle(Side::Defender, Skill::ThickSkull);
        assert!(!skills.active(Skill::ThickSkull));
    }

    #[test]
    fn parses_skill_names() {
        assert_eq!("mighty-blow".parse::<Skill>(), Ok(Skill::MightyBlow));
        assert_eq!("Thick-Skull".parse::<Skill>(), Ok(Skill::ThickSkull));
    }
}
