//! Armour roll resolution.

use arrayvec::ArrayVec;

use super::skills::{collect_modifiers, modifier_total};
use super::{Modifier, RuleError, Skill, Skills};
use crate::config::GameConfig;

/// Resolved armour roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourResult {
    pub dice: (u8, u8),
    /// Bonuses added to the dice (Piling On).
    pub modifiers: ArrayVec<Modifier, 2>,
    pub total: u8,
    /// Armour value as entered.
    pub armour_value: u8,
    /// Armour value after defender skills (Thick Skull).
    pub target: u8,
    pub broken: bool,
}

impl ArmourResult {
    pub fn used_piling_on(&self) -> bool {
        self.modifiers
            .iter()
            .any(|modifier| modifier.skill == Skill::PilingOn)
    }
}

/// Accepts armour values in `1..=12`.
pub fn validate_armour_value(armour_value: u8) -> Result<u8, RuleError> {
    if (GameConfig::MIN_ARMOUR_VALUE..=GameConfig::MAX_ARMOUR_VALUE).contains(&armour_value) {
        Ok(armour_value)
    } else {
        Err(RuleError::InvalidArmourValue(armour_value))
    }
}

/// Armour value the roll must reach; Thick Skull raises it by one.
pub fn effective_armour(armour_value: u8, skills: &Skills) -> u8 {
    if skills.active(Skill::ThickSkull) {
        armour_value + 1
    } else {
        armour_value
    }
}

/// Armour breaks when the modified total meets or beats the armour value.
pub fn armour_broken(total: u8, armour_value: u8) -> bool {
    total >= armour_value
}

/// Resolves an armour roll.
///
/// `piling_on` requests the attacker's Piling On bonus for this roll; it only
/// applies when the attacker actually has the skill.
pub fn resolve_armour(
    dice: (u8, u8),
    armour_value: u8,
    skills: &Skills,
    piling_on: bool,
) -> ArmourResult {
    let modifiers: ArrayVec<Modifier, 2> = if piling_on {
        collect_modifiers(skills, &[Skill::PilingOn])
    } else {
        ArrayVec::new()
    };
    let total = dice.0 + dice.1 + modifier_total(&modifiers);
    let target = effective_armour(armour_value, skills);

    ArmourResult {
        dice,
        modifiers,
        total,
        armour_value,
        target,
        broken: armour_broken(total, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_the_value_breaks() {
        assert!(armour_broken(9, 9));
        assert!(!armour_broken(8, 9));
        assert!(armour_broken(12, 9));
    }

    #[test]
    fn armour_value_range_is_enforced() {
        assert_eq!(validate_armour_value(0), Err(RuleError::InvalidArmourValue(0)));
        assert_eq!(validate_armour_value(13), Err(RuleError::InvalidArmourValue(13)));
        assert_eq!(validate_armour_value(1), Ok(1));
        assert_eq!(validate_armour_value(12), Ok(12));
    }

    #[test]
    fn thick_skull_raises_effective_armour() {
        let skills = Skills::NONE.with_defender(Skill::ThickSkull);
        assert_eq!(effective_armour(9, &skills), 10);
        assert_eq!(effective_armour(9, &Skills::NONE), 9);

        let result = resolve_armour((4, 5), 9, &skills, false);
        assert_eq!(result.target, 10);
        assert!(!result.broken);
    }

    #[test]
    fn piling_on_adds_one_when_held_and_requested() {
        let skills = Skills::NONE.with_attacker(Skill::PilingOn);

        let with = resolve_armour((4, 4), 9, &skills, true);
        assert_eq!(with.total, 9);
        assert!(with.broken);
        assert!(with.used_piling_on());

        let without = resolve_armour((4, 4), 9, &skills, false);
        assert_eq!(without.total, 8);
        assert!(!without.broken);
    }

    #[test]
    fn piling_on_without_the_skill_is_ignored() {
        let result = resolve_armour((4, 4), 9, &Skills::NONE, true);
        assert_eq!(result.total, 8);
        assert!(!result.used_piling_on());
    }
}
