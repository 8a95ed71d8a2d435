use strum::IntoEnumIterator;

use super::SessionError;
use crate::action::{
    ActionRecord, ActionStateMachine, ActionType, ApothecaryDecision, Branch, Operation, Phase,
    PhaseError,
};
use crate::config::GameConfig;
use crate::dice::{BlockFace, DiceEngine, DieRoll, validate_dice_count};
use crate::log::{ActionLogEntry, LogIcon, LogPayload};
use crate::rules::{
    ArgueTheCall, ArmourResult, CasualtyResult, CasualtyRoll, InjuryRoll, LastingInjury, Modifier,
    RuleError, Side, Skill, Skills, resolve_armour, resolve_casualty, resolve_face, resolve_injury,
    validate_armour_value,
};
use crate::statistics::{FaceReport, RollStatistics};

/// One player's session: seeded dice, the active action, statistics and log.
///
/// The session is single-threaded and synchronous. Only one action is in
/// flight at a time and each operation completes its phase transition before
/// returning.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSession {
    config: GameConfig,
    dice: DiceEngine,
    machine: ActionStateMachine,
    statistics: RollStatistics,
    log: Vec<ActionLogEntry>,
    last_roll: Option<DieRoll>,
    apothecary_available: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    /// Creates an unseeded session with empty statistics.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            dice: DiceEngine::new(),
            machine: ActionStateMachine::new(),
            statistics: RollStatistics::new(),
            log: Vec::new(),
            last_roll: None,
            apothecary_available: true,
        }
    }

    /// Replaces the statistics this session accumulates into.
    #[must_use]
    pub fn with_statistics(mut self, statistics: RollStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    // ===== inbound operations =====

    /// Seeds the dice and clears any action in flight.
    ///
    /// Statistics and the log carry over; the apothecary becomes available
    /// again.
    pub fn start_session(&mut self, seed_word: &str) {
        self.dice.seed(seed_word);
        self.machine.abandon();
        self.last_roll = None;
        self.apothecary_available = true;
        self.push(
            Phase::ActionSelect,
            LogIcon::Session,
            format!("Game started with seed word: {seed_word}"),
            None,
        );
    }

    pub fn select_action(&mut self, action: ActionType) -> Result<Phase, SessionError> {
        let phase = self.machine.start(action)?;
        self.statistics.record_action_started();

        let icon = match action {
            ActionType::Block => LogIcon::Block,
            ActionType::Foul => LogIcon::Foul,
        };
        self.push(
            Phase::ActionSelect,
            icon,
            format!("Selected {} action", action.as_ref().to_uppercase()),
            None,
        );
        Ok(phase)
    }

    pub fn select_dice_count(&mut self, count: u8) -> Result<Phase, SessionError> {
        let op = Operation::SelectDiceCount;
        self.active(op)?;
        let count = validate_dice_count(count)?;

        self.machine.record_for(op)?.dice_count = Some(count);
        let noun = if count == 1 { "die" } else { "dice" };
        self.note(LogIcon::Dice, format!("Selected {count} block {noun}"), None);
        Ok(self.machine.advance(op, Branch::Continue)?)
    }

    pub fn roll_block_dice(&mut self) -> Result<DieRoll, SessionError> {
        let op = Operation::RollBlockDice;
        let count = self
            .active(op)?
            .dice_count
            .ok_or_else(|| self.illegal(op))?;
        let roll = self.dice.roll_block_dice(count)?;

        let faces = roll.faces();
        for face in &faces {
            self.statistics.record_block_face(*face);
        }
        self.machine.record_for(op)?.block_roll = Some(roll.clone());

        let names: Vec<&str> = faces.iter().map(BlockFace::label).collect();
        self.note(
            LogIcon::Dice,
            format!("Rolled: {}", names.join(", ")),
            Some(LogPayload::Block { faces }),
        );
        self.last_roll = Some(roll.clone());
        self.machine.advance(op, Branch::Continue)?;
        Ok(roll)
    }

    /// Picks a face from the block roll and applies block-face skills to it.
    ///
    /// `skills` replaces the skills recorded for the action.
    pub fn select_result(
        &mut self,
        face: BlockFace,
        skills: Skills,
    ) -> Result<BlockFace, SessionError> {
        let op = Operation::SelectResult;
        let rolled = self
            .active(op)?
            .block_roll
            .as_ref()
            .is_some_and(|roll| roll.faces().contains(&face));
        if !rolled {
            return Err(RuleError::FaceNotRolled(face).into());
        }
        let resolved = resolve_face(face, &skills)?;

        let record = self.machine.record_for(op)?;
        record.skills = skills;
        record.chosen_face = Some(face);
        record.resolved_face = Some(resolved);

        let description = if resolved == face {
            format!("Selected result: {}", face.label())
        } else {
            format!("Selected result: {} becomes {}", face.label(), resolved.label())
        };
        self.note(
            LogIcon::Result,
            description,
            Some(LogPayload::Result {
                chosen: face,
                resolved,
            }),
        );
        self.machine.advance(op, Branch::Continue)?;
        Ok(resolved)
    }

    /// Replaces both sides' skills for the active action.
    pub fn set_skills(&mut self, skills: Skills) -> Result<(), SessionError> {
        self.machine.record_for(Operation::SetSkills)?.skills = skills;
        self.note(
            LogIcon::Skills,
            format!("Skills: {}", describe_skills(&skills)),
            None,
        );
        Ok(())
    }

    /// Sets how many niggling injuries the target already carries.
    pub fn set_niggling_injuries(&mut self, count: u8) -> Result<(), SessionError> {
        self.machine
            .record_for(Operation::SetNigglingInjuries)?
            .niggling_injuries = count;
        self.note(
            LogIcon::Skills,
            format!("Target has {count} niggling injuries"),
            None,
        );
        Ok(())
    }

    pub fn set_armour_value(&mut self, armour_value: u8, stunty: bool) -> Result<Phase, SessionError> {
        let op = Operation::SetArmourValue;
        self.active(op)?;
        let armour_value = validate_armour_value(armour_value)?;

        let record = self.machine.record_for(op)?;
        record.armour_value = Some(armour_value);
        record.stunty = stunty;

        let suffix = if stunty { " (Stunty)" } else { "" };
        self.note(LogIcon::Armour, format!("Set AV {armour_value}+{suffix}"), None);
        Ok(self.machine.advance(op, Branch::Continue)?)
    }

    /// Rolls armour against the recorded armour value.
    ///
    /// `piling_on` spends Piling On on this roll when the attacker has it.
    pub fn roll_armour(&mut self, piling_on: bool) -> Result<ArmourResult, SessionError> {
        let op = Operation::RollArmour;
        let record = self.active(op)?;
        let armour_value = record.armour_value.ok_or_else(|| self.illegal(op))?;
        let skills = record.skills;
        let foul = record.action == ActionType::Foul;

        let (roll, dice) = self.dice.roll_two_d6()?;
        let armour = resolve_armour(dice, armour_value, &skills, piling_on);

        self.statistics.record_two_die(dice.0, dice.1);
        self.statistics.record_armour(armour.broken);
        self.machine.record_for(op)?.armour = Some(armour.clone());

        let verdict = if armour.broken { "BROKEN" } else { "held" };
        self.note(
            LogIcon::Armour,
            format!(
                "Armour roll {} + {}{} = {} vs AV {}+: {verdict}",
                dice.0,
                dice.1,
                describe_modifiers(&armour.modifiers),
                armour.total,
                armour.target,
            ),
            Some(LogPayload::Armour(armour.clone())),
        );
        if foul && roll.is_double() {
            self.note(
                LogIcon::Referee,
                "Doubles! The referee spotted the foul",
                None,
            );
        }
        self.last_roll = Some(roll);
        self.machine.advance(op, Branch::from_bool(armour.broken))?;
        Ok(armour)
    }

    /// Rolls on the injury table.
    ///
    /// Requesting Piling On after it was spent on the armour roll is rejected.
    pub fn roll_injury(&mut self, piling_on: bool) -> Result<InjuryRoll, SessionError> {
        let op = Operation::RollInjury;
        let record = self.active(op)?;
        if piling_on && record.piling_on_spent() {
            return Err(RuleError::PilingOnSpent.into());
        }
        let skills = record.skills;
        let stunty = record.stunty;
        let spotted = record.rolled_double();
        let foul = record.action == ActionType::Foul;

        let (roll, dice) = self.dice.roll_two_d6()?;
        let injury = resolve_injury(dice, &skills, stunty, piling_on);

        self.statistics.record_two_die(dice.0, dice.1);
        self.statistics.record_injury(injury.result);
        self.machine.record_for(op)?.injury = Some(injury.clone());

        self.note(
            LogIcon::Injury,
            format!(
                "Injury roll {} + {}{} = {}: {}",
                dice.0,
                dice.1,
                describe_modifiers(&injury.modifiers),
                injury.total,
                injury.result.label(),
            ),
            Some(LogPayload::Injury(injury.clone())),
        );
        if foul && !spotted && roll.is_double() {
            self.note(
                LogIcon::Referee,
                "Doubles! The referee spotted the foul",
                None,
            );
        }
        self.last_roll = Some(roll);
        self.machine
            .advance(op, Branch::from_bool(injury.result.is_casualty()))?;
        Ok(injury)
    }

    /// Rolls the casualty die, drawing a lasting injury when the table calls for one.
    pub fn roll_casualty(&mut self) -> Result<CasualtyRoll, SessionError> {
        let op = Operation::RollCasualty;
        let record = self.active(op)?;
        let skills = record.skills;
        let niggling = record.niggling_injuries;

        let casualty = self.roll_casualty_table(&skills, niggling)?;
        self.machine.record_for(op)?.casualty = Some(casualty.clone());

        self.note(
            LogIcon::Casualty,
            format!("Casualty roll: {}", describe_casualty(&casualty)),
            Some(LogPayload::Casualty(casualty.clone())),
        );
        self.machine.advance(op, Branch::Continue)?;
        Ok(casualty)
    }

    /// Decides whether to send in the apothecary.
    ///
    /// Using it re-rolls the casualty die with the same modifiers and keeps
    /// the less severe of the two results. It is available once per session.
    pub fn choose_apothecary(&mut self, use_it: bool) -> Result<ApothecaryDecision, SessionError> {
        let op = Operation::ChooseApothecary;
        let record = self.active(op)?;
        let original = record
            .casualty
            .as_ref()
            .map(|casualty| casualty.result)
            .ok_or_else(|| self.illegal(op))?;
        let skills = record.skills;
        let niggling = record.niggling_injuries;

        let decision = if use_it {
            if !self.apothecary_available {
                return Err(SessionError::ApothecaryUnavailable);
            }
            let reroll = self.roll_casualty_table(&skills, niggling)?;
            self.apothecary_available = false;
            ApothecaryDecision {
                used: true,
                kept: original.min(reroll.result),
                reroll: Some(reroll),
            }
        } else {
            ApothecaryDecision {
                used: false,
                reroll: None,
                kept: original,
            }
        };
        self.machine.record_for(op)?.apothecary = Some(decision.clone());

        let description = match &decision.reroll {
            Some(reroll) => format!(
                "Apothecary used: re-rolled {}, keeping {}",
                describe_casualty(reroll),
                decision.kept.label()
            ),
            None => format!("Apothecary declined: {} stands", decision.kept.label()),
        };
        self.note(
            LogIcon::Apothecary,
            description,
            Some(LogPayload::Apothecary(decision.clone())),
        );
        self.machine.advance(op, Branch::Continue)?;
        Ok(decision)
    }

    /// Argues a send-off after a foul rolled doubles. Allowed once per action.
    pub fn argue_the_call(&mut self) -> Result<ArgueTheCall, SessionError> {
        let op = Operation::ArgueTheCall;
        let eligible = self
            .machine
            .record()
            .is_some_and(|record| record.rolled_double() && record.argued.is_none());
        if !eligible {
            return Err(self.illegal(op).into());
        }

        let roll = self.dice.roll_d6()?;
        let value = roll.value();
        let call = ArgueTheCall::from_d6(value);

        self.statistics.record_plain_die(value);
        self.machine.record_for(op)?.argued = Some(call);
        self.note(
            LogIcon::Referee,
            format!("Argued the call ({value}): {}", call.description()),
            Some(LogPayload::ArgueTheCall { roll: value, call }),
        );
        self.last_roll = Some(roll);
        Ok(call)
    }

    /// Closes the action and returns its record.
    pub fn complete_action(&mut self) -> Result<ActionRecord, SessionError> {
        let record = self.machine.finish()?;
        self.statistics.record_action_completed();

        let description = if record.sent_off() {
            "Action completed - fouling player sent off"
        } else {
            "Action completed - ready for next action"
        };
        self.push(Phase::Complete, LogIcon::Complete, description, None);
        Ok(record)
    }

    /// Drops the action in flight. Statistics already recorded are kept.
    pub fn abandon_action(&mut self) -> Option<ActionRecord> {
        let phase = self.phase();
        let record = self.machine.abandon()?;
        self.push(
            phase,
            LogIcon::Abandon,
            format!("Abandoned {} action", record.action),
            None,
        );
        Some(record)
    }

    /// Returns to the previous phase of the action, discarding its results.
    ///
    /// Undoing an apothecary decision that used the apothecary makes it
    /// available again. Statistics are never rolled back.
    pub fn go_back(&mut self) -> Phase {
        let from = self.phase();
        let apothecary_used = self
            .record()
            .and_then(|record| record.apothecary.as_ref())
            .is_some_and(|decision| decision.used);

        let phase = self.machine.go_back();
        if phase == from {
            return phase;
        }
        let undone = self
            .record()
            .is_none_or(|record| record.apothecary.is_none());
        if apothecary_used && undone {
            self.apothecary_available = true;
        }
        self.push(
            phase,
            LogIcon::Back,
            format!("Went back to {}", phase.title()),
            None,
        );
        phase
    }

    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
        self.push(self.phase(), LogIcon::Statistics, "Statistics reset", None);
    }

    // ===== outbound views =====

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn action_type(&self) -> Option<ActionType> {
        self.machine.action_type()
    }

    pub fn record(&self) -> Option<&ActionRecord> {
        self.machine.record()
    }

    pub fn statistics(&self) -> &RollStatistics {
        &self.statistics
    }

    /// Block-face report using the configured deviation threshold.
    pub fn face_reports(&self) -> Vec<FaceReport> {
        self.statistics
            .face_reports(self.config.deviation_threshold)
    }

    pub fn log(&self) -> &[ActionLogEntry] {
        &self.log
    }

    pub fn last_entry(&self) -> Option<&ActionLogEntry> {
        self.log.last()
    }

    pub fn last_roll(&self) -> Option<&DieRoll> {
        self.last_roll.as_ref()
    }

    pub fn seed_word(&self) -> Option<&str> {
        self.dice.seed_word()
    }

    pub fn is_seeded(&self) -> bool {
        self.dice.is_seeded()
    }

    pub fn apothecary_available(&self) -> bool {
        self.apothecary_available
    }

    // ===== helpers =====

    /// Record of the active action, after checking `op` against the phase.
    fn active(&self, op: Operation) -> Result<&ActionRecord, PhaseError> {
        self.machine.expect(op)?;
        self.machine.record().ok_or_else(|| self.illegal(op))
    }

    fn illegal(&self, op: Operation) -> PhaseError {
        PhaseError::illegal(op, self.machine.phase())
    }

    fn roll_casualty_table(
        &mut self,
        skills: &Skills,
        niggling_injuries: u8,
    ) -> Result<CasualtyRoll, SessionError> {
        let die = self.dice.roll_casualty()?;
        let mut casualty = resolve_casualty(die.value(), skills, niggling_injuries);
        self.statistics.record_casualty(casualty.result);
        self.last_roll = Some(die);

        if casualty.result == CasualtyResult::LastingInjury {
            let lasting = self.dice.roll_d6()?;
            self.statistics.record_plain_die(lasting.value());
            casualty.lasting = Some(LastingInjury::from_d6(lasting.value()));
        }
        Ok(casualty)
    }

    fn note(&mut self, icon: LogIcon, description: impl Into<String>, payload: Option<LogPayload>) {
        self.push(self.phase(), icon, description, payload);
    }

    fn push(
        &mut self,
        phase: Phase,
        icon: LogIcon,
        description: impl Into<String>,
        payload: Option<LogPayload>,
    ) {
        let entry = ActionLogEntry::new(phase, icon, description);
        self.log.push(match payload {
            Some(payload) => entry.with_payload(payload),
            None => entry,
        });
    }
}

fn describe_modifiers(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(|modifier| format!(" + {} ({})", modifier.value, modifier.skill))
        .collect()
}

fn describe_casualty(casualty: &CasualtyRoll) -> String {
    let mut text = format!(
        "{}{} = {}: {}",
        casualty.die,
        describe_modifiers(&casualty.modifiers),
        casualty.total,
        casualty.result.label()
    );
    if casualty.niggling_injuries > 0 {
        text.push_str(&format!(" ({} niggling)", casualty.niggling_injuries));
    }
    if let Some(lasting) = casualty.lasting {
        text.push_str(&format!(
            ", {} (-1 {})",
            lasting.label(),
            lasting.characteristic()
        ));
    }
    text
}

fn describe_skills(skills: &Skills) -> String {
    let side = |side: Side| {
        let names: Vec<String> = Skill::iter()
            .filter(|skill| skills.side(side).contains(skill.flag()))
            .map(|skill| skill.to_string())
            .collect();
        if names.is_empty() {
            "none".to_owned()
        } else {
            names.join(", ")
        }
    };
    format!(
        "attacker [{}], defender [{}]",
        side(Side::Attacker),
        side(Side::Defender)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceError;
    use crate::statistics::Counter;

    fn seeded(seed: &str) -> GameSession {
        let mut session = GameSession::default();
        session.start_session(seed);
        session
    }

    fn to_armour_value(session: &mut GameSession) {
        session.select_action(ActionType::Block).unwrap();
        session.select_dice_count(2).unwrap();
        let roll = session.roll_block_dice().unwrap();
        let face = roll.faces()[0];
        session.select_result(face, Skills::NONE).unwrap();
    }

    /// Drives foul actions across seeds until one reaches the casualty roll.
    fn session_at_casualty() -> GameSession {
        for n in 0..500 {
            let mut session = seeded(&format!("casualty-{n}"));
            session.select_action(ActionType::Foul).unwrap();
            session
                .set_skills(Skills::NONE.with_attacker(Skill::MightyBlow))
                .unwrap();
            session.set_armour_value(2, false).unwrap();
            session.roll_armour(false).unwrap();
            session.roll_injury(false).unwrap();
            if session.phase() == Phase::CasualtyRoll {
                return session;
            }
        }
        panic!("no seed reached the casualty roll");
    }

    #[test]
    fn rolling_before_seeding_fails_without_side_effects() {
        let mut session = GameSession::default();
        session.select_action(ActionType::Block).unwrap();
        session.select_dice_count(1).unwrap();
        let stats = session.statistics().clone();

        assert_eq!(
            session.roll_block_dice(),
            Err(SessionError::Dice(DiceError::NotInitialized))
        );
        assert_eq!(session.phase(), Phase::DiceRoll);
        assert_eq!(session.statistics(), &stats);
    }

    #[test]
    fn same_seed_replays_same_session() {
        let play = |seed: &str| {
            let mut session = seeded(seed);
            to_armour_value(&mut session);
            session.set_armour_value(8, false).unwrap();
            let armour = session.roll_armour(false).unwrap();
            (session.record().cloned(), armour)
        };
        assert_eq!(play("thunder"), play("thunder"));
    }

    #[test]
    fn block_flow_records_dice_and_result() {
        let mut session = seeded("glory");
        to_armour_value(&mut session);

        let record = session.record().unwrap();
        assert_eq!(record.dice_count, Some(2));
        assert_eq!(record.block_roll.as_ref().unwrap().pips().len(), 2);
        assert!(record.chosen_face.is_some());
        assert_eq!(session.phase(), Phase::ArmourValue);
        assert_eq!(session.statistics().block_total(), 2);
        assert_eq!(session.statistics().count(Counter::ActionsStarted), 1);
    }

    #[test]
    fn held_armour_completes_the_action() {
        let mut session = seeded("granite");
        to_armour_value(&mut session);
        session
            .set_skills(Skills::NONE.with_defender(Skill::ThickSkull))
            .unwrap();
        session.set_armour_value(12, false).unwrap();

        let armour = session.roll_armour(false).unwrap();
        assert!(!armour.broken);
        assert_eq!(armour.target, 13);
        assert_eq!(session.phase(), Phase::Complete);

        let record = session.complete_action().unwrap();
        assert!(record.injury.is_none());
        assert_eq!(session.phase(), Phase::ActionSelect);
        assert!(session.record().is_none());
        assert_eq!(session.statistics().count(Counter::ActionsCompleted), 1);
    }

    #[test]
    fn broken_armour_moves_to_injury() {
        let mut session = seeded("anvil");
        session.select_action(ActionType::Foul).unwrap();
        session.set_armour_value(2, false).unwrap();
        assert!(session.roll_armour(false).unwrap().broken);
        assert_eq!(session.phase(), Phase::InjuryRoll);
        assert_eq!(session.statistics().count(Counter::ArmourBroken), 1);
    }

    #[test]
    fn foul_skips_block_dice_phases() {
        let mut session = seeded("sneaky");
        assert_eq!(session.select_action(ActionType::Foul), Ok(Phase::ArmourValue));
        assert!(matches!(
            session.select_dice_count(1),
            Err(SessionError::Phase(PhaseError::IllegalPhaseTransition { .. }))
        ));
    }

    #[test]
    fn invalid_inputs_leave_state_unchanged() {
        let mut session = seeded("valid");
        session.select_action(ActionType::Block).unwrap();
        let before = session.record().cloned();

        assert_eq!(
            session.select_dice_count(4),
            Err(SessionError::Dice(DiceError::InvalidDiceCount(4)))
        );
        assert_eq!(session.phase(), Phase::DiceSelect);
        assert_eq!(session.record().cloned(), before);

        session.select_dice_count(1).unwrap();
        session.roll_block_dice().unwrap();
        let face = session.record().unwrap().block_roll.as_ref().unwrap().faces()[0];
        session.select_result(face, Skills::NONE).unwrap();

        let log_len = session.log().len();
        assert_eq!(
            session.set_armour_value(13, false),
            Err(SessionError::Rule(RuleError::InvalidArmourValue(13)))
        );
        assert_eq!(session.phase(), Phase::ArmourValue);
        assert_eq!(session.log().len(), log_len);
    }

    #[test]
    fn selecting_an_unrolled_face_is_rejected() {
        let mut session = seeded("pick");
        session.select_action(ActionType::Block).unwrap();
        session.select_dice_count(1).unwrap();
        let face = session.roll_block_dice().unwrap().faces()[0];
        let other = if face == BlockFace::Pow {
            BlockFace::Skull
        } else {
            BlockFace::Pow
        };

        assert_eq!(
            session.select_result(other, Skills::NONE),
            Err(SessionError::Rule(RuleError::FaceNotRolled(other)))
        );
        assert_eq!(session.phase(), Phase::ResultSelect);
    }

    #[test]
    fn block_and_wrestle_attacker_can_pick_push() {
        let skills = Skills::NONE
            .with_attacker(Skill::Block)
            .with_attacker(Skill::Wrestle);
        let mut session = (0..100)
            .map(|n| {
                let mut session = seeded(&format!("wrestle-{n}"));
                session.select_action(ActionType::Block).unwrap();
                session.select_dice_count(3).unwrap();
                session.roll_block_dice().unwrap();
                session
            })
            .find(|session| {
                session
                    .record()
                    .and_then(|record| record.block_roll.as_ref())
                    .is_some_and(|roll| roll.faces().contains(&BlockFace::Push))
            })
            .expect("some seed rolls a Push");

        assert_eq!(
            session.select_result(BlockFace::Push, skills),
            Ok(BlockFace::BothDown)
        );
        assert_eq!(session.phase(), Phase::ArmourValue);
        let record = session.record().unwrap();
        assert_eq!(record.chosen_face, Some(BlockFace::Push));
        assert_eq!(record.resolved_face, Some(BlockFace::BothDown));
    }

    #[test]
    fn piling_on_cannot_be_spent_twice() {
        let mut session = seeded("pile");
        session.select_action(ActionType::Foul).unwrap();
        session
            .set_skills(Skills::NONE.with_attacker(Skill::PilingOn))
            .unwrap();
        session.set_armour_value(2, false).unwrap();
        let armour = session.roll_armour(true).unwrap();
        assert!(armour.used_piling_on());

        assert_eq!(
            session.roll_injury(true),
            Err(SessionError::Rule(RuleError::PilingOnSpent))
        );
        assert_eq!(session.phase(), Phase::InjuryRoll);
        assert!(session.roll_injury(false).is_ok());
    }

    #[test]
    fn casualty_then_apothecary_then_complete() {
        let mut session = session_at_casualty();
        let casualty = session.roll_casualty().unwrap();
        assert_eq!(
            casualty.lasting.is_some(),
            casualty.result == CasualtyResult::LastingInjury
        );
        assert_eq!(session.phase(), Phase::Apothecary);

        let decision = session.choose_apothecary(true).unwrap();
        let reroll = decision.reroll.as_ref().unwrap();
        assert_eq!(decision.kept, casualty.result.min(reroll.result));
        assert!(!session.apothecary_available());
        assert_eq!(session.phase(), Phase::Complete);

        let record = session.complete_action().unwrap();
        assert_eq!(record.final_casualty(), Some(decision.kept));
    }

    #[test]
    fn apothecary_is_once_per_session() {
        let mut session = session_at_casualty();
        session.roll_casualty().unwrap();
        session.choose_apothecary(true).unwrap();
        session.complete_action().unwrap();

        let mut reached = false;
        for _ in 0..500 {
            session.select_action(ActionType::Foul).unwrap();
            session
                .set_skills(Skills::NONE.with_attacker(Skill::MightyBlow))
                .unwrap();
            session.set_armour_value(2, false).unwrap();
            session.roll_armour(false).unwrap();
            session.roll_injury(false).unwrap();
            if session.phase() == Phase::CasualtyRoll {
                reached = true;
                break;
            }
            session.complete_action().unwrap();
        }
        assert!(reached, "no second casualty in this session");

        session.roll_casualty().unwrap();
        assert_eq!(
            session.choose_apothecary(true),
            Err(SessionError::ApothecaryUnavailable)
        );
        assert_eq!(session.phase(), Phase::Apothecary);
        assert!(session.choose_apothecary(false).is_ok());
        session.complete_action().unwrap();

        session.start_session("fresh");
        assert!(session.apothecary_available());
    }

    #[test]
    fn going_back_restores_the_apothecary() {
        let mut session = session_at_casualty();
        session.roll_casualty().unwrap();
        session.choose_apothecary(true).unwrap();
        assert!(!session.apothecary_available());

        assert_eq!(session.go_back(), Phase::Apothecary);
        assert!(session.apothecary_available());
        assert!(session.record().unwrap().apothecary.is_none());
    }

    #[test]
    fn go_back_clears_later_results_but_not_statistics() {
        let mut session = seeded("rewind");
        to_armour_value(&mut session);
        let total = session.statistics().total_rolls();

        assert_eq!(session.go_back(), Phase::ResultSelect);
        assert!(session.record().unwrap().chosen_face.is_none());
        assert_eq!(session.go_back(), Phase::DiceRoll);
        assert!(session.record().unwrap().block_roll.is_none());
        assert_eq!(session.statistics().total_rolls(), total);
    }

    #[test]
    fn go_back_from_first_phase_is_a_no_op() {
        let mut session = seeded("still");
        let log_len = session.log().len();
        assert_eq!(session.go_back(), Phase::ActionSelect);
        assert_eq!(session.log().len(), log_len);
    }

    #[test]
    fn argue_the_call_requires_foul_doubles() {
        let mut session = seeded("innocent");
        assert!(matches!(
            session.argue_the_call(),
            Err(SessionError::Phase(PhaseError::IllegalPhaseTransition { .. }))
        ));

        for n in 0..500 {
            let mut session = seeded(&format!("referee-{n}"));
            session.select_action(ActionType::Foul).unwrap();
            session.set_armour_value(12, false).unwrap();
            let armour = session.roll_armour(false).unwrap();
            if armour.dice.0 != armour.dice.1 {
                assert!(session.argue_the_call().is_err());
                continue;
            }

            let call = session.argue_the_call().unwrap();
            assert_eq!(session.record().unwrap().argued, Some(call));
            assert_eq!(session.record().unwrap().sent_off(), !call.avoids_send_off());
            assert!(session.argue_the_call().is_err());
            return;
        }
        panic!("no seed rolled doubles on armour");
    }

    #[test]
    fn abandon_keeps_statistics() {
        let mut session = seeded("quit");
        to_armour_value(&mut session);
        let total = session.statistics().total_rolls();

        let record = session.abandon_action().unwrap();
        assert_eq!(record.action, ActionType::Block);
        assert_eq!(session.phase(), Phase::ActionSelect);
        assert_eq!(session.statistics().total_rolls(), total);
        assert!(session.abandon_action().is_none());
    }

    #[test]
    fn reset_statistics_zeroes_counters() {
        let mut session = seeded("clean");
        to_armour_value(&mut session);
        session.reset_statistics();
        assert!(session.statistics().is_empty());
        assert_eq!(session.phase(), Phase::ArmourValue);
    }

    #[test]
    fn skills_can_change_mid_action() {
        let mut session = seeded("skills");
        assert!(session.set_skills(Skills::NONE).is_err());

        session.select_action(ActionType::Foul).unwrap();
        let skills = Skills::NONE.with_defender(Skill::ThickSkull);
        session.set_skills(skills).unwrap();
        session.set_niggling_injuries(2).unwrap();

        let record = session.record().unwrap();
        assert_eq!(record.skills, skills);
        assert_eq!(record.niggling_injuries, 2);
    }

    #[test]
    fn log_entries_carry_phase_and_payload() {
        let mut session = seeded("story");
        to_armour_value(&mut session);

        let roll_entry = session
            .log()
            .iter()
            .find(|entry| matches!(entry.payload, Some(LogPayload::Block { .. })))
            .unwrap();
        assert_eq!(roll_entry.phase, Phase::DiceRoll);
        assert_eq!(roll_entry.icon, LogIcon::Dice);
        assert_eq!(session.log()[0].icon, LogIcon::Session);
    }
}
