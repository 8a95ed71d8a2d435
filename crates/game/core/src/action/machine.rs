//! Phase state machine for the active action.

use arrayvec::ArrayVec;
use strum::EnumCount;

use super::{ActionRecord, ActionType, Branch, Operation, Phase, PhaseError};

/// Holds the current phase and the record of the active action.
///
/// Exactly one action is in flight at a time. Every transition is validated
/// against the action type's sequence before any state changes, so a rejected
/// request leaves the machine untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionStateMachine {
    phase: Phase,
    record: Option<ActionRecord>,
    /// Phases visited before the current one, oldest first.
    trail: ArrayVec<Phase, { Phase::COUNT }>,
}

impl Default for ActionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionStateMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::ActionSelect,
            record: None,
            trail: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn action_type(&self) -> Option<ActionType> {
        self.record.as_ref().map(|record| record.action)
    }

    pub fn record(&self) -> Option<&ActionRecord> {
        self.record.as_ref()
    }

    /// Phases visited so far in this action, current phase excluded.
    pub fn trail(&self) -> &[Phase] {
        &self.trail
    }

    /// Checks that `operation` may run in the current phase.
    pub fn expect(&self, operation: Operation) -> Result<(), PhaseError> {
        match operation.required_phase() {
            Some(required) if required != self.phase => {
                Err(PhaseError::illegal(operation, self.phase))
            }
            _ => Ok(()),
        }
    }

    /// Mutable record of the active action, after checking `operation`.
    pub fn record_for(&mut self, operation: Operation) -> Result<&mut ActionRecord, PhaseError> {
        self.expect(operation)?;
        let phase = self.phase;
        self.record
            .as_mut()
            .ok_or(PhaseError::illegal(operation, phase))
    }

    /// Starts a new action and moves to its entry phase.
    pub fn start(&mut self, action: ActionType) -> Result<Phase, PhaseError> {
        self.expect(Operation::SelectAction)?;
        self.record = Some(ActionRecord::new(action));
        self.trail.clear();
        self.step(action.entry_phase());
        Ok(self.phase)
    }

    /// Moves to the successor of the current phase along `branch`.
    pub fn advance(&mut self, operation: Operation, branch: Branch) -> Result<Phase, PhaseError> {
        let action = self
            .action_type()
            .ok_or(PhaseError::illegal(operation, self.phase))?;
        let next = self
            .phase
            .successor(action, branch)
            .ok_or(PhaseError::illegal(operation, self.phase))?;
        self.step(next);
        Ok(next)
    }

    /// Returns to the phase visited immediately before the current one.
    ///
    /// Results produced in that phase and later are discarded. Going back from
    /// the first phase is a no-op.
    pub fn go_back(&mut self) -> Phase {
        let Some(previous) = self.trail.pop() else {
            return self.phase;
        };
        self.phase = previous;
        if previous == Phase::ActionSelect {
            self.record = None;
        } else if let Some(record) = self.record.as_mut() {
            record.clear_from(previous);
        }
        self.phase
    }

    /// Ends the active action and returns its record.
    pub fn finish(&mut self) -> Result<ActionRecord, PhaseError> {
        self.expect(Operation::CompleteAction)?;
        let record = self
            .record
            .take()
            .ok_or(PhaseError::illegal(Operation::CompleteAction, self.phase))?;
        self.reset();
        Ok(record)
    }

    /// Abandons whatever is in flight and returns to action-select.
    pub fn abandon(&mut self) -> Option<ActionRecord> {
        let record = self.record.take();
        self.reset();
        record
    }

    fn reset(&mut self) {
        self.phase = Phase::ActionSelect;
        self.trail.clear();
    }

    /// Every action sequence moves strictly forward, so a phase enters the
    /// trail at most once and the trail never outgrows `Phase::COUNT`.
    fn step(&mut self, next: Phase) {
        self.trail.push(self.phase);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_walks_its_sequence() {
        let mut machine = ActionStateMachine::new();
        assert_eq!(machine.start(ActionType::Block), Ok(Phase::DiceSelect));
        assert_eq!(
            machine.advance(Operation::SelectDiceCount, Branch::Continue),
            Ok(Phase::DiceRoll)
        );
        assert_eq!(
            machine.advance(Operation::RollBlockDice, Branch::Continue),
            Ok(Phase::ResultSelect)
        );
        assert_eq!(
            machine.advance(Operation::SelectResult, Branch::Continue),
            Ok(Phase::ArmourValue)
        );
        assert_eq!(
            machine.advance(Operation::SetArmourValue, Branch::Continue),
            Ok(Phase::ArmourRoll)
        );
        assert_eq!(
            machine.advance(Operation::RollArmour, Branch::Stop),
            Ok(Phase::Complete)
        );
    }

    #[test]
    fn foul_enters_at_armour_value() {
        let mut machine = ActionStateMachine::new();
        assert_eq!(machine.start(ActionType::Foul), Ok(Phase::ArmourValue));
        assert_eq!(machine.trail(), &[Phase::ActionSelect]);
    }

    #[test]
    fn cannot_start_twice() {
        let mut machine = ActionStateMachine::new();
        machine.start(ActionType::Block).unwrap();
        let before = machine.clone();

        assert_eq!(
            machine.start(ActionType::Foul),
            Err(PhaseError::illegal(Operation::SelectAction, Phase::DiceSelect))
        );
        assert_eq!(machine, before);
    }

    #[test]
    fn operations_are_checked_against_phase() {
        let mut machine = ActionStateMachine::new();
        machine.start(ActionType::Foul).unwrap();

        assert!(machine.expect(Operation::SetArmourValue).is_ok());
        assert!(machine.expect(Operation::RollArmour).is_err());
        assert!(machine.expect(Operation::SetSkills).is_ok());
        assert!(machine.record_for(Operation::RollBlockDice).is_err());
    }

    #[test]
    fn go_back_returns_along_the_trail() {
        let mut machine = ActionStateMachine::new();
        machine.start(ActionType::Foul).unwrap();
        machine
            .advance(Operation::SetArmourValue, Branch::Continue)
            .unwrap();
        machine.advance(Operation::RollArmour, Branch::Stop).unwrap();
        assert_eq!(machine.phase(), Phase::Complete);

        assert_eq!(machine.go_back(), Phase::ArmourRoll);
        assert_eq!(machine.go_back(), Phase::ArmourValue);
        assert_eq!(machine.go_back(), Phase::ActionSelect);
        assert!(machine.record().is_none());
        assert_eq!(machine.go_back(), Phase::ActionSelect);
    }

    #[test]
    fn longest_block_visits_each_phase_once() {
        let mut machine = ActionStateMachine::new();
        machine.start(ActionType::Block).unwrap();
        let steps = [
            Operation::SelectDiceCount,
            Operation::RollBlockDice,
            Operation::SelectResult,
            Operation::SetArmourValue,
            Operation::RollArmour,
            Operation::RollInjury,
            Operation::RollCasualty,
            Operation::ChooseApothecary,
        ];
        for op in steps {
            machine.advance(op, Branch::Continue).unwrap();
        }
        assert_eq!(machine.phase(), Phase::Complete);
        assert_eq!(machine.trail().len(), Phase::COUNT - 1);

        // Stepping back and forward again reuses the slot it popped.
        machine.go_back();
        machine
            .advance(Operation::ChooseApothecary, Branch::Continue)
            .unwrap();
        assert_eq!(machine.trail().len(), Phase::COUNT - 1);
        assert!(!machine.trail().contains(&Phase::Complete));
    }

    #[test]
    fn go_back_from_first_phase_is_noop() {
        let mut machine = ActionStateMachine::new();
        let before = machine.clone();
        assert_eq!(machine.go_back(), Phase::ActionSelect);
        assert_eq!(machine, before);
    }

    #[test]
    fn finish_only_from_complete() {
        let mut machine = ActionStateMachine::new();
        machine.start(ActionType::Foul).unwrap();
        assert!(machine.finish().is_err());

        machine
            .advance(Operation::SetArmourValue, Branch::Continue)
            .unwrap();
        machine.advance(Operation::RollArmour, Branch::Stop).unwrap();
        let record = machine.finish().unwrap();
        assert_eq!(record.action, ActionType::Foul);
        assert_eq!(machine.phase(), Phase::ActionSelect);
        assert!(machine.record().is_none());
    }

    #[test]
    fn abandon_returns_to_action_select() {
        let mut machine = ActionStateMachine::new();
        machine.start(ActionType::Block).unwrap();
        assert!(machine.abandon().is_some());
        assert_eq!(machine.phase(), Phase::ActionSelect);
        assert!(machine.trail().is_empty());
    }
}
