//! Session orchestrator and builder.
//!
//! [`Runtime`] drives one [`GameSession`], persists statistics after every
//! operation that changes them and reports what happened through `tracing`.

use game_core::{
    ActionRecord, ActionType, ApothecaryDecision, ArgueTheCall, ArmourResult, BlockFace,
    CasualtyRoll, DieRoll, GameError, GameSession, InjuryRoll, Operation, Phase, RollStatistics,
    SessionError, Skills,
};

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::repository::{FileStatisticsRepository, StatisticsRepository};

/// Owns the game session and its statistics persistence.
pub struct Runtime {
    session: GameSession,
    repository: Option<Box<dyn StatisticsRepository>>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Read-only view of the session (phase, record, statistics, log).
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn statistics(&self) -> &RollStatistics {
        self.session.statistics()
    }

    pub fn is_persistent(&self) -> bool {
        self.repository.is_some()
    }

    pub fn start_session(&mut self, seed_word: &str) {
        self.session.start_session(seed_word);
        tracing::info!(seed = seed_word, "Session started");
    }

    pub fn select_action(&mut self, action: ActionType) -> Result<Phase> {
        self.run(Operation::SelectAction, |session| {
            session.select_action(action)
        })
    }

    pub fn select_dice_count(&mut self, count: u8) -> Result<Phase> {
        self.run(Operation::SelectDiceCount, |session| {
            session.select_dice_count(count)
        })
    }

    pub fn roll_block_dice(&mut self) -> Result<DieRoll> {
        self.run(Operation::RollBlockDice, GameSession::roll_block_dice)
    }

    pub fn select_result(&mut self, face: BlockFace, skills: Skills) -> Result<BlockFace> {
        self.run(Operation::SelectResult, |session| {
            session.select_result(face, skills)
        })
    }

    pub fn set_skills(&mut self, skills: Skills) -> Result<()> {
        self.run(Operation::SetSkills, |session| session.set_skills(skills))
    }

    pub fn set_niggling_injuries(&mut self, count: u8) -> Result<()> {
        self.run(Operation::SetNigglingInjuries, |session| {
            session.set_niggling_injuries(count)
        })
    }

    pub fn set_armour_value(&mut self, armour_value: u8, stunty: bool) -> Result<Phase> {
        self.run(Operation::SetArmourValue, |session| {
            session.set_armour_value(armour_value, stunty)
        })
    }

    pub fn roll_armour(&mut self, piling_on: bool) -> Result<ArmourResult> {
        self.run(Operation::RollArmour, |session| {
            session.roll_armour(piling_on)
        })
    }

    pub fn roll_injury(&mut self, piling_on: bool) -> Result<InjuryRoll> {
        self.run(Operation::RollInjury, |session| {
            session.roll_injury(piling_on)
        })
    }

    pub fn roll_casualty(&mut self) -> Result<CasualtyRoll> {
        self.run(Operation::RollCasualty, GameSession::roll_casualty)
    }

    pub fn choose_apothecary(&mut self, use_it: bool) -> Result<ApothecaryDecision> {
        self.run(Operation::ChooseApothecary, |session| {
            session.choose_apothecary(use_it)
        })
    }

    pub fn argue_the_call(&mut self) -> Result<ArgueTheCall> {
        self.run(Operation::ArgueTheCall, GameSession::argue_the_call)
    }

    pub fn complete_action(&mut self) -> Result<ActionRecord> {
        self.run(Operation::CompleteAction, GameSession::complete_action)
    }

    pub fn abandon_action(&mut self) -> Option<ActionRecord> {
        let record = self.session.abandon_action();
        if let Some(record) = &record {
            tracing::debug!(action = %record.action, "Action abandoned");
        }
        record
    }

    pub fn go_back(&mut self) -> Phase {
        let phase = self.session.go_back();
        tracing::debug!(phase = %phase, "Went back");
        phase
    }

    pub fn reset_statistics(&mut self) {
        self.session.reset_statistics();
        tracing::info!("Statistics reset");
        self.persist();
    }

    /// Saves the current statistics, if persistence is enabled.
    ///
    /// Failures are logged and otherwise ignored: the session keeps running on
    /// the in-memory record.
    pub fn persist(&self) {
        let Some(repository) = &self.repository else {
            return;
        };
        if let Err(error) = repository.save(self.session.statistics()) {
            tracing::warn!("Failed to save statistics: {}", error);
        }
    }

    /// Runs one session operation, logging the outcome and saving statistics
    /// when they changed.
    fn run<T, F>(&mut self, operation: Operation, apply: F) -> Result<T>
    where
        F: FnOnce(&mut GameSession) -> std::result::Result<T, SessionError>,
    {
        let from = self.session.phase();
        let before = self.session.statistics().clone();

        match apply(&mut self.session) {
            Ok(value) => {
                let to = self.session.phase();
                if let Some(entry) = self.session.last_entry() {
                    tracing::debug!(%operation, %from, %to, "{}", entry.description);
                }
                if self.session.statistics() != &before {
                    self.persist();
                }
                Ok(value)
            }
            Err(error) => {
                tracing::warn!(
                    %operation,
                    phase = %from,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Rejected: {}",
                    error
                );
                Err(error.into())
            }
        }
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Box<dyn StatisticsRepository>>,
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
        }
    }

    /// Override the runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `repository` instead of the file repository in the data directory.
    pub fn repository(mut self, repository: impl StatisticsRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Build the runtime, loading saved statistics when persistence is on.
    pub fn build(self) -> Result<Runtime> {
        let repository = match (self.config.enable_persistence, self.repository) {
            (false, _) => None,
            (true, Some(repository)) => Some(repository),
            (true, None) => {
                let dir = self.config.data_dir()?;
                let repository: Box<dyn StatisticsRepository> =
                    Box::new(FileStatisticsRepository::new(&dir)?);
                tracing::debug!("Statistics directory: {}", dir.display());
                Some(repository)
            }
        };

        let statistics = match &repository {
            Some(repository) => repository.load()?.unwrap_or_default(),
            None => RollStatistics::new(),
        };
        tracing::info!(
            rolls = statistics.total_rolls(),
            persistence = repository.is_some(),
            "Runtime built"
        );

        let session = GameSession::new(self.config.game_config).with_statistics(statistics);
        let mut runtime = Runtime {
            session,
            repository,
        };
        if let Some(seed) = &self.config.seed {
            runtime.start_session(seed);
        }
        Ok(runtime)
    }
}
