//! Counter storage and recorders.

use strum::{EnumCount, IntoEnumIterator};

use super::counter::{self, Counter};
use super::report::{BlockPercentages, Deviation, FaceReport, SuccessRates, percent};
use crate::dice::BlockFace;
use crate::rules::{CasualtyResult, InjuryResult};

/// Cumulative roll history.
///
/// Counters only grow; the single way to lower them is [`reset`], which
/// replaces every counter with zero at once.
///
/// [`reset`]: RollStatistics::reset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollStatistics {
    counts: [u64; Counter::COUNT],
}

impl Default for RollStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl RollStatistics {
    pub fn new() -> Self {
        Self {
            counts: [0; Counter::COUNT],
        }
    }

    /// Rebuilds statistics from named counters; absent counters stay zero.
    pub fn from_counters<I>(counters: I) -> Self
    where
        I: IntoIterator<Item = (Counter, u64)>,
    {
        let mut stats = Self::new();
        for (counter, value) in counters {
            stats.counts[counter.index()] = value;
        }
        stats
    }

    // ===== recorders =====

    pub fn record_block_face(&mut self, face: BlockFace) {
        self.record_roll(Counter::block(face));
    }

    /// Records a single d6. Values outside `1..=6` are ignored entirely.
    pub fn record_plain_die(&mut self, value: u8) {
        if let Some(counter) = Counter::d6(value) {
            self.record_roll(counter);
        }
    }

    /// Records a 2d6 roll by its sum. Sums outside `2..=12` are ignored.
    pub fn record_two_die(&mut self, first: u8, second: u8) {
        if let Some(counter) = Counter::two_d6(first.saturating_add(second)) {
            self.record_roll(counter);
        }
    }

    pub fn record_armour(&mut self, broken: bool) {
        self.record_roll(Counter::armour(broken));
    }

    pub fn record_injury(&mut self, result: InjuryResult) {
        self.record_roll(Counter::injury(result));
    }

    pub fn record_casualty(&mut self, result: CasualtyResult) {
        self.record_roll(Counter::casualty(result));
    }

    pub fn record_action_started(&mut self) {
        self.bump(Counter::ActionsStarted);
    }

    pub fn record_action_completed(&mut self) {
        self.bump(Counter::ActionsCompleted);
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record_roll(&mut self, counter: Counter) {
        self.bump(counter);
        self.bump(Counter::TotalRolls);
    }

    fn bump(&mut self, counter: Counter) {
        let slot = &mut self.counts[counter.index()];
        *slot = slot.saturating_add(1);
    }

    // ===== accessors =====

    pub fn count(&self, counter: Counter) -> u64 {
        self.counts[counter.index()]
    }

    pub fn total_rolls(&self) -> u64 {
        self.count(Counter::TotalRolls)
    }

    pub fn block_count(&self, face: BlockFace) -> u64 {
        self.count(Counter::block(face))
    }

    /// Number of block dice recorded across all faces.
    pub fn block_total(&self) -> u64 {
        counter::BLOCK.iter().map(|c| self.count(*c)).sum()
    }

    /// Every counter with its current value, in declaration order.
    pub fn counters(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        Counter::iter().map(|counter| (counter, self.count(counter)))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|value| *value == 0)
    }

    // ===== derived =====

    /// Observed block-face shares over all recorded block dice.
    pub fn percentages(&self) -> BlockPercentages {
        let total = self.block_total();
        let mut values = [0.0; 5];
        for face in BlockFace::iter() {
            values[face.index()] = percent(self.block_count(face), total);
        }
        BlockPercentages::new(values)
    }

    /// Theoretical-vs-actual rows for every block face.
    pub fn face_reports(&self, threshold: f64) -> Vec<FaceReport> {
        let percentages = self.percentages();
        BlockFace::iter()
            .map(|face| {
                let theoretical = face.theoretical_percent();
                let actual = percentages.get(face);
                FaceReport {
                    face,
                    count: self.block_count(face),
                    theoretical,
                    actual,
                    deviation: Deviation::classify(theoretical, actual, threshold),
                }
            })
            .collect()
    }

    pub fn rates(&self) -> SuccessRates {
        let broken = self.count(Counter::ArmourBroken);
        let armour_rolls = broken + self.count(Counter::ArmourHeld);
        let injuries: u64 = counter::INJURY.iter().map(|c| self.count(*c)).sum();
        let casualties: u64 = counter::CASUALTY.iter().map(|c| self.count(*c)).sum();
        let started = self.count(Counter::ActionsStarted);

        SuccessRates {
            armour_break: percent(broken, armour_rolls),
            injury: percent(injuries, started),
            casualty: percent(casualties, started),
            completion: percent(self.count(Counter::ActionsCompleted), started),
        }
    }

    /// Most frequent single d6 face; ties resolve to the lowest face, 1 when empty.
    pub fn most_common_d6(&self) -> u8 {
        most_common(&counter::D6, self).map_or(1, |index| index as u8 + 1)
    }

    /// Most frequent 2d6 sum; ties resolve to the lowest sum, 7 when empty.
    pub fn most_common_two_d6(&self) -> u8 {
        most_common(&counter::TWO_D6, self).map_or(7, |index| index as u8 + 2)
    }
}

/// Index of the highest non-zero counter, earliest wins on ties.
fn most_common(counters: &[Counter], stats: &RollStatistics) -> Option<usize> {
    counters
        .iter()
        .enumerate()
        .map(|(index, counter)| (index, stats.count(*counter)))
        .filter(|(_, count)| *count > 0)
        .fold(None, |best: Option<(usize, u64)>, (index, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((index, count)),
        })
        .map(|(index, _)| index)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{IgnoredAny, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use strum::EnumCount;

    use super::{Counter, RollStatistics};

    impl Serialize for RollStatistics {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(Counter::COUNT))?;
            for (counter, value) in self.counters() {
                map.serialize_entry(counter.as_ref(), &value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for RollStatistics {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(CountersVisitor)
        }
    }

    struct CountersVisitor;

    impl<'de> Visitor<'de> for CountersVisitor {
        type Value = RollStatistics;

        fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("a map of counter names to counts")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut stats = RollStatistics::new();
            while let Some(key) = access.next_key::<String>()? {
                match key.parse::<Counter>() {
                    Ok(counter) => {
                        stats.counts[counter.index()] = access.next_value()?;
                    }
                    Err(_) => {
                        access.next_value::<IgnoredAny>()?;
                    }
                }
            }
            Ok(stats)
        }
    }
}
