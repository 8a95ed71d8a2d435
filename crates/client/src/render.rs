//! Text presentation of session state.

use console::style;
use game_core::{
    ActionLogEntry, BlockFace, Counter, Deviation, FaceReport, GameSession, Phase, RollStatistics,
    Side, Skill, SkillSet, Skills,
};
use strum::IntoEnumIterator;

/// What the player should do next.
pub fn phase_hint(session: &GameSession) -> String {
    let hint = match session.phase() {
        Phase::ActionSelect if !session.is_seeded() => "choose a seed: seed <word>",
        Phase::ActionSelect => "block | foul",
        Phase::DiceSelect => "dice <1-3>",
        Phase::DiceRoll => "roll",
        Phase::ResultSelect => "pick <n|face>",
        Phase::ArmourValue => "av <1-12> [stunty]",
        Phase::ArmourRoll | Phase::InjuryRoll => "roll [pile]",
        Phase::CasualtyRoll => "roll",
        Phase::Apothecary if session.apothecary_available() => "apo yes | apo no",
        Phase::Apothecary => "apo no (apothecary already used)",
        Phase::Complete => "done",
    };
    format!("{} {}", style(session.phase().title()).bold(), style(hint).dim())
}

pub fn log_entry(entry: &ActionLogEntry) -> String {
    format!("  {entry}")
}

/// Numbered faces of the current block roll.
pub fn block_faces(faces: &[BlockFace]) -> String {
    faces
        .iter()
        .enumerate()
        .map(|(index, face)| format!("[{}] {} {}", index + 1, face.glyph(), face.label()))
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn skills(skills: &Skills) -> String {
    let side = |side: Side| {
        let set: SkillSet = skills.side(side);
        let names: Vec<String> = Skill::iter()
            .filter(|skill| skill.side() == side && set.contains(skill.flag()))
            .map(|skill| skill.to_string())
            .collect();
        if names.is_empty() {
            "-".to_owned()
        } else {
            names.join(", ")
        }
    };
    format!(
        "attacker: {}  defender: {}",
        side(Side::Attacker),
        side(Side::Defender)
    )
}

pub fn statistics(stats: &RollStatistics, reports: &[FaceReport]) -> Vec<String> {
    let mut lines = vec![
        style("Block dice").bold().to_string(),
        format!(
            "  {:<12} {:>6} {:>9} {:>9}",
            "face", "count", "expected", "actual"
        ),
    ];
    for report in reports {
        let marker = match report.deviation {
            Deviation::High => style(report.deviation.marker()).green().to_string(),
            Deviation::Low => style(report.deviation.marker()).red().to_string(),
            Deviation::Normal => String::new(),
        };
        lines.push(format!(
            "  {:<12} {:>6} {:>8.1}% {:>8.1}% {marker}",
            report.face.label(),
            report.count,
            report.theoretical,
            report.actual,
        ));
    }

    let rates = stats.rates();
    lines.push(style("Outcomes").bold().to_string());
    lines.push(format!(
        "  actions {} started, {} completed ({:.0}%)",
        stats.count(Counter::ActionsStarted),
        stats.count(Counter::ActionsCompleted),
        rates.completion
    ));
    lines.push(format!(
        "  armour broken {} / held {} ({:.0}% break rate)",
        stats.count(Counter::ArmourBroken),
        stats.count(Counter::ArmourHeld),
        rates.armour_break
    ));
    lines.push(format!(
        "  injury rate {:.0}%, casualty rate {:.0}%",
        rates.injury, rates.casualty
    ));
    lines.push(format!(
        "  most common d6: {}, most common 2d6: {}, total rolls: {}",
        stats.most_common_d6(),
        stats.most_common_two_d6(),
        stats.total_rolls()
    ));
    lines
}
