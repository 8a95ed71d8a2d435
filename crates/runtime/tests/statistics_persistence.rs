use std::fs;

use game_core::{ActionType, BlockFace, Counter, Phase, RollStatistics, Skills};
use runtime::{
    FileStatisticsRepository, InMemoryStatisticsRepository, RepositoryError, Runtime,
    RuntimeConfig, RuntimeError, StatisticsRepository,
};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> RuntimeConfig {
    RuntimeConfig {
        seed: Some("persist".to_owned()),
        save_data_dir: Some(dir.path().to_path_buf()),
        ..RuntimeConfig::default()
    }
}

/// Plays one block action through to its armour roll.
fn play_block(runtime: &mut Runtime) {
    runtime.select_action(ActionType::Block).expect("select action");
    runtime.select_dice_count(2).expect("dice count");
    let roll = runtime.roll_block_dice().expect("roll block dice");
    runtime
        .select_result(roll.faces()[0], Skills::NONE)
        .expect("select result");
    runtime.set_armour_value(9, false).expect("armour value");
    runtime.roll_armour(false).expect("armour roll");
}

#[test]
fn statistics_survive_a_restart() {
    let dir = TempDir::new().expect("temp dir");

    let saved = {
        let mut runtime = Runtime::builder()
            .config(config_in(&dir))
            .build()
            .expect("build runtime");
        play_block(&mut runtime);
        runtime.statistics().clone()
    };
    assert_eq!(saved.block_total(), 2);
    assert!(dir.path().join(FileStatisticsRepository::FILE_NAME).exists());

    let runtime = Runtime::builder()
        .config(config_in(&dir))
        .build()
        .expect("rebuild runtime");
    assert_eq!(runtime.statistics(), &saved);
}

#[test]
fn file_is_a_flat_counter_map() {
    let dir = TempDir::new().expect("temp dir");
    let repo = FileStatisticsRepository::new(dir.path()).expect("repo");

    let mut stats = RollStatistics::new();
    stats.record_block_face(BlockFace::Skull);
    stats.record_two_die(4, 4);
    repo.save(&stats).expect("save");

    let text = fs::read_to_string(repo.path()).expect("read file");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json["block_skull"], 1);
    assert_eq!(json["two_d6_8"], 1);
    assert_eq!(json["total_rolls"], 2);
    assert!(!dir.path().join("statistics.json.tmp").exists());
}

#[test]
fn older_files_load_with_missing_counters_as_zero() {
    let dir = TempDir::new().expect("temp dir");
    let repo = FileStatisticsRepository::new(dir.path()).expect("repo");
    fs::write(
        repo.path(),
        r#"{ "block_push": 5, "total_rolls": 5, "retired_counter": 1 }"#,
    )
    .expect("write legacy file");

    let stats = repo.load().expect("load").expect("record present");
    assert_eq!(stats.block_count(BlockFace::Push), 5);
    assert_eq!(stats.count(Counter::ArmourBroken), 0);
    assert_eq!(stats.count(Counter::ActionsStarted), 0);
}

#[test]
fn corrupted_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let repo = FileStatisticsRepository::new(dir.path()).expect("repo");
    fs::write(repo.path(), "not json").expect("write garbage");

    assert!(matches!(repo.load(), Err(RepositoryError::Json(_))));
    assert!(matches!(
        Runtime::builder().config(config_in(&dir)).build(),
        Err(RuntimeError::Repository(RepositoryError::Json(_)))
    ));
}

#[test]
fn delete_removes_the_record() {
    let dir = TempDir::new().expect("temp dir");
    let repo = FileStatisticsRepository::new(dir.path()).expect("repo");
    assert!(repo.load().expect("load").is_none());

    repo.save(&RollStatistics::new()).expect("save");
    assert!(repo.exists());
    repo.delete().expect("delete");
    assert!(!repo.exists());
    repo.delete().expect("deleting twice is fine");
}

#[test]
fn reset_is_persisted() {
    let dir = TempDir::new().expect("temp dir");
    let mut runtime = Runtime::builder()
        .config(config_in(&dir))
        .build()
        .expect("build runtime");
    play_block(&mut runtime);
    runtime.reset_statistics();

    let repo = FileStatisticsRepository::new(dir.path()).expect("repo");
    let stored = repo.load().expect("load").expect("record present");
    assert!(stored.is_empty());
}

#[test]
fn rejected_operations_do_not_touch_storage() {
    let repo = InMemoryStatisticsRepository::new();
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            seed: Some("reject".to_owned()),
            ..RuntimeConfig::default()
        })
        .repository(repo)
        .build()
        .expect("build runtime");

    let error = runtime.roll_armour(false).expect_err("no action in flight");
    assert!(error.is_recoverable());
    assert_eq!(runtime.phase(), Phase::ActionSelect);
    assert!(runtime.statistics().is_empty());
}

#[test]
fn persistence_can_be_disabled() {
    let dir = TempDir::new().expect("temp dir");
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            enable_persistence: false,
            ..config_in(&dir)
        })
        .build()
        .expect("build runtime");
    assert!(!runtime.is_persistent());

    play_block(&mut runtime);
    assert!(!dir.path().join(FileStatisticsRepository::FILE_NAME).exists());
}

#[test]
fn unseeded_runtime_reports_fatal_error() {
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            enable_persistence: false,
            ..RuntimeConfig::default()
        })
        .build()
        .expect("build runtime");
    assert!(!runtime.session().is_seeded());

    runtime.select_action(ActionType::Foul).expect("select action");
    runtime.set_armour_value(8, false).expect("armour value");
    let error = runtime.roll_armour(false).expect_err("dice are not seeded");
    assert!(!error.is_recoverable());
    assert_eq!(runtime.phase(), Phase::ArmourRoll);
}
