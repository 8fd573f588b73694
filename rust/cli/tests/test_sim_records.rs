//! `sim` output: JSONL game records and the win tally.

use cheat_cli::config::ENV_KEYS;
use cheat_engine::logger::GameRecord;
use cheat_engine::player::ActionType;
use serial_test::serial;

fn clear_env() {
    for key in ENV_KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn sim(args: &[&str]) -> (i32, String) {
    let (code, out, _) = sim_with_stderr(args);
    (code, out)
}

fn sim_with_stderr(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["cheat", "sim"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = cheat_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn read_records(path: &std::path::Path) -> Vec<GameRecord> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid game record"))
        .collect()
}

#[test]
#[serial]
fn writes_one_record_per_game() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/games.jsonl");
    let path_str = path.to_str().unwrap();

    let (code, out) = sim(&[
        "--games", "5", "--seed", "40", "--output", path_str, "--seat", "80-20", "--seat",
        "random", "--seat", "100-0",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Simulated 5 games (base seed 40)"));

    let records = read_records(&path);
    assert_eq!(records.len(), 5);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.seed, Some(40 + i as u64));
        assert!(rec.game_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(rec.players, vec!["80-20", "random", "100-0"]);
        assert_eq!(rec.actions.len() as u32, rec.turns);
        assert_eq!(rec.truncated, rec.winner.is_none());
        assert!(rec.ts.is_some());
        // every game opens with a play by seat 0
        assert_eq!(rec.actions[0].action, ActionType::Play);
        assert_eq!(rec.actions[0].seat, 0);
        assert!(rec.actions[0].claim.is_some());
    }
}

#[test]
#[serial]
fn same_seed_same_records() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.jsonl");
    let b = dir.path().join("b.jsonl");
    for p in [&a, &b] {
        let (code, _) = sim(&[
            "--games", "3", "--seed", "9", "--output", p.to_str().unwrap(),
        ]);
        assert_eq!(code, 0);
    }
    let strip = |mut r: GameRecord| {
        r.ts = None;
        r
    };
    let ra: Vec<_> = read_records(&a).into_iter().map(strip).collect();
    let rb: Vec<_> = read_records(&b).into_iter().map(strip).collect();
    assert_eq!(ra, rb);
}

#[test]
#[serial]
fn tiny_turn_ceiling_truncates_every_game() {
    clear_env();
    let (code, out, err) = sim_with_stderr(&["--games", "4", "--seed", "1", "--max-turns", "1"]);
    assert_eq!(code, 0);
    assert!(out.contains("truncated: 4"));
    assert!(out.contains("average turns: 1.0"));
    assert_eq!(
        err.trim_end(),
        "WARNING: 4 of 4 games hit the 1-turn limit without a winner"
    );
}

#[test]
#[serial]
fn duplicate_agents_are_tallied_separately() {
    clear_env();
    let (code, out) = sim(&[
        "--games", "2", "--seed", "5", "--seat", "random", "--seat", "random",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("random#0:"));
    assert!(out.contains("random#1:"));
}

#[test]
#[serial]
fn repeated_runs_into_one_file_keep_ids_unique() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let path_str = path.to_str().unwrap();

    for seed in ["12", "30"] {
        let (code, _) = sim(&["--games", "2", "--seed", seed, "--output", path_str]);
        assert_eq!(code, 0);
    }

    let ids: Vec<String> = read_records(&path).into_iter().map(|r| r.game_id).collect();
    assert_eq!(ids.len(), 4);
    let unique: std::collections::HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 4, "duplicate game ids: {:?}", ids);
}
