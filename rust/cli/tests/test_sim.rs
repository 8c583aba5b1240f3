mod helpers;

use drawpoker_engine::logger::RoundRecord;
use helpers::{clean_env, run_cli};
use serial_test::serial;

#[test]
#[serial]
fn sim_reports_summary() {
    clean_env();
    let res = run_cli(
        &["sim", "--rounds", "200", "--credits", "100000", "--seed", "5"],
        "",
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Rounds: 200/200"));
    assert!(res.stdout.contains("Wagered: 200"));
    let rtp: f64 = res
        .stdout
        .lines()
        .find_map(|l| l.strip_prefix("RTP: "))
        .and_then(|v| v.trim_end_matches('%').parse().ok())
        .unwrap();
    assert!(rtp >= 0.0);
}

#[test]
#[serial]
fn sim_rtp_matches_wagered_and_won() {
    clean_env();
    let res = run_cli(
        &["sim", "--rounds", "2000", "--credits", "1000000", "--seed", "4"],
        "",
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    let field = |name: &str| -> f64 {
        res.stdout
            .lines()
            .find_map(|l| l.strip_prefix(name))
            .and_then(|v| v.trim_end_matches('%').parse().ok())
            .unwrap()
    };
    let wagered = field("Wagered: ");
    let won = field("Won: ");
    let rtp = field("RTP: ");
    assert!((rtp - won * 100.0 / wagered).abs() < 0.01);
    assert!((50.0..150.0).contains(&rtp), "rtp {rtp}");
}

#[test]
#[serial]
fn sim_is_deterministic_per_seed() {
    clean_env();
    let args = ["sim", "--rounds", "100", "--seed", "31", "--bet", "5", "--credits", "5000"];
    let a = run_cli(&args, "");
    let b = run_cli(&args, "");
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn sim_policy_from_env() {
    clean_env();
    unsafe {
        std::env::set_var("DRAWPOKER_POLICY", "hold_none");
    }
    let res = run_cli(&["sim", "--rounds", "3", "--seed", "1"], "");
    clean_env();
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("policy=hold_none"));
}

#[test]
#[serial]
fn sim_unknown_policy_fails() {
    clean_env();
    let res = run_cli(&["sim", "--rounds", "3", "--policy", "psychic"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("psychic"));
}

#[test]
#[serial]
fn sim_output_feeds_stats() {
    clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    let path_s = path.to_str().unwrap();
    let res = run_cli(
        &["sim", "--rounds", "60", "--credits", "10000", "--seed", "12", "--output", path_s],
        "",
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 60);
    let wagered: u32 = records.iter().map(|r| r.bet).sum();
    let won: u32 = records.iter().map(|r| r.amount_won).sum();
    assert_eq!(
        records.last().unwrap().credits_after,
        10_000 - wagered + won
    );

    let stats = run_cli(&["stats", "--input", path_s], "");
    assert_eq!(stats.exit_code, 0, "{}", stats.stderr);
    assert!(stats.stdout.contains("Rounds: 60"));
    assert!(stats.stdout.contains(&format!("Wagered: {}", wagered)));
    assert!(stats.stdout.contains(&format!("Won: {}", won)));
}
