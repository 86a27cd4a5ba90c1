//! Statistics table and surface report integration tests.

use std::io::Cursor;

use tennis_sim::api::simulate_surfaces;
use tennis_sim::core::{MatchFormat, PlayerStats, SimError, SimulationConfig};
use tennis_sim::data::{PlayerRecord, StatsProvider, StatsTable, Surface};

fn record(name: &str, ranking: u32, surfaces: &[(Surface, f64)]) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        ranking,
        surfaces: surfaces
            .iter()
            .map(|&(surface, first_win)| {
                (
                    surface,
                    PlayerStats {
                        first_serve_in_pct: 0.62,
                        first_serve_win_pct: first_win,
                        second_serve_win_pct: 0.53,
                        double_fault_per_second_serve: 0.07,
                        vs_first_serve_win_pct: 0.29,
                        vs_second_serve_win_pct: 0.50,
                        break_point_save_pct: 0.62,
                        break_point_conversion_pct: 0.41,
                        dominance_ratio: 1.1,
                    },
                )
            })
            .collect(),
    }
}

fn table() -> StatsTable {
    let mut table = StatsTable::new();
    table
        .insert(record("Clay Specialist", 4, &[(Surface::Clay, 0.74)]))
        .unwrap();
    table
        .insert(record(
            "All Courter",
            1,
            &[(Surface::Hard, 0.76), (Surface::Clay, 0.72), (Surface::Grass, 0.79)],
        ))
        .unwrap();
    table
        .insert(record("Hard Hitter", 2, &[(Surface::Hard, 0.78)]))
        .unwrap();
    table
}

#[test]
fn test_json_round_trip_through_file() {
    let players: Vec<PlayerRecord> = ["All Courter", "Hard Hitter", "Clay Specialist"]
        .iter()
        .map(|name| table().get(name).cloned().unwrap())
        .collect();
    let json = serde_json::json!({ "players": players }).to_string();

    let path = std::env::temp_dir().join(format!("tennis-sim-stats-{}.json", std::process::id()));
    std::fs::write(&path, &json).unwrap();
    let loaded = StatsTable::load(&path);
    std::fs::remove_file(&path).unwrap();

    let loaded = loaded.unwrap();
    assert_eq!(loaded.len(), 3);
    let hitter = loaded.get("Hard Hitter").unwrap();
    assert_eq!(hitter.ranking, 2);
    assert_eq!(hitter.surfaces.keys().copied().collect::<Vec<_>>(), vec![Surface::Hard]);

    let from_reader = StatsTable::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(from_reader.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = StatsTable::load("/nonexistent/tennis-sim/stats.json").unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_player_listing() {
    let names: Vec<_> = table().players().into_iter().map(|p| (p.name, p.ranking)).collect();
    assert_eq!(
        names,
        vec![
            ("All Courter".to_string(), 1),
            ("Hard Hitter".to_string(), 2),
            ("Clay Specialist".to_string(), 4),
        ]
    );
}

#[test]
fn test_lookup_fallback_rules() {
    let table = table();

    let exact = table.lookup("All Courter", Surface::Grass).unwrap();
    assert!(!exact.is_fallback);
    assert_eq!(exact.stats.first_serve_win_pct, 0.79);

    let fallback = table.lookup("Hard Hitter", Surface::Clay).unwrap();
    assert!(fallback.is_fallback);
    assert_eq!(fallback.stats.first_serve_win_pct, 0.78);

    let missing = table.lookup("Clay Specialist", Surface::Hard).unwrap_err();
    assert!(matches!(missing, SimError::MissingSurface { .. }));
}

#[test]
fn test_surface_report_warnings() {
    let config = SimulationConfig::new()
        .with_format(MatchFormat::BestOfFive)
        .with_trials(40)
        .with_seed(12)
        .with_detailed_stats(true);
    let report = simulate_surfaces(&table(), "All Courter", "Hard Hitter", &config).unwrap();

    assert_eq!(report.format, MatchFormat::BestOfFive);
    assert_eq!(report.num_simulations, 40);
    assert_eq!(
        report.fallback_warnings,
        vec![
            "Hard Hitter using hard court data for clay surface".to_string(),
            "Hard Hitter using hard court data for grass surface".to_string(),
        ]
    );

    for surface in Surface::ALL {
        let surface_report = &report.surfaces[&surface];
        assert_eq!(surface_report.result.total_simulations, 40);
        assert!(surface_report.result.observed_stats.is_some());
    }
}

#[test]
fn test_surface_report_missing_surface_aborts() {
    let config = SimulationConfig::new().with_trials(10);
    let err = simulate_surfaces(&table(), "All Courter", "Clay Specialist", &config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Surface hard not available for player Clay Specialist"
    );
}
