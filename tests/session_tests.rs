use scoutdex::core::config::Config;
use scoutdex::core::error::Result;
use scoutdex::core::types::{PlayerRecord, RatingRecord, TagRecord};
use scoutdex::index::indices::Indices;
use scoutdex::ingest::builder::IndexBuilder;
use scoutdex::search::engine::QueryEngine;
use scoutdex::session::session::{Flow, Session, SessionSummary};

fn player(id: u32, short_name: &str, long_name: &str, positions: &str) -> Result<PlayerRecord> {
    Ok(PlayerRecord {
        id,
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
        positions: positions.to_string(),
        nationality: "Argentina".to_string(),
        club_name: "Boca Juniors".to_string(),
        league_name: "Liga Profesional".to_string(),
    })
}

fn indices() -> Indices {
    let mut builder = IndexBuilder::with_table_sizes(53, 53).unwrap();
    builder.ingest_players(vec![
        player(10, "D. Maradona", "Diego Armando Maradona", "CAM, SS"),
        player(11, "J. Riquelme", "Juan Román Riquelme", "CAM"),
    ]).unwrap();
    builder.ingest_ratings(vec![
        Ok(RatingRecord { user_id: 1, player_id: 10, rating: 5.0 }),
        Ok(RatingRecord { user_id: 1, player_id: 11, rating: 4.0 }),
    ]).unwrap();
    builder.ingest_tags(vec![Ok(TagRecord { player_id: 10, tag: "Playmaker".to_string() })]);
    builder.finish().0
}

fn run(indices: &Indices, script: &str) -> (SessionSummary, String) {
    let config = Config { min_ratings_for_top: 1, ..Config::default() };
    let session = Session::new(QueryEngine::new(indices, &config)).without_prompt();

    let mut out = Vec::new();
    let summary = session.run(script.as_bytes(), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn commands_render_tables() {
    let indices = indices();
    let (summary, out) = run(&indices, "player diego\nuser 1\ntop 5 cam\ntags 'playmaker'\n");

    assert_eq!(summary, SessionSummary { commands: 4, failed: 0 });
    assert!(out.contains("Diego Armando Maradona"));
    assert!(out.contains("Juan Román Riquelme"));
    assert!(out.contains("Boca Juniors"));
    assert!(out.contains("5.000000"));
}

#[test]
fn loop_stops_at_sair() {
    let indices = indices();
    let (summary, out) = run(&indices, "sair\nplayer diego\n");

    assert_eq!(summary.commands, 1);
    assert!(!out.contains("Maradona"));
}

#[test]
fn errors_are_reported_and_the_loop_continues() {
    let indices = indices();
    let (summary, out) = run(&indices, "dance\nuser 77\nuser abc\n\nplayer juan\n");

    assert_eq!(summary, SessionSummary { commands: 4, failed: 3 });
    assert!(out.contains("unknown command 'dance'"));
    assert!(out.contains("user 77 not found"));
    assert!(out.contains("usage: user <id>"));
    assert!(out.contains("Juan Román Riquelme"));
}

#[test]
fn stats_are_printed_as_json() {
    let indices = indices();
    let (_, out) = run(&indices, "stats\n");

    assert!(out.contains("\"players\""));
    assert!(out.contains("\"distinct_tags\": 1"));
}

#[test]
fn execute_reports_quit() {
    let indices = indices();
    let config = Config::default();
    let session = Session::new(QueryEngine::new(&indices, &config));

    let mut out = Vec::new();
    assert_eq!(session.execute("QUIT", &mut out).unwrap(), Flow::Quit);
    assert_eq!(session.execute("help", &mut out).unwrap(), Flow::Continue);
    assert!(String::from_utf8(out).unwrap().contains("top <n> <position>"));
}
