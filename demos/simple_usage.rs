/// scoutdex API demo
///
/// Builds the indices from in-memory records and runs every query:
/// - name prefix search
/// - ratings of one user
/// - best players for a position
/// - tag search

use scoutdex::core::config::Config;
use scoutdex::core::error::Result;
use scoutdex::core::types::{PlayerRecord, RatingRecord, TagRecord, UserId};
use scoutdex::ingest::builder::IndexBuilder;
use scoutdex::search::engine::QueryEngine;
use scoutdex::session::render::{PlayerLayout, TableRenderer};

fn player(id: u32, short_name: &str, long_name: &str, positions: &str, club: &str) -> Result<PlayerRecord> {
    Ok(PlayerRecord {
        id,
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
        positions: positions.to_string(),
        nationality: "Brazil".to_string(),
        club_name: club.to_string(),
        league_name: "Campeonato Brasileiro".to_string(),
    })
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        scoutdex - Complete API Demo          ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Build the indices
    println!("Step 1: BUILD - Indexing players, ratings and tags...");
    let config = Config { min_ratings_for_top: 2, ..Config::default() };
    let mut builder = IndexBuilder::new(&config)?;

    builder.ingest_players(vec![
        player(1, "Zico", "Arthur Antunes Coimbra", "CAM, ST", "Flamengo"),
        player(2, "Romário", "Romário de Souza Faria", "ST", "Vasco da Gama"),
        player(3, "Ronaldo", "Ronaldo Luís Nazário de Lima", "ST, CF", "Cruzeiro"),
        player(4, "Sócrates", "Sócrates Brasileiro Sampaio", "CM", "Corinthians"),
    ])?;

    let ratings = [(1, 1, 4.5), (2, 1, 5.0), (1, 2, 4.0), (2, 2, 3.5), (1, 3, 5.0), (3, 3, 4.5), (3, 4, 4.0)];
    builder.ingest_ratings(ratings.iter().map(|&(user_id, player_id, rating)| {
        Ok(RatingRecord { user_id, player_id, rating })
    }))?;

    builder.ingest_tags(vec![
        Ok(TagRecord { player_id: 3, tag: "Clinical Finisher".to_string() }),
        Ok(TagRecord { player_id: 3, tag: "Speedster".to_string() }),
        Ok(TagRecord { player_id: 2, tag: "Clinical Finisher".to_string() }),
    ]);

    let (indices, report) = builder.finish();
    println!("  {} players, {} users, {} ratings\n", report.players, report.users, report.ratings);

    let engine = QueryEngine::new(&indices, &config);
    let mut out = std::io::stdout().lock();

    // Step 2: Name prefix
    println!("Step 2: player 'ro'");
    TableRenderer::players(&mut out, &engine.by_name_prefix("ro"), PlayerLayout::Compact)?;

    // Step 3: One user's ratings
    println!("\nStep 3: user 1");
    TableRenderer::user_ratings(&mut out, &engine.by_user(UserId(1))?)?;

    // Step 4: Top by position
    println!("\nStep 4: top 2 st");
    TableRenderer::players(&mut out, &engine.top_by_position(2, "st"), PlayerLayout::Full)?;

    // Step 5: Tags
    println!("\nStep 5: tags 'clinical finisher' 'speedster'");
    TableRenderer::players(&mut out, &engine.by_tags(&["clinical finisher", "speedster"]), PlayerLayout::Full)?;

    // Step 6: Statistics
    println!("\nStep 6: STATS");
    println!("{}", serde_json::to_string_pretty(&engine.index_stats())?);

    println!("\nDemo complete!");
    Ok(())
}
