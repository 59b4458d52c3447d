pub mod csv_source;
pub mod builder;

use tracing::info;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IngestReport;
use crate::index::indices::Indices;
use crate::ingest::builder::IndexBuilder;
use crate::ingest::csv_source::CsvSource;

/// Build every index from the three CSV files named in `config`.
pub fn load(config: &Config) -> Result<(Indices, IngestReport)> {
    config.validate()?;
    let mut builder = IndexBuilder::new(config)?;

    info!(path = %config.players_path.display(), "reading players");
    builder.ingest_players(CsvSource::open(&config.players_path, config.has_headers)?.players())?;

    info!(path = %config.ratings_path.display(), "reading ratings");
    builder.ingest_ratings(CsvSource::open(&config.ratings_path, config.has_headers)?.ratings())?;

    info!(path = %config.tags_path.display(), "reading tags");
    builder.ingest_tags(CsvSource::open(&config.tags_path, config.has_headers)?.tags());

    Ok(builder.finish())
}
