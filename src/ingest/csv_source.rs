use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde::Deserialize;
use serde::de::IgnoredAny;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{PlayerRecord, RatingRecord, TagRecord};

/// Tag rows carry a leading column nobody reads
#[derive(Debug, Deserialize)]
struct TagRow(IgnoredAny, u32, String);

/// Typed record streams over a CSV file.
///
/// Columns are matched by position, not by header name. A row that does not
/// fit the expected shape comes out as an `Err` item and the stream carries on.
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvSource<File> {
    pub fn open(path: impl AsRef<Path>, has_headers: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::new(ErrorKind::Io, format!("Cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self::from_reader(file, has_headers))
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(reader: R, has_headers: bool) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        CsvSource { reader }
    }

    fn rows<T>(self) -> impl Iterator<Item = Result<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.reader.into_records().map(|row| {
            let row = row?;
            let record = row.deserialize::<T>(None)?;
            Ok(record)
        })
    }

    /// `id, short_name, long_name, positions, nationality, club_name, league_name`
    pub fn players(self) -> impl Iterator<Item = Result<PlayerRecord>> {
        self.rows::<PlayerRecord>()
    }

    /// `user_id, player_id, rating`
    pub fn ratings(self) -> impl Iterator<Item = Result<RatingRecord>> {
        self.rows::<RatingRecord>()
    }

    /// `(ignored), player_id, tag`
    pub fn tags(self) -> impl Iterator<Item = Result<TagRecord>> {
        self.rows::<TagRow>()
            .map(|row| row.map(|TagRow(_, player_id, tag)| TagRecord { player_id, tag }))
    }
}
