pub mod core;
pub mod index;
pub mod ops;
pub mod ingest;
pub mod search;
pub mod query;
pub mod session;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                          SCOUTDEX DATA FLOW                                   │
└──────────────────────────────────────────────────────────────────────────────┘

  players.csv ─┐
  rating.csv  ─┼─► CsvSource ──► IndexBuilder ──finish()──► Indices
  tags.csv    ─┘   (records)     • ingest_players            • players: HashIndex<Player>
                                 • ingest_ratings            • users:   HashIndex<User>
                                 • ingest_tags               • names:   Trie (long name)
                                 • finalize means            • tags:    Trie (tag)
                                                                   │
                                                                   ▼ (&Indices, read-only)
  stdin ─► Session ─► CommandParser ─► Command ─► QueryEngine
                                                  • by_name_prefix   Trie::search_prefix
                                                  • by_user          HashIndex::lookup
                                                  • top_by_position  full player scan
                                                  • by_tags          Trie::search_exact + SetOps
                                                        │
                                                        ▼  SortKit (stable, rating desc)
                                                  TableRenderer ─► stdout

┌─────────────────────────── INDEX LAYER ──────────────────────────────────────┐
│  PolynomialHasher   decimal digits as coefficients of a base-31 polynomial    │
│  HashIndex<T>       fixed prime bucket count, separate chaining, first wins   │
│  Trie               lowercased words, BTreeMap children, id list per word     │
└──────────────────────────────────────────────────────────────────────────────┘
*/
