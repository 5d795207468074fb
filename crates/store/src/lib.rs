//! Profile persistence - high score, item inventory and settings
//!
//! The game itself never touches storage. A host loads a [`Profile`] at
//! startup, hands the resulting [`Records`](tui_match3_types::Records) to the
//! session, and writes them back whenever they change.
//!
//! Storage is an opaque string key-value map ([`KvStore`]). Two backends are
//! provided:
//!
//! - [`MemoryStore`]: in-process map, for tests and headless runs
//! - [`JsonFileStore`]: one JSON object on disk, rewritten on every change
//!
//! Reading never fails: missing or unreadable values load as defaults and are
//! logged. Writing reports a [`StoreError`].
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `match3_highscore` | decimal integer |
//! | `match3_items` | `{"hammer":3,"shuffle":2,"extraMoves":1}` |
//! | `match3_settings` | `{"music":true,"sound":true,"vibration":true}` |

use std::path::PathBuf;

use thiserror::Error;

pub mod kv;
pub mod profile;

pub use kv::{JsonFileStore, KvStore, MemoryStore};
pub use profile::{Profile, HIGH_SCORE_KEY, ITEMS_KEY, SETTINGS_KEY};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode profile data: {0}")]
    Encode(#[from] serde_json::Error),
}
