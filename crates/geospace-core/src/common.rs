// crates/geospace-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a place store.
///
/// Returned by [`PlaceStore::stats`](crate::traits::PlaceStore::stats); the
/// counts reflect what survived validation at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub places: usize,
    pub countries: usize,
    /// Total alternate spellings across all places.
    pub alternate_names: usize,
}
