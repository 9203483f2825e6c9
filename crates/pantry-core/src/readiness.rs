//! Readiness scores and the sources that supply them

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use pantry_recipe::Recipe;
use thiserror::Error;
use tracing::{debug, info};

/// Recipe name to readiness score in `[0, 1]`.
pub type ReadinessMap = HashMap<String, f64>;

/// Scores how ready each candidate recipe is to be cooked right now.
///
/// Implementations may omit candidates they cannot score; omitted recipes are
/// never selected.
pub trait ReadinessSource {
    fn readiness(&self, candidates: &[&Recipe]) -> ReadinessMap;
}

impl<F> ReadinessSource for F
where
    F: Fn(&[&Recipe]) -> ReadinessMap,
{
    fn readiness(&self, candidates: &[&Recipe]) -> ReadinessMap {
        self(candidates)
    }
}

#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("failed to read readiness scores from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse readiness scores in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("readiness of '{name}' must be within [0, 1], got {score}")]
    OutOfRange { name: String, score: f64 },
}

/// Precomputed readiness scores, e.g. exported by an inventory service.
#[derive(Debug, Clone, Default)]
pub struct StaticReadiness {
    scores: ReadinessMap,
}

impl StaticReadiness {
    pub fn new(scores: ReadinessMap) -> Result<Self, ReadinessError> {
        for (name, &score) in &scores {
            if !(0.0..=1.0).contains(&score) {
                return Err(ReadinessError::OutOfRange {
                    name: name.clone(),
                    score,
                });
            }
        }
        Ok(Self { scores })
    }

    /// Load scores from a JSON object of `{"recipe name": score}`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReadinessError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ReadinessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scores: ReadinessMap =
            serde_json::from_str(&content).map_err(|source| ReadinessError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Loaded {} readiness scores from {:?}", scores.len(), path);
        Self::new(scores)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ReadinessSource for StaticReadiness {
    fn readiness(&self, candidates: &[&Recipe]) -> ReadinessMap {
        let map: ReadinessMap = candidates
            .iter()
            .filter_map(|recipe| {
                self.scores
                    .get(&recipe.name)
                    .map(|&score| (recipe.name.clone(), score))
            })
            .collect();
        debug!(
            "Scored {} of {} candidates from static readiness",
            map.len(),
            candidates.len()
        );
        map
    }
}
