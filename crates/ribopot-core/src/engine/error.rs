use crate::core::io::profiles::ProfileStoreError;
use crate::core::potential::PotentialError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid potential parameters: {source}")]
    Potential {
        #[from]
        source: PotentialError,
    },

    #[error(transparent)]
    ProfileStore(#[from] ProfileStoreError),

    #[error("Reference set '{dir}' produced no usable structures", dir = dir.display())]
    EmptyTrainingSet { dir: PathBuf },

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
