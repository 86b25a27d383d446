use std::io;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Reads the school names file, one name per line. Blank lines are skipped, order is preserved.
#[instrument]
pub async fn load_school_names(path: &str) -> Result<Vec<String>, LoaderError> {
    info!("📁 Loading school names...");
    let content = fs::read_to_string(path).await.map_err(|e| LoaderError::Io {
        source: e,
        path: path.to_string(),
    })?;

    let names = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();

    info!("📁 Loading school names... OK, {} found", names.len());
    Ok(names)
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read '{path}': {source}")]
    Io { source: io::Error, path: String },
}
