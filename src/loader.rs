use crate::errors::LoadError;
use crate::models::Dataset;
use std::{fmt, path::PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Where the activity document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Fetches and parses the dataset. Issues a single request; no retry and no
/// timeout.
pub async fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    info!("loading activity data from {source}");
    let bytes = match source {
        DataSource::Url(url) => fetch_url(url).await?,
        DataSource::File(path) => match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::Status { status: 404 });
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        },
    };

    let dataset: Dataset = serde_json::from_slice(&bytes)?;
    debug!(activities = dataset.len(), "parsed activity data");
    Ok(dataset)
}

async fn fetch_url(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}
