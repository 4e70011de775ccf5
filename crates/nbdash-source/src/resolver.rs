use std::path::{Path, PathBuf};

use nbdash_core::Notebook;

use crate::fetcher::{FetchError, HttpFetcher, HttpResponse, ReqwestFetcher};

/// Where the notebook comes from. Exactly one origin per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookSource {
    LocalFile(PathBuf),
    DirectUrl(String),
    GalleryUrl(String),
}

impl NotebookSource {
    /// Build the source from the three mutually exclusive CLI flags.
    pub fn from_flags(
        file: Option<PathBuf>,
        url: Option<String>,
        gallery: Option<String>,
    ) -> Result<Self, SourceError> {
        match (file, url, gallery) {
            (Some(path), None, None) => Ok(NotebookSource::LocalFile(path)),
            (None, Some(url), None) => Ok(NotebookSource::DirectUrl(url)),
            (None, None, Some(url)) => Ok(NotebookSource::GalleryUrl(url)),
            (None, None, None) => Err(SourceError::NoSource),
            _ => Err(SourceError::MultipleSources),
        }
    }
}

/// A parsed notebook plus its suggested filename and origin metadata.
#[derive(Debug, Clone)]
pub struct ResolvedNotebook {
    pub notebook: Notebook,
    pub filename: String,
    /// The caller-facing URL the notebook came from, when it came from one.
    /// For a gallery source this is the gallery page, not the download URL.
    pub origin_url: Option<String>,
}

/// Resolves a [`NotebookSource`] to notebook content, parameterized over
/// the fetcher for testability.
pub struct SourceClient<F: HttpFetcher = ReqwestFetcher> {
    fetcher: F,
}

impl SourceClient<ReqwestFetcher> {
    pub fn new() -> Self {
        Self {
            fetcher: ReqwestFetcher::new(),
        }
    }
}

impl Default for SourceClient<ReqwestFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: HttpFetcher> SourceClient<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn resolve(&self, source: &NotebookSource) -> Result<ResolvedNotebook, SourceError> {
        match source {
            NotebookSource::LocalFile(path) => self.resolve_file(path),
            NotebookSource::DirectUrl(url) => self.resolve_url(url).await,
            NotebookSource::GalleryUrl(url) => self.resolve_gallery(url).await,
        }
    }

    fn resolve_file(&self, path: &Path) -> Result<ResolvedNotebook, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|e| SourceError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or_else(|| SourceError::BadFilename {
                path: path.to_path_buf(),
            })?;

        Ok(ResolvedNotebook {
            notebook: Notebook::parse(&text)?,
            filename,
            origin_url: None,
        })
    }

    async fn resolve_url(&self, url: &str) -> Result<ResolvedNotebook, SourceError> {
        let response = self.fetch(url).await?;

        Ok(ResolvedNotebook {
            notebook: Notebook::parse(&response.body)?,
            filename: filename_from_url(url)?,
            origin_url: Some(url.to_owned()),
        })
    }

    async fn resolve_gallery(&self, url: &str) -> Result<ResolvedNotebook, SourceError> {
        let download_url = format!("{url}/download");
        let response = self.fetch(&download_url).await?;

        // The gallery names the notebook via Content-Disposition; fall back
        // to the URL-derived name when the header is absent.
        let filename = match response
            .header("content-disposition")
            .and_then(content_disposition_filename)
        {
            Some(name) => name.to_owned(),
            None => filename_from_url(&download_url)?,
        };

        Ok(ResolvedNotebook {
            notebook: Notebook::parse(&response.body)?,
            filename,
            origin_url: Some(url.to_owned()),
        })
    }

    async fn fetch(&self, url: &str) -> Result<HttpResponse, SourceError> {
        let response = self.fetcher.get(url).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: response.status,
                reason: response.reason.clone(),
            }
            .into());
        }
        Ok(response)
    }
}

/// Last non-empty path segment of the URL.
fn filename_from_url(url: &str) -> Result<String, SourceError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| SourceError::InvalidUrl {
        url: url.to_owned(),
    })?;
    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| SourceError::InvalidUrl {
            url: url.to_owned(),
        })
}

/// Extract the quoted filename segment from a Content-Disposition value,
/// e.g. `attachment; filename="report.ipynb"`.
fn content_disposition_filename(value: &str) -> Option<&str> {
    let (_, after) = value.split_once("filename=")?;
    let quoted = after.trim_start().strip_prefix('"')?;
    let (name, _) = quoted.split_once('"')?;
    if name.is_empty() { None } else { Some(name) }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no notebook source given — pass one of --file, --url, --gallery")]
    NoSource,

    #[error("more than one notebook source given — pass exactly one of --file, --url, --gallery")]
    MultipleSources,

    #[error("failed to read notebook file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("notebook path {path} has no usable filename")]
    BadFilename { path: PathBuf },

    #[error("cannot derive a notebook filename from URL {url}")]
    InvalidUrl { url: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Notebook(#[from] nbdash_core::Error),
}
