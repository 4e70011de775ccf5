use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Notebook codec ──
    #[error("failed to parse notebook JSON")]
    NotebookParse { source: serde_json::Error },

    #[error("failed to serialize notebook")]
    NotebookSerialize { source: serde_json::Error },

    #[error("unknown dashboard mode '{mode}' — expected 'voila' or 'nbparameterise'")]
    UnknownMode { mode: String },
}
