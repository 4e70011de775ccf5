#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error(
        "container build program '{program}' not found — install docker or set [docker].program in nbdash.toml"
    )]
    NotFound {
        program: String,
        source: std::io::Error,
    },
}
