//! Container build invocation for nbdash.
//!
//! Shells out to the configured build program (`docker build -t <tag>
//! <context>`). A nonzero exit is not an error here: the captured output
//! travels back in the [`BuildOutcome`] so the caller can report it and
//! still treat the staged context as a success.

pub mod client;
pub mod docker;
pub mod executor;

pub use client::{BuildOutcome, DockerClient};
pub use docker::DockerError;
pub use executor::{CommandOutput, DockerExecutor, RealExecutor};
