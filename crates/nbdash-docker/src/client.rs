use std::path::Path;

use crate::docker::DockerError;
use crate::executor::{DockerExecutor, RealExecutor};

/// Container build client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            executor: RealExecutor::new(program),
        }
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Build an image from the context directory. A nonzero exit from the
    /// build program is reported in the outcome, not raised; only a
    /// missing build program is an error.
    pub async fn build(
        &self,
        context_dir: &Path,
        image_tag: &str,
    ) -> Result<BuildOutcome, DockerError> {
        let args = vec![
            "build".to_owned(),
            "-t".to_owned(),
            image_tag.to_owned(),
            context_dir.to_string_lossy().into_owned(),
        ];

        let result = self.executor.run(&args).await?;

        Ok(BuildOutcome {
            success: result.exit_code == 0,
            output: result.output,
        })
    }
}

/// Result of a build invocation: whether it succeeded plus the captured
/// build output for reporting.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub success: bool,
    pub output: String,
}
