use crate::docker::DockerError;

/// Captured result of one build-program invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    /// Captured stdout followed by stderr.
    pub output: String,
}

/// Abstraction over the container build program for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait DockerExecutor: Send + Sync {
    /// Run the build program with the given arguments, capturing output.
    /// A nonzero exit is reported in the output, not as an error.
    async fn run(&self, args: &[String]) -> Result<CommandOutput, DockerError>;
}

/// Executor that shells out to the configured build program.
pub struct RealExecutor {
    program: String,
}

impl RealExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl DockerExecutor for RealExecutor {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, DockerError> {
        use std::process::Stdio;

        tracing::debug!(program = %self.program, ?args, "invoking container build");
        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DockerError::NotFound {
                program: self.program.clone(),
                source: e,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }
}
