use std::path::{Path, PathBuf};

use nbdash_core::{DashboardMode, Notebook};

use crate::dockerfile::{Dockerfile, DockerfileError, NOTEBOOK_HOME};
use crate::groom;
use crate::metadata::MetadataSet;

/// Prefix shared by build-context directories and image tags.
pub const CONTEXT_PREFIX: &str = "nbdash";

/// Name of the staged dependency-install script.
pub const DEPENDENCY_SCRIPT: &str = "ipydeps_build.py";

/// Owns one build context: creates the directory, runs the grooming
/// passes, and writes the groomed notebook plus the rendered Dockerfile.
pub struct Stager {
    mode: DashboardMode,
    context_dir: PathBuf,
    dockerfile: Dockerfile,
}

impl Stager {
    /// Create the build-context directory `<parent>/nbdash-<name>`,
    /// destroying any previous context with the same name. Two concurrent
    /// runs sharing a name race on this directory; callers must serialize.
    pub fn create(
        parent: &Path,
        name: &str,
        mode: DashboardMode,
        base_image: &str,
    ) -> Result<Self, StageError> {
        let context_dir = parent.join(format!("{CONTEXT_PREFIX}-{name}"));

        if context_dir.exists() {
            tracing::debug!(path = %context_dir.display(), "removing stale build context");
            std::fs::remove_dir_all(&context_dir).map_err(|e| StageError::Cleanup {
                path: context_dir.clone(),
                source: e,
            })?;
        }
        std::fs::create_dir_all(&context_dir).map_err(|e| StageError::Create {
            path: context_dir.clone(),
            source: e,
        })?;

        Ok(Self {
            mode,
            context_dir,
            dockerfile: Dockerfile::new(base_image),
        })
    }

    pub fn context_dir(&self) -> &Path {
        &self.context_dir
    }

    /// Groom the notebook, apply metadata, and persist the context.
    /// Consumes the stager; the rendered Dockerfile is final.
    pub fn stage(
        mut self,
        notebook: &mut Notebook,
        filename: &str,
        metadata: &MetadataSet,
    ) -> Result<PathBuf, StageError> {
        groom::strip_ignored_cells(notebook);

        if let Some(install_source) = groom::extract_dependency_cell(notebook) {
            let script_path = self.context_dir.join(DEPENDENCY_SCRIPT);
            std::fs::write(&script_path, &install_source).map_err(|e| StageError::WriteFile {
                path: script_path,
                source: e,
            })?;
            self.dockerfile.add_file(DEPENDENCY_SCRIPT);
            self.dockerfile
                .add_build_command(&format!("python3 {NOTEBOOK_HOME}{DEPENDENCY_SCRIPT}"));
            tracing::debug!("extracted dependency-install cell to {DEPENDENCY_SCRIPT}");
        }

        if self.mode == DashboardMode::Nbparameterise {
            groom::promote_parameters_cell(notebook);
        }

        metadata.apply(&mut self.dockerfile);
        self.dockerfile.set_entry(self.mode, filename);

        let notebook_path = self.context_dir.join(filename);
        std::fs::write(&notebook_path, notebook.to_json()?).map_err(|e| {
            StageError::WriteFile {
                path: notebook_path,
                source: e,
            }
        })?;

        let dockerfile_path = self.context_dir.join("Dockerfile");
        std::fs::write(&dockerfile_path, self.dockerfile.render()?).map_err(|e| {
            StageError::WriteFile {
                path: dockerfile_path,
                source: e,
            }
        })?;

        Ok(self.context_dir)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("failed to clean up build context {path}")]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create build context {path}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Notebook(#[from] nbdash_core::Error),
    #[error(transparent)]
    Dockerfile(#[from] DockerfileError),
}
