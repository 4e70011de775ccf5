use nbdash_core::DashboardMode;

/// Directory inside the image where staged files land and the dashboard
/// runtime looks for the notebook.
pub const NOTEBOOK_HOME: &str = "/home/jovyan/";

/// Accumulates build directives and renders them as Dockerfile text.
///
/// Rendering is deterministic: directives keep insertion order, so the
/// same state always renders to byte-identical output.
#[derive(Debug, Clone)]
pub struct Dockerfile {
    base_image: String,
    env: Vec<(String, String)>,
    labels: Vec<(String, String)>,
    files: Vec<String>,
    build_commands: Vec<String>,
    entry: Option<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    mode: DashboardMode,
    file: String,
}

impl Dockerfile {
    pub fn new(base_image: impl Into<String>) -> Self {
        Self {
            base_image: base_image.into(),
            env: Vec::new(),
            labels: Vec::new(),
            files: Vec::new(),
            build_commands: Vec::new(),
            entry: None,
        }
    }

    /// Set the dashboard launch mode and notebook file. The notebook is
    /// also staged into the image. Must be called before [`render`].
    ///
    /// [`render`]: Dockerfile::render
    pub fn set_entry(&mut self, mode: DashboardMode, filename: &str) {
        self.entry = Some(Entry {
            mode,
            file: filename.to_owned(),
        });
        self.add_file(filename);
    }

    /// Set an environment variable. Last write wins on a duplicate key.
    pub fn set_env(&mut self, key: &str, value: &str) {
        upsert(&mut self.env, key, value);
    }

    /// Set an image label. Last write wins on a duplicate key.
    pub fn set_label(&mut self, key: &str, value: &str) {
        upsert(&mut self.labels, key, value);
    }

    /// Stage a file into the image under [`NOTEBOOK_HOME`].
    pub fn add_file(&mut self, filename: &str) {
        self.files.push(filename.to_owned());
    }

    /// Append an extra RUN command.
    pub fn add_build_command(&mut self, command: &str) {
        self.build_commands.push(command.to_owned());
    }

    /// Dockerfile text.
    pub fn render(&self) -> Result<String, DockerfileError> {
        let entry = self.entry.as_ref().ok_or(DockerfileError::EntryNotSet)?;

        let mut lines = vec![format!("FROM {}", self.base_image), String::new()];
        if !self.env.is_empty() {
            lines.push(format!("ENV {}", join_pairs(&self.env)));
        }
        if !self.labels.is_empty() {
            lines.push(format!("LABEL {}", join_pairs(&self.labels)));
        }
        if !self.files.is_empty() {
            let quoted = self
                .files
                .iter()
                .map(|file| format!("\"{file}\""))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("ADD {quoted} {NOTEBOOK_HOME}"));
        }
        for command in &self.build_commands {
            lines.push(format!("RUN {command}"));
        }
        lines.push(String::new());
        lines.push(format!(
            "CMD [\"{mode}\", \"{NOTEBOOK_HOME}{file}\"]",
            mode = entry.mode,
            file = entry.file,
        ));
        lines.push(String::new());
        Ok(lines.join("\n"))
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, slot)) => *slot = value.to_owned(),
        None => pairs.push((key.to_owned(), value.to_owned())),
    }
}

fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, thiserror::Error)]
pub enum DockerfileError {
    #[error("dashboard entry not set — call set_entry before render")]
    EntryNotSet,
}
