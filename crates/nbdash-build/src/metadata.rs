use std::collections::BTreeMap;

use nbdash_core::Notebook;

use crate::dockerfile::Dockerfile;

/// Metadata keys rendered as image labels.
const LABEL_KEYS: &[(&str, &str)] = &[
    ("url", "notebook"),
    ("maintainer", "maintainer"),
    ("title", "title"),
    ("description", "description"),
];

/// Metadata keys rendered as environment variables.
const ENV_KEYS: &[(&str, &str)] = &[
    ("uuid", "NBGALLERY_UUID"),
    ("git_commit_id", "NBGALLERY_GIT_COMMIT_ID"),
];

/// Metadata supplied by the caller on the command line.
#[derive(Debug, Clone, Default)]
pub struct CallerMetadata {
    pub maintainer: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Flat key/value set merged from the notebook's origin and the caller,
/// projected onto the Dockerfile as labels and environment variables.
#[derive(Debug, Clone, Default)]
pub struct MetadataSet {
    values: BTreeMap<String, String>,
}

impl MetadataSet {
    /// Merge origin metadata (fetch URL, embedded gallery section) with
    /// caller-supplied values. The two stages write disjoint keys; empty
    /// caller values are dropped.
    pub fn collect(
        origin_url: Option<&str>,
        notebook: &Notebook,
        caller: &CallerMetadata,
    ) -> Self {
        let mut set = Self::default();

        if let Some(url) = origin_url {
            set.insert("url", url);
        }
        if let Some(gallery) = notebook.gallery() {
            if let Some(uuid) = gallery.uuid.as_deref() {
                set.insert("uuid", uuid);
            }
            if let Some(commit) = gallery.git_commit_id.as_deref() {
                set.insert("git_commit_id", commit);
            }
        }

        set.insert_non_empty("maintainer", caller.maintainer.as_deref());
        set.insert_non_empty("title", caller.title.as_deref());
        set.insert_non_empty("description", caller.description.as_deref());

        set
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Project known keys onto the Dockerfile. Absent keys are skipped;
    /// no placeholder values are written.
    pub fn apply(&self, dockerfile: &mut Dockerfile) {
        for (key, label) in LABEL_KEYS {
            if let Some(value) = self.get(key) {
                dockerfile.set_label(label, value);
            }
        }
        for (key, env) in ENV_KEYS {
            if let Some(value) = self.get(key) {
                dockerfile.set_env(env, value);
            }
        }
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }

    fn insert_non_empty(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.insert(key, value);
            }
        }
    }
}
