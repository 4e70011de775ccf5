//! Cell-list grooming passes.
//!
//! Each pass mutates the notebook's cell list in place. Target indices are
//! computed with a side-effect-free scan before any removal or insertion,
//! so no pass ever deletes while iterating.

use nbdash_core::Notebook;

/// Cells carrying this tag are dropped before staging.
pub const IGNORE_TAG: &str = "nbdash-ignore";

/// Tag marking the cell the dashboard runtime treats as the source of
/// overridable parameters. Convention requires it be the first code cell.
pub const PARAMETERS_TAG: &str = "parameters";

/// Substring identifying a dependency-install cell. A plain substring
/// match on the cell source is the compatibility target, false positives
/// in comments included.
pub const DEPENDENCY_MARKER: &str = "ipydeps";

/// Drop every cell tagged [`IGNORE_TAG`], preserving relative order.
pub fn strip_ignored_cells(notebook: &mut Notebook) {
    notebook.cells.retain(|cell| !cell.has_tag(IGNORE_TAG));
}

/// Remove the first code cell that installs dependencies via ipydeps and
/// return its source text. The caller stages the text as a build-time
/// install script. At most one cell is extracted per run.
pub fn extract_dependency_cell(notebook: &mut Notebook) -> Option<String> {
    let index = notebook
        .cells
        .iter()
        .position(|cell| cell.is_code() && cell.text().contains(DEPENDENCY_MARKER))?;
    Some(notebook.cells.remove(index).text().into_owned())
}

/// Move the first code cell tagged [`PARAMETERS_TAG`] in front of the
/// first code cell. A notebook without a parameters cell, or whose
/// parameters cell already leads the code cells, is left untouched.
pub fn promote_parameters_cell(notebook: &mut Notebook) {
    let Some(anchor) = notebook.cells.iter().position(|cell| cell.is_code()) else {
        return;
    };
    let Some(param) = notebook
        .cells
        .iter()
        .position(|cell| cell.is_code() && cell.has_tag(PARAMETERS_TAG))
    else {
        return;
    };
    if param == anchor {
        return;
    }
    // param > anchor: the anchor index is unaffected by the removal.
    let cell = notebook.cells.remove(param);
    notebook.cells.insert(anchor, cell);
}
