//! Editor shell: part list, status line, menu actions and the viewport.
//!
//! Project files, history and mesh export are handled by collaborators
//! outside this crate. The shell only records what was asked for in the
//! status line.

use std::path::{Path, PathBuf};

use brickify_catalog::{PartCatalog, PartService};

use crate::viewport::ViewportController;

/// Parts shown when the backend has none to offer.
pub const DEFAULT_PARTS: [&str; 3] = ["Brick 2x4", "Brick 2x2", "Plate 1x4"];

/// Extension of brickify project files.
pub const PROJECT_EXTENSION: &str = "brickify";

/// Mesh formats accepted by [`EditorAction::Export`].
pub const EXPORT_EXTENSIONS: [&str; 2] = ["stl", "obj"];

/// A menu or shortcut command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    NewProject,
    OpenProject(PathBuf),
    SaveProject(PathBuf),
    Export(PathBuf),
    Undo,
    Redo,
    Render,
    ResetCamera,
    Exit,
}

/// The editor window's state, minus the window itself.
pub struct Editor<C> {
    viewport: ViewportController,
    parts: PartService<C>,
    part_names: Vec<String>,
    selected_part: Option<usize>,
    status: String,
    close_requested: bool,
}

impl<C: PartCatalog> Editor<C> {
    pub fn new(parts: PartService<C>) -> Self {
        let mut editor = Self {
            viewport: ViewportController::new(),
            parts,
            part_names: Vec::new(),
            selected_part: None,
            status: String::new(),
            close_requested: false,
        };
        editor.set_status("Application initialized");
        editor
    }

    /// Fills the part list from the catalog, falling back to [`DEFAULT_PARTS`].
    pub fn load_parts(&mut self) {
        let parts = self.parts.all_parts();
        self.selected_part = None;

        if parts.is_empty() {
            self.part_names = DEFAULT_PARTS.iter().map(ToString::to_string).collect();
            self.set_status("No parts found in the backend, using default parts");
        } else {
            self.part_names = parts.into_iter().map(|part| part.name).collect();
            let message = format!("{} parts loaded from the backend", self.part_names.len());
            self.set_status(message);
        }
    }

    /// Selects the part at `index` in the list. Out-of-range clears the selection.
    pub fn select_part(&mut self, index: usize) {
        match self.part_names.get(index) {
            Some(name) => {
                let message = format!("Selected part: {name}");
                self.selected_part = Some(index);
                self.set_status(message);
            }
            None => self.selected_part = None,
        }
    }

    pub fn dispatch(&mut self, action: EditorAction) {
        log::debug!("dispatching {action:?}");
        match action {
            EditorAction::NewProject => self.set_status("New project created"),
            EditorAction::OpenProject(path) => {
                let message = format!("Project opened: {}", file_name(&path));
                self.set_status(message);
            }
            EditorAction::SaveProject(path) => {
                let path = with_default_extension(path, PROJECT_EXTENSION);
                let message = format!("Project saved: {}", file_name(&path));
                self.set_status(message);
            }
            EditorAction::Export(path) => {
                let extension = path
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                let message = if EXPORT_EXTENSIONS.contains(&extension.as_str()) {
                    format!("Model exported: {}", file_name(&path))
                } else {
                    format!("Unsupported export format: {extension}")
                };
                self.set_status(message);
            }
            EditorAction::Undo => self.set_status("Action undone"),
            EditorAction::Redo => self.set_status("Action redone"),
            EditorAction::Render => self.set_status("Rendering..."),
            EditorAction::ResetCamera => {
                self.viewport.reset_camera();
                self.set_status("Camera reset");
            }
            EditorAction::Exit => self.close_requested = true,
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        log::info!("{}", self.status);
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn part_names(&self) -> &[String] {
        &self.part_names
    }

    pub fn selected_part(&self) -> Option<&str> {
        self.selected_part
            .and_then(|i| self.part_names.get(i))
            .map(String::as_str)
    }

    pub fn parts(&self) -> &PartService<C> {
        &self.parts
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn with_default_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    path
}
