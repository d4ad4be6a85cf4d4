//! Startup for the brickify editor.

use std::path::PathBuf;

use brickify_catalog::{ApiClient, HttpCatalog, PartService};
use brickify_core::{Options, Result};

use crate::app::{run_app, App};
use crate::editor::{Editor, EditorAction};

/// Installs the `env_logger` backend, defaulting to `info`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Builds an editor backed by the HTTP catalog at `options.backend_url`.
pub fn create_editor(options: &Options) -> Editor<HttpCatalog> {
    let client = ApiClient::from_options(options);
    log::info!("catalog backend: {}", client.base_url());
    Editor::new(PartService::new(HttpCatalog::new(client)))
}

/// Opens the editor window and blocks until it is closed.
///
/// When `project` is given it is opened before the window appears.
pub fn run(options: &Options, project: Option<PathBuf>) -> Result<()> {
    let mut editor = create_editor(options);
    editor.load_parts();
    if let Some(path) = project {
        editor.dispatch(EditorAction::OpenProject(path));
    }

    let mut app = App::new(editor, options);
    run_app(&mut app)?;
    log::info!("brickify shut down");
    Ok(())
}
