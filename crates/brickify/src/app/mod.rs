//! Application window and event loop management.

mod input;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{ModifiersState, PhysicalKey},
    window::{Window, WindowId},
};

use brickify_catalog::PartCatalog;
use brickify_core::{BrickifyError, Options, Result};
use brickify_render::ViewCamera;

use crate::editor::{Editor, EditorAction};
use crate::viewport::ViewportEvent;

const WINDOW_TITLE: &str = "Brickify - brick model editor";
const MIN_WINDOW_SIZE: LogicalSize<u32> = LogicalSize::new(1024, 768);

/// The brickify application state.
pub struct App<C> {
    window: Option<Window>,
    editor: Editor<C>,
    view_camera: ViewCamera,
    cursor: (f64, f64),
    modifiers: ModifiersState,
    shown_status: String,
}

impl<C: PartCatalog> App<C> {
    /// Creates a new application around an editor.
    pub fn new(editor: Editor<C>, options: &Options) -> Self {
        Self {
            window: None,
            editor,
            view_camera: ViewCamera::from_options(options),
            cursor: (0.0, 0.0),
            modifiers: ModifiersState::empty(),
            shown_status: String::new(),
        }
    }

    pub fn editor(&self) -> &Editor<C> {
        &self.editor
    }

    fn sync_title(&mut self) {
        if self.shown_status == self.editor.status() {
            return;
        }
        self.shown_status = self.editor.status().to_string();
        if let Some(window) = &self.window {
            window.set_title(&format!("{WINDOW_TITLE} | {}", self.shown_status));
        }
    }

    fn render(&self) {
        let pose = self.editor.viewport().pose().snapshot();
        let uniforms = self.view_camera.uniforms(&pose);
        log::trace!(
            "frame: distance={} angles=({}, {}, {}) camera_pos={:?}",
            pose.distance,
            pose.angle_x,
            pose.angle_y,
            pose.angle_z,
            uniforms.camera_pos
        );
    }
}

impl<C: PartCatalog> ApplicationHandler for App<C> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(MIN_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE);

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.view_camera.resize(size.width, size.height);
                self.window = Some(window);
                self.shown_status.clear();
                self.sync_title();
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(viewport_event) = ViewportEvent::from_window_event(&event, self.cursor) {
            if let ViewportEvent::Moved { x, y } = viewport_event {
                self.cursor = (x, y);
            }
            self.editor.viewport_mut().handle_event(viewport_event);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.editor.dispatch(EditorAction::Exit);
            }
            WindowEvent::Resized(size) => {
                self.view_camera.resize(size.width, size.height);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        if let Some(action) = input::shortcut(code, self.modifiers) {
                            self.editor.dispatch(action);
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => self.render(),
            _ => {}
        }

        self.sync_title();
        if self.editor.close_requested() {
            event_loop.exit();
        }
    }
}

/// Runs the event loop until the window closes.
pub fn run_app<C: PartCatalog>(app: &mut App<C>) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|e| BrickifyError::Window(e.to_string()))?;
    event_loop
        .run_app(app)
        .map_err(|e| BrickifyError::Window(e.to_string()))
}
