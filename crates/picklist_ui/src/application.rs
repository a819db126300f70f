//! Elm-style application runtime over winit.
//!
//! The application owns all state. After every message the view is rebuilt
//! and laid out again; between messages the same widget tree keeps receiving
//! events, so transient widget state such as hover survives.

use std::sync::Arc;

use picklist_gpu::GpuConfig;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::backend::GpuBackend;
use crate::constants::SCROLL_LINE_PIXELS;
use crate::element::Element;
use crate::error::{Result, UiError};
use crate::event::{self, Event, KeyCode, KeyModifiers, MouseButton};
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::theme::{self, Theme};

/// Core application trait, inspired by the Elm architecture.
pub trait Application {
    /// Messages produced by widgets and handled in `update`.
    type Message: 'static;

    /// Window title
    fn title(&self) -> String;

    /// Apply a message to the application state.
    fn update(&mut self, message: Self::Message);

    /// Build the widget tree for the current state.
    fn view(&self) -> Element<Self::Message>;
}

/// Settings for running an application.
pub struct Settings {
    /// Overrides `Application::title` when set
    pub window_title: Option<String>,
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
    pub resizable: bool,
    /// Log level filter (native: `RUST_LOG` still takes precedence)
    pub log_level: log::LevelFilter,
    pub theme: Theme,
    pub gpu: GpuConfig,
    /// Extra font files (TTF/OTF bytes) loaded before the first frame
    pub fonts: Vec<Vec<u8>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (800, 600),
            resizable: true,
            log_level: log::LevelFilter::Info,
            theme: Theme::dark(),
            gpu: GpuConfig::default(),
            fonts: Vec::new(),
        }
    }
}

/// The application together with its current widget tree.
///
/// This is everything the runtime does except talking to winit and the GPU,
/// so tests can drive an application with synthetic events.
pub struct ApplicationState<A: Application> {
    app: A,
    root: Element<A::Message>,
    size: Size,
}

impl<A: Application> ApplicationState<A> {
    /// Build and lay out the initial view for a viewport of `width` x `height`.
    pub fn new(app: A, width: f32, height: f32) -> Self {
        let root = app.view();
        let mut state = Self {
            app,
            root,
            size: Size::new(width, height),
        };
        state.root.layout(state.size);
        state
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
        self.root.layout(self.size);
    }

    fn root_bounds(&self) -> Bounds {
        Bounds::from_size(0.0, 0.0, self.root.cached_size())
    }

    /// Deliver a message directly, as if a widget had produced it.
    pub fn send(&mut self, message: A::Message) {
        self.app.update(message);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.root = self.app.view();
        self.root.layout(self.size);
    }

    /// Dispatch one event to the widget tree. Returns whether a message was produced.
    pub fn process_event(&mut self, event: &Event) -> bool {
        let bounds = self.root_bounds();
        match self.root.on_event(event, bounds) {
            Some(message) => {
                self.send(message);
                true
            }
            None => false,
        }
    }

    /// Draw the current tree into a fresh frame.
    pub fn render_view(&self) -> Renderer {
        let mut renderer = Renderer::new(self.size.width, self.size.height);
        self.root.draw(&mut renderer, self.root_bounds());
        renderer
    }

    /// Press and release the left button at `position`, with the
    /// `GlobalMousePress` that precedes every press.
    pub fn click(&mut self, position: (f32, f32)) {
        let modifiers = KeyModifiers::default();
        self.process_event(&Event::GlobalMousePress {
            button: MouseButton::Left,
            position,
        });
        self.process_event(&Event::MousePress {
            button: MouseButton::Left,
            position,
            modifiers,
        });
        self.process_event(&Event::MouseRelease {
            button: MouseButton::Left,
            position,
            modifiers,
        });
    }

    /// Type `text` one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            let key = if c == ' ' {
                KeyCode::Space
            } else {
                KeyCode::Char(c.to_ascii_lowercase())
            };
            self.process_event(&Event::KeyPress {
                key,
                modifiers: KeyModifiers::default(),
            });
            self.process_event(&Event::TextInput {
                text: c.to_string(),
            });
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.process_event(&Event::KeyPress {
            key,
            modifiers: KeyModifiers::default(),
        });
    }
}

// =============================================================================
// winit runtime
// =============================================================================

/// Events posted back into the loop from async tasks.
pub(crate) enum RuntimeEvent {
    #[cfg_attr(not(target_arch = "wasm32"), expect(dead_code))]
    BackendReady(Result<GpuBackend>),
}

struct Runtime<A: Application> {
    state: ApplicationState<A>,
    title: String,
    window_size: (u32, u32),
    resizable: bool,
    gpu_config: GpuConfig,
    fonts: Option<Vec<Vec<u8>>>,
    window: Option<Arc<Window>>,
    backend: Option<GpuBackend>,
    cursor: (f32, f32),
    modifiers: KeyModifiers,
    error: Option<UiError>,
    #[cfg(target_arch = "wasm32")]
    proxy: winit::event_loop::EventLoopProxy<RuntimeEvent>,
}

impl<A: Application> Runtime<A> {
    fn scale_factor(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |w| w.scale_factor())
    }

    fn logical(&self, position: PhysicalPosition<f64>) -> (f32, f32) {
        let logical = position.to_logical::<f64>(self.scale_factor());
        (logical.x as f32, logical.y as f32)
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn dispatch(&mut self, event: Event) {
        if self.state.process_event(&event) {
            log::trace!("Message processed for {:?}", event);
        }
        self.request_redraw();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: UiError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn backend_ready(&mut self, backend: GpuBackend) {
        let (width, height) = backend.logical_size();
        self.state.resize(width, height);
        self.backend = Some(backend);
        self.request_redraw();
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        let started = web_time::Instant::now();
        let frame = self.state.render_view();
        if let Err(e) = backend.render(&frame) {
            self.fail(event_loop, e);
            return;
        }
        log::trace!(
            "Frame: {} base + {} overlay commands in {:?}",
            frame.commands().len(),
            frame.overlay_commands().len(),
            started.elapsed()
        );
    }

    fn window_attributes(&self) -> winit::window::WindowAttributes {
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.window_size.0, self.window_size.1))
            .with_resizable(self.resizable);

        #[cfg(target_arch = "wasm32")]
        let attributes = {
            use winit::platform::web::WindowAttributesExtWebSys;
            attributes.with_append(true)
        };

        attributes
    }

    fn start_backend(&mut self, window: Arc<Window>) {
        let config = self.gpu_config.clone();
        let fonts = self.fonts.take().unwrap_or_default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            match pollster::block_on(GpuBackend::new(window, config, fonts)) {
                Ok(backend) => self.backend_ready(backend),
                Err(e) => {
                    log::error!("{}", e);
                    self.error = Some(e);
                }
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = GpuBackend::new(window, config, fonts).await;
                if proxy
                    .send_event(RuntimeEvent::BackendReady(result))
                    .is_err()
                {
                    log::warn!("Event loop closed before the GPU backend was ready");
                }
            });
        }
    }
}

impl<A: Application> ApplicationHandler<RuntimeEvent> for Runtime<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = match event_loop.create_window(self.window_attributes()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };
        log::info!("Window created: {}", self.title);
        self.window = Some(Arc::clone(&window));
        self.start_backend(window);
        if self.error.is_some() {
            event_loop.exit();
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: RuntimeEvent) {
        match event {
            RuntimeEvent::BackendReady(Ok(backend)) => self.backend_ready(backend),
            RuntimeEvent::BackendReady(Err(e)) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(backend) = self.backend.as_mut() {
                    backend.resize(size.width, size.height);
                    let (width, height) = backend.logical_size();
                    self.state.resize(width, height);
                }
                self.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(backend) = self.backend.as_mut() {
                    backend.set_scale_factor(scale_factor as f32);
                }
            }
            WindowEvent::RedrawRequested => self.render(event_loop),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = KeyModifiers::from_winit(modifiers.state());
            }
            WindowEvent::Focused(false) => self.dispatch(Event::FocusLost),
            WindowEvent::CursorLeft { .. } => self.dispatch(Event::CursorLeft),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.logical(position);
                self.dispatch(Event::MouseMove {
                    position: self.cursor,
                    modifiers: self.modifiers,
                });
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from_winit(button);
                let position = self.cursor;
                let modifiers = self.modifiers;
                match state {
                    ElementState::Pressed => {
                        self.dispatch(Event::GlobalMousePress { button, position });
                        self.dispatch(Event::MousePress {
                            button,
                            position,
                            modifiers,
                        });
                    }
                    ElementState::Released => self.dispatch(Event::MouseRelease {
                        button,
                        position,
                        modifiers,
                    }),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        let logical = pos.to_logical::<f64>(self.scale_factor());
                        (
                            logical.x as f32 / SCROLL_LINE_PIXELS,
                            logical.y as f32 / SCROLL_LINE_PIXELS,
                        )
                    }
                };
                self.dispatch(Event::MouseScroll {
                    delta,
                    position: self.cursor,
                    modifiers: self.modifiers,
                });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = KeyCode::from_winit(&event.logical_key);
                let modifiers = self.modifiers;
                match event.state {
                    ElementState::Pressed => {
                        self.dispatch(Event::KeyPress { key, modifiers });
                        if let Some(text) = event::printable_text(event.text.as_deref(), modifiers)
                        {
                            self.dispatch(Event::TextInput { text });
                        }
                    }
                    ElementState::Released => self.dispatch(Event::KeyRelease { key, modifiers }),
                }
            }
            _ => {}
        }
    }
}

/// Install the platform logger. Later calls are no-ops, so an entry point can
/// log before `run` does this itself.
pub fn init_logging(level: log::LevelFilter) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Some(level) = level.to_level() {
            let _ = console_log::init_with_level(level);
        }
    }
}

/// Run an application until its window closes.
///
/// On wasm the browser drives the loop and this returns immediately.
pub fn run<A: Application + 'static>(app: A, settings: Settings) -> Result<()> {
    init_logging(settings.log_level);
    if theme::set_theme(settings.theme).is_err() {
        log::debug!("Theme already set, keeping the existing one");
    }

    let event_loop = EventLoop::<RuntimeEvent>::with_user_event().build()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let title = settings.window_title.unwrap_or_else(|| app.title());
    let (w, h) = settings.window_size;
    let mut runtime = Runtime {
        state: ApplicationState::new(app, w as f32, h as f32),
        title,
        window_size: settings.window_size,
        resizable: settings.resizable,
        gpu_config: settings.gpu,
        fonts: Some(settings.fonts),
        window: None,
        backend: None,
        cursor: (0.0, 0.0),
        modifiers: KeyModifiers::default(),
        error: None,
        #[cfg(target_arch = "wasm32")]
        proxy: event_loop.create_proxy(),
    };

    #[cfg(not(target_arch = "wasm32"))]
    {
        event_loop.run_app(&mut runtime)?;
        match runtime.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::EventLoopExtWebSys;
        event_loop.spawn_app(runtime);
        Ok(())
    }
}
