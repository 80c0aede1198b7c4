//! Core Engine struct and main game loop

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::assets::{AssetError, SpriteLibrary, find_font};
use crate::core::Time;
use crate::core::debug::DebugHud;
use crate::gfx::{Color, Presenter, Surface, TextRenderer};
use crate::input::Input;

const HUD_TEXT_SIZE: f32 = 14.0;
const HUD_MARGIN: i32 = 4;
const HUD_PADDING: u32 = 2;
const HUD_BACKGROUND: Color = Color::rgba(0, 0, 0, 160);

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window title
    pub title: String,
    /// Frame width in pixels (also the initial window width)
    pub width: u32,
    /// Frame height in pixels (also the initial window height)
    pub height: u32,
    /// Target frames per second (0 for unlimited)
    pub target_fps: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Allow the window to be resized
    pub resizable: bool,
    /// Color the frame is cleared to before each render
    pub background: Color,
    /// Directory holding `textures/` and `fonts/`
    pub resource_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: String::from("Tessella"),
            width: 1280,
            height: 720,
            target_fps: 60,
            vsync: true,
            resizable: false,
            background: Color::BACKGROUND,
            resource_dir: PathBuf::from("resources"),
        }
    }
}

impl EngineConfig {
    /// Create a new config with a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set frame dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set target FPS
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Enable or disable VSync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Allow or forbid window resizing
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the clear color
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the resource directory
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }
}

/// Game trait that users implement
pub trait Game: 'static {
    /// Called once when the engine starts
    fn init(&mut self, engine: &mut EngineContext);

    /// Called every frame for game logic updates
    fn update(&mut self, engine: &mut EngineContext);

    /// Called every frame to draw into `engine.frame`
    fn render(&mut self, engine: &mut EngineContext);

    /// Called when the window is resized
    fn on_resize(&mut self, _engine: &mut EngineContext, _width: u32, _height: u32) {}

    /// Called when the game is shutting down
    fn shutdown(&mut self, _engine: &mut EngineContext) {}
}

/// Context passed to game callbacks
pub struct EngineContext {
    /// Time tracking
    pub time: Time,
    /// Input state
    pub input: Input,
    /// Debug HUD and frame stats
    pub debug: DebugHud,
    /// The frame being drawn; cleared to the background color before each
    /// render and presented afterwards
    pub frame: Surface,
    /// Sprites loaded from the resource directory
    pub sprites: SpriteLibrary,
    /// Text rasterizer using the resource directory's font
    pub text: TextRenderer,
    /// Presenter (available once the window exists)
    presenter: Option<Presenter>,
    /// Window size
    window_size: PhysicalSize<u32>,
    /// Should the engine quit
    should_quit: bool,
}

impl EngineContext {
    fn new(width: u32, height: u32, sprites: SpriteLibrary, text: TextRenderer) -> Self {
        Self {
            time: Time::new(),
            input: Input::new(),
            debug: DebugHud::new(),
            frame: Surface::new(width, height),
            sprites,
            text,
            presenter: None,
            window_size: PhysicalSize::new(width, height),
            should_quit: false,
        }
    }

    /// Get window width
    pub fn width(&self) -> u32 {
        self.window_size.width
    }

    /// Get window height
    pub fn height(&self) -> u32 {
        self.window_size.height
    }

    /// Request engine shutdown.
    ///
    /// The engine finishes the current update, runs [`Game::shutdown`], and
    /// leaves the event loop; nothing is torn down mid-frame.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Check if shutdown has been requested
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Main engine struct
pub struct Engine<G: Game> {
    config: EngineConfig,
    game: G,
    context: EngineContext,
    window: Option<Arc<Window>>,
    initialized: bool,
}

impl<G: Game> Engine<G> {
    /// Create a new engine with the given game.
    ///
    /// Loads every sprite under `<resource_dir>/textures` and the first
    /// font under `<resource_dir>/fonts` before the window exists, so asset
    /// problems surface as errors here instead of panics mid-game.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource directories are missing or any
    /// asset fails to load.
    pub fn new(config: EngineConfig, game: G) -> Result<Self, EngineError> {
        let sprites = SpriteLibrary::load_dir(config.resource_dir.join("textures"))?;
        let font_path = find_font(config.resource_dir.join("fonts"))?;
        let text = TextRenderer::from_path(font_path)?;

        let context = EngineContext::new(config.width, config.height, sprites, text);
        Ok(Self {
            config,
            game,
            context,
            window: None,
            initialized: false,
        })
    }

    /// Run the engine until the game quits or the window closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop cannot be created or fails while
    /// running.
    pub fn run(mut self) -> Result<(), EngineError> {
        env_logger::init();
        log::info!("Starting engine: {}", self.config.title);

        let event_loop = EventLoop::new().map_err(|e| EngineError::EventLoop(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(&mut self)
            .map_err(|e| EngineError::EventLoop(e.to_string()))?;

        Ok(())
    }

    fn draw_hud(&mut self) {
        let lines = self.context.debug.hud_lines();
        let mut y = HUD_MARGIN;
        for line in &lines {
            let rendered = self.context.text.render_padded(
                line,
                HUD_TEXT_SIZE,
                Color::WHITE,
                Some(HUD_BACKGROUND),
                HUD_PADDING,
            );
            self.context.frame.blit(&rendered, HUD_MARGIN, y);
            y += rendered.height() as i32 + 2;
        }
    }
}

impl<G: Game> ApplicationHandler for Engine<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        // Initialize presenter
        let presenter = pollster::block_on(Presenter::new(
            Arc::clone(&window),
            self.config.width,
            self.config.height,
            self.config.vsync,
        ));

        self.context.presenter = Some(presenter);
        self.window = Some(window);

        // Initialize game
        if !self.initialized {
            self.game.init(&mut self.context);
            self.initialized = true;
            log::info!("Engine initialized successfully");
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                self.game.shutdown(&mut self.context);
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    self.context.window_size = new_size;
                    if let Some(presenter) = &mut self.context.presenter {
                        presenter.resize(new_size.width, new_size.height);
                    }
                    // the frame keeps its logical size and stretches to fit
                    self.game
                        .on_resize(&mut self.context, new_size.width, new_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key_code) = event.physical_key {
                    self.context.input.process_keyboard(key_code, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.context.input.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.context
                    .input
                    .process_cursor_moved(glam::Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::RedrawRequested => {
                // Update time
                self.context.time.update();

                // Update debug stats
                self.context.debug.record_frame(self.context.time.delta());

                // Update game logic
                self.game.update(&mut self.context);

                // Check if should quit
                if self.context.should_quit() {
                    self.game.shutdown(&mut self.context);
                    event_loop.exit();
                    return;
                }

                // Render
                self.context.frame.fill(self.config.background);
                self.game.render(&mut self.context);
                if self.context.debug.enabled {
                    self.draw_hud();
                }
                if let Some(presenter) = &mut self.context.presenter {
                    presenter.present(&self.context.frame, self.config.background);
                }

                // Clear per-frame state
                self.context.input.update();
                self.context.debug.clear_lines();

                // Hold the frame to the target rate, then request the next
                self.context.time.cap_frame_rate(self.config.target_fps);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Errors that can occur while starting or running the engine
#[derive(Debug)]
pub enum EngineError {
    /// Asset loading failed
    Assets(AssetError),
    /// Event loop creation or execution failed
    EventLoop(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assets(e) => write!(f, "Asset error: {e}"),
            Self::EventLoop(e) => write!(f, "Event loop error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<AssetError> for EngineError {
    fn from(e: AssetError) -> Self {
        Self::Assets(e)
    }
}
