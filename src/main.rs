//! Sky Hop entry point
//!
//! Creates the window and GPU surface, loads the sprites, then runs one game
//! frame per redraw until the run ends. Exit status is 0 for a finished run
//! and 1 for any startup failure.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use sky_hop::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use sky_hop::platform::{EventQueue, InputEvent, translate_key};
use sky_hop::renderer::{Sprites, WgpuSurface};
use sky_hop::sim::GamePhase;
use sky_hop::{GameError, GameLoop, Settings};

/// Everything acquired at startup, released together when dropped
struct Session {
    game: GameLoop,
    surface: WgpuSurface,
}

struct App {
    settings: Settings,
    events: EventQueue,
    session: Option<Session>,
    failure: Option<GameError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            events: EventQueue::new(),
            session: None,
            failure: None,
        }
    }

    /// Acquire window, surface and sprites. On error, whatever was already
    /// acquired is dropped on the way out.
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Session, GameError> {
        let size = PhysicalSize::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32);
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(size)
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| GameError::Window(e.to_string()))?,
        );

        let mut surface = WgpuSurface::new(
            window,
            size.width,
            size.height,
            self.settings.present_mode(),
        )?;
        let sprites = Sprites::load(&mut surface, &self.settings.assets)?;
        let game = GameLoop::new(self.settings.resolve_seed(), sprites);

        surface.request_redraw();
        Ok(Session { game, surface })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || self.failure.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(session) => {
                log::info!("Sky Hop running!");
                self.session = Some(session);
            }
            Err(e) => {
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = translate_key(event.physical_key, event.state) {
                    self.events.push(input);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(session) = self.session.as_mut() {
                    session.surface.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                match session.game.frame(&mut self.events, &mut session.surface) {
                    GamePhase::Running => session.surface.request_redraw(),
                    GamePhase::Terminated => event_loop.exit(),
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        if self.session.take().is_some() {
            log::info!("Released window and GPU resources");
        }
    }
}

fn run() -> Result<(), GameError> {
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Sky Hop starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}
