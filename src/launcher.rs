//! Native window: title screen, start trigger and session fan-out
//!
//! The window thread never touches simulation state. Sessions run on their
//! own threads, receive key events through their input channel and publish
//! finished frames into the shared front buffer, which is drawn here.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::clock::MonotonicClock;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::{LaunchError, RenderError};
use crate::game_loop::{GameLoop, LoopHandle};
use crate::input::{self, InputSender, Key, KeyEvent};
use crate::renderer::{FrameSurface, FrontBuffer, RenderState};
use crate::settings::Settings;
use crate::sim::Session;
use crate::ui::TitleScreen;

struct ActiveSession {
    handle: LoopHandle,
    input: InputSender,
}

pub struct Launcher {
    settings: Settings,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    front: FrontBuffer,
    title: TitleScreen,
    sessions: Vec<ActiveSession>,
    cursor: PhysicalPosition<f64>,
}

impl Launcher {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window: None,
            render_state: None,
            front: FrontBuffer::new(),
            title: TitleScreen::new(),
            sessions: Vec::new(),
            cursor: PhysicalPosition::new(0.0, 0.0),
        }
    }

    /// Number of sessions whose loop thread is still attached
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RenderError> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.launcher_title.as_str())
            .with_inner_size(self.settings.window_size())
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);
        let render_state = pollster::block_on(RenderState::new(window.clone(), self.settings.vsync))?;

        log::info!(
            "Window created: {}x{}",
            self.settings.window_width,
            self.settings.window_height
        );
        self.window = Some(window);
        self.render_state = Some(render_state);
        self.show_title();
        Ok(())
    }

    fn show_title(&self) {
        let mut surface = FrameSurface::new(self.front.clone());
        self.title.render(&mut surface);
    }

    /// Start a new session drawing into the shared window.
    ///
    /// Launching while another session runs starts a second one; both
    /// receive the same keys and present into the same window.
    pub fn launch(&mut self) -> Result<(), LaunchError> {
        let seed: u64 = rand::random();
        let (sender, queue) = input::channel();
        let surface = FrameSurface::new(self.front.clone());
        let handle = GameLoop::new(Session::new(seed), surface, MonotonicClock::new(), queue).start()?;

        if let Some(window) = &self.window {
            window.set_title(&self.settings.game_title);
        }
        log::info!("Launched session {} ({} active)", seed, self.sessions.len() + 1);
        self.sessions.push(ActiveSession {
            handle,
            input: sender,
        });
        Ok(())
    }

    fn launch_or_log(&mut self) {
        if let Err(e) = self.launch() {
            log::error!("Failed to launch session: {}", e);
        }
    }

    /// Forward a key event to every live session
    pub fn broadcast(&self, event: KeyEvent) {
        for session in &self.sessions {
            if !session.input.send(event) {
                log::debug!("Session {} no longer takes input", session.handle.seed());
            }
        }
    }

    /// Join sessions whose loop has returned
    fn reap_finished(&mut self) {
        let (finished, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.sessions)
            .into_iter()
            .partition(|s| s.handle.is_finished());
        self.sessions = live;
        for session in finished {
            session.handle.join();
        }
    }

    /// Stop every session and wait for its thread
    pub fn shutdown(&mut self) {
        for session in &self.sessions {
            session.handle.stop();
        }
        for session in self.sessions.drain(..) {
            session.handle.join();
        }
    }

    fn cursor_in_arena(&self) -> Option<(f32, f32)> {
        let size = self.render_state.as_ref()?.size;
        Some(physical_to_arena(self.cursor, size))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.reap_finished();

        let vertices = self.front.snapshot();
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                self.shutdown();
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for Launcher {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            log::error!("Failed to initialize window: {}", e);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((x, y)) = self.cursor_in_arena()
                    && self.title.hits_start(x, y)
                {
                    self.launch_or_log();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                match code {
                    KeyCode::Escape if pressed => {
                        log::info!("Escape pressed, exiting.");
                        self.shutdown();
                        event_loop.exit();
                    }
                    KeyCode::Enter | KeyCode::NumpadEnter if pressed && !event.repeat => {
                        self.launch_or_log();
                    }
                    _ => {
                        if let Some(key) = Key::from_key_code(code) {
                            self.broadcast(if pressed { KeyEvent::Down(key) } else { KeyEvent::Up(key) });
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

/// Map a window position in physical pixels to arena coordinates
pub fn physical_to_arena(position: PhysicalPosition<f64>, viewport: (u32, u32)) -> (f32, f32) {
    let (w, h) = (viewport.0.max(1) as f64, viewport.1.max(1) as f64);
    (
        (position.x / w * ARENA_WIDTH as f64) as f32,
        (position.y / h * ARENA_HEIGHT as f64) as f32,
    )
}
