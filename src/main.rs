use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use editor_window::cli::Cli;
use editor_window::config::WindowConfig;
use editor_window::core::{Color, Command, Rect, Size};
use editor_window::gpu::WgpuTarget;
use editor_window::icon::IconData;
use editor_window::traits::NativeWindow;
use editor_window::window::{WinitPlatform, WinitWindow};
use editor_window::{fail_fast, Bindings, HostError, WindowHandle};

// === Constants ===

const CURSOR_BLINK: Duration = Duration::from_millis(500);
const GUTTER_WIDTH: i32 = 48;
const STATUS_HEIGHT: i32 = 24;
const LINE_HEIGHT: i32 = 20;
const TEXT_LEFT: i32 = GUTTER_WIDTH + 12;

const BACKGROUND: Color = Color::rgb(40, 42, 54);
const GUTTER: Color = Color::rgb(33, 34, 44);
const TEXT: Color = Color::rgb(190, 192, 200);
const STATUS: Color = Color::rgb(25, 26, 33);
const CURSOR: Color = Color::rgb(255, 184, 108);

// === Application ===

struct App {
    config: WindowConfig,
    bindings: Bindings<WinitWindow, WgpuTarget>,
    handle: Option<WindowHandle>,
    sessions: u32,
    full_redraw: bool,
    cursor_visible: bool,
    last_blink: Instant,
}

impl App {
    fn new(config: WindowConfig) -> Self {
        Self {
            config,
            bindings: Bindings::new(),
            handle: None,
            sessions: 1,
            full_redraw: true,
            cursor_visible: true,
            last_blink: Instant::now(),
        }
    }

    /// Reuse the persistent window if there is one, else create a new window
    fn open_window(&mut self, event_loop: &ActiveEventLoop) {
        let handle = match self.bindings.restore() {
            Some(handle) => handle,
            None => {
                let mut platform = WinitPlatform::new(event_loop);
                match self.bindings.create(&mut platform, &self.config.window_request()) {
                    Ok(handle) => handle,
                    Err(HostError::Script(msg)) => {
                        log::error!("{msg}");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => fail_fast(e),
                }
            }
        };
        self.handle = Some(handle);

        if let Some(icon) = self.icon() {
            let window = self.window_mut(handle);
            if let Err(e) = window.native().set_icon(&icon) {
                log::warn!("{e}");
            }
        }

        self.full_redraw = true;
        self.draw_frame();
        self.window_mut(handle).show();
    }

    fn icon(&self) -> Option<IconData> {
        match &self.config.icon {
            Some(path) => match IconData::load(path) {
                Ok(icon) => Some(icon),
                Err(e) => {
                    log::warn!("{e}");
                    None
                }
            },
            None if cfg!(all(unix, not(target_os = "macos"))) => Some(IconData::builtin()),
            None => None,
        }
    }

    /// Drop the session's handle but keep the window, then pick it up again
    fn reload(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Err(e) = self
            .bindings
            .persist(handle)
            .and_then(|_| self.bindings.gc(handle))
        {
            fail_fast(e);
        }

        let Some(handle) = self.bindings.restore() else {
            return;
        };
        self.handle = Some(handle);
        self.sessions += 1;
        let title = format!("{} [session {}]", self.config.title, self.sessions);
        self.window_mut(handle).native().set_title(&title);
        log::info!(
            "session reloaded, {} window(s) alive",
            self.bindings.window_count()
        );
        self.full_redraw = true;
        self.draw_frame();
    }

    fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.bindings.gc(handle) {
                log::warn!("{e}");
            }
        }
    }

    /// True if the event belongs to the window this session draws into
    fn owns(&self, window_id: WindowId) -> bool {
        self.handle
            .and_then(|handle| self.bindings.window(handle).ok())
            .is_some_and(|window| window.native().id() == window_id)
    }

    fn window_mut(
        &mut self,
        handle: WindowHandle,
    ) -> &mut editor_window::core::EditorWindow<WinitWindow, WgpuTarget> {
        match self.bindings.window_mut(handle) {
            Ok(window) => window,
            Err(e) => fail_fast(e),
        }
    }

    fn resize(&mut self) {
        let Some(handle) = self.handle else {
            return;
        };
        let window = self.window_mut(handle);
        match window.resize_surface() {
            Ok(true) => {
                self.full_redraw = true;
                self.window_mut(handle).native().request_redraw();
            }
            Ok(false) => {}
            Err(e) => fail_fast(e),
        }
    }

    /// Queue the frame's fills, replay them and present the touched rects
    fn draw_frame(&mut self) {
        let Some(handle) = self.handle else {
            return;
        };
        let full_redraw = std::mem::take(&mut self.full_redraw);
        let cursor_visible = self.cursor_visible;

        let window = self.window_mut(handle);
        let Size { width, height } = window.size();
        let (w, h) = (width as i32, height as i32);
        let lines = ((h - STATUS_HEIGHT) / LINE_HEIGHT).max(0);

        let commands = window.commands_mut();
        if full_redraw {
            commands.push(Command::FillRect(Rect::new(0, 0, w, h), BACKGROUND));
            commands.push(Command::FillRect(Rect::new(0, 0, GUTTER_WIDTH, h), GUTTER));
            for line in 0..lines {
                let y = 10 + line * LINE_HEIGHT;
                commands.push(Command::FillRect(Rect::new(16, y, 20, 10), TEXT));
                commands.push(Command::FillRect(Rect::new(TEXT_LEFT, y, line_width(line), 10), TEXT));
            }
            commands.push(Command::FillRect(Rect::new(0, h - STATUS_HEIGHT, w, STATUS_HEIGHT), STATUS));
        }

        let cursor_color = if cursor_visible { CURSOR } else { BACKGROUND };
        commands.push(Command::SetClip(Rect::new(GUTTER_WIDTH, 0, w - GUTTER_WIDTH, h - STATUS_HEIGHT)));
        commands.push(Command::FillRect(
            Rect::new(TEXT_LEFT + line_width(0) + 4, 8, 2, 14),
            cursor_color,
        ));

        let dirty = window.flush_commands();
        if let Err(e) = window.update_rects(&dirty) {
            fail_fast(e);
        }
    }
}

/// Width of the placeholder text bar on a line
fn line_width(line: i32) -> i32 {
    80 + (line * 37 % 11) * 40
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.handle.is_none() {
            self.open_window(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.owns(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.close();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::F5),
                        repeat: false,
                        ..
                    },
                ..
            } => self.reload(),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => self.resize(),
            WindowEvent::RedrawRequested => self.draw_frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(handle) = self.handle else {
            return;
        };

        if self.last_blink.elapsed() >= CURSOR_BLINK {
            self.cursor_visible = !self.cursor_visible;
            self.last_blink = Instant::now();
            self.window_mut(handle).native().request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_blink + CURSOR_BLINK));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = WindowConfig::from_cli(&cli).context("failed to load configuration")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("F5 reloads the session keeping the window, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
