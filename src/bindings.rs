//! Entry points for an embedding scripting host
//!
//! The host only ever sees opaque [`WindowHandle`]s. Several handles may refer
//! to the same underlying window: `restore` vends a new handle to the window
//! previously marked with `persist`, which lets that window survive the host
//! tearing down and rebuilding its state.

use std::collections::HashMap;

use thiserror::Error;

use crate::core::{EditorWindow, Size};
use crate::error::WindowError;
use crate::traits::{NativeWindow, Platform, TextureTarget, WindowAttributes, WindowPosition};

/// Fraction of the primary display used when no size is requested
const DEFAULT_SIZE_RATIO: f64 = 0.8;

/// Opaque reference to an editor window held by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct WindowId(u64);

/// Errors surfaced to the host
#[derive(Debug, Error)]
pub enum HostError {
    /// Recoverable: raised as an error inside the host script
    #[error("error creating editor window: {0}")]
    Script(String),

    #[error("invalid window handle {0:?}")]
    InvalidHandle(WindowHandle),

    /// Unrecoverable platform failure; the host terminates
    #[error(transparent)]
    Fatal(#[from] WindowError),
}

/// Arguments of `create`; non-positive sizes select the display default
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRequest {
    pub title: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: f64,
    pub height: f64,
}

impl WindowRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x: None,
            y: None,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Window registry behind the host bindings
pub struct Bindings<W: NativeWindow, T: TextureTarget> {
    windows: HashMap<WindowId, EditorWindow<W, T>>,
    handles: HashMap<WindowHandle, WindowId>,
    persistent: Option<WindowId>,
    next_handle: u64,
    next_window: u64,
}

impl<W: NativeWindow, T: TextureTarget> Bindings<W, T> {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            handles: HashMap::new(),
            persistent: None,
            next_handle: 1,
            next_window: 1,
        }
    }

    /// Create a hidden window with its surface and texture
    pub fn create<P>(&mut self, platform: &mut P, request: &WindowRequest) -> Result<WindowHandle, HostError>
    where
        P: Platform<Window = W, Target = T>,
    {
        let usable = |v: f64| v.is_finite() && v >= 1.0;
        let size = if !usable(request.width) || !usable(request.height) {
            let display = platform.primary_display_size()?;
            Size::new(
                (display.width as f64 * DEFAULT_SIZE_RATIO) as u32,
                (display.height as f64 * DEFAULT_SIZE_RATIO) as u32,
            )
        } else {
            Size::new(request.width as u32, request.height as u32)
        };

        let position = match (request.x, request.y) {
            (Some(x), Some(y)) => WindowPosition::At { x, y },
            _ => WindowPosition::Centered,
        };

        let attributes = WindowAttributes {
            title: request.title.clone(),
            position,
            size,
            resizable: true,
            high_pixel_density: true,
            visible: false,
        };
        log::debug!("creating window {:?}", attributes);

        let native = platform.create_window(&attributes).map_err(|e| match e {
            WindowError::WindowCreation(msg) => HostError::Script(msg),
            other => HostError::Fatal(other),
        })?;
        let target = platform.create_target(&native)?;
        let window = EditorWindow::new(native, target)?;

        let id = WindowId(self.next_window);
        self.next_window += 1;
        self.windows.insert(id, window);
        Ok(self.vend(id))
    }

    /// Logical size of the window's drawable area
    pub fn get_size(&self, handle: WindowHandle) -> Result<Size, HostError> {
        Ok(self.window(handle)?.size())
    }

    /// Mark the handle's window as the one that survives `gc`
    ///
    /// A previously persistent window with no remaining handles is released.
    pub fn persist(&mut self, handle: WindowHandle) -> Result<(), HostError> {
        let id = self.resolve(handle)?;
        if let Some(previous) = self.persistent.replace(id) {
            if previous != id {
                self.release_if_unreferenced(previous);
            }
        }
        log::debug!("window {:?} is now persistent", id);
        Ok(())
    }

    /// New handle to the persistent window, if there is one
    pub fn restore(&mut self) -> Option<WindowHandle> {
        let id = self.persistent?;
        Some(self.vend(id))
    }

    /// Drop a handle; the window is destroyed once it is neither persistent
    /// nor referenced by another handle
    pub fn gc(&mut self, handle: WindowHandle) -> Result<(), HostError> {
        let id = self
            .handles
            .remove(&handle)
            .ok_or(HostError::InvalidHandle(handle))?;

        if self.persistent != Some(id) {
            self.release_if_unreferenced(id);
        }
        Ok(())
    }

    pub fn window(&self, handle: WindowHandle) -> Result<&EditorWindow<W, T>, HostError> {
        let id = self.resolve(handle)?;
        self.windows.get(&id).ok_or(HostError::InvalidHandle(handle))
    }

    pub fn window_mut(&mut self, handle: WindowHandle) -> Result<&mut EditorWindow<W, T>, HostError> {
        let id = self.resolve(handle)?;
        self.windows.get_mut(&id).ok_or(HostError::InvalidHandle(handle))
    }

    pub fn is_persistent(&self, handle: WindowHandle) -> bool {
        self.handles.get(&handle).is_some_and(|id| self.persistent == Some(*id))
    }

    /// Number of live windows
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    fn vend(&mut self, id: WindowId) -> WindowHandle {
        let handle = WindowHandle(self.next_handle);
        self.next_handle += 1;
        self.handles.insert(handle, id);
        handle
    }

    fn resolve(&self, handle: WindowHandle) -> Result<WindowId, HostError> {
        self.handles
            .get(&handle)
            .copied()
            .ok_or(HostError::InvalidHandle(handle))
    }

    fn release_if_unreferenced(&mut self, id: WindowId) {
        if self.handles.values().any(|h| *h == id) {
            return;
        }
        if self.windows.remove(&id).is_some() {
            log::debug!("window {:?} destroyed", id);
        }
    }
}

impl<W: NativeWindow, T: TextureTarget> Default for Bindings<W, T> {
    fn default() -> Self {
        Self::new()
    }
}
