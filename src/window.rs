use std::sync::Arc;

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Icon, Window as WinitWindowInner};

use crate::core::Size;
use crate::error::{Result, WindowError};
use crate::gpu::WgpuTarget;
use crate::icon::IconData;
use crate::traits::{NativeWindow, Platform, WindowAttributes, WindowPosition};

/// Wrapper around a winit window
pub struct WinitWindow {
    inner: Arc<WinitWindowInner>,
}

impl WinitWindow {
    pub fn new(window: Arc<WinitWindowInner>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindowInner> {
        &self.inner
    }

    pub fn id(&self) -> winit::window::WindowId {
        self.inner.id()
    }
}

/// Split a physical size into logical points and a whole-number scale.
///
/// Fractional factors are rounded to the nearest integer (at least 1) and any
/// leftover physical pixels are dropped, so `points * scale` always fits the
/// window.
fn integer_scale(pixels: Size, scale_factor: f64) -> (Size, u32) {
    let scale = if scale_factor.is_finite() {
        scale_factor.round().clamp(1.0, u32::MAX as f64) as u32
    } else {
        1
    };
    (Size::new(pixels.width / scale, pixels.height / scale), scale)
}

impl WinitWindow {
    fn sizes(&self) -> (Size, u32) {
        let size = self.inner.inner_size();
        integer_scale(Size::new(size.width, size.height), self.inner.scale_factor())
    }
}

impl NativeWindow for WinitWindow {
    fn size_in_pixels(&self) -> Result<Size> {
        let (points, scale) = self.sizes();
        Ok(Size::new(points.width * scale, points.height * scale))
    }

    fn size_in_points(&self) -> Result<Size> {
        Ok(self.sizes().0)
    }

    fn show(&self) {
        self.inner.set_visible(true);
    }

    fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    fn set_icon(&self, icon: &IconData) -> Result<()> {
        let icon = Icon::from_rgba(icon.rgba.clone(), icon.width, icon.height)
            .map_err(|e| WindowError::Icon(e.to_string()))?;
        self.inner.set_window_icon(Some(icon));
        Ok(())
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

/// Creates winit windows and wgpu targets from inside the event loop
pub struct WinitPlatform<'a> {
    event_loop: &'a ActiveEventLoop,
}

impl<'a> WinitPlatform<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop) -> Self {
        Self { event_loop }
    }
}

impl Platform for WinitPlatform<'_> {
    type Window = WinitWindow;
    type Target = WgpuTarget;

    fn primary_display_size(&self) -> Result<Size> {
        let monitor = self
            .event_loop
            .primary_monitor()
            .or_else(|| self.event_loop.available_monitors().next())
            .ok_or_else(|| WindowError::DisplayMode("no display available".into()))?;

        let size: LogicalSize<u32> = monitor.size().to_logical(monitor.scale_factor());
        Ok(Size::new(size.width, size.height))
    }

    fn create_window(&mut self, attributes: &WindowAttributes) -> Result<WinitWindow> {
        let mut winit_attributes = WinitWindowInner::default_attributes()
            .with_title(attributes.title.clone())
            .with_inner_size(LogicalSize::new(attributes.size.width, attributes.size.height))
            .with_resizable(attributes.resizable)
            .with_visible(attributes.visible);

        let position = match attributes.position {
            WindowPosition::At { x, y } => Some(LogicalPosition::new(x, y)),
            // Centering needs the display size; without one the window manager decides
            WindowPosition::Centered => self.primary_display_size().ok().map(|display| {
                LogicalPosition::new(
                    (display.width as i32 - attributes.size.width as i32).max(0) / 2,
                    (display.height as i32 - attributes.size.height as i32).max(0) / 2,
                )
            }),
        };
        if let Some(position) = position {
            winit_attributes = winit_attributes.with_position(position);
        }

        let window = self
            .event_loop
            .create_window(winit_attributes)
            .map_err(|e| WindowError::WindowCreation(e.to_string()))?;

        Ok(WinitWindow::new(Arc::new(window)))
    }

    fn create_target(&mut self, window: &WinitWindow) -> Result<WgpuTarget> {
        Ok(WgpuTarget::new(window.inner().clone()))
    }
}
