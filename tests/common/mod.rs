#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use editor_window::core::{Rect, Size};
use editor_window::icon::IconData;
use editor_window::traits::{NativeWindow, Platform, TextureTarget, WindowAttributes};
use editor_window::{Result, WindowError};

/// Display conditions shared between a test and its mock window
#[derive(Clone)]
pub struct Display {
    pub pixels: Rc<Cell<Size>>,
    pub points: Rc<Cell<Size>>,
}

impl Display {
    pub fn new(points: Size, scale: u32) -> Self {
        let display = Self {
            pixels: Rc::new(Cell::new(Size::default())),
            points: Rc::new(Cell::new(Size::default())),
        };
        display.set(points, scale);
        display
    }

    pub fn set(&self, points: Size, scale: u32) {
        self.points.set(points);
        self.pixels.set(Size::new(points.width * scale, points.height * scale));
    }
}

pub struct MockWindow {
    pub display: Display,
    pub visible: Rc<Cell<bool>>,
    pub title: RefCell<String>,
    pub redraws: Cell<usize>,
}

impl NativeWindow for MockWindow {
    fn size_in_pixels(&self) -> Result<Size> {
        Ok(self.display.pixels.get())
    }

    fn size_in_points(&self) -> Result<Size> {
        Ok(self.display.points.get())
    }

    fn show(&self) {
        self.visible.set(true);
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn set_icon(&self, _icon: &IconData) -> Result<()> {
        Ok(())
    }

    fn request_redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}

/// Everything a mock target was asked to do
#[derive(Debug, Default)]
pub struct TargetLog {
    pub renderers: usize,
    pub textures_created: Vec<Size>,
    pub textures_destroyed: usize,
    pub texture: Option<Size>,
    /// (rect, first pixel bytes, pitch)
    pub uploads: Vec<(Rect, [u8; 4], u32)>,
    pub presents: usize,
    pub released: usize,
    /// Make the next `create_texture` calls fail
    pub fail_texture: bool,
}

pub struct MockTarget {
    pub log: Rc<RefCell<TargetLog>>,
}

impl TextureTarget for MockTarget {
    fn create_renderer(&mut self) -> Result<()> {
        self.log.borrow_mut().renderers += 1;
        Ok(())
    }

    fn create_texture(&mut self, size: Size) -> Result<()> {
        let mut log = self.log.borrow_mut();
        assert!(log.texture.is_none(), "texture created while another is alive");
        if log.fail_texture {
            return Err(WindowError::Texture(format!("cannot allocate {}x{}", size.width, size.height)));
        }
        log.textures_created.push(size);
        log.texture = Some(size);
        Ok(())
    }

    fn destroy_texture(&mut self) {
        let mut log = self.log.borrow_mut();
        log.textures_destroyed += 1;
        log.texture = None;
    }

    fn update_texture(&mut self, rect: Rect, pixels: &[u8], pitch: u32) -> Result<()> {
        let mut log = self.log.borrow_mut();
        let texture = log.texture.expect("upload without texture");
        assert!(rect.right() as u32 <= texture.width && rect.bottom() as u32 <= texture.height);
        let needed = (rect.height as usize - 1) * pitch as usize + rect.width as usize * 4;
        assert!(pixels.len() >= needed, "pixel block too short");

        log.uploads.push((rect, [pixels[0], pixels[1], pixels[2], pixels[3]], pitch));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.log.borrow_mut().presents += 1;
        Ok(())
    }
}

impl Drop for MockTarget {
    fn drop(&mut self) {
        self.log.borrow_mut().released += 1;
    }
}

/// Headless platform handing out mock windows
pub struct MockPlatform {
    pub display_size: Option<Size>,
    pub scale: u32,
    pub fail_window: bool,
    pub created: Vec<WindowAttributes>,
    pub displays: Vec<Display>,
    pub logs: Vec<Rc<RefCell<TargetLog>>>,
}

impl MockPlatform {
    pub fn new(display_size: Size, scale: u32) -> Self {
        Self {
            display_size: Some(display_size),
            scale,
            fail_window: false,
            created: Vec::new(),
            displays: Vec::new(),
            logs: Vec::new(),
        }
    }
}

impl Platform for MockPlatform {
    type Window = MockWindow;
    type Target = MockTarget;

    fn primary_display_size(&self) -> Result<Size> {
        self.display_size
            .ok_or_else(|| WindowError::DisplayMode("no display".into()))
    }

    fn create_window(&mut self, attributes: &WindowAttributes) -> Result<MockWindow> {
        if self.fail_window {
            return Err(WindowError::WindowCreation("no video device".into()));
        }
        self.created.push(attributes.clone());

        let display = Display::new(attributes.size, self.scale);
        self.displays.push(display.clone());
        Ok(MockWindow {
            display,
            visible: Rc::new(Cell::new(attributes.visible)),
            title: RefCell::new(attributes.title.clone()),
            redraws: Cell::new(0),
        })
    }

    fn create_target(&mut self, _window: &MockWindow) -> Result<MockTarget> {
        let log = Rc::new(RefCell::new(TargetLog::default()));
        self.logs.push(log.clone());
        Ok(MockTarget { log })
    }
}

/// Window and target built directly, without the bindings
pub fn mock_window(points: Size, scale: u32) -> (MockWindow, MockTarget, Display, Rc<RefCell<TargetLog>>) {
    let display = Display::new(points, scale);
    let log = Rc::new(RefCell::new(TargetLog::default()));
    let window = MockWindow {
        display: display.clone(),
        visible: Rc::new(Cell::new(false)),
        title: RefCell::new(String::new()),
        redraws: Cell::new(0),
    };
    (window, MockTarget { log: log.clone() }, display, log)
}
