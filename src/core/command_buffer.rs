use super::geometry::Rect;
use super::surface::Color;

/// Initial allocation, made on the first push
pub const INITIAL_CAPACITY: usize = 512 * 1024;
const GROWTH_RATE: f64 = 1.2;

/// Drawing command queued by the host, in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Restrict subsequent fills to a rect
    SetClip(Rect),
    /// Fill a rect with a color
    FillRect(Rect, Color),
}

const KIND_SET_CLIP: u32 = 1;
const KIND_FILL_RECT: u32 = 2;

/// Fixed-size wire record for a command
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct RawCommand {
    kind: u32,
    rect: [i32; 4],
    color: [u8; 4],
}

const RECORD_SIZE: usize = std::mem::size_of::<RawCommand>();

impl RawCommand {
    fn encode(command: &Command) -> Self {
        let (kind, rect, color) = match *command {
            Command::SetClip(rect) => (KIND_SET_CLIP, rect, Color::default()),
            Command::FillRect(rect, color) => (KIND_FILL_RECT, rect, color),
        };
        Self {
            kind,
            rect: [rect.x, rect.y, rect.width, rect.height],
            color: [color.r, color.g, color.b, color.a],
        }
    }

    fn decode(&self) -> Option<Command> {
        let [x, y, width, height] = self.rect;
        let rect = Rect::new(x, y, width, height);
        let [r, g, b, a] = self.color;
        match self.kind {
            KIND_SET_CLIP => Some(Command::SetClip(rect)),
            KIND_FILL_RECT => Some(Command::FillRect(rect, Color::rgba(r, g, b, a))),
            _ => None,
        }
    }
}

/// Byte buffer of queued draw commands
///
/// Nothing is allocated until the first push. The write index resets on
/// `clear`, but the allocation is kept for the next frame.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    buf: Vec<u8>,
    idx: usize,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command, growing the buffer if needed
    pub fn push(&mut self, command: Command) {
        let needed = self.idx + RECORD_SIZE;
        if needed > self.buf.len() {
            let grown = ((needed as f64) * GROWTH_RATE) as usize;
            self.buf.resize(grown.max(INITIAL_CAPACITY), 0);
        }

        let raw = RawCommand::encode(&command);
        self.buf[self.idx..needed].copy_from_slice(bytemuck::bytes_of(&raw));
        self.idx = needed;
    }

    /// Queued commands in push order
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.buf[..self.idx]
            .chunks_exact(RECORD_SIZE)
            .filter_map(|chunk| bytemuck::pod_read_unaligned::<RawCommand>(chunk).decode())
    }

    pub fn len(&self) -> usize {
        self.idx / RECORD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.idx == 0
    }

    /// Bytes currently allocated
    pub fn allocated(&self) -> usize {
        self.buf.len()
    }

    pub fn clear(&mut self) {
        self.idx = 0;
    }
}
