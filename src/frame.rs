//! SPR frames.

/// Bytes per pixel in an RGBA frame.
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Pixel encoding of a frame.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum FrameKind {
    /// One byte per pixel, an index into the palette.
    Indexed,

    /// Four bytes per pixel, independent of the palette.
    Rgba,
}

/// Frame dimensions and pixel data.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// A decoded frame.
#[derive(Clone,Debug,Eq,PartialEq)]
pub enum Frame {
    Indexed(FrameImage),
    Rgba(FrameImage),
}

impl FrameKind {
    /// Number of payload bytes for a frame of the given size.
    ///
    /// Returns None if the size does not fit in a usize.
    pub fn payload_size(&self, width: u32, height: u32) -> Option<usize> {
        let pixels = (width as usize).checked_mul(height as usize)?;
        match *self {
            FrameKind::Indexed => Some(pixels),
            FrameKind::Rgba => pixels.checked_mul(RGBA_BYTES_PER_PIXEL),
        }
    }
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match *self {
            Frame::Indexed(_) => FrameKind::Indexed,
            Frame::Rgba(_) => FrameKind::Rgba,
        }
    }

    pub fn image(&self) -> &FrameImage {
        match *self {
            Frame::Indexed(ref img) | Frame::Rgba(ref img) => img,
        }
    }

    pub fn width(&self) -> u32 {
        self.image().width
    }

    pub fn height(&self) -> u32 {
        self.image().height
    }

    pub fn data(&self) -> &[u8] {
        &self.image().data
    }
}
