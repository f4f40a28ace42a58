//! SPR palette.

use std::fmt;
use std::io::{Cursor,Read};

use ::{SprError,SprResult};
use ::cursor::skip_bytes;

/// Number of colours in the palette.
pub const NUM_COLS: usize = 256;

/// Size of the palette on disk.
///
/// The palette is stored in the final 1024 bytes of the file,
/// regardless of how much frame data precedes it.  Each entry is four
/// bytes: red, green, blue and alpha.
pub const SIZE_OF_PALETTE: usize = 4 * NUM_COLS;

/// 256-entry RGBA colour table.
#[derive(Clone)]
pub struct Palette {
    buf: Vec<u8>,
}

impl Palette {
    /// Allocate a zero-filled palette.
    pub fn new() -> Self {
        Palette {
            buf: vec![0; SIZE_OF_PALETTE],
        }
    }

    /// Get the colour at the given index, as [r, g, b, a].
    pub fn color(&self, index: u8) -> [u8; 4] {
        let i = 4 * index as usize;
        [self.buf[i], self.buf[i + 1], self.buf[i + 2], self.buf[i + 3]]
    }

    /// The raw palette bytes.  Always SIZE_OF_PALETTE long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new()
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Palette({} bytes)", self.buf.len())
    }
}

/*--------------------------------------------------------------*/

/// Read the palette from the tail of the file.
///
/// This uses its own cursor over `buf`, so the caller's frame cursor
/// is not disturbed.
pub fn read_palette(buf: &[u8])
        -> SprResult<Palette> {
    if buf.len() < SIZE_OF_PALETTE {
        return Err(SprError::PaletteReadError {
            expected: SIZE_OF_PALETTE,
            available: buf.len(),
        });
    }

    let mut view = Cursor::new(buf);
    let tail_offset = buf.len() - SIZE_OF_PALETTE;
    let pos = view.position() as usize;
    skip_bytes(&mut view, tail_offset - pos)?;

    let mut pal = Palette::new();
    view.read_exact(&mut pal.buf)?;
    Ok(pal)
}
