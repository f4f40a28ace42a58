//! Decoder options.

use ::Version;
use ::header::MINIMUM_VERSION;

/// What to do when the palette cannot be read.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum PaletteMode {
    /// Fail the decode with `PaletteReadError`.
    Strict,

    /// Keep the zero-filled palette and carry on.  The observer is
    /// told about the failure.
    BestEffort,
}

/// Value stored in the height of an RGBA frame.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum RgbaHeight {
    /// The decoded height.
    Decoded,

    /// The decoded width, as older decoders reported it.  Payload
    /// size is still width * height * 4.
    MirrorWidth,
}

/// On-disk layout of indexed frames.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum IndexedEncoding {
    /// width * height bytes, stored verbatim.
    Raw,

    /// Zero-run compressed, prefixed by a 16-bit encoded size.
    Rle,
}

/// Options controlling `decode_with`.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub struct DecodeOptions {
    pub palette_mode: PaletteMode,
    pub rgba_height: RgbaHeight,
    pub indexed_encoding: IndexedEncoding,
    pub minimum_version: Version,
}

impl DecodeOptions {
    /// Default options: strict palette, decoded heights, raw indexed
    /// frames, version 2.1 or newer.
    pub fn new() -> Self {
        DecodeOptions {
            palette_mode: PaletteMode::Strict,
            rgba_height: RgbaHeight::Decoded,
            indexed_encoding: IndexedEncoding::Raw,
            minimum_version: MINIMUM_VERSION,
        }
    }

    /// Options reproducing the legacy decoder: palette errors are
    /// ignored and RGBA heights mirror the width.
    pub fn legacy() -> Self {
        DecodeOptions::new()
            .set_palette_mode(PaletteMode::BestEffort)
            .set_rgba_height(RgbaHeight::MirrorWidth)
    }

    pub fn set_palette_mode(mut self, mode: PaletteMode) -> Self {
        self.palette_mode = mode;
        self
    }

    pub fn set_rgba_height(mut self, height: RgbaHeight) -> Self {
        self.rgba_height = height;
        self
    }

    pub fn set_indexed_encoding(mut self, encoding: IndexedEncoding) -> Self {
        self.indexed_encoding = encoding;
        self
    }

    pub fn set_minimum_version(mut self, version: Version) -> Self {
        self.minimum_version = version;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions::new()
    }
}
