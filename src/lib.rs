//! This crate provides routines for decoding SPR sprite files: a
//! short header, a sequence of palette-indexed and RGBA frames, and
//! a 256-colour palette stored at the end of the file.
//!
//! Decoding is a pure transformation from bytes to a `SpriteFile`.
//! Progress can be watched through a `DecodeObserver`.

extern crate byteorder;
extern crate libc;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub use errcode::DecodeStage;
pub use errcode::SprError;
pub use errcode::SprResult;
pub use frame::{Frame,FrameImage,FrameKind};
pub use header::{SprHeader,Version};
pub use observer::{DecodeObserver,LogObserver,NullObserver};
pub use options::{DecodeOptions,IndexedEncoding,PaletteMode,RgbaHeight};
pub use palette::Palette;
pub use spr::{SpriteFile,decode,decode_with};

pub mod codec;
pub mod cursor;
pub mod errcode;
pub mod ffi;
pub mod frame;
pub mod header;
pub mod observer;
pub mod options;
pub mod palette;
pub mod spr;
