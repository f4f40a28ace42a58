//! SPR error codes.

use std::fmt;
use std::io;
use std::num::ParseIntError;

use ::Version;

pub type SprResult<T> = Result<T, SprError>;

/// The part of the file being decoded when an error occurred.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum DecodeStage {
    Header,
    Palette,
    IndexedFrames,
    RgbaFrames,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::DecodeStage::*;
        match *self {
            Header => write!(f, "header"),
            Palette => write!(f, "palette"),
            IndexedFrames => write!(f, "indexed frames"),
            RgbaFrames => write!(f, "RGBA frames"),
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum SprError {
        InvalidSignature { found: [u8; 2] } {
            display("Invalid signature: {:?}", String::from_utf8_lossy(found))
        }

        InvalidVersion(err: ParseIntError) {
            from()
            display("Invalid version: {}", err)
            cause(err)
        }

        UnsupportedVersion { version: Version, minimum: Version } {
            display("Unsupported version {} (minimum {})", version, minimum)
        }

        TruncatedHeader { expected: usize, available: usize } {
            display("Truncated header - expected {} bytes, {} available",
                    expected, available)
        }

        TruncatedFrameData { stage: DecodeStage, index: usize, expected: usize, available: usize } {
            display("Truncated frame data in {}, frame {} - expected {} bytes, {} available",
                    stage, index, expected, available)
        }

        PaletteReadError { expected: usize, available: usize } {
            display("Palette read error - expected {} bytes, {} available",
                    expected, available)
        }

        // Decompressed size disagrees with the frame dimensions.
        CorruptedFrameData { index: usize, expected: usize, actual: usize } {
            display("Corrupted frame {} - expected {} pixels, decoded {}",
                    index, expected, actual)
        }

        Io(err: io::Error) {
            from()
            display("IO error: {}", err)
            cause(err)
        }
    }
}
