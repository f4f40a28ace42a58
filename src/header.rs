//! SPR header.

use std::fmt;
use std::io::{Cursor,Read};
use std::str::FromStr;
use byteorder::LittleEndian as LE;
use byteorder::ReadBytesExt;

use ::{SprError,SprResult};
use ::cursor::remaining;

/// Magic for a SPR file.
///
/// A SPR file begins with a short header, described below.  All
/// values are little-endian and unsigned.
///
///   Offset | Length |    Name     | Description
///   ------:| ------:|:-----------:| -----------------------------------
///        0 |      2 |  signature  | File format identifier.  Always "SP".
///        2 |      1 |    minor    | Minor version number.
///        3 |      1 |    major    | Major version number.
///        4 |      2 |   indexed   | Number of palette-indexed frames.
///        6 |      2 |    rgba     | Number of RGBA frames.  Only present if the version is greater than 1.1.
///
/// The frame records follow the header: first all of the indexed
/// frames, then all of the RGBA frames.  The palette occupies the
/// final 1024 bytes of the file.
pub const SPR_MAGIC: &'static [u8; 2] = b"SP";

/// Size of a SPR header on disk, when the RGBA frame count is absent.
pub const SIZE_OF_SPR_HEADER_V1: usize = 6;

/// Size of a SPR header on disk, when the RGBA frame count is present.
pub const SIZE_OF_SPR_HEADER: usize = 8;

/// Newest version without an RGBA frame count in the header.
pub const LAST_VERSION_WITHOUT_RGBA: Version = Version { major: 1, minor: 1 };

/// Oldest version that can be decoded.
pub const MINIMUM_VERSION: Version = Version { major: 2, minor: 1 };

/// SPR format version.
///
/// Versions compare field-wise, so 1.10 is newer than 1.9.
#[derive(Clone,Copy,Debug,Eq,PartialEq,Ord,PartialOrd,Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

/// SPR header.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct SprHeader {
    pub signature: [u8; 2],
    pub version: Version,
    pub indexed_frame_count: u16,
    pub rgba_frame_count: u16,

    // Note: not stored on disk.  Slot of the first RGBA frame.
    pub rgba_index: u16,
}

/*--------------------------------------------------------------*/

impl Version {
    pub fn new(major: u8, minor: u8) -> Self {
        Version {
            major: major,
            minor: minor,
        }
    }

    /// True if the header carries an RGBA frame count.
    pub fn has_rgba_frames(&self) -> bool {
        *self > LAST_VERSION_WITHOUT_RGBA
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = SprError;

    /// Parse a "major.minor" string.  A missing minor is zero.
    fn from_str(s: &str) -> SprResult<Self> {
        let mut parts = s.trim().splitn(2, '.');
        let major = parts.next().unwrap_or("").parse::<u8>()?;
        let minor = match parts.next() {
            Some(m) => m.parse::<u8>()?,
            None => 0,
        };

        Ok(Version::new(major, minor))
    }
}

impl SprHeader {
    /// Total number of frames, indexed and RGBA.
    pub fn frame_count(&self) -> usize {
        self.indexed_frame_count as usize + self.rgba_frame_count as usize
    }

    /// Number of bytes the header occupies on disk.
    pub fn size_on_disk(&self) -> usize {
        if self.version.has_rgba_frames() {
            SIZE_OF_SPR_HEADER
        } else {
            SIZE_OF_SPR_HEADER_V1
        }
    }
}

/*--------------------------------------------------------------*/

/// Read the SPR header.
///
/// The cursor must be at the start of the file.  On success it is
/// left on the first frame record.
pub fn read_spr_header(r: &mut Cursor<&[u8]>)
        -> SprResult<SprHeader> {
    let available = remaining(r);
    if available < SPR_MAGIC.len() {
        return Err(SprError::TruncatedHeader {
            expected: SIZE_OF_SPR_HEADER_V1,
            available: available,
        });
    }

    let mut signature = [0; 2];
    r.read_exact(&mut signature)?;
    if &signature != SPR_MAGIC {
        return Err(SprError::InvalidSignature { found: signature });
    }

    if available < SIZE_OF_SPR_HEADER_V1 {
        return Err(SprError::TruncatedHeader {
            expected: SIZE_OF_SPR_HEADER_V1,
            available: available,
        });
    }

    // Minor is stored first.
    let minor = r.read_u8()?;
    let major = r.read_u8()?;
    let version = Version::new(major, minor);

    let indexed_frame_count = r.read_u16::<LE>()?;

    let mut rgba_frame_count = 0;
    if version.has_rgba_frames() {
        if available < SIZE_OF_SPR_HEADER {
            return Err(SprError::TruncatedHeader {
                expected: SIZE_OF_SPR_HEADER,
                available: available,
            });
        }

        rgba_frame_count = r.read_u16::<LE>()?;
    }

    Ok(SprHeader {
        signature: signature,
        version: version,
        indexed_frame_count: indexed_frame_count,
        rgba_frame_count: rgba_frame_count,
        rgba_index: indexed_frame_count,
    })
}
