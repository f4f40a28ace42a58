//! Read cursor helpers.
//!
//! Decoding reads from a `Cursor` over the immutable file buffer.
//! These helpers add the bounds-checked operations the `Read` and
//! `Seek` traits do not give directly.

use std::io::{self,Cursor,Read,Seek,SeekFrom};
use byteorder::LittleEndian as LE;
use byteorder::ReadBytesExt;

use ::{DecodeStage,FrameKind,SprError,SprResult};

/// Size of the width and height at the start of every frame record.
pub const SIZE_OF_FRAME_DIMENSIONS: usize = 4;

/// Number of bytes between the cursor and the end of the buffer.
pub fn remaining(r: &Cursor<&[u8]>)
        -> usize {
    let len = r.get_ref().len() as u64;
    let pos = r.position();
    if pos >= len {
        0
    } else {
        (len - pos) as usize
    }
}

/// Advance the cursor by `n` bytes without copying.
///
/// Unlike seeking, this fails if it would move past the end of the
/// buffer.
pub fn skip_bytes(r: &mut Cursor<&[u8]>, n: usize)
        -> SprResult<()> {
    let available = remaining(r);
    if n > available {
        return Err(SprError::Io(io::Error::new(io::ErrorKind::UnexpectedEof,
                format!("cannot skip {} bytes, {} available", n, available))));
    }

    r.seek(SeekFrom::Current(n as i64))?;
    Ok(())
}

/// Read the width and height that begin every frame record.
pub fn read_frame_dimensions(r: &mut Cursor<&[u8]>,
        stage: DecodeStage, index: usize)
        -> SprResult<(u32, u32)> {
    let available = remaining(r);
    if available < SIZE_OF_FRAME_DIMENSIONS {
        return Err(SprError::TruncatedFrameData {
            stage: stage,
            index: index,
            expected: SIZE_OF_FRAME_DIMENSIONS,
            available: available,
        });
    }

    let w = r.read_u16::<LE>()? as u32;
    let h = r.read_u16::<LE>()? as u32;
    Ok((w, h))
}

/// Read exactly `n` bytes into a new buffer.
///
/// Nothing is consumed if fewer than `n` bytes remain.
pub fn read_payload(r: &mut Cursor<&[u8]>, n: usize,
        stage: DecodeStage, index: usize)
        -> SprResult<Vec<u8>> {
    let available = remaining(r);
    if n > available {
        return Err(SprError::TruncatedFrameData {
            stage: stage,
            index: index,
            expected: n,
            available: available,
        });
    }

    let mut buf = vec![0; n];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read the pixel data of a `w` x `h` frame of the given kind.
///
/// A size too large to address is reported as truncation, with the
/// expected count saturated.
pub fn read_frame_payload(r: &mut Cursor<&[u8]>, kind: FrameKind,
        w: u32, h: u32, stage: DecodeStage, index: usize)
        -> SprResult<Vec<u8>> {
    match kind.payload_size(w, h) {
        Some(n) => read_payload(r, n, stage, index),
        None => Err(SprError::TruncatedFrameData {
            stage: stage,
            index: index,
            expected: ::std::usize::MAX,
            available: remaining(r),
        }),
    }
}
