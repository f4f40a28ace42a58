//! Codec for zero-run compressed indexed frames.

use std::cmp::min;
use std::io::{Cursor,Read};
use byteorder::LittleEndian as LE;
use byteorder::ReadBytesExt;

use ::{DecodeStage,Frame,FrameImage,FrameKind,SprError,SprResult};
use ::cursor::{read_frame_dimensions,read_payload,remaining};

/// Decode a zero-run compressed indexed frame.
///
/// Each compressed indexed frame record is laid out as follows:
///
///   Offset | Length | Name   | Description
///   ------:| ------:|:------:| ---------------------------------------
///        0 |      2 | width  | Width in pixels.
///        2 |      2 | height | Height in pixels.
///        4 |      2 | size   | Number of encoded bytes that follow.
///        6 |   size | pixels | Encoded palette indices.
///
/// Only index 0, usually the transparent colour, is run-length
/// encoded.  A non-zero byte is a single pixel.  A zero byte is
/// followed by a count byte, and expands to that many zero pixels.
/// A count of zero expands to two zero pixels.
///
/// The decoded data must be exactly width * height pixels.
pub fn decode_spr_indexed_rle(r: &mut Cursor<&[u8]>, index: usize)
        -> SprResult<Frame> {
    let stage = DecodeStage::IndexedFrames;
    let (w, h) = read_frame_dimensions(r, stage, index)?;

    let available = remaining(r);
    if available < 2 {
        return Err(SprError::TruncatedFrameData {
            stage: stage,
            index: index,
            expected: 2,
            available: available,
        });
    }

    let encoded_size = r.read_u16::<LE>()? as usize;
    let src = read_payload(r, encoded_size, stage, index)?;

    let expected = match FrameKind::Indexed.payload_size(w, h) {
        Some(n) => n,
        None => return Err(SprError::CorruptedFrameData {
            index: index,
            expected: ::std::usize::MAX,
            actual: 0,
        }),
    };

    let data = decode_zero_runs(&src, expected, index)?;
    if data.len() != expected {
        return Err(SprError::CorruptedFrameData {
            index: index,
            expected: expected,
            actual: data.len(),
        });
    }

    Ok(Frame::Indexed(FrameImage {
        width: w,
        height: h,
        data: data,
    }))
}

/// Expand the zero runs in `src`.
///
/// Fails as soon as the output grows past `expected` pixels.
fn decode_zero_runs(src: &[u8], expected: usize, index: usize)
        -> SprResult<Vec<u8>> {
    let mut r = Cursor::new(src);
    let mut dst = Vec::with_capacity(min(expected, max_decoded_len(src.len())));
    let mut c = [0; 1];

    while r.read(&mut c)? > 0 {
        if c[0] != 0 {
            if dst.len() >= expected {
                return Err(SprError::CorruptedFrameData {
                    index: index,
                    expected: expected,
                    actual: dst.len() + 1,
                });
            }

            dst.push(c[0]);
            continue;
        }

        let count = match r.read_u8() {
            Ok(0) => 2,
            Ok(n) => n as usize,
            Err(_) => return Err(SprError::TruncatedFrameData {
                stage: DecodeStage::IndexedFrames,
                index: index,
                expected: 1,
                available: 0,
            }),
        };

        let len = dst.len();
        if len + count > expected {
            return Err(SprError::CorruptedFrameData {
                index: index,
                expected: expected,
                actual: len + count,
            });
        }

        dst.resize(len + count, 0);
    }

    Ok(dst)
}

/// Largest number of pixels `n` encoded bytes can expand to.
fn max_decoded_len(n: usize)
        -> usize {
    // Every two-byte run gives at most 255 pixels.
    (n / 2) * 255 + (n % 2)
}
