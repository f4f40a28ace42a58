//! Codec for uncompressed indexed frames.

use std::io::Cursor;

use ::{DecodeStage,Frame,FrameImage,FrameKind,SprResult};
use ::cursor::{read_frame_dimensions,read_frame_payload};

/// Decode an uncompressed indexed frame.
///
/// Each indexed frame record is laid out as follows:
///
///   Offset | Length | Name   | Description
///   ------:| ------:|:------:| ---------------------------------------
///        0 |      2 | width  | Width in pixels.
///        2 |      2 | height | Height in pixels.
///        4 |    w*h | pixels | One palette index per pixel, left to right then top to bottom.
pub fn decode_spr_indexed(r: &mut Cursor<&[u8]>, index: usize)
        -> SprResult<Frame> {
    let stage = DecodeStage::IndexedFrames;
    let (w, h) = read_frame_dimensions(r, stage, index)?;
    let data = read_frame_payload(r, FrameKind::Indexed, w, h, stage, index)?;

    Ok(Frame::Indexed(FrameImage {
        width: w,
        height: h,
        data: data,
    }))
}
