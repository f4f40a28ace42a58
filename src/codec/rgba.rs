//! Codec for RGBA frames.

use std::io::Cursor;

use ::{DecodeStage,Frame,FrameImage,FrameKind,RgbaHeight,SprResult};
use ::cursor::{read_frame_dimensions,read_frame_payload};

/// Decode an RGBA frame.
///
/// Each RGBA frame record is laid out as follows:
///
///   Offset | Length  | Name   | Description
///   ------:| -------:|:------:| ---------------------------------------
///        0 |       2 | width  | Width in pixels.
///        2 |       2 | height | Height in pixels.
///        4 | 4*w*h   | pixels | Four colour bytes per pixel, left to right then top to bottom.
///
/// # Note
///
/// Older decoders stored the width in the frame's height.  Pass
/// `RgbaHeight::MirrorWidth` to get the same frame dimensions.
pub fn decode_spr_rgba(r: &mut Cursor<&[u8]>, index: usize, height: RgbaHeight)
        -> SprResult<Frame> {
    let stage = DecodeStage::RgbaFrames;
    let (w, h) = read_frame_dimensions(r, stage, index)?;
    let data = read_frame_payload(r, FrameKind::Rgba, w, h, stage, index)?;

    let reported_h = match height {
        RgbaHeight::Decoded => h,
        RgbaHeight::MirrorWidth => w,
    };

    Ok(Frame::Rgba(FrameImage {
        width: w,
        height: reported_h,
        data: data,
    }))
}
