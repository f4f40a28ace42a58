//! SPR frame decoding subroutines.

macro_rules! module {
    ($e:ident) => {
        pub use self::$e::*;
        mod $e;
    };
}

use std::io::Cursor;

use ::{DecodeObserver,DecodeOptions,Frame,IndexedEncoding,SprResult};

module!(indexed);
module!(indexed_rle);
module!(rgba);

/*--------------------------------------------------------------*/

/// Decode one indexed frame, based on the indexed frame encoding.
pub fn decode_indexed_frame(encoding: IndexedEncoding,
        r: &mut Cursor<&[u8]>, index: usize)
        -> SprResult<Frame> {
    match encoding {
        IndexedEncoding::Raw => decode_spr_indexed(r, index),
        IndexedEncoding::Rle => decode_spr_indexed_rle(r, index),
    }
}

/// Read `count` indexed frames, appending them to `frames`.
///
/// Frames are stored in file order.  Nothing is appended for the
/// frame that fails.
pub fn read_indexed_frames(r: &mut Cursor<&[u8]>, count: u16,
        opts: &DecodeOptions, frames: &mut Vec<Frame>,
        obs: &mut dyn DecodeObserver)
        -> SprResult<()> {
    for i in 0..(count as usize) {
        let frame = decode_indexed_frame(opts.indexed_encoding, r, i)?;
        obs.frame_decoded(frames.len(), &frame);
        frames.push(frame);
    }

    Ok(())
}

/// Read `count` RGBA frames, appending them to `frames`.
///
/// The first RGBA frame lands in the slot after the last indexed
/// frame.
pub fn read_rgba_frames(r: &mut Cursor<&[u8]>, count: u16,
        opts: &DecodeOptions, frames: &mut Vec<Frame>,
        obs: &mut dyn DecodeObserver)
        -> SprResult<()> {
    for i in 0..(count as usize) {
        let frame = decode_spr_rgba(r, i, opts.rgba_height)?;
        obs.frame_decoded(frames.len(), &frame);
        frames.push(frame);
    }

    Ok(())
}
