//! Decode progress reporting.
//!
//! Decoding itself never prints or logs.  Callers that want to see
//! what is being decoded pass a `DecodeObserver`.

use ::{Frame,Palette,SprError,SprHeader};

/// Receives events while a file is being decoded.
///
/// All methods default to doing nothing.
pub trait DecodeObserver {
    fn header_decoded(&mut self, _hdr: &SprHeader) {}

    fn palette_decoded(&mut self, _pal: &Palette) {}

    /// The palette could not be read, and the zero-filled palette is
    /// being kept.  Only called in `PaletteMode::BestEffort`.
    fn palette_fallback(&mut self, _err: &SprError) {}

    /// `index` is the frame's slot in the output sequence.
    fn frame_decoded(&mut self, _index: usize, _frame: &Frame) {}
}

/// Observer that ignores everything.
pub struct NullObserver;

impl DecodeObserver for NullObserver {}

/// Observer that forwards events to the `log` crate.
pub struct LogObserver;

impl DecodeObserver for LogObserver {
    fn header_decoded(&mut self, hdr: &SprHeader) {
        debug!("SPR version {} - {} indexed frames, {} RGBA frames",
                hdr.version, hdr.indexed_frame_count, hdr.rgba_frame_count);
    }

    fn palette_decoded(&mut self, _pal: &Palette) {
        debug!("palette read from file tail");
    }

    fn palette_fallback(&mut self, err: &SprError) {
        warn!("palette - {}; using blank palette", err);
    }

    fn frame_decoded(&mut self, index: usize, frame: &Frame) {
        debug!("frame {}: {:?} {}x{}, {} bytes",
                index, frame.kind(), frame.width(), frame.height(), frame.data().len());
    }
}
