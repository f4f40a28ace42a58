//! SPR implementation.

use std::cmp::min;
use std::io::Cursor;

use ::{DecodeObserver,DecodeOptions,Frame,NullObserver,PaletteMode,SprError,SprResult};
use ::codec::{read_indexed_frames,read_rgba_frames};
use ::cursor::{SIZE_OF_FRAME_DIMENSIONS,remaining};
use ::header::{SprHeader,Version,read_spr_header};
use ::palette::{Palette,read_palette};

/// A decoded SPR sprite.
///
/// Frames are stored with all of the indexed frames first, in file
/// order, followed by all of the RGBA frames, in file order.
#[derive(Clone,Debug)]
pub struct SpriteFile {
    hdr: SprHeader,
    palette: Palette,
    frames: Vec<Frame>,
}

impl SpriteFile {
    /// Decode a SPR file held in memory, with the default options.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut buf = vec![b'S', b'P', 1, 2, 1, 0, 0, 0];
    /// buf.extend_from_slice(&[2, 0, 2, 0, 0, 1, 1, 0]);
    /// buf.extend_from_slice(&[0; 1024]);
    ///
    /// let spr = sprfile::SpriteFile::decode(&buf).unwrap();
    /// assert_eq!(spr.frame_count(), 1);
    /// assert_eq!(spr.palette().as_bytes().len(), 1024);
    /// ```
    pub fn decode(buf: &[u8])
            -> SprResult<Self> {
        Self::decode_with(buf, &DecodeOptions::default(), &mut NullObserver)
    }

    /// Decode a SPR file held in memory.
    ///
    /// Either every frame is decoded, or an error is returned.
    pub fn decode_with(buf: &[u8], opts: &DecodeOptions,
            obs: &mut dyn DecodeObserver)
            -> SprResult<Self> {
        let mut r = Cursor::new(buf);

        let hdr = read_spr_header(&mut r)?;
        if hdr.version < opts.minimum_version {
            return Err(SprError::UnsupportedVersion {
                version: hdr.version,
                minimum: opts.minimum_version,
            });
        }
        obs.header_decoded(&hdr);

        // The palette has its own cursor; r stays on the first frame.
        let palette = match read_palette(buf) {
            Ok(pal) => {
                obs.palette_decoded(&pal);
                pal
            },
            Err(e) => match opts.palette_mode {
                PaletteMode::Strict => return Err(e),
                PaletteMode::BestEffort => {
                    obs.palette_fallback(&e);
                    Palette::new()
                },
            },
        };

        let mut frames = Vec::with_capacity(frame_capacity(&hdr, remaining(&r)));
        read_indexed_frames(&mut r, hdr.indexed_frame_count, opts, &mut frames, obs)?;
        assert_eq!(frames.len(), hdr.rgba_index as usize);
        read_rgba_frames(&mut r, hdr.rgba_frame_count, opts, &mut frames, obs)?;
        assert_eq!(frames.len(), hdr.frame_count());

        Ok(SpriteFile {
            hdr: hdr,
            palette: palette,
            frames: frames,
        })
    }

    pub fn header(&self) -> &SprHeader {
        &self.hdr
    }

    pub fn version(&self) -> Version {
        self.hdr.version
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// All frames, indexed frames first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    /// Get the frame count, indexed and RGBA.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn indexed_frames(&self) -> &[Frame] {
        &self.frames[..self.hdr.rgba_index as usize]
    }

    pub fn rgba_frames(&self) -> &[Frame] {
        &self.frames[self.hdr.rgba_index as usize..]
    }
}

/// Number of frame slots to reserve.
///
/// The header counts are not trusted beyond what `available` bytes
/// could hold.
fn frame_capacity(hdr: &SprHeader, available: usize)
        -> usize {
    min(hdr.frame_count(), available / SIZE_OF_FRAME_DIMENSIONS)
}

/// Decode a SPR file held in memory, with the default options.
pub fn decode(buf: &[u8])
        -> SprResult<SpriteFile> {
    SpriteFile::decode(buf)
}

/// Decode a SPR file held in memory.
pub fn decode_with(buf: &[u8], opts: &DecodeOptions, obs: &mut dyn DecodeObserver)
        -> SprResult<SpriteFile> {
    SpriteFile::decode_with(buf, opts, obs)
}

#[cfg(test)]
mod tests {
    use ::{DecodeObserver,DecodeOptions,DecodeStage,Frame,FrameKind,IndexedEncoding,
           NullObserver,Palette,PaletteMode,SprError,SprHeader,Version};
    use ::palette::SIZE_OF_PALETTE;
    use super::*;

    fn header(major: u8, minor: u8, indexed: u16, rgba: u16) -> Vec<u8> {
        vec![b'S', b'P', minor, major,
             indexed as u8, (indexed >> 8) as u8,
             rgba as u8, (rgba >> 8) as u8]
    }

    fn frame(buf: &mut Vec<u8>, w: u16, h: u16, data: &[u8]) {
        buf.extend_from_slice(&[w as u8, (w >> 8) as u8, h as u8, (h >> 8) as u8]);
        buf.extend_from_slice(data);
    }

    fn palette_tail(buf: &mut Vec<u8>) {
        for i in 0..256 {
            buf.extend_from_slice(&[i as u8, 0x40, 0x80, 0xFF]);
        }
    }

    #[derive(Default)]
    struct Recorder {
        headers: usize,
        palettes: usize,
        fallbacks: usize,
        frames: Vec<(usize, FrameKind)>,
    }

    impl DecodeObserver for Recorder {
        fn header_decoded(&mut self, _hdr: &SprHeader) {
            self.headers = self.headers + 1;
        }

        fn palette_decoded(&mut self, _pal: &Palette) {
            self.palettes = self.palettes + 1;
        }

        fn palette_fallback(&mut self, _err: &SprError) {
            self.fallbacks = self.fallbacks + 1;
        }

        fn frame_decoded(&mut self, index: usize, frame: &Frame) {
            self.frames.push((index, frame.kind()));
        }
    }

    #[test]
    fn test_decode_single_indexed_frame() {
        let mut buf = header(2, 1, 1, 0);
        frame(&mut buf, 2, 2, &[1, 2, 3, 4]);
        palette_tail(&mut buf);

        let spr = decode(&buf).expect("decode");
        assert_eq!(spr.version(), Version::new(2, 1));
        assert_eq!(spr.frame_count(), 1);

        let f = spr.frame(0).expect("frame 0");
        assert_eq!(f.kind(), FrameKind::Indexed);
        assert_eq!(f.width(), 2);
        assert_eq!(f.height(), 2);
        assert_eq!(f.data(), &[1, 2, 3, 4]);

        assert_eq!(spr.palette().as_bytes().len(), SIZE_OF_PALETTE);
        assert_eq!(spr.palette().as_bytes(), &buf[buf.len() - SIZE_OF_PALETTE..]);
    }

    #[test]
    fn test_decode_mixed_frames() {
        let mut buf = header(2, 1, 2, 2);
        frame(&mut buf, 1, 2, &[7, 8]);
        frame(&mut buf, 3, 1, &[9, 10, 11]);
        frame(&mut buf, 1, 1, &[0xFF, 0x00, 0x00, 0xFF]);
        frame(&mut buf, 2, 1, &[1, 2, 3, 4, 5, 6, 7, 8]);
        palette_tail(&mut buf);

        let mut rec = Recorder::default();
        let spr = decode_with(&buf, &DecodeOptions::default(), &mut rec).expect("decode");

        assert_eq!(spr.frame_count(), 4);
        assert_eq!(spr.header().rgba_index, 2);
        assert_eq!(spr.indexed_frames().len(), 2);
        assert_eq!(spr.rgba_frames().len(), 2);

        for f in spr.indexed_frames() {
            assert_eq!(f.kind(), FrameKind::Indexed);
            assert_eq!(f.data().len(), (f.width() * f.height()) as usize);
        }
        for f in spr.rgba_frames() {
            assert_eq!(f.kind(), FrameKind::Rgba);
            assert_eq!(f.data().len(), (f.width() * f.height() * 4) as usize);
        }

        assert_eq!(spr.frames()[1].data(), &[9, 10, 11]);
        assert_eq!(spr.frames()[3].width(), 2);
        assert_eq!(spr.frames()[3].height(), 1);

        assert_eq!(rec.headers, 1);
        assert_eq!(rec.palettes, 1);
        assert_eq!(rec.fallbacks, 0);
        assert_eq!(rec.frames, vec![
            (0, FrameKind::Indexed), (1, FrameKind::Indexed),
            (2, FrameKind::Rgba), (3, FrameKind::Rgba)]);
    }

    #[test]
    fn test_decode_legacy_rgba_height() {
        let mut buf = header(2, 1, 0, 1);
        frame(&mut buf, 2, 1, &[0; 8]);
        palette_tail(&mut buf);

        let spr = decode_with(&buf, &DecodeOptions::legacy(), &mut NullObserver)
            .expect("decode");
        assert_eq!(spr.frames()[0].width(), 2);
        assert_eq!(spr.frames()[0].height(), 2);
        assert_eq!(spr.frames()[0].data().len(), 8);
    }

    #[test]
    fn test_decode_rle_indexed_frames() {
        let mut buf = header(2, 1, 1, 0);
        buf.extend_from_slice(&[
            0x02, 0x00, // w 2
            0x02, 0x00, // h 2
            0x03, 0x00, // size 3
            0x00, 0x03, 0x05 ]);
        palette_tail(&mut buf);

        let opts = DecodeOptions::new().set_indexed_encoding(IndexedEncoding::Rle);
        let spr = decode_with(&buf, &opts, &mut NullObserver).expect("decode");
        assert_eq!(spr.frames()[0].data(), &[0, 0, 0, 5]);
    }

    #[test]
    fn test_decode_bad_signature() {
        let mut buf = header(2, 1, 0, 0);
        buf[0] = b'X';
        buf[1] = b'X';
        palette_tail(&mut buf);

        match decode(&buf) {
            Err(SprError::InvalidSignature { found }) => assert_eq!(&found, b"XX"),
            other => panic!("expected InvalidSignature, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_version_gate() {
        let mut buf = header(2, 0, 0, 0);
        palette_tail(&mut buf);

        match decode(&buf) {
            Err(SprError::UnsupportedVersion { version, minimum }) => {
                assert_eq!(version, Version::new(2, 0));
                assert_eq!(minimum, Version::new(2, 1));
            },
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }

        let mut buf = header(2, 1, 0, 0);
        palette_tail(&mut buf);
        assert!(decode(&buf).is_ok());
    }

    #[test]
    fn test_decode_version_1_0_is_rejected_after_header() {
        // Version 1.0 has no RGBA count; the header is six bytes.
        let mut buf = vec![b'S', b'P', 0x00, 0x01, 0x00, 0x00];
        palette_tail(&mut buf);

        let mut rec = Recorder::default();
        match decode_with(&buf, &DecodeOptions::default(), &mut rec) {
            Err(SprError::UnsupportedVersion { version, .. }) =>
                assert_eq!(version, Version::new(1, 0)),
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
        assert_eq!(rec.headers, 0);

        // With the gate lowered, the frames begin right after byte 6.
        let mut buf = vec![b'S', b'P', 0x00, 0x01, 0x01, 0x00];
        frame(&mut buf, 1, 1, &[0x2A]);
        palette_tail(&mut buf);

        let opts = DecodeOptions::new().set_minimum_version(Version::new(1, 0));
        let spr = decode_with(&buf, &opts, &mut NullObserver).expect("decode");
        assert_eq!(spr.header().rgba_frame_count, 0);
        assert_eq!(spr.frames()[0].data(), &[0x2A]);
    }

    #[test]
    fn test_decode_truncated_indexed_frame() {
        // 100 x 100 needs more bytes than the whole file holds.
        let mut buf = header(2, 1, 1, 0);
        frame(&mut buf, 100, 100, &[0; 20]);
        palette_tail(&mut buf);

        match decode(&buf) {
            Err(SprError::TruncatedFrameData { stage, index, expected, available }) => {
                assert_eq!(stage, DecodeStage::IndexedFrames);
                assert_eq!(index, 0);
                assert_eq!(expected, 10000);
                assert_eq!(available, 20 + SIZE_OF_PALETTE);
            },
            other => panic!("expected TruncatedFrameData, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_truncated_rgba_frame() {
        let mut buf = header(2, 1, 1, 1);
        frame(&mut buf, 1, 1, &[3]);
        frame(&mut buf, 0x200, 0x200, &[]);
        palette_tail(&mut buf);

        match decode(&buf) {
            Err(SprError::TruncatedFrameData { stage, expected, .. }) => {
                assert_eq!(stage, DecodeStage::RgbaFrames);
                assert_eq!(expected, 0x200 * 0x200 * 4);
            },
            other => panic!("expected TruncatedFrameData, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_short_file_strict_palette() {
        let mut buf = header(2, 1, 1, 0);
        frame(&mut buf, 10, 10, &[0; 50]);

        match decode(&buf) {
            Err(SprError::PaletteReadError { expected, available }) => {
                assert_eq!(expected, SIZE_OF_PALETTE);
                assert_eq!(available, buf.len());
            },
            other => panic!("expected PaletteReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_short_file_best_effort_palette() {
        let mut buf = header(2, 1, 1, 0);
        frame(&mut buf, 10, 10, &[0; 50]);

        let opts = DecodeOptions::new().set_palette_mode(PaletteMode::BestEffort);
        let mut rec = Recorder::default();
        match decode_with(&buf, &opts, &mut rec) {
            Err(SprError::TruncatedFrameData { expected, available, .. }) => {
                assert_eq!(expected, 100);
                assert_eq!(available, 50);
            },
            other => panic!("expected TruncatedFrameData, got {:?}", other),
        }
        assert_eq!(rec.fallbacks, 1);
        assert_eq!(rec.palettes, 0);

        let mut buf = header(2, 1, 1, 0);
        frame(&mut buf, 1, 1, &[9]);
        let spr = decode_with(&buf, &opts, &mut NullObserver).expect("decode");
        assert_eq!(spr.palette().as_bytes(), Palette::new().as_bytes());
        assert_eq!(spr.frames()[0].data(), &[9]);
    }

    #[test]
    fn test_decode_empty_sprite() {
        let mut buf = header(2, 1, 0, 0);
        palette_tail(&mut buf);

        let spr = decode(&buf).expect("decode");
        assert_eq!(spr.frame_count(), 0);
        assert_eq!(spr.palette().color(1), [1, 0x40, 0x80, 0xFF]);
    }

    #[test]
    fn test_frame_capacity_bounded_by_buffer() {
        let hdr = SprHeader {
            signature: *b"SP",
            version: Version::new(2, 1),
            indexed_frame_count: 0xFFFF,
            rgba_frame_count: 0xFFFF,
            rgba_index: 0xFFFF,
        };

        assert_eq!(super::frame_capacity(&hdr, 0), 0);
        assert_eq!(super::frame_capacity(&hdr, 1024), 256);
        assert_eq!(super::frame_capacity(&hdr, 0x10_0000), hdr.frame_count());
    }

    #[test]
    fn test_decode_inflated_frame_count() {
        let mut buf = header(2, 1, 0xFFFF, 0xFFFF);
        frame(&mut buf, 1, 1, &[5]);
        palette_tail(&mut buf);

        match decode(&buf) {
            Err(SprError::TruncatedFrameData { stage, .. }) =>
                assert_eq!(stage, DecodeStage::IndexedFrames),
            other => panic!("expected TruncatedFrameData, got {:?}", other),
        }
    }
}
