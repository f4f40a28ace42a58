//! Foreign function interface.

use std::ptr;
use std::slice;
use libc::{c_uint,size_t};

use ::{Frame,FrameKind,SpriteFile};

// Log with "file:line - " prefix, for more informative error messages.
macro_rules! printerrorln {
    ($e:expr) => {
        error!("{}:{} - {}", file!(), line!(), $e);
    };
}

/// Frame kind reported for an indexed frame.
pub const SPRRS_FRAME_INDEXED: c_uint = 1;

/// Frame kind reported for an RGBA frame.
pub const SPRRS_FRAME_RGBA: c_uint = 2;

unsafe fn lookup_frame<'a>(spr: *const SpriteFile, idx: size_t)
        -> Option<&'a Frame> {
    if spr.is_null() {
        printerrorln!("bad input parameters");
        return None;
    }

    let spr = &*spr;
    let frame = spr.frame(idx);
    if frame.is_none() {
        printerrorln!(format!("frame {} out of range", idx));
    }
    frame
}

/*--------------------------------------------------------------*/
/* SpriteFile                                                   */
/*--------------------------------------------------------------*/

/// Decode a SPR file held in memory.
///
/// Returns null on failure.  The result must be released with
/// `sprrs_free`.
#[no_mangle]
pub extern "C" fn sprrs_decode(src: *const u8, src_len: size_t)
        -> *mut SpriteFile {
    if src.is_null() {
        printerrorln!("bad input parameters");
        return ptr::null_mut();
    }

    let src_slice = unsafe{ slice::from_raw_parts(src, src_len) };
    match SpriteFile::decode(src_slice) {
        Ok(spr) => Box::into_raw(Box::new(spr)),
        Err(e) => {
            printerrorln!(e);
            ptr::null_mut()
        },
    }
}

/// Free a decoded SPR file.
#[no_mangle]
pub extern "C" fn sprrs_free(spr: *mut SpriteFile) {
    if spr.is_null() {
        return;
    }

    let _spr = unsafe{ Box::from_raw(spr) };
}

/// Get the frame count, indexed and RGBA.
#[no_mangle]
pub extern "C" fn sprrs_frame_count(spr: *const SpriteFile)
        -> c_uint {
    if spr.is_null() {
        printerrorln!("bad input parameters");
        return 0;
    }

    let spr = unsafe{ &*spr };
    spr.frame_count() as c_uint
}

/// Get the frame kind, SPRRS_FRAME_INDEXED or SPRRS_FRAME_RGBA.
///
/// Returns 0 on failure.
#[no_mangle]
pub extern "C" fn sprrs_frame_kind(spr: *const SpriteFile, idx: size_t)
        -> c_uint {
    match unsafe{ lookup_frame(spr, idx) } {
        Some(f) => match f.kind() {
            FrameKind::Indexed => SPRRS_FRAME_INDEXED,
            FrameKind::Rgba => SPRRS_FRAME_RGBA,
        },
        None => 0,
    }
}

/// Get the frame width.
#[no_mangle]
pub extern "C" fn sprrs_frame_width(spr: *const SpriteFile, idx: size_t)
        -> c_uint {
    match unsafe{ lookup_frame(spr, idx) } {
        Some(f) => f.width() as c_uint,
        None => 0,
    }
}

/// Get the frame height.
#[no_mangle]
pub extern "C" fn sprrs_frame_height(spr: *const SpriteFile, idx: size_t)
        -> c_uint {
    match unsafe{ lookup_frame(spr, idx) } {
        Some(f) => f.height() as c_uint,
        None => 0,
    }
}

/// Get the frame pixel data.
///
/// The data stays valid until the SPR file is freed.  Returns null
/// on failure.
#[no_mangle]
pub extern "C" fn sprrs_frame_data(
        spr: *const SpriteFile, idx: size_t, out_len: *mut size_t)
        -> *const u8 {
    if out_len.is_null() {
        printerrorln!("bad input parameters");
        return ptr::null();
    }

    match unsafe{ lookup_frame(spr, idx) } {
        Some(f) => {
            unsafe{ ptr::write(out_len, f.data().len()) };
            f.data().as_ptr()
        },
        None => {
            unsafe{ ptr::write(out_len, 0) };
            ptr::null()
        },
    }
}

/// Get the palette, 256 entries of red, green, blue and alpha.
///
/// The data stays valid until the SPR file is freed.  Returns null
/// on failure.
#[no_mangle]
pub extern "C" fn sprrs_palette(spr: *const SpriteFile, out_len: *mut size_t)
        -> *const u8 {
    if spr.is_null() || out_len.is_null() {
        printerrorln!("bad input parameters");
        return ptr::null();
    }

    let spr = unsafe{ &*spr };
    let pal = spr.palette().as_bytes();
    unsafe{ ptr::write(out_len, pal.len()) };
    pal.as_ptr()
}
