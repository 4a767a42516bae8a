//! Native types appearing in export signatures.
//!
//! Handles are plain pointers. Their lifetime and validity are defined by the
//! native library, not by this crate. Records that are only ever passed by
//! pointer are opaque aliases of `c_void`; the caller lays them out.

#![allow(non_camel_case_types, clippy::upper_case_acronyms)]

use std::ffi::c_void;

use crate::kind::{Kind, NativeType};

pub type BOOL = i32;
pub type COLORREF = u32;
pub type LPARAM = isize;
pub type NTSTATUS = i32;

pub type PCSTR = *const u8;
pub type PSTR = *mut u8;
pub type PCWSTR = *const u16;
pub type PWSTR = *mut u16;

pub type HANDLE = *mut c_void;
pub type HDC = *mut c_void;
pub type HGDIOBJ = *mut c_void;
pub type HBITMAP = *mut c_void;
pub type HBRUSH = *mut c_void;
pub type HPEN = *mut c_void;
pub type HFONT = *mut c_void;
pub type HRGN = *mut c_void;
pub type HPALETTE = *mut c_void;
pub type HMETAFILE = *mut c_void;
pub type HENHMETAFILE = *mut c_void;
pub type HCOLORSPACE = *mut c_void;

pub type ABC = c_void;
pub type ABCFLOAT = c_void;
pub type BITMAP = c_void;
pub type BITMAPINFO = c_void;
pub type BITMAPINFOHEADER = c_void;
pub type CHARSETINFO = c_void;
pub type COLORADJUSTMENT = c_void;
pub type D3DKMT_ARGS = c_void;
pub type DEVMODEA = c_void;
pub type DEVMODEW = c_void;
pub type DOCINFOA = c_void;
pub type DOCINFOW = c_void;
pub type ENHMETAHEADER = c_void;
pub type ENHMETARECORD = c_void;
pub type ENUMLOGFONTEXDVA = c_void;
pub type ENUMLOGFONTEXDVW = c_void;
pub type FONTSIGNATURE = c_void;
pub type GCP_RESULTSA = c_void;
pub type GCP_RESULTSW = c_void;
pub type GLYPHMETRICS = c_void;
pub type GLYPHSET = c_void;
pub type HANDLETABLE = c_void;
pub type KERNINGPAIR = c_void;
pub type LOGBRUSH = c_void;
pub type LOGCOLORSPACEA = c_void;
pub type LOGCOLORSPACEW = c_void;
pub type LOGFONTA = c_void;
pub type LOGFONTW = c_void;
pub type LOGPALETTE = c_void;
pub type LOGPEN = c_void;
pub type MAT2 = c_void;
pub type METAFILEPICT = c_void;
pub type METARECORD = c_void;
pub type OUTLINETEXTMETRICA = c_void;
pub type OUTLINETEXTMETRICW = c_void;
pub type PALETTEENTRY = c_void;
pub type PIXELFORMATDESCRIPTOR = c_void;
pub type POLYTEXTA = c_void;
pub type POLYTEXTW = c_void;
pub type RASTERIZER_STATUS = c_void;
pub type RGBQUAD = c_void;
pub type RGNDATA = c_void;
pub type TEXTMETRICA = c_void;
pub type TEXTMETRICW = c_void;
pub type TRIVERTEX = c_void;

pub type ABORTPROC = Option<unsafe extern "system" fn(HDC, i32) -> BOOL>;
pub type ENHMFENUMPROC = Option<
    unsafe extern "system" fn(HDC, *const HANDLETABLE, *const ENHMETARECORD, i32, LPARAM) -> i32,
>;
pub type FONTENUMPROCA =
    Option<unsafe extern "system" fn(*const LOGFONTA, *const TEXTMETRICA, u32, LPARAM) -> i32>;
pub type FONTENUMPROCW =
    Option<unsafe extern "system" fn(*const LOGFONTW, *const TEXTMETRICW, u32, LPARAM) -> i32>;
pub type GOBJENUMPROC = Option<unsafe extern "system" fn(*mut c_void, LPARAM) -> i32>;
pub type ICMENUMPROCA = Option<unsafe extern "system" fn(PSTR, LPARAM) -> i32>;
pub type ICMENUMPROCW = Option<unsafe extern "system" fn(PWSTR, LPARAM) -> i32>;
pub type LINEDDAPROC = Option<unsafe extern "system" fn(i32, i32, LPARAM)>;
pub type MFENUMPROC = Option<
    unsafe extern "system" fn(HDC, *const HANDLETABLE, *const METARECORD, i32, LPARAM) -> i32,
>;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct POINT {
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SIZE {
    pub cx: i32,
    pub cy: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RECT {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XFORM {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub dx: f32,
    pub dy: f32,
}

impl XFORM {
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };
}

/// Alpha blending parameters for `GdiAlphaBlend`, passed by value.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BLENDFUNCTION {
    pub blend_op: u8,
    pub blend_flags: u8,
    pub source_constant_alpha: u8,
    pub alpha_format: u8,
}

// Four bytes, passed in a single 32-bit slot.
impl NativeType for BLENDFUNCTION {
    const KIND: Kind = Kind::U32;
}

/// Builds a `COLORREF` from its red, green and blue components.
#[must_use]
pub const fn rgb(r: u8, g: u8, b: u8) -> COLORREF {
    r as u32 | (g as u32) << 8 | (b as u32) << 16
}
