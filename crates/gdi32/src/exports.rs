//! The closed set of `gdi32.dll` exports.
//!
//! Each entry is written once, as a Rust signature. From it the macro
//! generates the `Export` variant, its `Descriptor`, and a forwarding method
//! on [`Gdi32`] with the same name, argument order and return type as the
//! native function.

#![allow(non_snake_case, clippy::too_many_arguments)]

use std::ffi::{c_void, CStr};

use crate::{
    binding::Gdi32,
    error::LoadError,
    kind::{Descriptor, NativeType},
    loader::Loader,
    types::*,
};

macro_rules! exports {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty;
    )*) => {
        /// A `gdi32.dll` export, named exactly as the library names it.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Export {
            $($name,)*
        }

        impl Export {
            /// Every export, in table order.
            pub const ALL: &'static [Export] = &[$(Export::$name,)*];

            pub const COUNT: usize = Export::ALL.len();

            /// The position of the export in [`Export::ALL`].
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// The native symbol name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Export::$name => stringify!($name),)*
                }
            }

            #[must_use]
            pub fn descriptor(self) -> &'static Descriptor {
                &DESCRIPTORS[self.index()]
            }

            /// Looks an export up by its native name. Matching is exact,
            /// including case.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Export> {
                match name {
                    $(stringify!($name) => Some(Export::$name),)*
                    _ => None,
                }
            }

            pub(crate) fn symbol_name(self) -> &'static CStr {
                let bytes: &'static [u8] = match self {
                    $(Export::$name => concat!(stringify!($name), "\0").as_bytes(),)*
                };

                // SAFETY: Every name is an identifier followed by a single nul.
                unsafe { CStr::from_bytes_with_nul_unchecked(bytes) }
            }
        }

        impl std::fmt::Display for Export {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        /// Signatures of every export, indexed by [`Export::index`].
        pub static DESCRIPTORS: [Descriptor; Export::COUNT] = [$(
            Descriptor {
                name: stringify!($name),
                params: &[$(<$ty as NativeType>::KIND),*],
                ret: <$ret as NativeType>::KIND,
            },
        )*];

        impl<L: Loader> Gdi32<L> {
            $(
                $(#[$meta])*
                #[doc = concat!("Calls `", stringify!($name), "`, resolving it on first use.")]
                ///
                /// Returns `Err` only if the export could not be bound. The
                /// native return value is passed through untouched.
                ///
                /// # Safety
                ///
                /// This is a direct call into native code. Arguments must
                /// satisfy the native function's contract; handles and
                /// pointers are not checked.
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) -> Result<$ret, LoadError> {
                    let symbol = self.resolve(Export::$name)?;
                    let native: unsafe extern "system" fn($($ty),*) -> $ret =
                        std::mem::transmute(symbol.address());
                    Ok(native($($arg),*))
                }
            )*
        }
    };
}

exports! {
    // Device contexts

    fn AbortDoc(hdc: HDC) -> i32;
    fn CancelDC(hdc: HDC) -> BOOL;
    fn CreateCompatibleDC(hdc: HDC) -> HDC;
    fn CreateDCA(driver: PCSTR, device: PCSTR, port: PCSTR, devmode: *const DEVMODEA) -> HDC;
    fn CreateDCW(driver: PCWSTR, device: PCWSTR, port: PCWSTR, devmode: *const DEVMODEW) -> HDC;
    fn CreateICA(driver: PCSTR, device: PCSTR, port: PCSTR, devmode: *const DEVMODEA) -> HDC;
    fn CreateICW(driver: PCWSTR, device: PCWSTR, port: PCWSTR, devmode: *const DEVMODEW) -> HDC;
    fn DeleteDC(hdc: HDC) -> BOOL;
    fn ResetDCA(hdc: HDC, devmode: *const DEVMODEA) -> HDC;
    fn ResetDCW(hdc: HDC, devmode: *const DEVMODEW) -> HDC;
    fn SaveDC(hdc: HDC) -> i32;
    fn RestoreDC(hdc: HDC, saved: i32) -> BOOL;
    fn GetDeviceCaps(hdc: HDC, index: i32) -> i32;
    fn GetDCOrgEx(hdc: HDC, point: *mut POINT) -> BOOL;
    fn GetDCBrushColor(hdc: HDC) -> COLORREF;
    fn SetDCBrushColor(hdc: HDC, color: COLORREF) -> COLORREF;
    fn GetDCPenColor(hdc: HDC) -> COLORREF;
    fn SetDCPenColor(hdc: HDC, color: COLORREF) -> COLORREF;
    fn GetDeviceGammaRamp(hdc: HDC, ramp: *mut c_void) -> BOOL;
    fn SetDeviceGammaRamp(hdc: HDC, ramp: *const c_void) -> BOOL;
    fn GdiFlush() -> BOOL;
    fn GdiGetBatchLimit() -> u32;
    fn GdiSetBatchLimit(limit: u32) -> u32;

    // Objects

    fn DeleteObject(object: HGDIOBJ) -> BOOL;
    fn EnumObjects(hdc: HDC, object_type: i32, callback: GOBJENUMPROC, lparam: LPARAM) -> i32;
    fn GetCurrentObject(hdc: HDC, object_type: u32) -> HGDIOBJ;
    fn GetObjectA(object: HANDLE, size: i32, buffer: *mut c_void) -> i32;
    fn GetObjectW(object: HANDLE, size: i32, buffer: *mut c_void) -> i32;
    fn GetObjectType(object: HGDIOBJ) -> u32;
    fn GetStockObject(index: i32) -> HGDIOBJ;
    fn SelectObject(hdc: HDC, object: HGDIOBJ) -> HGDIOBJ;
    fn UnrealizeObject(object: HGDIOBJ) -> BOOL;

    // Drawing state

    fn GetArcDirection(hdc: HDC) -> i32;
    fn SetArcDirection(hdc: HDC, direction: i32) -> i32;
    fn GetBkColor(hdc: HDC) -> COLORREF;
    fn SetBkColor(hdc: HDC, color: COLORREF) -> COLORREF;
    fn GetBkMode(hdc: HDC) -> i32;
    fn SetBkMode(hdc: HDC, mode: i32) -> i32;
    fn GetBrushOrgEx(hdc: HDC, point: *mut POINT) -> BOOL;
    fn SetBrushOrgEx(hdc: HDC, x: i32, y: i32, old: *mut POINT) -> BOOL;
    fn GetCurrentPositionEx(hdc: HDC, point: *mut POINT) -> BOOL;
    fn GetGraphicsMode(hdc: HDC) -> i32;
    fn SetGraphicsMode(hdc: HDC, mode: i32) -> i32;
    fn GetLayout(hdc: HDC) -> u32;
    fn SetLayout(hdc: HDC, layout: u32) -> u32;
    fn GetMapMode(hdc: HDC) -> i32;
    fn SetMapMode(hdc: HDC, mode: i32) -> i32;
    fn GetMiterLimit(hdc: HDC, limit: *mut f32) -> BOOL;
    fn SetMiterLimit(hdc: HDC, limit: f32, old: *mut f32) -> BOOL;
    fn GetPolyFillMode(hdc: HDC) -> i32;
    fn SetPolyFillMode(hdc: HDC, mode: i32) -> i32;
    fn GetROP2(hdc: HDC) -> i32;
    fn SetROP2(hdc: HDC, rop2: i32) -> i32;
    fn GetStretchBltMode(hdc: HDC) -> i32;
    fn SetStretchBltMode(hdc: HDC, mode: i32) -> i32;
    fn GetTextAlign(hdc: HDC) -> u32;
    fn SetTextAlign(hdc: HDC, align: u32) -> u32;
    fn GetTextColor(hdc: HDC) -> COLORREF;
    fn SetTextColor(hdc: HDC, color: COLORREF) -> COLORREF;

    // Coordinate spaces and transforms

    fn CombineTransform(out: *mut XFORM, first: *const XFORM, second: *const XFORM) -> BOOL;
    fn DPtoLP(hdc: HDC, points: *mut POINT, count: i32) -> BOOL;
    fn LPtoDP(hdc: HDC, points: *mut POINT, count: i32) -> BOOL;
    fn GetViewportExtEx(hdc: HDC, size: *mut SIZE) -> BOOL;
    fn GetViewportOrgEx(hdc: HDC, point: *mut POINT) -> BOOL;
    fn GetWindowExtEx(hdc: HDC, size: *mut SIZE) -> BOOL;
    fn GetWindowOrgEx(hdc: HDC, point: *mut POINT) -> BOOL;
    fn SetViewportExtEx(hdc: HDC, x: i32, y: i32, old: *mut SIZE) -> BOOL;
    fn SetViewportOrgEx(hdc: HDC, x: i32, y: i32, old: *mut POINT) -> BOOL;
    fn SetWindowExtEx(hdc: HDC, x: i32, y: i32, old: *mut SIZE) -> BOOL;
    fn SetWindowOrgEx(hdc: HDC, x: i32, y: i32, old: *mut POINT) -> BOOL;
    fn OffsetViewportOrgEx(hdc: HDC, x: i32, y: i32, old: *mut POINT) -> BOOL;
    fn OffsetWindowOrgEx(hdc: HDC, x: i32, y: i32, old: *mut POINT) -> BOOL;
    fn ScaleViewportExtEx(hdc: HDC, xn: i32, xd: i32, yn: i32, yd: i32, old: *mut SIZE) -> BOOL;
    fn ScaleWindowExtEx(hdc: HDC, xn: i32, xd: i32, yn: i32, yd: i32, old: *mut SIZE) -> BOOL;
    fn GetWorldTransform(hdc: HDC, xform: *mut XFORM) -> BOOL;
    fn SetWorldTransform(hdc: HDC, xform: *const XFORM) -> BOOL;
    fn ModifyWorldTransform(hdc: HDC, xform: *const XFORM, mode: u32) -> BOOL;

    // Lines and curves

    fn AngleArc(hdc: HDC, x: i32, y: i32, radius: u32, start: f32, sweep: f32) -> BOOL;
    fn Arc(hdc: HDC, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, x4: i32, y4: i32) -> BOOL;
    fn ArcTo(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32, xr1: i32, yr1: i32, xr2: i32, yr2: i32) -> BOOL;
    fn LineDDA(x_start: i32, y_start: i32, x_end: i32, y_end: i32, callback: LINEDDAPROC, data: LPARAM) -> BOOL;
    fn LineTo(hdc: HDC, x: i32, y: i32) -> BOOL;
    fn MoveToEx(hdc: HDC, x: i32, y: i32, old: *mut POINT) -> BOOL;
    fn PolyBezier(hdc: HDC, points: *const POINT, count: u32) -> BOOL;
    fn PolyBezierTo(hdc: HDC, points: *const POINT, count: u32) -> BOOL;
    fn PolyDraw(hdc: HDC, points: *const POINT, types: *const u8, count: i32) -> BOOL;
    fn Polyline(hdc: HDC, points: *const POINT, count: i32) -> BOOL;
    fn PolylineTo(hdc: HDC, points: *const POINT, count: u32) -> BOOL;
    fn PolyPolyline(hdc: HDC, points: *const POINT, counts: *const u32, polylines: u32) -> BOOL;

    // Filled shapes

    fn Chord(hdc: HDC, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, x4: i32, y4: i32) -> BOOL;
    fn Ellipse(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32) -> BOOL;
    fn Pie(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32, xr1: i32, yr1: i32, xr2: i32, yr2: i32) -> BOOL;
    fn Polygon(hdc: HDC, points: *const POINT, count: i32) -> BOOL;
    fn PolyPolygon(hdc: HDC, points: *const POINT, counts: *const i32, polygons: i32) -> BOOL;
    fn Rectangle(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32) -> BOOL;
    fn RoundRect(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32, width: i32, height: i32) -> BOOL;

    // Pixels and fills

    fn ExtFloodFill(hdc: HDC, x: i32, y: i32, color: COLORREF, fill_type: u32) -> BOOL;
    fn FloodFill(hdc: HDC, x: i32, y: i32, color: COLORREF) -> BOOL;
    fn GdiGradientFill(hdc: HDC, vertices: *const TRIVERTEX, vertex_count: u32, mesh: *const c_void, mesh_count: u32, mode: u32) -> BOOL;
    fn GetPixel(hdc: HDC, x: i32, y: i32) -> COLORREF;
    fn SetPixel(hdc: HDC, x: i32, y: i32, color: COLORREF) -> COLORREF;
    fn SetPixelV(hdc: HDC, x: i32, y: i32, color: COLORREF) -> BOOL;

    // Bitmaps and block transfers

    fn BitBlt(hdc: HDC, x: i32, y: i32, cx: i32, cy: i32, src: HDC, x1: i32, y1: i32, rop: u32) -> BOOL;
    fn CreateBitmap(width: i32, height: i32, planes: u32, bit_count: u32, bits: *const c_void) -> HBITMAP;
    fn CreateBitmapIndirect(bitmap: *const BITMAP) -> HBITMAP;
    fn CreateCompatibleBitmap(hdc: HDC, cx: i32, cy: i32) -> HBITMAP;
    fn CreateDIBitmap(hdc: HDC, header: *const BITMAPINFOHEADER, init: u32, bits: *const c_void, info: *const BITMAPINFO, usage: u32) -> HBITMAP;
    fn CreateDIBSection(hdc: HDC, info: *const BITMAPINFO, usage: u32, bits: *mut *mut c_void, section: HANDLE, offset: u32) -> HBITMAP;
    fn CreateDiscardableBitmap(hdc: HDC, cx: i32, cy: i32) -> HBITMAP;
    fn GdiAlphaBlend(dst: HDC, x_dst: i32, y_dst: i32, w_dst: i32, h_dst: i32, src: HDC, x_src: i32, y_src: i32, w_src: i32, h_src: i32, blend: BLENDFUNCTION) -> BOOL;
    fn GdiTransparentBlt(dst: HDC, x_dst: i32, y_dst: i32, w_dst: i32, h_dst: i32, src: HDC, x_src: i32, y_src: i32, w_src: i32, h_src: i32, transparent: u32) -> BOOL;
    fn GetBitmapBits(bitmap: HBITMAP, size: i32, bits: *mut c_void) -> i32;
    fn SetBitmapBits(bitmap: HBITMAP, size: u32, bits: *const c_void) -> i32;
    fn GetBitmapDimensionEx(bitmap: HBITMAP, size: *mut SIZE) -> BOOL;
    fn SetBitmapDimensionEx(bitmap: HBITMAP, width: i32, height: i32, old: *mut SIZE) -> BOOL;
    fn GetDIBColorTable(hdc: HDC, start: u32, entries: u32, colors: *mut RGBQUAD) -> u32;
    fn SetDIBColorTable(hdc: HDC, start: u32, entries: u32, colors: *const RGBQUAD) -> u32;
    fn GetDIBits(hdc: HDC, bitmap: HBITMAP, start: u32, lines: u32, bits: *mut c_void, info: *mut BITMAPINFO, usage: u32) -> i32;
    fn SetDIBits(hdc: HDC, bitmap: HBITMAP, start: u32, lines: u32, bits: *const c_void, info: *const BITMAPINFO, usage: u32) -> i32;
    fn SetDIBitsToDevice(hdc: HDC, x_dst: i32, y_dst: i32, w: u32, h: u32, x_src: i32, y_src: i32, start: u32, lines: u32, bits: *const c_void, info: *const BITMAPINFO, usage: u32) -> i32;
    fn MaskBlt(dst: HDC, x_dst: i32, y_dst: i32, width: i32, height: i32, src: HDC, x_src: i32, y_src: i32, mask: HBITMAP, x_mask: i32, y_mask: i32, rop: u32) -> BOOL;
    fn PatBlt(hdc: HDC, x: i32, y: i32, w: i32, h: i32, rop: u32) -> BOOL;
    fn PlgBlt(dst: HDC, points: *const POINT, src: HDC, x_src: i32, y_src: i32, width: i32, height: i32, mask: HBITMAP, x_mask: i32, y_mask: i32) -> BOOL;
    fn StretchBlt(dst: HDC, x_dst: i32, y_dst: i32, w_dst: i32, h_dst: i32, src: HDC, x_src: i32, y_src: i32, w_src: i32, h_src: i32, rop: u32) -> BOOL;
    fn StretchDIBits(hdc: HDC, x_dst: i32, y_dst: i32, w_dst: i32, h_dst: i32, x_src: i32, y_src: i32, w_src: i32, h_src: i32, bits: *const c_void, info: *const BITMAPINFO, usage: u32, rop: u32) -> i32;

    // Brushes and pens

    fn CreateBrushIndirect(brush: *const LOGBRUSH) -> HBRUSH;
    fn CreateDIBPatternBrush(packed: HANDLE, usage: u32) -> HBRUSH;
    fn CreateDIBPatternBrushPt(packed: *const c_void, usage: u32) -> HBRUSH;
    fn CreateHatchBrush(hatch: i32, color: COLORREF) -> HBRUSH;
    fn CreatePatternBrush(bitmap: HBITMAP) -> HBRUSH;
    fn CreateSolidBrush(color: COLORREF) -> HBRUSH;
    fn CreatePen(style: i32, width: i32, color: COLORREF) -> HPEN;
    fn CreatePenIndirect(pen: *const LOGPEN) -> HPEN;
    fn ExtCreatePen(style: u32, width: u32, brush: *const LOGBRUSH, style_count: u32, styles: *const u32) -> HPEN;

    // Regions

    fn CombineRgn(dst: HRGN, src1: HRGN, src2: HRGN, mode: i32) -> i32;
    fn CreateEllipticRgn(x1: i32, y1: i32, x2: i32, y2: i32) -> HRGN;
    fn CreateEllipticRgnIndirect(rect: *const RECT) -> HRGN;
    fn CreatePolygonRgn(points: *const POINT, count: i32, mode: i32) -> HRGN;
    fn CreatePolyPolygonRgn(points: *const POINT, counts: *const i32, polygons: i32, mode: i32) -> HRGN;
    fn CreateRectRgn(x1: i32, y1: i32, x2: i32, y2: i32) -> HRGN;
    fn CreateRectRgnIndirect(rect: *const RECT) -> HRGN;
    fn CreateRoundRectRgn(x1: i32, y1: i32, x2: i32, y2: i32, w: i32, h: i32) -> HRGN;
    fn EqualRgn(first: HRGN, second: HRGN) -> BOOL;
    fn ExtCreateRegion(xform: *const XFORM, count: u32, data: *const RGNDATA) -> HRGN;
    fn FillRgn(hdc: HDC, region: HRGN, brush: HBRUSH) -> BOOL;
    fn FrameRgn(hdc: HDC, region: HRGN, brush: HBRUSH, w: i32, h: i32) -> BOOL;
    fn GetRegionData(region: HRGN, count: u32, data: *mut RGNDATA) -> u32;
    fn GetRgnBox(region: HRGN, rect: *mut RECT) -> i32;
    fn InvertRgn(hdc: HDC, region: HRGN) -> BOOL;
    fn OffsetRgn(region: HRGN, x: i32, y: i32) -> i32;
    fn PaintRgn(hdc: HDC, region: HRGN) -> BOOL;
    fn PtInRegion(region: HRGN, x: i32, y: i32) -> BOOL;
    fn RectInRegion(region: HRGN, rect: *const RECT) -> BOOL;
    fn SetRectRgn(region: HRGN, left: i32, top: i32, right: i32, bottom: i32) -> BOOL;

    // Clipping

    fn ExcludeClipRect(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32) -> i32;
    fn ExtSelectClipRgn(hdc: HDC, region: HRGN, mode: i32) -> i32;
    fn GetBoundsRect(hdc: HDC, rect: *mut RECT, flags: u32) -> u32;
    fn SetBoundsRect(hdc: HDC, rect: *const RECT, flags: u32) -> u32;
    fn GetClipBox(hdc: HDC, rect: *mut RECT) -> i32;
    fn GetClipRgn(hdc: HDC, region: HRGN) -> i32;
    fn GetMetaRgn(hdc: HDC, region: HRGN) -> i32;
    fn SetMetaRgn(hdc: HDC) -> i32;
    fn GetRandomRgn(hdc: HDC, region: HRGN, which: i32) -> i32;
    fn IntersectClipRect(hdc: HDC, left: i32, top: i32, right: i32, bottom: i32) -> i32;
    fn OffsetClipRgn(hdc: HDC, x: i32, y: i32) -> i32;
    fn PtVisible(hdc: HDC, x: i32, y: i32) -> BOOL;
    fn RectVisible(hdc: HDC, rect: *const RECT) -> BOOL;
    fn SelectClipPath(hdc: HDC, mode: i32) -> BOOL;
    fn SelectClipRgn(hdc: HDC, region: HRGN) -> i32;

    // Paths

    fn AbortPath(hdc: HDC) -> BOOL;
    fn BeginPath(hdc: HDC) -> BOOL;
    fn CloseFigure(hdc: HDC) -> BOOL;
    fn EndPath(hdc: HDC) -> BOOL;
    fn FillPath(hdc: HDC) -> BOOL;
    fn FlattenPath(hdc: HDC) -> BOOL;
    fn GetPath(hdc: HDC, points: *mut POINT, types: *mut u8, count: i32) -> i32;
    fn PathToRegion(hdc: HDC) -> HRGN;
    fn StrokeAndFillPath(hdc: HDC) -> BOOL;
    fn StrokePath(hdc: HDC) -> BOOL;
    fn WidenPath(hdc: HDC) -> BOOL;

    // Font resources

    fn AddFontMemResourceEx(file: *mut c_void, size: u32, reserved: *mut c_void, fonts: *mut u32) -> HANDLE;
    fn AddFontResourceA(file: PCSTR) -> i32;
    fn AddFontResourceW(file: PCWSTR) -> i32;
    fn AddFontResourceExA(file: PCSTR, flags: u32, reserved: *mut c_void) -> i32;
    fn AddFontResourceExW(file: PCWSTR, flags: u32, reserved: *mut c_void) -> i32;
    fn CreateScalableFontResourceA(hidden: u32, font: PCSTR, file: PCSTR, path: PCSTR) -> BOOL;
    fn CreateScalableFontResourceW(hidden: u32, font: PCWSTR, file: PCWSTR, path: PCWSTR) -> BOOL;
    fn RemoveFontMemResourceEx(handle: HANDLE) -> BOOL;
    fn RemoveFontResourceA(file: PCSTR) -> BOOL;
    fn RemoveFontResourceW(file: PCWSTR) -> BOOL;
    fn RemoveFontResourceExA(file: PCSTR, flags: u32, reserved: *mut c_void) -> BOOL;
    fn RemoveFontResourceExW(file: PCWSTR, flags: u32, reserved: *mut c_void) -> BOOL;

    // Fonts

    fn CreateFontA(height: i32, width: i32, escapement: i32, orientation: i32, weight: i32, italic: u32, underline: u32, strike_out: u32, charset: u32, out_precision: u32, clip_precision: u32, quality: u32, pitch_and_family: u32, face: PCSTR) -> HFONT;
    fn CreateFontW(height: i32, width: i32, escapement: i32, orientation: i32, weight: i32, italic: u32, underline: u32, strike_out: u32, charset: u32, out_precision: u32, clip_precision: u32, quality: u32, pitch_and_family: u32, face: PCWSTR) -> HFONT;
    fn CreateFontIndirectA(font: *const LOGFONTA) -> HFONT;
    fn CreateFontIndirectW(font: *const LOGFONTW) -> HFONT;
    fn CreateFontIndirectExA(font: *const ENUMLOGFONTEXDVA) -> HFONT;
    fn CreateFontIndirectExW(font: *const ENUMLOGFONTEXDVW) -> HFONT;
    fn EnumFontFamiliesA(hdc: HDC, family: PCSTR, callback: FONTENUMPROCA, lparam: LPARAM) -> i32;
    fn EnumFontFamiliesW(hdc: HDC, family: PCWSTR, callback: FONTENUMPROCW, lparam: LPARAM) -> i32;
    fn EnumFontFamiliesExA(hdc: HDC, font: *mut LOGFONTA, callback: FONTENUMPROCA, lparam: LPARAM, flags: u32) -> i32;
    fn EnumFontFamiliesExW(hdc: HDC, font: *mut LOGFONTW, callback: FONTENUMPROCW, lparam: LPARAM, flags: u32) -> i32;
    fn EnumFontsA(hdc: HDC, face: PCSTR, callback: FONTENUMPROCA, lparam: LPARAM) -> i32;
    fn EnumFontsW(hdc: HDC, face: PCWSTR, callback: FONTENUMPROCW, lparam: LPARAM) -> i32;
    fn GetAspectRatioFilterEx(hdc: HDC, size: *mut SIZE) -> BOOL;
    fn GetFontData(hdc: HDC, table: u32, offset: u32, buffer: *mut c_void, size: u32) -> u32;
    fn GetFontLanguageInfo(hdc: HDC) -> u32;
    fn GetFontUnicodeRanges(hdc: HDC, glyphs: *mut GLYPHSET) -> u32;
    fn GetGlyphIndicesA(hdc: HDC, string: PCSTR, count: i32, indices: *mut u16, flags: u32) -> u32;
    fn GetGlyphIndicesW(hdc: HDC, string: PCWSTR, count: i32, indices: *mut u16, flags: u32) -> u32;
    fn GetGlyphOutlineA(hdc: HDC, ch: u32, format: u32, metrics: *mut GLYPHMETRICS, size: u32, buffer: *mut c_void, matrix: *const MAT2) -> u32;
    fn GetGlyphOutlineW(hdc: HDC, ch: u32, format: u32, metrics: *mut GLYPHMETRICS, size: u32, buffer: *mut c_void, matrix: *const MAT2) -> u32;
    fn GetKerningPairsA(hdc: HDC, pairs: u32, buffer: *mut KERNINGPAIR) -> u32;
    fn GetKerningPairsW(hdc: HDC, pairs: u32, buffer: *mut KERNINGPAIR) -> u32;
    fn GetOutlineTextMetricsA(hdc: HDC, size: u32, metrics: *mut OUTLINETEXTMETRICA) -> u32;
    fn GetOutlineTextMetricsW(hdc: HDC, size: u32, metrics: *mut OUTLINETEXTMETRICW) -> u32;
    fn GetRasterizerCaps(status: *mut RASTERIZER_STATUS, size: u32) -> BOOL;
    fn GetTextFaceA(hdc: HDC, count: i32, name: PSTR) -> i32;
    fn GetTextFaceW(hdc: HDC, count: i32, name: PWSTR) -> i32;
    fn GetTextMetricsA(hdc: HDC, metrics: *mut TEXTMETRICA) -> BOOL;
    fn GetTextMetricsW(hdc: HDC, metrics: *mut TEXTMETRICW) -> BOOL;
    fn SetMapperFlags(hdc: HDC, flags: u32) -> u32;
    fn TranslateCharsetInfo(src: *mut u32, info: *mut CHARSETINFO, flags: u32) -> BOOL;

    // Text metrics and layout

    fn GetCharABCWidthsA(hdc: HDC, first: u32, last: u32, widths: *mut ABC) -> BOOL;
    fn GetCharABCWidthsW(hdc: HDC, first: u32, last: u32, widths: *mut ABC) -> BOOL;
    fn GetCharABCWidthsFloatA(hdc: HDC, first: u32, last: u32, widths: *mut ABCFLOAT) -> BOOL;
    fn GetCharABCWidthsFloatW(hdc: HDC, first: u32, last: u32, widths: *mut ABCFLOAT) -> BOOL;
    fn GetCharABCWidthsI(hdc: HDC, first: u32, count: u32, glyphs: *const u16, widths: *mut ABC) -> BOOL;
    fn GetCharacterPlacementA(hdc: HDC, string: PCSTR, count: i32, max_extent: i32, results: *mut GCP_RESULTSA, flags: u32) -> u32;
    fn GetCharacterPlacementW(hdc: HDC, string: PCWSTR, count: i32, max_extent: i32, results: *mut GCP_RESULTSW, flags: u32) -> u32;
    fn GetCharWidth32A(hdc: HDC, first: u32, last: u32, widths: *mut i32) -> BOOL;
    fn GetCharWidth32W(hdc: HDC, first: u32, last: u32, widths: *mut i32) -> BOOL;
    fn GetCharWidthA(hdc: HDC, first: u32, last: u32, widths: *mut i32) -> BOOL;
    fn GetCharWidthW(hdc: HDC, first: u32, last: u32, widths: *mut i32) -> BOOL;
    fn GetCharWidthFloatA(hdc: HDC, first: u32, last: u32, widths: *mut f32) -> BOOL;
    fn GetCharWidthFloatW(hdc: HDC, first: u32, last: u32, widths: *mut f32) -> BOOL;
    fn GetCharWidthI(hdc: HDC, first: u32, count: u32, glyphs: *const u16, widths: *mut i32) -> BOOL;
    fn GetTextCharacterExtra(hdc: HDC) -> i32;
    fn SetTextCharacterExtra(hdc: HDC, extra: i32) -> i32;
    fn GetTextCharset(hdc: HDC) -> i32;
    fn GetTextCharsetInfo(hdc: HDC, signature: *mut FONTSIGNATURE, flags: u32) -> i32;
    fn GetTextExtentExPointA(hdc: HDC, string: PCSTR, count: i32, max_extent: i32, fit: *mut i32, dx: *mut i32, size: *mut SIZE) -> BOOL;
    fn GetTextExtentExPointW(hdc: HDC, string: PCWSTR, count: i32, max_extent: i32, fit: *mut i32, dx: *mut i32, size: *mut SIZE) -> BOOL;
    fn GetTextExtentExPointI(hdc: HDC, glyphs: *const u16, count: i32, max_extent: i32, fit: *mut i32, dx: *mut i32, size: *mut SIZE) -> BOOL;
    fn GetTextExtentPointA(hdc: HDC, string: PCSTR, count: i32, size: *mut SIZE) -> BOOL;
    fn GetTextExtentPointW(hdc: HDC, string: PCWSTR, count: i32, size: *mut SIZE) -> BOOL;
    fn GetTextExtentPoint32A(hdc: HDC, string: PCSTR, count: i32, size: *mut SIZE) -> BOOL;
    fn GetTextExtentPoint32W(hdc: HDC, string: PCWSTR, count: i32, size: *mut SIZE) -> BOOL;
    fn GetTextExtentPointI(hdc: HDC, glyphs: *const u16, count: i32, size: *mut SIZE) -> BOOL;
    fn SetTextJustification(hdc: HDC, extra: i32, count: i32) -> BOOL;

    // Text output

    fn ExtTextOutA(hdc: HDC, x: i32, y: i32, options: u32, rect: *const RECT, string: PCSTR, count: u32, dx: *const i32) -> BOOL;
    fn ExtTextOutW(hdc: HDC, x: i32, y: i32, options: u32, rect: *const RECT, string: PCWSTR, count: u32, dx: *const i32) -> BOOL;
    fn PolyTextOutA(hdc: HDC, texts: *const POLYTEXTA, count: i32) -> BOOL;
    fn PolyTextOutW(hdc: HDC, texts: *const POLYTEXTW, count: i32) -> BOOL;
    fn TextOutA(hdc: HDC, x: i32, y: i32, string: PCSTR, count: i32) -> BOOL;
    fn TextOutW(hdc: HDC, x: i32, y: i32, string: PCWSTR, count: i32) -> BOOL;

    // Palettes

    fn AnimatePalette(palette: HPALETTE, start: u32, entries: u32, colors: *const PALETTEENTRY) -> BOOL;
    fn CreateHalftonePalette(hdc: HDC) -> HPALETTE;
    fn CreatePalette(palette: *const LOGPALETTE) -> HPALETTE;
    fn GetNearestColor(hdc: HDC, color: COLORREF) -> COLORREF;
    fn GetNearestPaletteIndex(palette: HPALETTE, color: COLORREF) -> u32;
    fn GetPaletteEntries(palette: HPALETTE, start: u32, entries: u32, colors: *mut PALETTEENTRY) -> u32;
    fn SetPaletteEntries(palette: HPALETTE, start: u32, entries: u32, colors: *const PALETTEENTRY) -> u32;
    fn GetSystemPaletteEntries(hdc: HDC, start: u32, entries: u32, colors: *mut PALETTEENTRY) -> u32;
    fn GetSystemPaletteUse(hdc: HDC) -> u32;
    fn SetSystemPaletteUse(hdc: HDC, usage: u32) -> u32;
    fn RealizePalette(hdc: HDC) -> u32;
    fn ResizePalette(palette: HPALETTE, entries: u32) -> BOOL;
    fn SelectPalette(hdc: HDC, palette: HPALETTE, force_background: BOOL) -> HPALETTE;
    fn UpdateColors(hdc: HDC) -> BOOL;

    // Colour management

    fn CheckColorsInGamut(hdc: HDC, triples: *const c_void, buffer: *mut c_void, count: u32) -> BOOL;
    fn ColorCorrectPalette(hdc: HDC, palette: HPALETTE, first: u32, count: u32) -> BOOL;
    fn ColorMatchToTarget(hdc: HDC, target: HDC, action: u32) -> BOOL;
    fn CreateColorSpaceA(color_space: *const LOGCOLORSPACEA) -> HCOLORSPACE;
    fn CreateColorSpaceW(color_space: *const LOGCOLORSPACEW) -> HCOLORSPACE;
    fn DeleteColorSpace(color_space: HCOLORSPACE) -> BOOL;
    fn EnumICMProfilesA(hdc: HDC, callback: ICMENUMPROCA, lparam: LPARAM) -> i32;
    fn EnumICMProfilesW(hdc: HDC, callback: ICMENUMPROCW, lparam: LPARAM) -> i32;
    fn GetColorAdjustment(hdc: HDC, adjustment: *mut COLORADJUSTMENT) -> BOOL;
    fn SetColorAdjustment(hdc: HDC, adjustment: *const COLORADJUSTMENT) -> BOOL;
    fn GetColorSpace(hdc: HDC) -> HCOLORSPACE;
    fn SetColorSpace(hdc: HDC, color_space: HCOLORSPACE) -> HCOLORSPACE;
    fn GetICMProfileA(hdc: HDC, size: *mut u32, file: PSTR) -> BOOL;
    fn GetICMProfileW(hdc: HDC, size: *mut u32, file: PWSTR) -> BOOL;
    fn SetICMProfileA(hdc: HDC, file: PSTR) -> BOOL;
    fn SetICMProfileW(hdc: HDC, file: PWSTR) -> BOOL;
    fn GetLogColorSpaceA(color_space: HCOLORSPACE, buffer: *mut LOGCOLORSPACEA, size: u32) -> BOOL;
    fn GetLogColorSpaceW(color_space: HCOLORSPACE, buffer: *mut LOGCOLORSPACEW, size: u32) -> BOOL;
    fn SetICMMode(hdc: HDC, mode: i32) -> i32;
    fn UpdateICMRegKeyA(reserved: u32, cmid: PSTR, file: PSTR, command: u32) -> BOOL;
    fn UpdateICMRegKeyW(reserved: u32, cmid: PWSTR, file: PWSTR, command: u32) -> BOOL;

    // Enhanced metafiles

    fn CloseEnhMetaFile(hdc: HDC) -> HENHMETAFILE;
    fn CopyEnhMetaFileA(metafile: HENHMETAFILE, file: PCSTR) -> HENHMETAFILE;
    fn CopyEnhMetaFileW(metafile: HENHMETAFILE, file: PCWSTR) -> HENHMETAFILE;
    fn CreateEnhMetaFileA(hdc: HDC, file: PCSTR, rect: *const RECT, description: PCSTR) -> HDC;
    fn CreateEnhMetaFileW(hdc: HDC, file: PCWSTR, rect: *const RECT, description: PCWSTR) -> HDC;
    fn DeleteEnhMetaFile(metafile: HENHMETAFILE) -> BOOL;
    fn EnumEnhMetaFile(hdc: HDC, metafile: HENHMETAFILE, callback: ENHMFENUMPROC, param: *const c_void, rect: *const RECT) -> BOOL;
    fn GdiComment(hdc: HDC, size: u32, data: *const u8) -> BOOL;
    fn GetEnhMetaFileA(file: PCSTR) -> HENHMETAFILE;
    fn GetEnhMetaFileW(file: PCWSTR) -> HENHMETAFILE;
    fn GetEnhMetaFileBits(metafile: HENHMETAFILE, size: u32, data: *mut u8) -> u32;
    fn SetEnhMetaFileBits(size: u32, data: *const u8) -> HENHMETAFILE;
    fn GetEnhMetaFileDescriptionA(metafile: HENHMETAFILE, size: u32, description: PSTR) -> u32;
    fn GetEnhMetaFileDescriptionW(metafile: HENHMETAFILE, size: u32, description: PWSTR) -> u32;
    fn GetEnhMetaFileHeader(metafile: HENHMETAFILE, size: u32, header: *mut ENHMETAHEADER) -> u32;
    fn GetEnhMetaFilePaletteEntries(metafile: HENHMETAFILE, entries: u32, colors: *mut PALETTEENTRY) -> u32;
    fn GetEnhMetaFilePixelFormat(metafile: HENHMETAFILE, size: u32, format: *mut PIXELFORMATDESCRIPTOR) -> u32;
    fn GetWinMetaFileBits(metafile: HENHMETAFILE, size: u32, data: *mut u8, map_mode: i32, reference: HDC) -> u32;
    fn SetWinMetaFileBits(size: u32, data: *const u8, reference: HDC, picture: *const METAFILEPICT) -> HENHMETAFILE;
    fn PlayEnhMetaFile(hdc: HDC, metafile: HENHMETAFILE, rect: *const RECT) -> BOOL;
    fn PlayEnhMetaFileRecord(hdc: HDC, handles: *const HANDLETABLE, record: *const ENHMETARECORD, count: u32) -> BOOL;

    // Windows metafiles

    fn CloseMetaFile(hdc: HDC) -> HMETAFILE;
    fn CopyMetaFileA(metafile: HMETAFILE, file: PCSTR) -> HMETAFILE;
    fn CopyMetaFileW(metafile: HMETAFILE, file: PCWSTR) -> HMETAFILE;
    fn CreateMetaFileA(file: PCSTR) -> HDC;
    fn CreateMetaFileW(file: PCWSTR) -> HDC;
    fn DeleteMetaFile(metafile: HMETAFILE) -> BOOL;
    fn EnumMetaFile(hdc: HDC, metafile: HMETAFILE, callback: MFENUMPROC, lparam: LPARAM) -> BOOL;
    fn GetMetaFileA(file: PCSTR) -> HMETAFILE;
    fn GetMetaFileW(file: PCWSTR) -> HMETAFILE;
    fn GetMetaFileBitsEx(metafile: HMETAFILE, size: u32, data: *mut c_void) -> u32;
    fn SetMetaFileBitsEx(size: u32, data: *const u8) -> HMETAFILE;
    fn PlayMetaFile(hdc: HDC, metafile: HMETAFILE) -> BOOL;
    fn PlayMetaFileRecord(hdc: HDC, handles: *const HANDLETABLE, record: *const METARECORD, count: u32) -> BOOL;

    // Printing

    fn DrawEscape(hdc: HDC, escape: i32, size: i32, input: PCSTR) -> i32;
    fn EndDoc(hdc: HDC) -> i32;
    fn EndPage(hdc: HDC) -> i32;
    fn Escape(hdc: HDC, escape: i32, size: i32, input: PCSTR, output: *mut c_void) -> i32;
    fn ExtEscape(hdc: HDC, escape: i32, input_size: i32, input: PCSTR, output_size: i32, output: PSTR) -> i32;
    fn SetAbortProc(hdc: HDC, callback: ABORTPROC) -> i32;
    fn StartDocA(hdc: HDC, info: *const DOCINFOA) -> i32;
    fn StartDocW(hdc: HDC, info: *const DOCINFOW) -> i32;
    fn StartPage(hdc: HDC) -> i32;

    // Pixel formats

    fn ChoosePixelFormat(hdc: HDC, descriptor: *const PIXELFORMATDESCRIPTOR) -> i32;
    fn DescribePixelFormat(hdc: HDC, format: i32, size: u32, descriptor: *mut PIXELFORMATDESCRIPTOR) -> i32;
    fn GetPixelFormat(hdc: HDC) -> i32;
    fn SetPixelFormat(hdc: HDC, format: i32, descriptor: *const PIXELFORMATDESCRIPTOR) -> BOOL;
    fn SwapBuffers(hdc: HDC) -> BOOL;

    // Display adapter thunks

    fn D3DKMTCloseAdapter(args: *const D3DKMT_ARGS) -> NTSTATUS;
    fn D3DKMTEnumAdapters2(args: *mut D3DKMT_ARGS) -> NTSTATUS;
    fn D3DKMTGetDisplayModeList(args: *mut D3DKMT_ARGS) -> NTSTATUS;
    fn D3DKMTOpenAdapterFromGdiDisplayName(args: *mut D3DKMT_ARGS) -> NTSTATUS;
    fn D3DKMTOpenAdapterFromHdc(args: *mut D3DKMT_ARGS) -> NTSTATUS;
    fn D3DKMTOpenAdapterFromLuid(args: *mut D3DKMT_ARGS) -> NTSTATUS;
    fn D3DKMTQueryAdapterInfo(args: *const D3DKMT_ARGS) -> NTSTATUS;
    fn D3DKMTWaitForVerticalBlankEvent(args: *const D3DKMT_ARGS) -> NTSTATUS;
}
