//! An in-process stand-in for `gdi32.dll`.
//!
//! Every export resolves. A handful of them point at real functions below
//! that record their arguments, so forwarding can be checked end to end; the
//! rest point at `unbound`, which must never be called.

use std::{
    cell::RefCell,
    collections::HashMap,
    ffi::{c_void, CStr},
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

use parking_lot::Mutex;

use crate::{error::LoadError, loader::Loader, types::*};

thread_local! {
    static CALLS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Returns and clears the calls recorded on this thread.
pub fn take_calls() -> Vec<String> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

fn record(call: String) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

pub struct FakeLibrary;

pub struct FakeLoader {
    natives: HashMap<&'static str, usize>,
    missing: Vec<&'static str>,
    failing_opens: AtomicUsize,
    opens: AtomicUsize,
    lookups: AtomicUsize,
    opened_paths: Mutex<Vec<String>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        let natives: [(&'static str, usize); 9] = [
            ("GdiGetBatchLimit", gdi_get_batch_limit as usize),
            ("GetStockObject", get_stock_object as usize),
            ("LineTo", line_to as usize),
            ("SetPixel", set_pixel as usize),
            ("DeleteDC", delete_dc as usize),
            ("GetTextExtentPoint32W", get_text_extent_point_32_w as usize),
            ("GdiAlphaBlend", gdi_alpha_blend as usize),
            ("EnumObjects", enum_objects as usize),
            ("AngleArc", angle_arc as usize),
        ];

        Self {
            natives: natives.into_iter().collect(),
            missing: Vec::new(),
            failing_opens: AtomicUsize::new(0),
            opens: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
            opened_paths: Mutex::new(Vec::new()),
        }
    }

    /// Makes the library not export `name`.
    pub fn without(mut self, name: &'static str) -> Self {
        self.missing.push(name);
        self
    }

    /// Makes the next `count` attempts to open the library fail.
    pub fn failing_opens(self, count: usize) -> Self {
        self.failing_opens.store(count, Ordering::Relaxed);
        self
    }

    /// Number of `open` calls, successful or not.
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::Relaxed)
    }

    /// Number of symbol lookups.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn opened_paths(&self) -> Vec<String> {
        self.opened_paths.lock().clone()
    }
}

impl Loader for FakeLoader {
    type Library = FakeLibrary;

    fn open(&self, path: &str) -> Result<FakeLibrary, LoadError> {
        self.opens.fetch_add(1, Ordering::Relaxed);

        let fail = self
            .failing_opens
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok();

        if fail {
            return Err(LoadError::Library {
                path: path.to_owned(),
                reason: "the specified module could not be found".to_owned(),
            });
        }

        self.opened_paths.lock().push(path.to_owned());
        Ok(FakeLibrary)
    }

    fn lookup(&self, _library: &FakeLibrary, name: &CStr) -> Option<NonNull<c_void>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let name = name.to_str().ok()?;
        if self.missing.iter().any(|missing| *missing == name) {
            return None;
        }

        let address = self
            .natives
            .get(name)
            .copied()
            .unwrap_or(unbound as usize);

        NonNull::new(address as *mut c_void)
    }
}

unsafe extern "system" fn unbound() -> isize {
    panic!("called an export with no fake implementation")
}

unsafe extern "system" fn gdi_get_batch_limit() -> u32 {
    20
}

unsafe extern "system" fn get_stock_object(i: i32) -> HGDIOBJ {
    (0x1000 + i as isize) as HGDIOBJ
}

unsafe extern "system" fn line_to(hdc: HDC, x: i32, y: i32) -> BOOL {
    record(format!("LineTo({:#x}, {x}, {y})", hdc as usize));
    1
}

unsafe extern "system" fn set_pixel(hdc: HDC, x: i32, y: i32, color: COLORREF) -> COLORREF {
    record(format!("SetPixel({:#x}, {x}, {y}, {color:#08x})", hdc as usize));
    color
}

unsafe extern "system" fn delete_dc(hdc: HDC) -> BOOL {
    BOOL::from(!hdc.is_null())
}

unsafe extern "system" fn get_text_extent_point_32_w(
    _hdc: HDC,
    string: PCWSTR,
    c: i32,
    size: *mut SIZE,
) -> BOOL {
    let text = String::from_utf16_lossy(std::slice::from_raw_parts(string, c as usize));
    record(format!("GetTextExtentPoint32W({text:?})"));

    *size = SIZE { cx: c * 8, cy: 16 };
    1
}

#[allow(clippy::too_many_arguments)]
unsafe extern "system" fn gdi_alpha_blend(
    _dst: HDC,
    x_dst: i32,
    y_dst: i32,
    w_dst: i32,
    h_dst: i32,
    _src: HDC,
    x_src: i32,
    y_src: i32,
    w_src: i32,
    h_src: i32,
    blend: BLENDFUNCTION,
) -> BOOL {
    record(format!(
        "GdiAlphaBlend({x_dst}, {y_dst}, {w_dst}, {h_dst} <- {x_src}, {y_src}, {w_src}, {h_src}, alpha {})",
        blend.source_constant_alpha
    ));
    1
}

unsafe extern "system" fn enum_objects(
    _hdc: HDC,
    kind: i32,
    callback: GOBJENUMPROC,
    lparam: LPARAM,
) -> i32 {
    let Some(callback) = callback else {
        return 0;
    };

    let mut last = 0;
    for i in 0..3 {
        let mut object = kind * 100 + i;
        last = callback((&mut object as *mut i32).cast(), lparam);
        if last == 0 {
            break;
        }
    }
    last
}

unsafe extern "system" fn angle_arc(
    _hdc: HDC,
    x: i32,
    y: i32,
    r: u32,
    start: f32,
    sweep: f32,
) -> BOOL {
    record(format!("AngleArc({x}, {y}, {r}, {start}, {sweep})"));
    1
}
