use std::{ffi::CStr, ffi::c_void, ptr::NonNull};

use crate::error::LoadError;

/// Opens a native library and looks up symbols in it.
///
/// The binding table calls `open` at most once per successful load and keeps
/// the returned library for as long as the table lives. Libraries are never
/// closed.
pub trait Loader: Send + Sync {
    type Library: Send;

    fn open(&self, path: &str) -> Result<Self::Library, LoadError>;

    /// Returns the address of the named symbol, or `None` if the library does
    /// not export it.
    fn lookup(&self, library: &Self::Library, name: &CStr) -> Option<NonNull<c_void>>;
}

/// Loads libraries through the operating system's dynamic loader.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLoader;

#[cfg(windows)]
mod system {
    use std::{ffi::CStr, ffi::c_void, ptr::NonNull};

    use windows::{
        core::{PCSTR, PCWSTR},
        Win32::{
            Foundation::HMODULE,
            System::LibraryLoader::{GetProcAddress, LoadLibraryW},
        },
    };

    use super::{Loader, SystemLoader};
    use crate::error::LoadError;

    /// A module handle returned by `LoadLibraryW`. Never passed to
    /// `FreeLibrary`.
    pub struct Module(HMODULE);

    impl Loader for SystemLoader {
        type Library = Module;

        fn open(&self, path: &str) -> Result<Module, LoadError> {
            let wide: Vec<u16> = path.encode_utf16().chain(Some(0)).collect();

            unsafe { LoadLibraryW(PCWSTR(wide.as_ptr())) }
                .map(Module)
                .map_err(|e| LoadError::Library {
                    path: path.to_owned(),
                    reason: e.to_string(),
                })
        }

        fn lookup(&self, library: &Module, name: &CStr) -> Option<NonNull<c_void>> {
            let proc = unsafe { GetProcAddress(library.0, PCSTR(name.as_ptr().cast())) }?;
            NonNull::new(proc as *mut c_void)
        }
    }
}

#[cfg(not(windows))]
impl Loader for SystemLoader {
    type Library = std::convert::Infallible;

    fn open(&self, path: &str) -> Result<Self::Library, LoadError> {
        Err(LoadError::Library {
            path: path.to_owned(),
            reason: "gdi32 is only available on Windows".to_owned(),
        })
    }

    fn lookup(&self, library: &Self::Library, _name: &CStr) -> Option<NonNull<c_void>> {
        match *library {}
    }
}
