//! Lazily bound `gdi32.dll`.
//!
//! Every function in the export table is available as a method on [`Gdi32`]
//! with the native name, native argument order and native return type. The
//! first call to a method looks the symbol up; later calls go straight to the
//! cached address.
//!
//! ```no_run
//! use gdi32::{Config, Gdi32};
//!
//! let gdi = Gdi32::new(&Config::default()).unwrap();
//! let limit = unsafe { gdi.GdiGetBatchLimit() }.unwrap();
//! ```
//!
//! ## Goals
//!
//! - One binding per export, no wrapping, no validation.
//! - Resolve on first use, or up front with [`Gdi32::resolve_many`] for hot
//!   paths.
//! - Safe to share between threads. Each export is looked up at most once.
//!
//! ## Non-goals
//!
//! - Any kind of graphics abstraction. Handles are raw pointers and their
//!   lifetime is the caller's problem.
//! - Catching failures inside native code. A native failure value comes back
//!   as `Ok`, and a bad pointer crashes exactly as it would in C.

pub mod types;

mod binding;
mod error;
mod exports;
mod kind;
mod loader;
mod set;

#[cfg(test)]
mod testing;

pub use binding::{Gdi32, Symbol};
pub use error::LoadError;
pub use exports::{Export, DESCRIPTORS};
pub use kind::{Descriptor, Kind, NativeType};
pub use loader::{Loader, SystemLoader};
pub use set::ExportSet;

/// The library name used by [`Config::default`].
pub const DEFAULT_LIBRARY: &str = "gdi32.dll";

/// Which exports to resolve when the binding table is created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Preload {
    /// Resolve nothing until first use.
    #[default]
    None,
    /// Resolve the whole export table.
    All,
    /// Resolve only the listed exports.
    Only(Vec<Export>),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// The name or path passed to the system loader.
    ///
    /// A bare name is searched for the way the operating system searches for
    /// any other library. Defaults to `gdi32.dll`.
    pub library: String,

    /// Exports to resolve eagerly when the table is created.
    ///
    /// If any of them cannot be resolved, creating the table fails. Defaults to
    /// `Preload::None`.
    pub preload: Preload,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: DEFAULT_LIBRARY.to_owned(),
            preload: Preload::None,
        }
    }
}
