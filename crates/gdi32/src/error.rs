/// Failure to produce a binding for an export.
///
/// This is only ever returned when the binding itself could not be
/// established. Once a binding exists, whatever the native function returns
/// is handed back untouched, failure values included.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The native library could not be opened.
    #[error("failed to open native library `{path}`: {reason}")]
    Library { path: String, reason: String },

    /// The library was opened but does not export the requested symbol.
    #[error("native library does not export `{name}`")]
    Symbol { name: &'static str },

    /// The name is not part of the export table.
    #[error("`{name}` is not a known gdi32 export")]
    UnknownExport { name: String },
}

impl LoadError {
    /// Returns true if the failure was caused by the library itself rather
    /// than an individual export.
    #[must_use]
    pub fn is_library(&self) -> bool {
        matches!(self, Self::Library { .. })
    }
}
