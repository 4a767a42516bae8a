use std::{
    ffi::c_void,
    ptr::NonNull,
    sync::atomic::{AtomicPtr, Ordering},
};

use parking_lot::Mutex;
use smallvec::SmallVec;

use crate::{
    error::LoadError,
    exports::Export,
    loader::{Loader, SystemLoader},
    set::ExportSet,
    Config, Preload,
};

/// A resolved binding: an export permanently associated with its address in
/// the loaded library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    export: Export,
    address: NonNull<c_void>,
}

// SAFETY: The address points into a library that is never unloaded, and the
// symbol itself is never dereferenced except by calling it.
unsafe impl Send for Symbol {}
unsafe impl Sync for Symbol {}

impl Symbol {
    #[must_use]
    pub fn export(&self) -> Export {
        self.export
    }

    #[must_use]
    pub fn address(&self) -> *const c_void {
        self.address.as_ptr()
    }
}

/// The binding table for `gdi32`.
///
/// Every export starts out unresolved. The first call that needs an export
/// opens the library (once, for the whole table), looks the export up and
/// installs its address. From then on the binding is served from the table
/// with a single atomic load.
///
/// The table is an ordinary value. Share it by reference or wrap it in an
/// `Arc`; there is no hidden global.
pub struct Gdi32<L: Loader = SystemLoader> {
    loader: L,
    path: String,

    /// The opened library. Also serializes resolution, so each export is
    /// looked up at most once.
    library: Mutex<Option<L::Library>>,

    /// One slot per export; null until resolved, then fixed forever.
    slots: Box<[AtomicPtr<c_void>]>,
}

impl Gdi32<SystemLoader> {
    /// Creates a binding table for the system's `gdi32` library.
    ///
    /// Nothing is loaded unless `config.preload` asks for it.
    pub fn new(config: &Config) -> Result<Self, LoadError> {
        Self::with_loader(SystemLoader, config)
    }
}

impl<L: Loader> Gdi32<L> {
    pub fn with_loader(loader: L, config: &Config) -> Result<Self, LoadError> {
        let table = Self {
            loader,
            path: config.library.clone(),
            library: Mutex::new(None),
            slots: (0..Export::COUNT).map(|_| AtomicPtr::default()).collect(),
        };

        match &config.preload {
            Preload::None => {}
            Preload::All => {
                table.resolve_all()?;
            }
            Preload::Only(exports) => {
                table.resolve_many(exports.iter().copied())?;
            }
        }

        Ok(table)
    }

    /// The path the native library is (or will be) opened from.
    #[must_use]
    pub fn library_path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn is_resolved(&self, export: Export) -> bool {
        self.get(export).is_some()
    }

    /// Returns a snapshot of the exports that are currently resolved.
    #[must_use]
    pub fn resolved(&self) -> ExportSet {
        Export::ALL
            .iter()
            .copied()
            .filter(|export| self.is_resolved(*export))
            .collect()
    }

    /// Returns the binding for `export`, resolving it first if needed.
    ///
    /// A failed resolution leaves the table untouched, so the call may simply
    /// be retried.
    pub fn resolve(&self, export: Export) -> Result<Symbol, LoadError> {
        if let Some(symbol) = self.get(export) {
            return Ok(symbol);
        }

        let mut library = self.library.lock();

        // Another thread may have won the race while we waited for the lock.
        if let Some(symbol) = self.get(export) {
            return Ok(symbol);
        }

        let library = self.open(&mut library)?;
        let address = self.lookup(library, export)?;
        Ok(self.install(export, address))
    }

    /// Resolves an export by its native name.
    pub fn resolve_by_name(&self, name: &str) -> Result<Symbol, LoadError> {
        let export = Export::from_name(name).ok_or_else(|| LoadError::UnknownExport {
            name: name.to_owned(),
        })?;

        self.resolve(export)
    }

    /// Resolves every listed export that is not yet resolved, opening the
    /// library once for the whole batch.
    ///
    /// The batch is all or nothing: if any export is missing from the library
    /// none of the batch is installed. Returns the exports this call newly
    /// resolved.
    pub fn resolve_many<I>(&self, exports: I) -> Result<ExportSet, LoadError>
    where
        I: IntoIterator<Item = Export>,
    {
        let mut requested = ExportSet::new();
        let mut pending = SmallVec::<[Export; 16]>::new();

        for export in exports {
            if requested.insert(export) && !self.is_resolved(export) {
                pending.push(export);
            }
        }

        if pending.is_empty() {
            return Ok(ExportSet::new());
        }

        let mut library = self.library.lock();

        pending.retain(|export| !self.is_resolved(*export));
        log::trace!("resolving {} gdi32 exports in one batch", pending.len());

        if pending.is_empty() {
            return Ok(ExportSet::new());
        }

        let library = self.open(&mut library)?;

        let addresses = pending
            .iter()
            .map(|export| self.lookup(library, *export))
            .collect::<Result<SmallVec<[_; 16]>, _>>()?;

        let mut installed = ExportSet::new();
        for (export, address) in pending.into_iter().zip(addresses) {
            self.install(export, address);
            installed.insert(export);
        }

        Ok(installed)
    }

    /// Resolves the entire export table.
    pub fn resolve_all(&self) -> Result<ExportSet, LoadError> {
        self.resolve_many(Export::ALL.iter().copied())
    }

    fn get(&self, export: Export) -> Option<Symbol> {
        let address = self.slots[export.index()].load(Ordering::Acquire);
        NonNull::new(address).map(|address| Symbol { export, address })
    }

    /// Installs a freshly looked up address. Must be called with the library
    /// lock held and only for unresolved exports.
    fn install(&self, export: Export, address: NonNull<c_void>) -> Symbol {
        let slot = &self.slots[export.index()];
        debug_assert!(slot.load(Ordering::Relaxed).is_null());

        slot.store(address.as_ptr(), Ordering::Release);
        log::debug!("bound {} at {:p}", export.name(), address);

        Symbol { export, address }
    }

    fn open<'a>(&self, library: &'a mut Option<L::Library>) -> Result<&'a L::Library, LoadError> {
        let library = match library {
            Some(library) => library,
            None => {
                let opened = self.loader.open(&self.path).map_err(|e| {
                    log::warn!("{e}");
                    e
                })?;

                log::debug!("opened {}", self.path);
                library.insert(opened)
            }
        };

        Ok(library)
    }

    fn lookup(&self, library: &L::Library, export: Export) -> Result<NonNull<c_void>, LoadError> {
        self.loader
            .lookup(library, export.symbol_name())
            .ok_or_else(|| {
                let e = LoadError::Symbol {
                    name: export.name(),
                };
                log::warn!("{e}");
                e
            })
    }
}

impl<L: Loader> std::fmt::Debug for Gdi32<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gdi32")
            .field("path", &self.path)
            .field("resolved", &self.resolved().len())
            .field("exports", &Export::COUNT)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use proptest::prelude::*;

    use super::*;
    use crate::testing::FakeLoader;

    fn table(loader: FakeLoader) -> Gdi32<FakeLoader> {
        Gdi32::with_loader(loader, &Config::default()).unwrap()
    }

    #[test]
    fn starts_unresolved() {
        let gdi = table(FakeLoader::new());

        assert!(gdi.resolved().is_empty());
        assert_eq!(gdi.library_path(), "gdi32.dll");
        assert_eq!(gdi.loader.opens(), 0);
    }

    #[test]
    fn resolve_is_idempotent() {
        let gdi = table(FakeLoader::new());

        let a = gdi.resolve(Export::BitBlt).unwrap();
        let b = gdi.resolve(Export::BitBlt).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.export(), Export::BitBlt);
        assert!(gdi.is_resolved(Export::BitBlt));
        assert_eq!(gdi.loader.opens(), 1);
        assert_eq!(gdi.loader.lookups(), 1);
    }

    #[test]
    fn library_opened_once() {
        let gdi = table(FakeLoader::new());

        gdi.resolve(Export::LineTo).unwrap();
        gdi.resolve(Export::MoveToEx).unwrap();
        gdi.resolve_many([Export::Ellipse, Export::Rectangle]).unwrap();

        assert_eq!(gdi.loader.opens(), 1);
        assert_eq!(gdi.loader.lookups(), 4);
    }

    #[test]
    fn unknown_name() {
        let gdi = table(FakeLoader::new());

        assert_eq!(
            gdi.resolve_by_name("bitblt"),
            Err(LoadError::UnknownExport {
                name: "bitblt".to_owned()
            })
        );
        assert!(gdi.resolved().is_empty());
        assert_eq!(gdi.loader.opens(), 0);

        let symbol = gdi.resolve_by_name("BitBlt").unwrap();
        assert_eq!(symbol.export(), Export::BitBlt);
    }

    #[test]
    fn missing_symbol() {
        let gdi = table(FakeLoader::new().without("SwapBuffers"));

        assert_eq!(
            gdi.resolve(Export::SwapBuffers),
            Err(LoadError::Symbol {
                name: "SwapBuffers"
            })
        );
        assert!(!gdi.is_resolved(Export::SwapBuffers));

        // The library stays open; other exports still resolve.
        gdi.resolve(Export::GdiFlush).unwrap();
        assert_eq!(gdi.loader.opens(), 1);
    }

    #[test]
    fn failed_open_is_retried() {
        let gdi = table(FakeLoader::new().failing_opens(1));

        let err = gdi.resolve(Export::GdiFlush).unwrap_err();
        assert!(err.is_library());
        assert!(gdi.resolved().is_empty());

        gdi.resolve(Export::GdiFlush).unwrap();
        assert_eq!(gdi.loader.opens(), 2);
        assert_eq!(gdi.resolved().len(), 1);
    }

    #[test]
    fn failed_batch_installs_nothing() {
        let gdi = table(FakeLoader::new().without("PolyDraw"));

        let err = gdi
            .resolve_many([Export::Polygon, Export::PolyDraw, Export::Polyline])
            .unwrap_err();

        assert_eq!(err, LoadError::Symbol { name: "PolyDraw" });
        assert!(gdi.resolved().is_empty());

        let installed = gdi.resolve_many([Export::Polygon, Export::Polyline]).unwrap();
        assert_eq!(installed.len(), 2);
    }

    #[test]
    fn resolve_many_skips_resolved_and_duplicates() {
        let gdi = table(FakeLoader::new());

        let first = gdi.resolve(Export::Arc).unwrap();

        let installed = gdi
            .resolve_many([Export::Arc, Export::Pie, Export::Pie, Export::Chord])
            .unwrap();

        assert_eq!(installed.len(), 2);
        assert!(installed.contains(Export::Pie));
        assert!(installed.contains(Export::Chord));
        assert!(!installed.contains(Export::Arc));

        assert_eq!(gdi.resolve(Export::Arc).unwrap(), first);
        assert_eq!(gdi.loader.lookups(), 3);
    }

    #[test]
    fn resolve_many_with_nothing_pending() {
        let gdi = table(FakeLoader::new());

        assert!(gdi.resolve_many([]).unwrap().is_empty());
        assert_eq!(gdi.loader.opens(), 0);
    }

    #[test]
    fn resolve_all() {
        let gdi = table(FakeLoader::new());

        let installed = gdi.resolve_all().unwrap();

        assert_eq!(installed, ExportSet::all());
        assert_eq!(gdi.resolved(), ExportSet::all());
        assert_eq!(gdi.loader.opens(), 1);
        assert_eq!(gdi.loader.lookups(), Export::COUNT);

        assert!(gdi.resolve_all().unwrap().is_empty());
        assert_eq!(gdi.loader.lookups(), Export::COUNT);
    }

    #[test]
    fn preload() {
        let config = Config {
            preload: Preload::Only(vec![Export::TextOutW, Export::GetTextMetricsW]),
            ..Config::default()
        };
        let gdi = Gdi32::with_loader(FakeLoader::new(), &config).unwrap();
        assert_eq!(gdi.resolved().len(), 2);

        let config = Config {
            preload: Preload::All,
            ..Config::default()
        };
        let gdi = Gdi32::with_loader(FakeLoader::new(), &config).unwrap();
        assert_eq!(gdi.resolved(), ExportSet::all());

        let err = Gdi32::with_loader(FakeLoader::new().failing_opens(1), &config).unwrap_err();
        assert!(err.is_library());
    }

    #[test]
    fn custom_library_path() {
        let config = Config {
            library: "C:\\Windows\\System32\\gdi32.dll".to_owned(),
            ..Config::default()
        };
        let gdi = Gdi32::with_loader(FakeLoader::new(), &config).unwrap();

        gdi.resolve(Export::GdiFlush).unwrap();
        assert_eq!(gdi.loader.opened_paths(), vec![config.library.clone()]);
    }

    #[test]
    fn concurrent_resolve_converges() {
        const THREADS: usize = 8;

        let gdi = table(FakeLoader::new());
        let done = AtomicUsize::new(0);

        let symbols: Vec<Symbol> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        let symbol = gdi.resolve(Export::CreateCompatibleDC).unwrap();
                        done.fetch_add(1, Ordering::Relaxed);
                        symbol
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(done.load(Ordering::Relaxed), THREADS);
        assert!(symbols.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(gdi.loader.opens(), 1);
        assert_eq!(gdi.loader.lookups(), 1);
    }

    #[test]
    fn concurrent_batches_converge() {
        let gdi = table(FakeLoader::new());

        let installed: Vec<ExportSet> = thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| gdi.resolve_all().unwrap())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // Exactly one batch did the work.
        assert_eq!(installed.iter().map(ExportSet::len).sum::<usize>(), Export::COUNT);
        assert_eq!(gdi.loader.lookups(), Export::COUNT);
    }

    fn subset() -> impl Strategy<Value = Vec<Export>> {
        prop::collection::vec(prop::sample::select(Export::ALL), 0..64)
    }

    proptest! {
        #[test]
        fn resolve_many_is_monotonic(first in subset()) {
            let gdi = table(FakeLoader::new());

            let before = gdi.resolve_many(first.iter().copied()).unwrap();
            let expected: ExportSet = first.iter().copied().collect();
            prop_assert_eq!(before, expected);

            let snapshot: Vec<Symbol> = before.iter().map(|e| gdi.resolve(e).unwrap()).collect();

            let after = gdi.resolve_all().unwrap();
            prop_assert_eq!(after, ExportSet::all().difference(&before));
            prop_assert!(after.is_disjoint(&before));

            for symbol in snapshot {
                prop_assert_eq!(gdi.resolve(symbol.export()).unwrap(), symbol);
            }

            prop_assert_eq!(gdi.loader.lookups(), Export::COUNT);
        }

        #[test]
        fn resolution_order_is_irrelevant(exports in subset(), seed in any::<u64>()) {
            let forward = table(FakeLoader::new());
            for export in &exports {
                forward.resolve(*export).unwrap();
            }

            let mut shuffled = exports.clone();
            let len = shuffled.len();
            if len > 1 {
                shuffled.rotate_left((seed % len as u64) as usize);
                shuffled.reverse();
            }

            let batched = table(FakeLoader::new());
            batched.resolve_many(shuffled).unwrap();

            prop_assert_eq!(forward.resolved(), batched.resolved());
            for export in forward.resolved().iter() {
                prop_assert_eq!(
                    forward.resolve(export).unwrap().address(),
                    batched.resolve(export).unwrap().address()
                );
            }
        }
    }
}
