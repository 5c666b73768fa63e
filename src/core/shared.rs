use std::sync::Arc;
use parking_lot::RwLock;
use crate::core::catalog::Catalog;

/// Catalog handle for multi-threaded callers.
///
/// Writes take the lock exclusively, so a reader never sees a half-applied
/// insertion; reads run concurrently with each other.
#[derive(Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        SharedCatalog {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        SharedCatalog::new(catalog)
    }
}
