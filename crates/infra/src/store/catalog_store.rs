use std::sync::{Arc, RwLock};

use vitrine_catalog::Catalog;

use crate::error::StoreError;

/// Serialized access to the catalog.
///
/// Readers see a consistent snapshot; each `write` closure runs alone, which
/// is the unit of atomicity for mutations (validate, then apply, under one
/// critical section).
pub trait CatalogStore: Send + Sync {
    fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> Result<R, StoreError>;
    fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> Result<R, StoreError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore,
{
    fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> Result<R, StoreError> {
        (**self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> Result<R, StoreError> {
        (**self).write(f)
    }
}

/// In-memory catalog store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Catalog>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(catalog),
        }
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> Result<R, StoreError> {
        let catalog = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&catalog))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> Result<R, StoreError> {
        let mut catalog = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::AttributeCreateInput;

    #[test]
    fn writes_are_visible_to_later_reads() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let payload = store
            .write(|c| {
                c.create_attribute(AttributeCreateInput {
                    name: "Color".to_string(),
                    values: vec![],
                })
            })
            .unwrap();
        assert!(payload.errors.is_empty());

        let names = store
            .read(|c| c.attributes().iter().map(|a| a.name().to_string()).collect::<Vec<_>>())
            .unwrap();
        assert_eq!(names, vec!["Color".to_string()]);
    }

    #[test]
    fn poisoned_lock_is_an_error_not_a_panic() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _ = poisoner.write(|c| {
                if c.attributes().is_empty() {
                    panic!("boom");
                }
            });
        })
        .join();

        assert!(matches!(store.read(|_| ()), Err(StoreError::Poisoned)));
    }
}
