//! The menu store and its shared handle

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::MenuError;
use crate::item::MenuItem;

/// Ordered dish collection, most recently added first.
///
/// Ids are unique at all times; `add_item` refuses a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two demonstration dishes
    pub fn seeded() -> Self {
        Self {
            items: MenuItem::seed(),
        }
    }

    pub fn add_item(&mut self, item: MenuItem) -> Result<(), MenuError> {
        if self.get(&item.id).is_some() {
            return Err(MenuError::DuplicateId(item.id));
        }
        info!(id = %item.id, name = %item.name, course = %item.course, "Adding dish");
        self.items.insert(0, item);
        Ok(())
    }

    /// Idempotent: removing an absent id is a no-op returning `None`.
    pub fn remove_item(&mut self, id: &str) -> Option<MenuItem> {
        let index = match self.items.iter().position(|item| item.id == id) {
            Some(index) => index,
            None => {
                debug!(id, "Remove ignored, dish not found");
                return None;
            }
        };
        let removed = self.items.remove(index);
        info!(id, name = %removed.name, "Removed dish");
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cloneable handle to the one menu every screen reads.
///
/// Writers go through `add_item` / `remove_item` only, each under the write
/// lock, so mutations are serialized even off the UI thread.
#[derive(Debug, Clone, Default)]
pub struct SharedMenuStore {
    inner: Arc<RwLock<MenuStore>>,
}

impl SharedMenuStore {
    pub fn new(store: MenuStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn add_item(&self, item: MenuItem) -> Result<(), MenuError> {
        self.inner.write().add_item(item)
    }

    pub fn remove_item(&self, id: &str) -> Option<MenuItem> {
        self.inner.write().remove_item(id)
    }

    /// Copy of the current ordered collection
    pub fn snapshot(&self) -> Vec<MenuItem> {
        self.inner.read().list().to_vec()
    }

    pub fn get(&self, id: &str) -> Option<MenuItem> {
        self.inner.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
