use std::collections::HashMap;

use crate::domain::{Entry, EntryId};

use super::{CatalogSource, LoadError};

/// The loaded catalog: entries in ascending id order plus an id index.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: Vec<Entry>,
    index: HashMap<EntryId, usize>,
}

impl CatalogStore {
    /// Fetch every entry from `source` and index them.
    pub async fn load<S: CatalogSource>(source: &S) -> Result<Self, LoadError> {
        let entries = source.fetch().await?;
        let store = Self::from_entries(entries)?;
        tracing::info!(entries = store.len(), "catalog loaded");
        Ok(store)
    }

    pub fn from_entries(mut entries: Vec<Entry>) -> Result<Self, LoadError> {
        entries.sort_by_key(|entry| entry.id);
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id, position).is_some() {
                return Err(LoadError::DuplicateId(entry.id));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn find_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.index.get(&id).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticSource;

    fn entry(id: i64, name: &str) -> Entry {
        serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
    }

    #[test]
    fn entries_are_sorted_and_indexed() {
        let store =
            CatalogStore::from_entries(vec![entry(3, "c"), entry(1, "a"), entry(2, "b")]).unwrap();
        let ids: Vec<i64> = store.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.find_by_id(EntryId(2)).map(|e| e.name.as_str()), Some("b"));
        assert!(store.find_by_id(EntryId(9)).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = CatalogStore::from_entries(vec![entry(1, "a"), entry(1, "again")]).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(EntryId(1))));
    }

    #[tokio::test]
    async fn loads_from_static_source() {
        let source = StaticSource::new(vec![entry(2, "b"), entry(1, "a")]);
        let store = CatalogStore::load(&source).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].name, "a");
    }
}
