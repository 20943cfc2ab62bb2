//! In-memory, read-only index over the five hierarchy levels.
//!
//! Built once from a [`Dataset`] and shared behind an `Arc` for the lifetime
//! of the process. Every level keeps its entities in load order together with
//! an id index and a parent index, so child listings cost
//! O(children-at-that-parent).

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::features::locations::models::{
    County, Dataset, District, Entity, Level, Parish, SubCounty, Village,
};

/// Borrowed, level-agnostic view of a single entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl<'a, T: Entity> From<&'a T> for EntityRef<'a> {
    fn from(entity: &'a T) -> Self {
        Self {
            id: entity.id(),
            name: entity.name(),
        }
    }
}

/// Entity counts per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct HierarchyStats {
    pub districts: usize,
    pub counties: usize,
    pub subcounties: usize,
    pub parishes: usize,
    pub villages: usize,
}

impl HierarchyStats {
    pub fn all_non_empty(&self) -> bool {
        self.districts > 0
            && self.counties > 0
            && self.subcounties > 0
            && self.parishes > 0
            && self.villages > 0
    }
}

struct LevelTable<T> {
    items: Vec<T>,
    by_id: HashMap<String, usize>,
    by_parent: HashMap<String, Vec<usize>>,
    duplicates: usize,
}

impl<T: Entity> LevelTable<T> {
    fn build(items: Vec<T>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut by_parent: HashMap<String, Vec<usize>> = HashMap::new();
        let mut duplicates = 0;

        for (idx, item) in items.iter().enumerate() {
            // First occurrence wins for point lookups
            if by_id.contains_key(item.id()) {
                duplicates += 1;
            } else {
                by_id.insert(item.id().to_string(), idx);
            }

            if let Some(parent_id) = item.parent_id() {
                by_parent
                    .entry(parent_id.to_string())
                    .or_default()
                    .push(idx);
            }
        }

        Self {
            items,
            by_id,
            by_parent,
            duplicates,
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    fn find(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    fn children(&self, parent_id: &str) -> impl Iterator<Item = &T> + '_ {
        self.by_parent
            .get(parent_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.items[idx])
    }

    /// Entities whose parent id is missing from `parents`
    fn orphans<P: Entity>(&self, parents: &LevelTable<P>) -> usize {
        self.by_parent
            .iter()
            .filter(|(parent_id, _)| !parents.contains(parent_id))
            .map(|(_, children)| children.len())
            .sum()
    }
}

/// Read-only hierarchy of districts, counties, sub-counties, parishes and villages
pub struct HierarchyStore {
    districts: LevelTable<District>,
    counties: LevelTable<County>,
    subcounties: LevelTable<SubCounty>,
    parishes: LevelTable<Parish>,
    villages: LevelTable<Village>,
}

impl HierarchyStore {
    /// Index a dataset. Broken parent references and duplicate ids are
    /// tolerated and only reported in the log.
    pub fn new(dataset: Dataset) -> Self {
        let store = Self {
            districts: LevelTable::build(dataset.districts),
            counties: LevelTable::build(dataset.counties),
            subcounties: LevelTable::build(dataset.subcounties),
            parishes: LevelTable::build(dataset.parishes),
            villages: LevelTable::build(dataset.villages),
        };
        store.report_integrity();
        store
    }

    pub fn empty() -> Self {
        Self::new(Dataset::default())
    }

    fn report_integrity(&self) {
        let duplicates = [
            (Level::District, self.districts.duplicates),
            (Level::County, self.counties.duplicates),
            (Level::SubCounty, self.subcounties.duplicates),
            (Level::Parish, self.parishes.duplicates),
            (Level::Village, self.villages.duplicates),
        ];
        for (level, count) in duplicates {
            if count > 0 {
                tracing::warn!(
                    "{} duplicate {} id(s); lookups resolve to the first occurrence",
                    count,
                    level
                );
            }
        }

        let orphans = [
            (Level::County, self.counties.orphans(&self.districts)),
            (Level::SubCounty, self.subcounties.orphans(&self.counties)),
            (Level::Parish, self.parishes.orphans(&self.subcounties)),
            (Level::Village, self.villages.orphans(&self.parishes)),
        ];
        for (level, count) in orphans {
            if count > 0 {
                tracing::warn!(
                    "{} {} reference an unknown {}",
                    count,
                    level.plural(),
                    level.parent().map(Level::singular).unwrap_or("parent")
                );
            }
        }
    }

    /// All districts in load order
    pub fn list_districts(&self) -> &[District] {
        &self.districts.items
    }

    /// Entities at `level` whose parent is `parent_id`, in load order.
    ///
    /// An unknown parent and a parent without children both yield an empty
    /// vector; callers that need to tell them apart use [`Self::find_by_id`].
    pub fn children_of(&self, level: Level, parent_id: &str) -> Vec<EntityRef<'_>> {
        match level {
            Level::District => Vec::new(),
            Level::County => self.counties.children(parent_id).map(Into::into).collect(),
            Level::SubCounty => self
                .subcounties
                .children(parent_id)
                .map(Into::into)
                .collect(),
            Level::Parish => self.parishes.children(parent_id).map(Into::into).collect(),
            Level::Village => self.villages.children(parent_id).map(Into::into).collect(),
        }
    }

    pub fn find_by_id(&self, level: Level, id: &str) -> Option<EntityRef<'_>> {
        match level {
            Level::District => self.districts.find(id).map(Into::into),
            Level::County => self.counties.find(id).map(Into::into),
            Level::SubCounty => self.subcounties.find(id).map(Into::into),
            Level::Parish => self.parishes.find(id).map(Into::into),
            Level::Village => self.villages.find(id).map(Into::into),
        }
    }

    /// Case-insensitive substring match on district names; an empty query
    /// matches every district.
    pub fn search_districts_by_name(&self, query: &str) -> Vec<&District> {
        let needle = query.to_lowercase();
        self.districts
            .items
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            districts: self.districts.len(),
            counties: self.counties.len(),
            subcounties: self.subcounties.len(),
            parishes: self.parishes.len(),
            villages: self.villages.len(),
        }
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.stats().all_non_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::locale_data::embedded_dataset;

    fn county(id: &str, name: &str, district: &str) -> County {
        County {
            id: id.to_string(),
            name: name.to_string(),
            district_id: district.to_string(),
        }
    }

    fn district(id: &str, name: &str) -> District {
        District {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_children_of_returns_exact_children_in_load_order() {
        let dataset = embedded_dataset();
        let store = HierarchyStore::new(dataset.clone());

        for d in store.list_districts() {
            let expected: Vec<&str> = dataset
                .counties
                .iter()
                .filter(|c| c.district_id == d.id)
                .map(|c| c.id.as_str())
                .collect();
            let actual: Vec<&str> = store
                .children_of(Level::County, &d.id)
                .iter()
                .map(|c| c.id)
                .collect();
            assert_eq!(actual, expected, "counties of district {}", d.id);
        }
    }

    #[test]
    fn test_children_of_interleaved_parents_keeps_order() {
        let store = HierarchyStore::new(Dataset {
            districts: vec![district("1", "Kampala"), district("2", "Wakiso")],
            counties: vec![
                county("b", "Second of 1", "1"),
                county("x", "Only of 2", "2"),
                county("a", "Third of 1", "1"),
            ],
            ..Dataset::default()
        });

        let ids: Vec<&str> = store
            .children_of(Level::County, "1")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_children_of_unknown_parent_is_empty() {
        let store = HierarchyStore::new(embedded_dataset());
        assert!(store.children_of(Level::County, "999").is_empty());
        assert!(store.children_of(Level::Village, "00000000").is_empty());
        assert!(store.children_of(Level::District, "42").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let store = HierarchyStore::new(embedded_dataset());

        let gulu = store.find_by_id(Level::District, "42").unwrap();
        assert_eq!(gulu.name, "Gulu");

        let paicho = store.find_by_id(Level::County, "4204").unwrap();
        assert_eq!(paicho.name, "Paicho County");
        assert!(store
            .children_of(Level::County, "42")
            .contains(&paicho));

        assert!(store.find_by_id(Level::Parish, "nope").is_none());
    }

    #[test]
    fn test_search_districts_case_insensitive() {
        let store = HierarchyStore::new(embedded_dataset());

        let names: Vec<&str> = store
            .search_districts_by_name("GuLu")
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Gulu"]);

        let names: Vec<&str> = store
            .search_districts_by_name("ki")
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Wakiso"]);
    }

    #[test]
    fn test_search_districts_empty_query_matches_all() {
        let store = HierarchyStore::new(embedded_dataset());
        assert_eq!(
            store.search_districts_by_name("").len(),
            store.list_districts().len()
        );
    }

    #[test]
    fn test_list_districts_is_idempotent() {
        let store = HierarchyStore::new(embedded_dataset());
        let first = store.list_districts().to_vec();
        let second = store.list_districts().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_ids_first_wins_but_all_listed() {
        let store = HierarchyStore::new(Dataset {
            districts: vec![district("1", "Kampala")],
            counties: vec![
                county("10", "Original", "1"),
                county("10", "Shadowed", "1"),
            ],
            ..Dataset::default()
        });

        assert_eq!(store.find_by_id(Level::County, "10").unwrap().name, "Original");
        assert_eq!(store.children_of(Level::County, "1").len(), 2);
        assert_eq!(store.counties.duplicates, 1);
    }

    #[test]
    fn test_orphans_are_kept_and_counted() {
        let store = HierarchyStore::new(Dataset {
            districts: vec![district("1", "Kampala")],
            counties: vec![county("10", "Adopted", "1"), county("20", "Orphan", "9")],
            ..Dataset::default()
        });

        assert_eq!(store.counties.orphans(&store.districts), 1);
        assert_eq!(store.children_of(Level::County, "9").len(), 1);
    }

    #[test]
    fn test_stats_and_fully_loaded() {
        let store = HierarchyStore::new(embedded_dataset());
        let stats = store.stats();
        assert_eq!(stats.districts, 5);
        assert_eq!(stats.villages, 3);
        assert!(store.is_fully_loaded());

        let empty = HierarchyStore::empty();
        assert_eq!(empty.stats(), HierarchyStats::default());
        assert!(!empty.is_fully_loaded());
    }
}
