use async_trait::async_trait;

use crate::features::locations::models::{County, Dataset, District, Parish, SubCounty, Village};
use crate::modules::locale_data::{HierarchyProvider, LoadError};

/// (id, name)
const DISTRICTS: &[(&str, &str)] = &[
    ("1", "Kampala"),
    ("2", "Wakiso"),
    ("3", "Mukono"),
    ("42", "Gulu"),
    ("5", "Jinja"),
];

/// (id, name, parent id)
const COUNTIES: &[(&str, &str, &str)] = &[
    ("101", "Central Division", "1"),
    ("102", "Kawempe Division", "1"),
    ("103", "Makindye Division", "1"),
    ("104", "Nakawa Division", "1"),
    ("105", "Rubaga Division", "1"),
    ("201", "Busiro County", "2"),
    ("202", "Kyadondo County", "2"),
    ("4201", "Gulu Municipality", "42"),
    ("4202", "Aswa County", "42"),
    ("4203", "Omoro County", "42"),
    ("4204", "Paicho County", "42"),
];

const SUB_COUNTIES: &[(&str, &str, &str)] = &[
    ("420401", "Paicho Sub County", "4204"),
    ("420402", "Awach Sub County", "4204"),
    ("420403", "Lapul Sub County", "4204"),
    ("420404", "Lukole Sub County", "4204"),
];

const PARISHES: &[(&str, &str, &str)] = &[
    ("42040101", "Paicho Parish", "420401"),
    ("42040102", "Olwal Parish", "420401"),
    ("42040103", "Parabongo Parish", "420401"),
];

const VILLAGES: &[(&str, &str, &str)] = &[
    ("4204010101", "Paicho Central Village", "42040101"),
    ("4204010102", "Paicho East Village", "42040101"),
    ("4204010103", "Paicho West Village", "42040101"),
];

fn rows<T>(table: &[(&str, &str, &str)], make: fn(String, String, String) -> T) -> Vec<T> {
    table
        .iter()
        .map(|(id, name, parent)| make(id.to_string(), name.to_string(), parent.to_string()))
        .collect()
}

/// The built-in sample hierarchy: five districts with the Gulu / Paicho chain
/// filled in down to village level.
pub fn embedded_dataset() -> Dataset {
    Dataset {
        districts: DISTRICTS
            .iter()
            .map(|(id, name)| District {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
        counties: rows(COUNTIES, |id, name, district_id| County {
            id,
            name,
            district_id,
        }),
        subcounties: rows(SUB_COUNTIES, |id, name, county_id| SubCounty {
            id,
            name,
            county_id,
        }),
        parishes: rows(PARISHES, |id, name, subcounty_id| Parish {
            id,
            name,
            subcounty_id,
        }),
        villages: rows(VILLAGES, |id, name, parish_id| Village {
            id,
            name,
            parish_id,
        }),
    }
}

/// Provider backed by the compiled-in sample hierarchy; never fails
pub struct EmbeddedProvider;

#[async_trait]
impl HierarchyProvider for EmbeddedProvider {
    fn describe(&self) -> String {
        "embedded sample dataset".to_string()
    }

    async fn load_hierarchy(&self) -> Result<Dataset, LoadError> {
        Ok(embedded_dataset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embedded_provider_loads_sample() {
        let dataset = EmbeddedProvider.load_hierarchy().await.unwrap();

        assert!(dataset
            .districts
            .iter()
            .any(|d| d.id == "42" && d.name == "Gulu"));
        assert_eq!(dataset.counties.len(), 11);
        assert_eq!(dataset.subcounties.len(), 4);
        assert_eq!(dataset.parishes.len(), 3);
        assert_eq!(dataset.villages.len(), 3);
    }

    #[test]
    fn test_embedded_parent_references_resolve() {
        let dataset = embedded_dataset();

        for c in &dataset.counties {
            assert!(dataset.districts.iter().any(|d| d.id == c.district_id));
        }
        for s in &dataset.subcounties {
            assert!(dataset.counties.iter().any(|c| c.id == s.county_id));
        }
        for p in &dataset.parishes {
            assert!(dataset.subcounties.iter().any(|s| s.id == p.subcounty_id));
        }
        for v in &dataset.villages {
            assert!(dataset.parishes.iter().any(|p| p.id == v.parish_id));
        }
    }
}
