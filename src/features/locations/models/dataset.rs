use crate::features::locations::models::{County, District, Parish, SubCounty, Village};

/// Raw flat hierarchy as produced by a provider, before indexing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub districts: Vec<District>,
    pub counties: Vec<County>,
    pub subcounties: Vec<SubCounty>,
    pub parishes: Vec<Parish>,
    pub villages: Vec<Village>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
            && self.counties.is_empty()
            && self.subcounties.is_empty()
            && self.parishes.is_empty()
            && self.villages.is_empty()
    }
}
