use std::fmt;

/// One of the five administrative levels, ordered from root to leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    District,
    County,
    SubCounty,
    Parish,
    Village,
}

impl Level {
    /// The level whose entities own entities at this level
    pub fn parent(self) -> Option<Level> {
        match self {
            Level::District => None,
            Level::County => Some(Level::District),
            Level::SubCounty => Some(Level::County),
            Level::Parish => Some(Level::SubCounty),
            Level::Village => Some(Level::Parish),
        }
    }

    /// Capitalised singular, used at the start of messages
    pub fn title(self) -> &'static str {
        match self {
            Level::District => "District",
            Level::County => "County",
            Level::SubCounty => "Sub-county",
            Level::Parish => "Parish",
            Level::Village => "Village",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Level::District => "district",
            Level::County => "county",
            Level::SubCounty => "sub-county",
            Level::Parish => "parish",
            Level::Village => "village",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Level::District => "districts",
            Level::County => "counties",
            Level::SubCounty => "sub-counties",
            Level::Parish => "parishes",
            Level::Village => "villages",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_chain_reaches_district_in_four_steps() {
        let mut level = Level::Village;
        let mut steps = 0;
        while let Some(parent) = level.parent() {
            level = parent;
            steps += 1;
        }
        assert_eq!(level, Level::District);
        assert_eq!(steps, 4);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Level::SubCounty.title(), "Sub-county");
        assert_eq!(Level::SubCounty.plural(), "sub-counties");
        assert_eq!(Level::Parish.plural(), "parishes");
        assert_eq!(Level::County.to_string(), "county");
    }
}
