use std::str::FromStr;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::LocationDto;
use crate::features::locations::models::Level;
use crate::features::locations::store::HierarchyStore;

/// How a child listing reports a missing parent versus an empty result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFoundPolicy {
    /// Unknown parent and parent without children get distinct 404 messages
    #[default]
    Strict,
    /// Both cases collapse into a single "no children" 404
    Collapsed,
}

impl FromStr for NotFoundPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "collapsed" => Ok(Self::Collapsed),
            other => Err(format!(
                "NOT_FOUND_POLICY must be 'strict' or 'collapsed', got '{}'",
                other
            )),
        }
    }
}

/// Query layer over the hierarchy store
pub struct LocationService {
    store: Arc<HierarchyStore>,
    policy: NotFoundPolicy,
}

impl LocationService {
    pub fn new(store: Arc<HierarchyStore>, policy: NotFoundPolicy) -> Self {
        Self { store, policy }
    }

    /// List all districts in load order
    pub fn list_districts(&self) -> Vec<LocationDto> {
        self.store
            .list_districts()
            .iter()
            .map(Into::into)
            .collect()
    }

    /// List the entities at `level` that belong to `parent_id`.
    ///
    /// Counties only require the district to exist; a district without
    /// counties yields an empty list. Deeper levels also treat an empty
    /// result as not found, with the message shape chosen by the policy.
    pub fn list_children(&self, level: Level, parent_id: &str) -> Result<Vec<LocationDto>> {
        let parent_level = level.parent().ok_or_else(|| {
            AppError::NotFound(format!("{} have no parent level", level.plural()))
        })?;

        let parent = self.store.find_by_id(parent_level, parent_id);
        let children: Vec<LocationDto> = self
            .store
            .children_of(level, parent_id)
            .into_iter()
            .map(Into::into)
            .collect();

        if level == Level::County {
            return match parent {
                Some(_) => Ok(children),
                None => Err(Self::unknown_parent(parent_level, parent_id)),
            };
        }

        match self.policy {
            NotFoundPolicy::Strict => {
                let parent = parent.ok_or_else(|| Self::unknown_parent(parent_level, parent_id))?;
                if children.is_empty() {
                    return Err(AppError::NotFound(format!(
                        "No {} found for {} '{}' (id: {})",
                        level.plural(),
                        parent_level.singular(),
                        parent.name,
                        parent_id
                    )));
                }
            }
            NotFoundPolicy::Collapsed => {
                if children.is_empty() {
                    return Err(AppError::NotFound(format!(
                        "No {} found for {} id '{}'",
                        level.plural(),
                        parent_level.singular(),
                        parent_id
                    )));
                }
            }
        }

        Ok(children)
    }

    /// Case-insensitive partial match on district names
    pub fn search_districts(&self, query: &str) -> Result<Vec<LocationDto>> {
        let matches: Vec<LocationDto> = self
            .store
            .search_districts_by_name(query)
            .into_iter()
            .map(Into::into)
            .collect();

        if matches.is_empty() {
            return Err(AppError::NotFound(format!(
                "No districts found matching '{}'",
                query
            )));
        }

        Ok(matches)
    }

    fn unknown_parent(level: Level, id: &str) -> AppError {
        AppError::NotFound(format!("{} with id '{}' not found", level.title(), id))
    }
}
