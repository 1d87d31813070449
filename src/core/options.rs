//! Selectable filter values present in a snapshot.

use crate::models::TimeLogRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub occupations: Vec<FilterOption>,
}

#[derive(Default)]
struct OptionIndex {
    items: Vec<FilterOption>,
    pos: HashMap<String, usize>,
}

impl OptionIndex {
    // first occurrence fixes the position, the latest name wins
    fn upsert(&mut self, id: &str, name: &str) {
        match self.pos.get(id) {
            Some(&i) => self.items[i].name = name.to_string(),
            None => {
                self.pos.insert(id.to_string(), self.items.len());
                self.items.push(FilterOption {
                    id: id.to_string(),
                    name: name.to_string(),
                });
            }
        }
    }
}

/// Only resolved occupations/categories are offered; dangling references
/// have no name to show.
pub fn available_filters<'a, I>(records: I) -> FilterOptions
where
    I: IntoIterator<Item = &'a TimeLogRecord>,
{
    let mut categories = OptionIndex::default();
    let mut occupations = OptionIndex::default();

    for occ in records.into_iter().filter_map(|r| r.occupation.as_ref()) {
        if let Some(cat) = &occ.category {
            categories.upsert(&cat.id, &cat.name);
        }
        occupations.upsert(&occ.id, &occ.name);
    }

    FilterOptions {
        categories: categories.items,
        occupations: occupations.items,
    }
}
