//! Checklist widget state
//!
//! A checklist owns the items it was given and the set of ids the reader
//! has ticked. The set starts empty, is flipped one id at a time by
//! [`Checklist::toggle`] and emptied by [`Checklist::reset`]. Nothing is
//! persisted: a fresh checklist always starts at 0%.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Classes applied to the text of a ticked item
pub const COMPLETED_CLASS: &str = "line-through text-gray-500";
/// Classes applied to the text of an open item
pub const OPEN_CLASS: &str = "text-gray-700";

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub category: String,
}

impl ChecklistItem {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Items sharing a category, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a ChecklistItem>,
}

/// Checklist with its checked-set
#[derive(Debug, Clone)]
pub struct Checklist {
    title: String,
    items: Vec<ChecklistItem>,
    checked: HashSet<String>,
}

impl Checklist {
    pub fn new(title: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            title: title.into(),
            items,
            checked: HashSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Flip membership of `id` in the checked-set.
    ///
    /// Ids are not validated against the item list.
    pub fn toggle(&mut self, id: &str) {
        if !self.checked.remove(id) {
            self.checked.insert(id.to_string());
        }
    }

    /// Clear every checked id
    pub fn reset(&mut self) {
        self.checked.clear();
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Unrounded completion percentage, 0 for an empty list
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.checked.len() as f64 / self.items.len() as f64 * 100.0
    }

    /// Completion percentage rounded to the nearest integer
    pub fn percent(&self) -> u32 {
        self.progress().round() as u32
    }

    /// Progress readout, e.g. "2 / 4 completed (50%)"
    pub fn summary(&self) -> String {
        format!(
            "{} / {} completed ({}%)",
            self.checked_count(),
            self.total(),
            self.percent()
        )
    }

    /// Items grouped by category, groups in first-seen order
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: IndexMap<&str, Vec<&ChecklistItem>> = IndexMap::new();
        for item in &self.items {
            groups.entry(item.category.as_str()).or_default().push(item);
        }

        groups
            .into_iter()
            .map(|(category, items)| CategoryGroup { category, items })
            .collect()
    }

    /// Snapshot of the current state for the template
    pub fn view(&self) -> ChecklistView {
        let groups = self
            .groups()
            .into_iter()
            .map(|group| ChecklistGroupView {
                anchor: slug::slugify(group.category),
                category: group.category.to_string(),
                items: group
                    .items
                    .into_iter()
                    .map(|item| {
                        let checked = self.is_checked(&item.id);
                        ChecklistItemView {
                            id: item.id.clone(),
                            text: item.text.clone(),
                            checked,
                            text_class: (if checked { COMPLETED_CLASS } else { OPEN_CLASS })
                                .to_string(),
                        }
                    })
                    .collect(),
            })
            .collect();

        ChecklistView {
            title: self.title.clone(),
            checked: self.checked_count(),
            total: self.total(),
            percent: self.percent(),
            width: format_width(self.progress()),
            summary: self.summary(),
            groups,
        }
    }
}

/// CSS width value for the progress bar, e.g. "50%" or "33.33%"
fn format_width(progress: f64) -> String {
    let rounded = (progress * 100.0).round() / 100.0;
    format!("{}%", rounded)
}

/// Template data for the checklist partial
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistView {
    pub title: String,
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
    pub width: String,
    pub summary: String,
    pub groups: Vec<ChecklistGroupView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistGroupView {
    pub category: String,
    pub anchor: String,
    pub items: Vec<ChecklistItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistItemView {
    pub id: String,
    pub text: String,
    pub checked: bool,
    pub text_class: String,
}
