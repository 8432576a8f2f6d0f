//! Grouping Engine — partitions skills into category groups and places dividers.
//!
//! Group order comes from the classifier's declared priority list, not from
//! the order skills happen to appear in. Within a group, input order is kept.
//! Empty groups are dropped before dividers are placed, so an absent category
//! never leaves a stray divider behind.

use std::collections::HashMap;

use serde::Serialize;

use crate::content::classifier::CategoryClassifier;
use crate::models::records::{Skill, SkillCategory};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// An item paired with whether a divider follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    #[serde(flatten)]
    pub item: T,
    pub divider_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub key: &'static str,
    pub label: String,
    pub icon_tag: String,
    pub items: Vec<Skill>,
}

// ────────────────────────────────────────────────────────────────────────────
// Dividers
// ────────────────────────────────────────────────────────────────────────────

/// Marks a divider after every item except the last.
pub fn with_dividers<T>(items: Vec<T>) -> Vec<Section<T>> {
    let last = items.len().saturating_sub(1);
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Section {
            item,
            divider_after: i < last,
        })
        .collect()
}

pub fn divider_count<T>(sections: &[Section<T>]) -> usize {
    sections.iter().filter(|s| s.divider_after).count()
}

// ────────────────────────────────────────────────────────────────────────────
// Grouping
// ────────────────────────────────────────────────────────────────────────────

pub fn group_skills(skills: &[Skill], classifier: &CategoryClassifier) -> Vec<Section<SkillGroup>> {
    let mut buckets: HashMap<SkillCategory, Vec<Skill>> = HashMap::new();
    for skill in skills {
        buckets
            .entry(skill.category())
            .or_default()
            .push(skill.clone());
    }

    let groups: Vec<SkillGroup> = classifier
        .order()
        .iter()
        .filter_map(|category| {
            let items = buckets.remove(category)?;
            let class = classifier.classify_category(*category);
            Some(SkillGroup {
                key: class.group_key,
                label: class.display_label.clone(),
                icon_tag: class.icon_tag.clone(),
                items,
            })
        })
        .collect();

    with_dividers(groups)
}
