//! Category Classifier — maps a skill category to its display group and icon.
//!
//! The classifier is built from a [`CategoryTable`]. Row order is the declared
//! category priority used by grouping. Construction fails unless every
//! [`SkillCategory`] has exactly one row, or the table explicitly declares a
//! fallback icon for the categories it leaves out.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::errors::ContentError;
use crate::models::records::{Skill, SkillCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub group_key: &'static str,
    pub display_label: String,
    pub icon_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: SkillCategory,
    pub display_label: String,
    pub icon_tag: String,
}

/// Declared category mapping, in priority order.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    rows: Vec<CategoryRow>,
    fallback_icon: Option<String>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(
        mut self,
        category: SkillCategory,
        display_label: impl Into<String>,
        icon_tag: impl Into<String>,
    ) -> Self {
        self.rows.push(CategoryRow {
            category,
            display_label: display_label.into(),
            icon_tag: icon_tag.into(),
        });
        self
    }

    /// Opts in to a generic icon for categories without a row.
    pub fn with_fallback_icon(mut self, icon_tag: impl Into<String>) -> Self {
        self.fallback_icon = Some(icon_tag.into());
        self
    }

    /// The built-in table. `default_icon` is an exhaustive match, so adding a
    /// category without choosing an icon does not compile.
    pub fn builtin() -> Self {
        SkillCategory::ALL
            .into_iter()
            .fold(Self::new(), |table, c| table.row(c, c.label(), default_icon(c)))
    }
}

fn default_icon(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Frontend => "code",
        SkillCategory::Backend => "server",
        SkillCategory::Cloud => "cloud",
        SkillCategory::Data => "database",
    }
}

#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    order: Vec<SkillCategory>,
    mapping: HashMap<SkillCategory, Classification>,
}

impl CategoryClassifier {
    pub fn new(table: CategoryTable) -> Result<Self, ContentError> {
        let mut order = Vec::with_capacity(SkillCategory::ALL.len());
        let mut mapping = HashMap::new();

        for row in table.rows {
            if mapping.contains_key(&row.category) {
                return Err(ContentError::DuplicateCategoryMapping(row.category));
            }
            order.push(row.category);
            mapping.insert(
                row.category,
                Classification {
                    group_key: row.category.key(),
                    display_label: row.display_label,
                    icon_tag: row.icon_tag,
                },
            );
        }

        for category in SkillCategory::ALL {
            if mapping.contains_key(&category) {
                continue;
            }
            let Some(icon_tag) = table.fallback_icon.clone() else {
                return Err(ContentError::MissingCategoryMapping(category));
            };
            debug!(category = category.key(), icon = %icon_tag, "using declared fallback icon");
            // Unlisted categories sort after every declared row.
            order.push(category);
            mapping.insert(
                category,
                Classification {
                    group_key: category.key(),
                    display_label: category.label().to_string(),
                    icon_tag,
                },
            );
        }

        Ok(Self { order, mapping })
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(CategoryTable::builtin())
    }

    /// Total over the enum once construction has succeeded.
    pub fn classify(&self, skill: &Skill) -> &Classification {
        self.classify_category(skill.category())
    }

    pub fn classify_category(&self, category: SkillCategory) -> &Classification {
        &self.mapping[&category]
    }

    /// Declared category priority list.
    pub fn order(&self) -> &[SkillCategory] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn table_without_data() -> CategoryTable {
        CategoryTable::new()
            .row(SkillCategory::Frontend, "Frontend", "code")
            .row(SkillCategory::Backend, "Backend", "server")
            .row(SkillCategory::Cloud, "Cloud", "cloud")
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let classifier = CategoryClassifier::builtin().expect("builtin table is total");
        for category in SkillCategory::ALL {
            let c = classifier.classify_category(category);
            assert_eq!(c.group_key, category.key());
            assert!(!c.icon_tag.is_empty(), "{category} must have an icon");
        }
        assert_eq!(classifier.order(), SkillCategory::ALL);
    }

    #[test]
    fn test_missing_row_is_configuration_error() {
        let err = CategoryClassifier::new(table_without_data()).unwrap_err();
        assert_eq!(err, ContentError::MissingCategoryMapping(SkillCategory::Data));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_duplicate_row_is_configuration_error() {
        let table = CategoryTable::builtin().row(SkillCategory::Cloud, "Infra", "server");
        let err = CategoryClassifier::new(table).unwrap_err();
        assert_eq!(err, ContentError::DuplicateCategoryMapping(SkillCategory::Cloud));
    }

    #[test]
    fn test_explicit_fallback_fills_gap() {
        let classifier =
            CategoryClassifier::new(table_without_data().with_fallback_icon("generic")).unwrap();
        let c = classifier.classify_category(SkillCategory::Data);
        assert_eq!(c.icon_tag, "generic");
        assert_eq!(c.display_label, "Data");
        assert_eq!(classifier.order().last(), Some(&SkillCategory::Data));
    }

    #[test]
    fn test_row_order_defines_priority() {
        let table = CategoryTable::new()
            .row(SkillCategory::Data, "Data", "database")
            .row(SkillCategory::Cloud, "Cloud", "cloud")
            .row(SkillCategory::Backend, "Backend", "server")
            .row(SkillCategory::Frontend, "Frontend", "code");
        let classifier = CategoryClassifier::new(table).unwrap();
        assert_eq!(
            classifier.order(),
            [
                SkillCategory::Data,
                SkillCategory::Cloud,
                SkillCategory::Backend,
                SkillCategory::Frontend
            ]
        );
    }

    #[test]
    fn test_classify_uses_custom_label() {
        let table = CategoryTable::builtin();
        let table = CategoryTable {
            rows: table
                .rows
                .into_iter()
                .map(|mut r| {
                    if r.category == SkillCategory::Backend {
                        r.display_label = "Server-side".to_string();
                    }
                    r
                })
                .collect(),
            fallback_icon: None,
        };
        let classifier = CategoryClassifier::new(table).unwrap();
        let skill = Skill::new("C#", SkillCategory::Backend).unwrap();
        assert_eq!(classifier.classify(&skill).display_label, "Server-side");
    }
}
