//! Immutable profile records.
//!
//! Every record is validated when it is built; a record that reaches the
//! assembler is guaranteed to carry its required fields. Fields are private so
//! a built record cannot be changed afterwards.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::ContentError;

// ────────────────────────────────────────────────────────────────────────────
// Skill categories
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Cloud,
    Data,
}

impl SkillCategory {
    /// Every category, in declaration order.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Cloud,
        SkillCategory::Data,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Data => "data",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Cloud => "Cloud",
            SkillCategory::Data => "Data",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = ContentError;

    /// Accepts the key or the label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ContentError::UnknownCategory(needle.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field helpers
// ────────────────────────────────────────────────────────────────────────────

fn require(
    record: &'static str,
    field: &'static str,
    value: String,
) -> Result<String, ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::MissingField { record, field });
    }
    Ok(value)
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Collapses repeated technology names onto their first occurrence.
fn dedup_ordered(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    name: String,
    category: SkillCategory,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Result<Self, ContentError> {
        Ok(Self {
            name: require("Skill", "name", name.into())?,
            category,
        })
    }

    /// Builds a skill from a category name; unknown names are rejected.
    pub fn parse(name: impl Into<String>, category: &str) -> Result<Self, ContentError> {
        Self::new(name, category.parse()?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }
}

/// A headline outcome. `value` stays a formatted string so units survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactMetric {
    label: String,
    value: String,
    icon_tag: String,
}

impl ImpactMetric {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        icon_tag: impl Into<String>,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            label: require("ImpactMetric", "label", label.into())?,
            value: require("ImpactMetric", "value", value.into())?,
            icon_tag: require("ImpactMetric", "icon_tag", icon_tag.into())?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn icon_tag(&self) -> &str {
        &self.icon_tag
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    label: String,
    href: String,
    icon_tag: String,
}

impl ContactLink {
    pub fn new(
        label: impl Into<String>,
        href: impl Into<String>,
        icon_tag: impl Into<String>,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            label: require("ContactLink", "label", label.into())?,
            href: require("ContactLink", "href", href.into())?,
            icon_tag: require("ContactLink", "icon_tag", icon_tag.into())?,
        })
    }
}

/// Page header content for the profile owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    name: String,
    headline: String,
    summary: String,
    contact: Vec<ContactLink>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        headline: impl Into<String>,
        summary: impl Into<String>,
        contact: Vec<ContactLink>,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            name: require("Profile", "name", name.into())?,
            headline: headline.into(),
            summary: require("Profile", "summary", summary.into())?,
            contact,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn contact(&self) -> &[ContactLink] {
        &self.contact
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    institution: String,
    degree: String,
    period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl Education {
    pub fn new(
        institution: impl Into<String>,
        degree: impl Into<String>,
        period: impl Into<String>,
        location: Option<&str>,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            institution: require("Education", "institution", institution.into())?,
            degree: require("Education", "degree", degree.into())?,
            period: period.into(),
            location: optional(location.map(str::to_string)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    title: String,
    organization: String,
    period: String,
    location: Option<String>,
    description: String,
    achievements: Vec<String>,
    technologies: Vec<String>,
}

impl Experience {
    pub fn builder(
        title: impl Into<String>,
        organization: impl Into<String>,
        period: impl Into<String>,
    ) -> ExperienceBuilder {
        ExperienceBuilder {
            title: title.into(),
            organization: organization.into(),
            period: period.into(),
            location: None,
            description: String::new(),
            achievements: Vec::new(),
            technologies: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }
}

#[derive(Debug, Clone)]
pub struct ExperienceBuilder {
    title: String,
    organization: String,
    period: String,
    location: Option<String>,
    description: String,
    achievements: Vec<String>,
    technologies: Vec<String>,
}

impl ExperienceBuilder {
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn achievements<I, S>(mut self, achievements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.achievements = strings(achievements);
        self
    }

    pub fn technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = strings(technologies);
        self
    }

    pub fn build(self) -> Result<Experience, ContentError> {
        Ok(Experience {
            title: require("Experience", "title", self.title)?,
            organization: require("Experience", "organization", self.organization)?,
            period: require("Experience", "period", self.period)?,
            location: optional(self.location),
            description: require("Experience", "description", self.description)?,
            achievements: self.achievements,
            technologies: dedup_ordered(self.technologies),
        })
    }
}

/// A project card. Timeline entries share the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    title: String,
    description: String,
    timeline_label: Option<String>,
    impact: Vec<ImpactMetric>,
    achievements: Vec<String>,
    technologies: Vec<String>,
}

pub type TimelineEntry = Project;

impl Project {
    pub fn builder(title: impl Into<String>, description: impl Into<String>) -> ProjectBuilder {
        ProjectBuilder {
            title: title.into(),
            description: description.into(),
            timeline_label: None,
            impact: Vec::new(),
            achievements: Vec::new(),
            technologies: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timeline_label(&self) -> Option<&str> {
        self.timeline_label.as_deref()
    }

    pub fn impact(&self) -> &[ImpactMetric] {
        &self.impact
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }
}

#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    title: String,
    description: String,
    timeline_label: Option<String>,
    impact: Vec<ImpactMetric>,
    achievements: Vec<String>,
    technologies: Vec<String>,
}

impl ProjectBuilder {
    pub fn timeline_label(mut self, label: impl Into<String>) -> Self {
        self.timeline_label = Some(label.into());
        self
    }

    pub fn impact(mut self, impact: Vec<ImpactMetric>) -> Self {
        self.impact = impact;
        self
    }

    pub fn achievements<I, S>(mut self, achievements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.achievements = strings(achievements);
        self
    }

    pub fn technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = strings(technologies);
        self
    }

    pub fn build(self) -> Result<Project, ContentError> {
        Ok(Project {
            title: require("Project", "title", self.title)?,
            description: require("Project", "description", self.description)?,
            timeline_label: optional(self.timeline_label),
            impact: self.impact,
            achievements: self.achievements,
            technologies: dedup_ordered(self.technologies),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_category_parses_key_and_label() {
        assert_eq!("frontend".parse::<SkillCategory>(), Ok(SkillCategory::Frontend));
        assert_eq!("Cloud".parse::<SkillCategory>(), Ok(SkillCategory::Cloud));
        assert_eq!(" DATA ".parse::<SkillCategory>(), Ok(SkillCategory::Data));
    }

    #[test]
    fn test_unknown_category_rejected_as_configuration_error() {
        let err = Skill::parse("Terraform", "DevOps").unwrap_err();
        assert_eq!(err, ContentError::UnknownCategory("DevOps".to_string()));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_skill_requires_name() {
        let err = Skill::new("  ", SkillCategory::Backend).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_project_requires_title() {
        let err = Project::builder("", "Something").build().unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingField {
                record: "Project",
                field: "title"
            }
        );
    }

    #[test]
    fn test_project_requires_description() {
        let err = Project::builder("Billing revamp", "\n").build().unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingField {
                record: "Project",
                field: "description"
            }
        );
    }

    #[test]
    fn test_experience_requires_description() {
        let err = Experience::builder("Engineer", "Acme", "2020 - 2022")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingField {
                record: "Experience",
                field: "description"
            }
        );
    }

    #[test]
    fn test_empty_sequences_are_valid() {
        let project = Project::builder("Internal tool", "A small CLI")
            .build()
            .expect("empty impact, achievements and technologies are allowed");
        assert!(project.impact().is_empty());
        assert!(project.achievements().is_empty());
        assert!(project.technologies().is_empty());
    }

    #[test]
    fn test_technologies_dedup_keeps_first_occurrence() {
        let project = Project::builder("API", "Gateway")
            .technologies(["Rust", "Redis", "Rust", "Axum", "Redis"])
            .build()
            .unwrap();
        assert_eq!(project.technologies(), ["Rust", "Redis", "Axum"]);
    }

    #[test]
    fn test_achievements_keep_declared_order() {
        let exp = Experience::builder("Engineer", "Acme", "2020 - 2022")
            .description("Built things")
            .achievements(["z first", "a second", "m third"])
            .build()
            .unwrap();
        assert_eq!(exp.achievements(), ["z first", "a second", "m third"]);
    }

    #[test]
    fn test_blank_timeline_label_becomes_absent() {
        let project = Project::builder("API", "Gateway")
            .timeline_label("  ")
            .build()
            .unwrap();
        assert_eq!(project.timeline_label(), None);
    }

    #[test]
    fn test_metric_value_is_kept_verbatim() {
        let metric = ImpactMetric::new("Cloud savings", "$25K+/month", "savings").unwrap();
        assert_eq!(metric.value(), "$25K+/month");
    }
}
