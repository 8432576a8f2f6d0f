//! View Assembler — turns one page's records into its resolved view-model.
//!
//! Assembly is a pure function of its inputs. Every ordering decision is made
//! here so the presentation layer never re-sorts or re-groups.

use serde::Serialize;

use crate::content::classifier::CategoryClassifier;
use crate::content::grouping::{group_skills, with_dividers, Section, SkillGroup};
use crate::errors::ContentError;
use crate::models::records::{
    ContactLink, Education, Experience, ImpactMetric, Profile, Project, Skill,
};

// ────────────────────────────────────────────────────────────────────────────
// Page keys
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Profile,
    Projects,
    Timeline,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Profile, PageKind::Projects, PageKind::Timeline];

    pub fn key(self) -> &'static str {
        match self {
            PageKind::Profile => "profile",
            PageKind::Projects => "projects",
            PageKind::Timeline => "timeline",
        }
    }

    /// Maps a requested path onto a page key. Anything unrecognised is `Profile`.
    pub fn resolve(path: &str) -> PageKind {
        let key = path.trim().trim_matches('/');
        PageKind::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
            .unwrap_or(PageKind::Profile)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input bundles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    title: String,
    subtitle: Option<String>,
}

impl PageHeader {
    pub fn new(title: impl Into<String>, subtitle: Option<&str>) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::MissingField {
                record: "PageHeader",
                field: "title",
            });
        }
        Ok(Self {
            title,
            subtitle: subtitle.filter(|s| !s.trim().is_empty()).map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecords {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub education: Education,
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecords {
    pub header: PageHeader,
    pub entries: Vec<Project>,
}

/// The records one page owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRecords {
    Profile(ProfileRecords),
    Entries(EntryRecords),
}

impl PageRecords {
    fn bundle_name(&self) -> &'static str {
        match self {
            PageRecords::Profile(_) => "profile",
            PageRecords::Entries(_) => "entry",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View-model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub icon_tag: String,
}

impl From<&ImpactMetric> for MetricTile {
    fn from(m: &ImpactMetric) -> Self {
        Self {
            label: m.label().to_string(),
            value: m.value().to_string(),
            icon_tag: m.icon_tag().to_string(),
        }
    }
}

/// A tile lifted to page level, tagged with the entry it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetric {
    pub source: String,
    #[serde(flatten)]
    pub tile: MetricTile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_label: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<MetricTile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
}

impl From<&Experience> for EntryView {
    fn from(e: &Experience) -> Self {
        Self {
            title: e.title().to_string(),
            organization: Some(e.organization().to_string()),
            period: Some(e.period().to_string()),
            location: e.location().map(str::to_string),
            timeline_label: None,
            description: e.description().to_string(),
            metrics: Vec::new(),
            achievements: e.achievements().to_vec(),
            technologies: e.technologies().to_vec(),
        }
    }
}

impl From<&Project> for EntryView {
    fn from(p: &Project) -> Self {
        Self {
            title: p.title().to_string(),
            organization: None,
            period: None,
            location: None,
            timeline_label: p.timeline_label().map(str::to_string),
            description: p.description().to_string(),
            metrics: p.impact().iter().map(MetricTile::from).collect(),
            achievements: p.achievements().to_vec(),
            technologies: p.technologies().to_vec(),
        }
    }
}

/// Fully resolved page, ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub page: PageKind,
    pub header: HeaderView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Section<SkillGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    pub entries: Vec<Section<EntryView>>,
    pub metrics: Vec<PageMetric>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

pub fn assemble(
    page: PageKind,
    records: &PageRecords,
    classifier: &CategoryClassifier,
) -> Result<ViewModel, ContentError> {
    match (page, records) {
        (PageKind::Profile, PageRecords::Profile(r)) => Ok(assemble_profile(r, classifier)),
        (PageKind::Projects | PageKind::Timeline, PageRecords::Entries(r)) => {
            Ok(assemble_entries(page, r))
        }
        _ => Err(ContentError::PageMismatch {
            page: page.key(),
            bundle: records.bundle_name(),
        }),
    }
}

fn assemble_profile(records: &ProfileRecords, classifier: &CategoryClassifier) -> ViewModel {
    let profile = &records.profile;
    let headline = profile.headline();
    let entries: Vec<EntryView> = records.experiences.iter().map(EntryView::from).collect();

    ViewModel {
        page: PageKind::Profile,
        header: HeaderView {
            title: profile.name().to_string(),
            subtitle: (!headline.trim().is_empty()).then(|| headline.to_string()),
            summary: Some(profile.summary().to_string()),
            contact: profile.contact().to_vec(),
        },
        groups: group_skills(&records.skills, classifier),
        education: Some(records.education.clone()),
        metrics: lift_metrics(&entries),
        entries: with_dividers(entries),
    }
}

fn assemble_entries(page: PageKind, records: &EntryRecords) -> ViewModel {
    let entries: Vec<EntryView> = records.entries.iter().map(EntryView::from).collect();

    ViewModel {
        page,
        header: HeaderView {
            title: records.header.title.clone(),
            subtitle: records.header.subtitle.clone(),
            summary: None,
            contact: Vec::new(),
        },
        groups: Vec::new(),
        education: None,
        metrics: lift_metrics(&entries),
        entries: with_dividers(entries),
    }
}

/// Page-level tiles: entry order, then each entry's declared tile order.
fn lift_metrics(entries: &[EntryView]) -> Vec<PageMetric> {
    entries
        .iter()
        .flat_map(|e| {
            e.metrics.iter().map(|tile| PageMetric {
                source: e.title.clone(),
                tile: tile.clone(),
            })
        })
        .collect()
}
