//! Page catalog — loads a content snapshot and assembles every page once.
//!
//! A [`ContentSource`] hands over one independent record bundle per page. The
//! catalog assembles all of them at startup; any error aborts the build.

use std::collections::HashMap;

use tracing::info;

use crate::content::assembler::{assemble, PageKind, PageRecords, ViewModel};
use crate::content::classifier::CategoryClassifier;
use crate::content::grouping::divider_count;
use crate::errors::ContentError;

/// One record bundle per page. Bundles are owned copies; the same fact may
/// legitimately appear on more than one page with different detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSnapshot {
    pub profile: PageRecords,
    pub projects: PageRecords,
    pub timeline: PageRecords,
}

impl ContentSnapshot {
    fn records_for(&self, page: PageKind) -> &PageRecords {
        match page {
            PageKind::Profile => &self.profile,
            PageKind::Projects => &self.projects,
            PageKind::Timeline => &self.timeline,
        }
    }
}

/// Supplies an immutable snapshot of profile content.
pub trait ContentSource {
    fn load(&self) -> Result<ContentSnapshot, ContentError>;
}

#[derive(Debug, Clone)]
pub struct PageCatalog {
    pages: HashMap<PageKind, ViewModel>,
}

impl PageCatalog {
    pub fn build(
        source: &dyn ContentSource,
        classifier: &CategoryClassifier,
    ) -> Result<Self, ContentError> {
        let snapshot = source.load()?;
        let mut pages = HashMap::with_capacity(PageKind::ALL.len());

        for page in PageKind::ALL {
            let vm = assemble(page, snapshot.records_for(page), classifier)?;
            info!(
                page = page.key(),
                groups = vm.groups.len(),
                entries = vm.entries.len(),
                dividers = divider_count(&vm.groups) + divider_count(&vm.entries),
                metrics = vm.metrics.len(),
                "Assembled page"
            );
            pages.insert(page, vm);
        }

        Ok(Self { pages })
    }

    /// Every page is present once `build` has succeeded.
    pub fn page(&self, page: PageKind) -> &ViewModel {
        &self.pages[&page]
    }

    pub fn resolve(&self, path: &str) -> &ViewModel {
        self.page(PageKind::resolve(path))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        PageKind::ALL.into_iter().map(PageKind::key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::assembler::{EntryRecords, PageHeader};
    use crate::content::profile_data::StaticProfile;
    use crate::errors::ErrorKind;
    use crate::models::records::Project;

    struct BrokenSource;

    impl ContentSource for BrokenSource {
        fn load(&self) -> Result<ContentSnapshot, ContentError> {
            let untitled = Project::builder("Untitled", "").build()?;
            let mut snapshot = StaticProfile.load()?;
            snapshot.projects = PageRecords::Entries(EntryRecords {
                header: PageHeader::new("Projects", None)?,
                entries: vec![untitled],
            });
            Ok(snapshot)
        }
    }

    struct SwappedSource;

    impl ContentSource for SwappedSource {
        fn load(&self) -> Result<ContentSnapshot, ContentError> {
            let mut snapshot = StaticProfile.load()?;
            snapshot.profile = PageRecords::Entries(EntryRecords {
                header: PageHeader::new("Oops", None)?,
                entries: vec![],
            });
            Ok(snapshot)
        }
    }

    #[test]
    fn test_static_profile_builds_every_page() {
        let catalog = PageCatalog::build(&StaticProfile, &CategoryClassifier::builtin().unwrap())
            .expect("static content is valid");
        for page in PageKind::ALL {
            assert_eq!(catalog.page(page).page, page);
        }
        assert_eq!(catalog.keys(), ["profile", "projects", "timeline"]);
    }

    #[test]
    fn test_resolve_unknown_path_serves_profile() {
        let catalog =
            PageCatalog::build(&StaticProfile, &CategoryClassifier::builtin().unwrap()).unwrap();
        assert_eq!(catalog.resolve("/does-not-exist").page, PageKind::Profile);
        assert_eq!(catalog.resolve("/timeline").page, PageKind::Timeline);
    }

    #[test]
    fn test_invalid_record_aborts_build() {
        let err = PageCatalog::build(&BrokenSource, &CategoryClassifier::builtin().unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_mismatched_bundle_aborts_build() {
        let err = PageCatalog::build(&SwappedSource, &CategoryClassifier::builtin().unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let c = CategoryClassifier::builtin().unwrap();
        let a = PageCatalog::build(&StaticProfile, &c).unwrap();
        let b = PageCatalog::build(&StaticProfile, &c).unwrap();
        for page in PageKind::ALL {
            assert_eq!(a.page(page), b.page(page));
        }
    }
}
