use std::{collections::HashSet, sync::Arc};

use crate::content::{Catalog, LocalizedDataSet, ProjectStatus, ServiceCategory};

/// Root margin handed to the section observer: only the middle 20% of the
/// viewport counts as "in view".
pub const SECTION_BAND: &str = "-40% 0px -40% 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Services,
    Projects,
    Cv,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::Projects,
        Section::Cv,
        Section::Contact,
    ];

    /// Element id and fragment used by the in-page anchors.
    pub fn id(self) -> &'static str {
        match self {
            Section::Services => "hizmetler",
            Section::Projects => "projeler",
            Section::Cv => "cv",
            Section::Contact => "iletisim",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Services => "nav.services",
            Section::Projects => "nav.projects",
            Section::Cv => "nav.cv",
            Section::Contact => "nav.contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Active,
    Paused,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [
        ProjectFilter::All,
        ProjectFilter::Active,
        ProjectFilter::Paused,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            ProjectFilter::All => "projects.filter.all",
            ProjectFilter::Active => "projects.status.active",
            ProjectFilter::Paused => "projects.status.paused",
        }
    }

    pub fn admits(self, status: ProjectStatus) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Active => status == ProjectStatus::Active,
            ProjectFilter::Paused => status == ProjectStatus::Paused,
        }
    }
}

/// Identifiers that selection operations accept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownIds {
    projects: HashSet<String>,
    careers: HashSet<String>,
    services: HashSet<String>,
}

impl KnownIds {
    pub fn new<P, C, S>(projects: P, careers: C, services: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            projects: projects.into_iter().map(Into::into).collect(),
            careers: careers.into_iter().map(Into::into).collect(),
            services: services.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_content(catalog: &Catalog, dataset: &LocalizedDataSet) -> Self {
        Self::new(
            catalog.projects.iter().map(|p| p.id.clone()),
            catalog.careers.iter().map(|c| c.id.clone()),
            dataset.services.iter().map(|s| s.id.clone()),
        )
    }
}

/// Transient selection state of one page view. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    known: Arc<KnownIds>,
    selected_project: Option<String>,
    category_filter: ServiceCategory,
    project_filter: ProjectFilter,
    expanded_career: Option<String>,
    expanded_service: Option<String>,
    active_section: Option<String>,
    mobile_menu_open: bool,
}

impl ViewState {
    pub fn new(known: KnownIds) -> Self {
        Self {
            known: Arc::new(known),
            selected_project: None,
            category_filter: ServiceCategory::All,
            project_filter: ProjectFilter::All,
            expanded_career: None,
            expanded_service: None,
            active_section: None,
            mobile_menu_open: false,
        }
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    pub fn category_filter(&self) -> ServiceCategory {
        self.category_filter
    }

    pub fn project_filter(&self) -> ProjectFilter {
        self.project_filter
    }

    pub fn expanded_career(&self) -> Option<&str> {
        self.expanded_career.as_deref()
    }

    pub fn expanded_service(&self) -> Option<&str> {
        self.expanded_service.as_deref()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Select `id`, or clear the selection when `id` is already selected.
    pub fn select_project(&mut self, id: &str) {
        toggle(&mut self.selected_project, id, &self.known.projects);
    }

    pub fn clear_project_selection(&mut self) {
        self.selected_project = None;
    }

    pub fn set_category_filter(&mut self, category: ServiceCategory) {
        self.category_filter = category;
    }

    pub fn set_project_filter(&mut self, filter: ProjectFilter) {
        self.project_filter = filter;
    }

    pub fn toggle_career_entry(&mut self, id: &str) {
        toggle(&mut self.expanded_career, id, &self.known.careers);
    }

    pub fn toggle_service_tools(&mut self, id: &str) {
        toggle(&mut self.expanded_service, id, &self.known.services);
    }

    /// Latest report wins.
    pub fn report_visible_section(&mut self, id: &str) {
        self.active_section = Some(id.to_string());
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn is_project_selected(&self, id: &str) -> bool {
        self.selected_project.as_deref() == Some(id)
    }

    /// The current career entry is always shown in full.
    pub fn is_career_expanded(&self, id: &str, is_current: bool) -> bool {
        is_current || self.expanded_career.as_deref() == Some(id)
    }

    pub fn is_service_expanded(&self, id: &str) -> bool {
        self.expanded_service.as_deref() == Some(id)
    }

    pub fn is_section_active(&self, section: Section) -> bool {
        self.active_section.as_deref() == Some(section.id())
    }

    pub fn shows_category(&self, category: ServiceCategory) -> bool {
        self.category_filter == ServiceCategory::All || self.category_filter == category
    }

    pub fn shows_project_status(&self, status: ProjectStatus) -> bool {
        self.project_filter.admits(status)
    }
}

fn toggle(slot: &mut Option<String>, id: &str, known: &HashSet<String>) {
    if !known.contains(id) {
        return;
    }
    if slot.as_deref() == Some(id) {
        *slot = None;
    } else {
        *slot = Some(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site_content;
    use crate::i18n::Language;

    fn state() -> ViewState {
        ViewState::new(KnownIds::new(
            ["dopa-live", "nova-sapiens", "wire-fire"],
            ["goart", "red-bull"],
            ["ai-workflow", "growth"],
        ))
    }

    #[test]
    fn test_defaults() {
        let s = state();
        assert_eq!(s.selected_project(), None);
        assert_eq!(s.category_filter(), ServiceCategory::All);
        assert_eq!(s.project_filter(), ProjectFilter::All);
        assert_eq!(s.expanded_career(), None);
        assert_eq!(s.active_section(), None);
        assert!(!s.mobile_menu_open());
    }

    #[test]
    fn test_select_project_toggles() {
        let mut s = state();
        s.select_project("dopa-live");
        assert_eq!(s.selected_project(), Some("dopa-live"));
        s.select_project("dopa-live");
        assert_eq!(s.selected_project(), None);
    }

    #[test]
    fn test_select_project_replaces() {
        let mut s = state();
        s.select_project("dopa-live");
        s.select_project("nova-sapiens");
        assert_eq!(s.selected_project(), Some("nova-sapiens"));
        assert!(!s.is_project_selected("dopa-live"));
        assert!(s.is_project_selected("nova-sapiens"));

        s.clear_project_selection();
        assert_eq!(s.selected_project(), None);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut s = state();
        s.select_project("dopa-live");
        s.select_project("not-a-project");
        assert_eq!(s.selected_project(), Some("dopa-live"));

        s.toggle_career_entry("nowhere");
        assert_eq!(s.expanded_career(), None);

        s.toggle_service_tools("nothing");
        assert_eq!(s.expanded_service(), None);
    }

    #[test]
    fn test_category_filter_last_write_wins() {
        let mut s = state();
        s.set_category_filter(ServiceCategory::Ai);
        s.set_category_filter(ServiceCategory::Data);
        assert_eq!(s.category_filter(), ServiceCategory::Data);
        assert!(s.shows_category(ServiceCategory::Data));
        assert!(!s.shows_category(ServiceCategory::Ai));

        s.set_category_filter(ServiceCategory::All);
        assert!(ServiceCategory::ALL.iter().all(|c| s.shows_category(*c)));
    }

    #[test]
    fn test_project_filter() {
        let mut s = state();
        assert!(s.shows_project_status(ProjectStatus::Completed));
        s.set_project_filter(ProjectFilter::Paused);
        assert!(s.shows_project_status(ProjectStatus::Paused));
        assert!(!s.shows_project_status(ProjectStatus::Active));
        assert!(!s.shows_project_status(ProjectStatus::Completed));
        s.set_project_filter(ProjectFilter::Active);
        assert!(s.shows_project_status(ProjectStatus::Active));
    }

    #[test]
    fn test_career_expansion() {
        let mut s = state();
        assert!(s.is_career_expanded("goart", true));
        assert!(!s.is_career_expanded("red-bull", false));

        s.toggle_career_entry("red-bull");
        assert!(s.is_career_expanded("red-bull", false));
        s.toggle_career_entry("red-bull");
        assert!(!s.is_career_expanded("red-bull", false));

        // collapsing the current entry has no visible effect
        s.toggle_career_entry("goart");
        s.toggle_career_entry("goart");
        assert!(s.is_career_expanded("goart", true));
    }

    #[test]
    fn test_service_tools_single_open() {
        let mut s = state();
        s.toggle_service_tools("ai-workflow");
        s.toggle_service_tools("growth");
        assert!(s.is_service_expanded("growth"));
        assert!(!s.is_service_expanded("ai-workflow"));
    }

    #[test]
    fn test_visible_section_latest_report_wins() {
        let mut s = state();
        s.report_visible_section("hizmetler");
        s.report_visible_section("projeler");
        s.report_visible_section("cv");
        assert_eq!(s.active_section(), Some("cv"));
        assert!(s.is_section_active(Section::Cv));
        assert!(!s.is_section_active(Section::Services));
    }

    #[test]
    fn test_mobile_menu() {
        let mut s = state();
        s.toggle_mobile_menu();
        assert!(s.mobile_menu_open());
        s.toggle_mobile_menu();
        assert!(!s.mobile_menu_open());
        s.toggle_mobile_menu();
        s.close_mobile_menu();
        assert!(!s.mobile_menu_open());
        s.close_mobile_menu();
        assert!(!s.mobile_menu_open());
    }

    #[test]
    fn test_known_ids_from_shipped_content() {
        let content = site_content();
        let known = KnownIds::from_content(&content.catalog, content.datasets.get(Language::Tr));
        let mut s = ViewState::new(known);
        s.select_project("dopa-live");
        assert_eq!(s.selected_project(), Some("dopa-live"));
        s.select_project("dopa-live");
        assert_eq!(s.selected_project(), None);

        let current = content
            .catalog
            .careers
            .iter()
            .find(|c| c.current)
            .expect("one current career entry");
        assert!(s.is_career_expanded(&current.id, current.current));
    }

    #[test]
    fn test_sections() {
        assert_eq!(Section::Projects.href(), "#projeler");
        assert_eq!(Section::Cv.nav_key(), "nav.cv");
    }
}
