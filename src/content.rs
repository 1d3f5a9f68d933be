use std::{
    collections::HashSet,
    sync::{Arc, LazyLock},
};

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{Language, TranslationTable};

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::load().unwrap_or_else(|e| {
        log::error!("site content unavailable, rendering without it: {e}");
        SiteContent::default()
    })
});

/// Everything the page shows, parsed once from the embedded `content/` folder.
pub fn site_content() -> &'static SiteContent {
    &SITE_CONTENT
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("{section} differs between languages: {detail}")]
    ParityMismatch {
        section: &'static str,
        detail: String,
    },
    #[error("translation key {key:?} has no {lang} text")]
    MissingTranslation { lang: Language, key: String },
    #[error("localized project {0:?} has no catalog entry")]
    UnknownProject(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    #[default]
    All,
    Strategy,
    Ai,
    Data,
    Production,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::All,
        ServiceCategory::Strategy,
        ServiceCategory::Ai,
        ServiceCategory::Data,
        ServiceCategory::Production,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            ServiceCategory::All => "services.filter.all",
            ServiceCategory::Strategy => "services.filter.strategy",
            ServiceCategory::Ai => "services.filter.ai",
            ServiceCategory::Data => "services.filter.data",
            ServiceCategory::Production => "services.filter.production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Live,
    Building,
    Planned,
}

impl ToolStatus {
    pub fn label_key(self) -> &'static str {
        match self {
            ToolStatus::Live => "services.tool.live",
            ToolStatus::Building => "services.tool.building",
            ToolStatus::Planned => "services.tool.planned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Paused,
}

impl ProjectStatus {
    pub fn label_key(self) -> &'static str {
        match self {
            ProjectStatus::Active => "projects.status.active",
            ProjectStatus::Completed => "projects.status.completed",
            ProjectStatus::Paused => "projects.status.paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Feat,
    Fix,
    Perf,
    Chore,
    Other,
}

impl ChangeKind {
    pub fn label_key(self) -> &'static str {
        match self {
            ChangeKind::Feat => "timeline.feat",
            ChangeKind::Fix => "timeline.fix",
            ChangeKind::Perf => "timeline.perf",
            ChangeKind::Chore => "timeline.chore",
            ChangeKind::Other => "timeline.other",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            ChangeKind::Feat => "bg-emerald-400",
            ChangeKind::Fix => "bg-orange-400",
            ChangeKind::Perf => "bg-blue-400",
            ChangeKind::Chore => "bg-slate-400",
            ChangeKind::Other => "bg-purple-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerKind {
    Corporate,
    Entrepreneurship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTool {
    pub name: String,
    pub description: String,
    pub status: ToolStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub icon: String,
    pub category: ServiceCategory,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub tools: Vec<ServiceTool>,
}

impl Service {
    pub fn live_tools(&self) -> usize {
        self.tools
            .iter()
            .filter(|t| t.status == ToolStatus::Live)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthEntry {
    pub name: String,
    pub downloads: String,
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBlurb {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactOption {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cta: String,
    pub href: String,
    #[serde(default)]
    pub primary: bool,
}

/// Content whose text differs by language but whose shape does not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedDataSet {
    pub hero_stats: Vec<HeroStat>,
    pub services: Vec<Service>,
    pub growth_portfolio: Vec<GrowthEntry>,
    pub projects: Vec<ProjectBlurb>,
    pub contact_options: Vec<ContactOption>,
}

impl LocalizedDataSet {
    pub fn project(&self, id: &str) -> Option<&ProjectBlurb> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedContent {
    tr: LocalizedDataSet,
    en: LocalizedDataSet,
}

impl LocalizedContent {
    pub fn new(tr: LocalizedDataSet, en: LocalizedDataSet) -> Self {
        Self { tr, en }
    }

    pub fn get(&self, lang: Language) -> &LocalizedDataSet {
        match lang {
            Language::Tr => &self.tr,
            Language::En => &self.en,
        }
    }

    /// Compare the two languages entry by entry: same lengths, same identifiers.
    pub fn check_parity(&self) -> Vec<ContentError> {
        let (tr, en) = (&self.tr, &self.en);
        let mut problems = Vec::new();
        compare(
            "hero_stats",
            tr.hero_stats.iter().map(|s| s.label_key.as_str()),
            en.hero_stats.iter().map(|s| s.label_key.as_str()),
            &mut problems,
        );
        compare(
            "services",
            tr.services.iter().map(|s| s.id.as_str()),
            en.services.iter().map(|s| s.id.as_str()),
            &mut problems,
        );
        compare(
            "growth_portfolio",
            tr.growth_portfolio.iter().map(|g| g.name.as_str()),
            en.growth_portfolio.iter().map(|g| g.name.as_str()),
            &mut problems,
        );
        compare(
            "projects",
            tr.projects.iter().map(|p| p.id.as_str()),
            en.projects.iter().map(|p| p.id.as_str()),
            &mut problems,
        );
        compare(
            "contact_options",
            tr.contact_options.iter().map(|c| c.id.as_str()),
            en.contact_options.iter().map(|c| c.id.as_str()),
            &mut problems,
        );
        for (a, b) in tr.services.iter().zip(&en.services) {
            if a.category != b.category || a.tools.len() != b.tools.len() {
                problems.push(ContentError::ParityMismatch {
                    section: "services",
                    detail: format!("{:?} has a different category or tool count", a.id),
                });
            }
        }
        problems
    }
}

fn compare<'a>(
    section: &'static str,
    tr: impl Iterator<Item = &'a str>,
    en: impl Iterator<Item = &'a str>,
    problems: &mut Vec<ContentError>,
) {
    let tr = tr.collect::<Vec<_>>();
    let en = en.collect::<Vec<_>>();
    if tr.len() != en.len() {
        problems.push(ContentError::ParityMismatch {
            section,
            detail: format!("{} entries in tr, {} in en", tr.len(), en.len()),
        });
        return;
    }
    if let Some((a, b)) = tr.iter().zip(&en).find(|(a, b)| a != b) {
        problems.push(ContentError::ParityMismatch {
            section,
            detail: format!("{a:?} in tr lines up with {b:?} in en"),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tech: Vec<String>,
    pub status: ProjectStatus,
    pub accent: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub kind: CareerKind,
    #[serde(default)]
    pub current: bool,
    pub accent: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub period: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// Language-neutral content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub careers: Vec<Career>,
    pub education: Vec<Education>,
    pub skill_categories: Vec<SkillCategory>,
}

impl Catalog {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The main-quest project, shown ahead of the rest.
    pub fn featured_project(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.featured)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub strings: Arc<TranslationTable>,
    pub datasets: Arc<LocalizedContent>,
    pub catalog: Arc<Catalog>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let strings = TranslationTable::new(
            read_asset("i18n/tr.json")?,
            read_asset("i18n/en.json")?,
        );
        let datasets = LocalizedContent::new(
            read_asset("data/tr.json")?,
            read_asset("data/en.json")?,
        );
        let catalog = read_asset("catalog.json")?;
        Ok(Self {
            strings: Arc::new(strings),
            datasets: Arc::new(datasets),
            catalog: Arc::new(catalog),
        })
    }

    /// Every structural inconsistency between languages and the catalog.
    pub fn audit(&self) -> Vec<ContentError> {
        let mut problems = self
            .strings
            .missing_keys()
            .into_iter()
            .map(|(lang, key)| ContentError::MissingTranslation { lang, key })
            .collect::<Vec<_>>();
        problems.extend(self.datasets.check_parity());

        let catalog_ids = self
            .catalog
            .projects
            .iter()
            .map(|p| p.id.as_str())
            .collect::<HashSet<_>>();
        for lang in Language::ALL {
            problems.extend(
                self.datasets
                    .get(lang)
                    .projects
                    .iter()
                    .filter(|p| !catalog_ids.contains(p.id.as_str()))
                    .map(|p| ContentError::UnknownProject(p.id.clone())),
            );
        }
        problems.dedup();
        problems
    }
}

fn read_asset<T: DeserializeOwned>(path: &str) -> Result<T, ContentError> {
    let file = ContentAssets::get(path).ok_or_else(|| ContentError::Missing(path.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        file: path.to_string(),
        reason: e.to_string(),
    })
}
