mod activity;
mod contact;
mod cv;
mod header;
mod hero;
mod projects;
mod services;

use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

#[cfg(feature = "hydrate")]
use crate::i18n::{LanguageStore, StorageError, STORAGE_KEY};

use crate::content::{site_content, LocalizedDataSet};
use crate::diagnostics::LogObserver;
use crate::i18n::{Language, Localizer, MemoryStore};
use crate::view_state::{KnownIds, Section, ViewState, SECTION_BAND};

use contact::{ContactSection, Footer};
use cv::CvSection;
use header::Header;
use hero::Hero;
use projects::ProjectsSection;
use services::ServicesSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/nova-sapiens.css" />
                <MetaTags />
            </head>
            <body class="bg-night font-sans text-slate-100">
                <App />
            </body>
        </html>
    }
}

/// Language state shared by every component of the page.
///
/// The [`Localizer`] answers lookups; the signal makes readers re-run when the
/// language changes.
#[derive(Clone, Copy)]
pub struct I18n {
    lang: RwSignal<Language>,
    localizer: StoredValue<Localizer>,
}

impl I18n {
    fn new(localizer: Localizer) -> Self {
        Self {
            lang: RwSignal::new(localizer.current_language()),
            localizer: StoredValue::new(localizer),
        }
    }

    pub fn lang(&self) -> Language {
        self.lang.get()
    }

    pub fn lang_untracked(&self) -> Language {
        self.lang.get_untracked()
    }

    pub fn t(&self, key: &str) -> String {
        self.lang.track();
        self.localizer.with_value(|l| l.translate(key).to_string())
    }

    pub fn with_dataset<R>(&self, f: impl FnOnce(&LocalizedDataSet) -> R) -> R {
        self.lang.track();
        self.localizer.with_value(|l| f(l.localized_dataset()))
    }

    pub fn dataset(&self) -> LocalizedDataSet {
        self.with_dataset(Clone::clone)
    }

    pub fn set_lang(&self, lang: Language) {
        self.localizer.update_value(|l| l.set_language(lang));
        self.lang.set(lang);
    }

    #[cfg(feature = "hydrate")]
    fn restore_from_browser(&self) {
        let mut restored = Language::default();
        self.localizer
            .update_value(|l| restored = l.restore_from(Arc::new(BrowserStore)));
        self.lang.set(restored);
    }
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

pub fn use_view_state() -> RwSignal<ViewState> {
    expect_context::<RwSignal<ViewState>>()
}

/// `localStorage`, looked up on every access so a blocked storage only costs
/// the write, never the language switch.
#[cfg(feature = "hydrate")]
struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl LanguageStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn save(&self, code: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(STORAGE_KEY, code)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let content = site_content();
    // server and first client render both start from the default language
    let localizer = Localizer::new(
        content.strings.clone(),
        content.datasets.clone(),
        Arc::new(MemoryStore::new()),
        Arc::new(LogObserver),
    );
    let i18n = I18n::new(localizer);
    provide_context(i18n);

    let known = KnownIds::from_content(&content.catalog, content.datasets.get(Language::default()));
    provide_context(RwSignal::new(ViewState::new(known)));

    #[cfg(feature = "hydrate")]
    Effect::watch(|| (), move |_, _, _| i18n.restore_from_browser(), true);

    view! {
        <Html attr:lang=move || i18n.lang().code() />
        <Title formatter=|title| format!("Alperen Demirdöğer - {title}") />

        <Router>
            <Header />
            <main class="relative mx-auto w-full max-w-6xl px-6">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Growth & AI" />
        <Hero />
        <SectionDivider />
        <ServicesSection />
        <SectionDivider />
        <ProjectsSection />
        <SectionDivider />
        <CvSection />
        <SectionDivider />
        <ContactSection />
    }
}

#[component]
fn SectionDivider() -> impl IntoView {
    view! {
        <div class="my-20 flex justify-center md:my-24">
            <div class="h-px w-40 bg-gradient-to-r from-transparent via-white/15 to-transparent" />
        </div>
    }
}

/// A page section that reports itself as active while it crosses the middle
/// band of the viewport.
#[component]
pub(crate) fn TrackedSection(
    section: Section,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let view_state = use_view_state();
    let node = NodeRef::<html::Section>::new();

    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                view_state.update(|s| s.report_visible_section(section.id()));
            }
        },
        UseIntersectionObserverOptions::default().root_margin(SECTION_BAND.to_string()),
    );

    view! {
        <section id=section.id() node_ref=node class=format!("scroll-mt-24 {class}")>
            {children()}
        </section>
    }
}

#[component]
pub(crate) fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="mb-8">
            <span class="mb-3 block text-xs font-semibold uppercase tracking-widest text-cyan-400">
                {move || i18n.t(badge)}
            </span>
            <h2 class="mb-2 font-display text-3xl font-semibold text-white">
                {move || i18n.t(title)}
            </h2>
            <p class="max-w-2xl text-slate-400">{move || i18n.t(subtitle)}</p>
        </div>
    }
}

pub(crate) fn pill_class(active: bool) -> &'static str {
    if active {
        "rounded-full border border-cyan-400/40 bg-cyan-400/15 px-4 py-1.5 text-sm text-cyan-200 transition-colors"
    } else {
        "rounded-full border border-white/10 bg-white/5 px-4 py-1.5 text-sm text-slate-300 hover:border-white/25 hover:text-white transition-colors"
    }
}
