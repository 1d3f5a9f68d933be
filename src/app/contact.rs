use leptos::prelude::*;

use crate::content::ContactOption;
use crate::view_state::Section;

use super::{use_i18n, SectionHeading, TrackedSection};

#[component]
pub fn ContactSection() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <TrackedSection section=Section::Contact class="pb-24">
            <SectionHeading
                badge="contact.badge"
                title="contact.title"
                subtitle="contact.subtitle"
            />
            <div class="grid gap-5 md:grid-cols-3">
                {move || {
                    i18n.dataset()
                        .contact_options
                        .into_iter()
                        .map(|option| view! { <ContactCard option /> })
                        .collect_view()
                }}
            </div>
        </TrackedSection>
    }
}

#[component]
fn ContactCard(option: ContactOption) -> impl IntoView {
    let external = option.href.starts_with("http");
    let (frame, cta) = if option.primary {
        (
            "border-cyan-400/40 bg-cyan-400/10",
            "bg-cyan-400 text-night hover:bg-cyan-300",
        )
    } else {
        (
            "border-white/10 bg-white/5",
            "border border-white/15 text-white hover:border-white/40",
        )
    };
    view! {
        <div class=format!("flex flex-col rounded-2xl border p-6 {frame}")>
            <h3 class="mb-2 text-lg font-semibold text-white">{option.title}</h3>
            <p class="mb-6 flex-1 text-sm text-slate-300">{option.description}</p>
            <a
                href=option.href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                class=format!("self-start rounded-full px-5 py-2 text-sm font-semibold transition-colors {cta}")
            >
                {option.cta}
            </a>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    // BUILD_TIME is RFC 3339, so the year leads
    let year = env!("BUILD_TIME").get(..4).unwrap_or("2026");
    view! {
        <footer class="border-t border-white/5 py-8 text-center text-xs text-slate-500">
            {move || format!("© {year} Alperen Demirdöğer. {}", i18n.t("footer.rights"))}
        </footer>
    }
}
