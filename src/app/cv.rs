use leptos::prelude::*;

use crate::content::{site_content, Career, CareerKind};
use crate::view_state::Section;

use super::{use_i18n, use_view_state, SectionHeading, TrackedSection};

/// Highlights shown for a collapsed career entry.
const COLLAPSED_HIGHLIGHTS: usize = 2;

const STAT_KEYS: [&str; 4] = [
    "cv.stat.years",
    "cv.stat.companies",
    "cv.stat.startup",
    "cv.stat.education",
];

#[component]
pub fn CvSection() -> impl IntoView {
    let i18n = use_i18n();
    let catalog = &*site_content().catalog;

    view! {
        <TrackedSection section=Section::Cv>
            <SectionHeading badge="cv.badge" title="cv.title" subtitle="cv.subtitle" />
            <div class="mb-10 flex flex-wrap gap-3">
                {STAT_KEYS
                    .into_iter()
                    .map(|key| {
                        view! {
                            <span class="rounded-full border border-white/10 bg-white/5 px-4 py-1.5 text-sm text-slate-200">
                                {move || i18n.t(key)}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="relative space-y-5 border-l border-white/10 pl-6">
                {catalog
                    .careers
                    .iter()
                    .map(|career| view! { <CareerEntry career /> })
                    .collect_view()}
            </div>
            <div class="mt-12 grid gap-6 md:grid-cols-2">
                <div>
                    <h3 class="mb-4 text-sm font-semibold uppercase tracking-widest text-slate-400">
                        {move || i18n.t("cv.education")}
                    </h3>
                    <div class="space-y-3">
                        {catalog
                            .education
                            .iter()
                            .map(|ed| {
                                view! {
                                    <div class="rounded-xl border border-white/10 bg-white/5 p-4">
                                        <div class="font-medium text-white">{ed.school.clone()}</div>
                                        <div class="text-sm text-slate-300">
                                            {format!("{}, {}", ed.degree, ed.field)}
                                        </div>
                                        <div class="mt-1 text-xs text-slate-500">
                                            {format!("{} · {}", ed.period, ed.note)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h3 class="mb-4 text-sm font-semibold uppercase tracking-widest text-slate-400">
                        {move || i18n.t("cv.skills")}
                    </h3>
                    <div class="space-y-4">
                        {catalog
                            .skill_categories
                            .iter()
                            .map(|category| {
                                view! {
                                    <div>
                                        <div class="mb-2 text-sm text-slate-300">
                                            {category.title.clone()}
                                        </div>
                                        <div class="flex flex-wrap gap-1.5">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="rounded-md bg-white/5 px-2 py-0.5 text-xs text-slate-400">
                                                            {skill.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <GrowthPortfolio />
        </TrackedSection>
    }
}

#[component]
fn CareerEntry(career: &'static Career) -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();
    let expanded =
        Memo::new(move |_| view_state.with(|s| s.is_career_expanded(&career.id, career.current)));
    let collapsible = !career.current && career.highlights.len() > COLLAPSED_HIGHLIGHTS;

    let highlights = move || {
        let shown = if expanded.get() {
            career.highlights.len()
        } else {
            COLLAPSED_HIGHLIGHTS.min(career.highlights.len())
        };
        career.highlights[..shown]
            .iter()
            .map(|h| view! { <li>{h.clone()}</li> })
            .collect_view()
    };

    view! {
        <article class="relative rounded-2xl border border-white/10 bg-white/5 p-5">
            <span class=format!(
                "absolute -left-[1.95rem] top-6 h-3 w-3 rounded-full bg-gradient-to-br {}",
                career.accent,
            ) />
            <div class="flex flex-wrap items-baseline justify-between gap-2">
                <div class="flex flex-wrap items-center gap-2">
                    <h3 class="font-semibold text-white">{career.company.clone()}</h3>
                    {career
                        .current
                        .then(|| {
                            view! {
                                <span class="rounded-full bg-emerald-400/15 px-2 py-0.5 text-xs text-emerald-300">
                                    {move || i18n.t("cv.current")}
                                </span>
                            }
                        })}
                    {(career.kind == CareerKind::Entrepreneurship)
                        .then(|| {
                            view! {
                                <span class="rounded-full bg-purple-400/15 px-2 py-0.5 text-xs text-purple-300">
                                    {move || i18n.t("cv.badge.startup")}
                                </span>
                            }
                        })}
                </div>
                <span class="text-xs text-slate-500">{career.period.clone()}</span>
            </div>
            <div class="mb-3 text-sm text-slate-300">
                {format!("{} · {}", career.role, career.location)}
            </div>
            <ul class="list-disc space-y-1 pl-5 text-sm text-slate-400">{highlights}</ul>
            <Show when=move || collapsible>
                <button
                    class="mt-3 text-xs text-cyan-300 hover:text-cyan-200"
                    on:click=move |_| view_state.update(|s| s.toggle_career_entry(&career.id))
                >
                    {move || {
                        if expanded.get() { i18n.t("cv.collapse") } else { i18n.t("cv.expand") }
                    }}
                </button>
            </Show>
        </article>
    }
}

#[component]
fn GrowthPortfolio() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="mt-12">
            <div class="mb-4 flex items-baseline justify-between">
                <h3 class="text-sm font-semibold uppercase tracking-widest text-slate-400">
                    {move || i18n.t("cv.portfolio.title")}
                </h3>
                <span class="text-sm text-emerald-300">{move || i18n.t("cv.portfolio.total")}</span>
            </div>
            <div class="grid grid-cols-2 gap-3 md:grid-cols-4">
                {move || {
                    i18n.dataset()
                        .growth_portfolio
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="rounded-xl border border-white/10 bg-white/5 p-4">
                                    <div class="mb-1 flex items-center gap-2">
                                        <img
                                            src=entry.logo
                                            alt=entry.name.clone()
                                            class="h-6 w-6 rounded-md object-contain"
                                            loading="lazy"
                                        />
                                        <span class="text-sm font-medium text-white">{entry.name}</span>
                                    </div>
                                    <div class="text-xs text-emerald-300">{entry.downloads}</div>
                                    <p class="mt-1 text-xs text-slate-400">{entry.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
