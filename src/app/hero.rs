use leptos::prelude::*;

use crate::view_state::Section;

use super::activity::ActivityFeed;
use super::use_i18n;

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <section class="relative pb-8 pt-36 md:pt-44">
            <h1 class="font-display text-4xl font-semibold leading-tight text-white md:text-6xl">
                <span class="block">{move || i18n.t("hero.title.day")}</span>
                <span class="block bg-gradient-to-r from-cyan-300 via-indigo-300 to-emerald-300 bg-clip-text text-transparent">
                    {move || i18n.t("hero.title.night")}
                </span>
            </h1>
            <p class="mt-6 max-w-2xl text-lg text-slate-300">{move || i18n.t("hero.subtitle")}</p>
            <div class="mt-8 flex flex-wrap gap-4">
                <a
                    href=Section::Services.href()
                    class="rounded-full bg-cyan-400 px-6 py-3 text-sm font-semibold text-night transition-colors hover:bg-cyan-300"
                >
                    {move || i18n.t("hero.cta.services")}
                </a>
                <a
                    href=Section::Projects.href()
                    class="rounded-full border border-white/15 px-6 py-3 text-sm font-semibold text-white transition-colors hover:border-white/40"
                >
                    {move || i18n.t("hero.cta.projects")}
                </a>
            </div>
            <div class="mt-12 grid grid-cols-2 gap-4 md:grid-cols-4">
                {move || {
                    i18n.dataset()
                        .hero_stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="rounded-2xl border border-white/10 bg-white/5 p-4">
                                    <div class="text-2xl font-semibold text-white">{stat.value}</div>
                                    <div class="mt-1 text-xs text-slate-400">
                                        {i18n.t(&stat.label_key)}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <ActivityFeed />
        </section>
    }
}
