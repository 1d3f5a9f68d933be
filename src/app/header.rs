use leptos::prelude::*;

use crate::view_state::Section;

use super::{use_i18n, use_view_state};

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();
    let menu_open = move || view_state.with(|s| s.mobile_menu_open());

    view! {
        <header class="fixed inset-x-0 top-0 z-40 border-b border-white/5 bg-night/80 backdrop-blur-md">
            <nav class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <a
                    href="#"
                    class="font-display text-lg font-semibold tracking-tight text-white"
                    on:click=move |_| view_state.update(|s| s.close_mobile_menu())
                >
                    "Nova Sapiens"
                </a>
                <div class="hidden items-center gap-8 text-sm md:flex">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section /> })
                        .collect_view()}
                    <LanguageToggle />
                </div>
                <button
                    class="text-xl text-slate-300 md:hidden"
                    aria-label=move || i18n.t("nav.menu")
                    on:click=move |_| view_state.update(|s| s.toggle_mobile_menu())
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=menu_open>
                <div class="flex flex-col gap-1 border-t border-white/5 px-6 pb-4 pt-2 md:hidden">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section mobile=true /> })
                        .collect_view()}
                    <div class="pt-2">
                        <LanguageToggle />
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn NavLink(section: Section, #[prop(optional)] mobile: bool) -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();
    let is_active = move || view_state.with(|s| s.is_section_active(section));
    let base = if mobile {
        "block py-2"
    } else {
        "relative transition-colors"
    };

    view! {
        <a
            href=section.href()
            on:click=move |_| view_state.update(|s| s.close_mobile_menu())
            class=move || {
                let tone = if is_active() {
                    "text-cyan-300"
                } else {
                    "text-slate-300 hover:text-white"
                };
                format!("{base} {tone}")
            }
        >
            {move || i18n.t(section.nav_key())}
            <Show when=move || !mobile && is_active()>
                <span class="absolute -bottom-1 left-0 h-px w-full bg-cyan-300" />
            </Show>
        </a>
    }
}

#[component]
fn LanguageToggle() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <button
            class="rounded-full border border-white/15 px-3 py-1 text-xs font-semibold text-slate-200 transition-colors hover:border-cyan-300/60"
            title=move || i18n.t("nav.language")
            on:click=move |_| i18n.set_lang(i18n.lang_untracked().other())
        >
            {move || i18n.lang().other().code().to_uppercase()}
        </button>
    }
}
