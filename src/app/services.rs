use leptos::prelude::*;

use crate::content::{Service, ServiceCategory, ServiceTool, ToolStatus};
use crate::view_state::Section;

use super::{pill_class, use_i18n, use_view_state, SectionHeading, TrackedSection};

#[component]
pub fn ServicesSection() -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();

    view! {
        <TrackedSection section=Section::Services>
            <SectionHeading
                badge="services.badge"
                title="services.title"
                subtitle="services.subtitle"
            />
            <div class="mb-8 flex flex-wrap gap-2">
                {ServiceCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class=move || pill_class(
                                    view_state.with(|s| s.category_filter() == category),
                                )
                                on:click=move |_| view_state.update(|s| s.set_category_filter(category))
                            >
                                {move || i18n.t(category.label_key())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid gap-5 md:grid-cols-2">
                {move || {
                    i18n.dataset()
                        .services
                        .into_iter()
                        .filter(|service| view_state.with(|s| s.shows_category(service.category)))
                        .map(|service| view! { <ServiceCard service /> })
                        .collect_view()
                }}
            </div>
            <div class="mt-10 flex flex-col items-start justify-between gap-4 rounded-2xl border border-cyan-400/20 bg-cyan-400/5 p-6 md:flex-row md:items-center">
                <p class="text-slate-200">{move || i18n.t("services.cta.text")}</p>
                <a
                    href=Section::Contact.href()
                    class="rounded-full bg-cyan-400 px-5 py-2 text-sm font-semibold text-night hover:bg-cyan-300"
                >
                    {move || i18n.t("services.cta.button")}
                </a>
            </div>
        </TrackedSection>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();
    let live = service.live_tools();
    let Service {
        id,
        icon,
        title,
        description,
        deliverables,
        tools,
        ..
    } = service;
    let open = Memo::new({
        let id = id.clone();
        move |_| view_state.with(|s| s.is_service_expanded(&id))
    });

    view! {
        <article class="rounded-2xl border border-white/10 bg-white/5 p-6 transition-colors hover:border-white/20">
            <div class="mb-4 flex items-center gap-3">
                <span class="grid h-10 w-10 place-items-center rounded-xl bg-cyan-400/15 text-lg">
                    {icon}
                </span>
                <h3 class="text-lg font-semibold text-white">{title}</h3>
            </div>
            <p class="mb-4 text-sm text-slate-300">{description}</p>
            <ul class="mb-5 space-y-1 text-sm text-slate-400">
                {deliverables
                    .into_iter()
                    .map(|d| view! { <li>"→ " {d}</li> })
                    .collect_view()}
            </ul>
            <button
                class="text-xs font-medium text-cyan-300 hover:text-cyan-200"
                on:click=move |_| view_state.update(|s| s.toggle_service_tools(&id))
            >
                {move || {
                    let label = if open.get() { "services.tools.hide" } else { "services.tools.show" };
                    format!("{} · {live} {}", i18n.t(label), i18n.t("services.tools.live"))
                }}
            </button>
            <Show when=move || open.get()>
                <ul class="mt-4 space-y-3">
                    {tools.iter().cloned().map(|tool| view! { <ToolRow tool /> }).collect_view()}
                </ul>
            </Show>
        </article>
    }
}

#[component]
fn ToolRow(tool: ServiceTool) -> impl IntoView {
    let i18n = use_i18n();
    let status = tool.status;
    let badge = match status {
        ToolStatus::Live => "bg-emerald-400/15 text-emerald-300",
        ToolStatus::Building => "bg-amber-400/15 text-amber-300",
        ToolStatus::Planned => "bg-slate-400/15 text-slate-300",
    };
    view! {
        <li class="rounded-xl border border-white/5 bg-black/20 p-3">
            <div class="flex items-center justify-between gap-2">
                <span class="text-sm font-medium text-white">{tool.name}</span>
                <span class=format!("rounded-full px-2 py-0.5 text-xs {badge}")>
                    {move || i18n.t(status.label_key())}
                </span>
            </div>
            <p class="mt-1 text-xs text-slate-400">{tool.description}</p>
        </li>
    }
}
