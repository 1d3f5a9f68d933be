use leptos::{either::Either, prelude::*};

use crate::content::{site_content, Project, ProjectStatus, TimelineEntry};
use crate::view_state::{ProjectFilter, Section};

use super::{pill_class, use_i18n, use_view_state, SectionHeading, TrackedSection};

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "rounded-full bg-emerald-400/15 px-2 py-0.5 text-xs text-emerald-300",
        ProjectStatus::Completed => "rounded-full bg-blue-400/15 px-2 py-0.5 text-xs text-blue-300",
        ProjectStatus::Paused => "rounded-full bg-slate-400/15 px-2 py-0.5 text-xs text-slate-300",
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();
    let catalog = &*site_content().catalog;

    let selected = move || {
        view_state
            .with(|s| s.selected_project().map(str::to_string))
            .and_then(|id| catalog.project(&id))
    };

    view! {
        <TrackedSection section=Section::Projects>
            <SectionHeading
                badge="projects.badge"
                title="projects.title"
                subtitle="projects.subtitle"
            />
            <div class="mb-8 flex flex-wrap gap-2">
                {ProjectFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class=move || pill_class(
                                    view_state.with(|s| s.project_filter() == filter),
                                )
                                on:click=move |_| view_state.update(|s| s.set_project_filter(filter))
                            >
                                {move || i18n.t(filter.label_key())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                catalog
                    .featured_project()
                    .filter(|p| view_state.with(|s| s.shows_project_status(p.status)))
                    .map(|project| view! { <ProjectCard project featured=true /> })
            }}
            <div class="grid gap-5 md:grid-cols-2">
                {move || {
                    catalog
                        .projects
                        .iter()
                        .filter(|p| !p.featured)
                        .filter(|p| view_state.with(|s| s.shows_project_status(p.status)))
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
            {move || selected().map(|project| view! { <TimelinePanel project /> })}
        </TrackedSection>
    }
}

#[component]
fn ProjectCard(project: &'static Project, #[prop(optional)] featured: bool) -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();
    let id = project.id.as_str();
    let is_selected = move || view_state.with(|s| s.is_project_selected(id));
    let blurb = move || {
        i18n.with_dataset(|d| d.project(id).map(|b| b.description.clone()))
            .unwrap_or_default()
    };
    let frame = if featured { "mb-6 md:p-8" } else { "" };

    view! {
        <article class=move || {
            let border = if is_selected() {
                "border-cyan-400/50 bg-white/[0.07]"
            } else {
                "border-white/10 bg-white/5"
            };
            format!("relative overflow-hidden rounded-2xl border p-6 transition-colors {frame} {border}")
        }>
            <div class=format!(
                "pointer-events-none absolute inset-0 bg-gradient-to-br opacity-10 {}",
                project.accent,
            ) />
            <div class="relative">
                <div class="mb-2 flex flex-wrap items-center gap-2">
                    {featured
                        .then(|| {
                            view! {
                                <span class="rounded-full bg-amber-400/15 px-3 py-1 text-xs font-medium text-amber-300">
                                    {move || i18n.t("projects.featured")}
                                </span>
                            }
                        })}
                    <h3 class="text-lg font-semibold text-white">{project.name.clone()}</h3>
                    <span class=status_class(project.status)>
                        {move || i18n.t(project.status.label_key())}
                    </span>
                </div>
                <p class="mb-4 text-sm text-slate-300">{blurb}</p>
                <div class="mb-4 flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="rounded-md bg-white/5 px-2 py-0.5 font-mono text-xs text-slate-400">
                                    {t.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-4 text-sm">
                    <button
                        class="text-cyan-300 hover:text-cyan-200"
                        on:click=move |_| view_state.update(|s| s.select_project(id))
                    >
                        {move || {
                            format!(
                                "{} · {} {}",
                                i18n.t("projects.viewTimeline"),
                                project.timeline.len(),
                                i18n.t("projects.updates"),
                            )
                        }}
                    </button>
                    {project
                        .url
                        .clone()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-emerald-300 hover:text-emerald-200"
                                >
                                    {move || i18n.t("projects.live")}
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

#[component]
fn TimelinePanel(project: &'static Project) -> impl IntoView {
    let i18n = use_i18n();
    let view_state = use_view_state();
    view! {
        <div class="mt-6 rounded-2xl border border-cyan-400/20 bg-night/90 p-6">
            <div class="mb-5 flex items-center justify-between">
                <h3 class="font-semibold text-white">
                    {project.name.clone()} " · " {move || i18n.t("projects.timeline")}
                </h3>
                <button
                    class="text-xs text-slate-400 hover:text-white"
                    on:click=move |_| view_state.update(|s| s.clear_project_selection())
                >
                    {move || i18n.t("projects.close")}
                </button>
            </div>
            {if project.timeline.is_empty() {
                Either::Left(
                    view! {
                        <p class="text-sm text-slate-400">{move || i18n.t("projects.noUpdates")}</p>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <ol class="relative ml-1 space-y-4 border-l border-white/10 pl-6">
                            {project
                                .timeline
                                .iter()
                                .map(|entry| view! { <TimelineRow entry /> })
                                .collect_view()}
                        </ol>
                    },
                )
            }}
        </div>
    }
}

#[component]
fn TimelineRow(entry: &'static TimelineEntry) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <li class="relative">
            <span class=format!(
                "absolute -left-[1.95rem] top-1.5 h-2.5 w-2.5 rounded-full {}",
                entry.kind.dot_class(),
            ) />
            <div class="flex flex-wrap items-center gap-2 text-xs text-slate-400">
                <span class="font-mono">{entry.date.format("%Y-%m-%d").to_string()}</span>
                <span class="rounded bg-white/5 px-1.5 py-0.5">
                    {move || i18n.t(entry.kind.label_key())}
                </span>
            </div>
            <p class="mt-1 text-sm font-medium text-white">{entry.title.clone()}</p>
            {entry
                .description
                .clone()
                .map(|d| view! { <p class="text-xs text-slate-400">{d}</p> })}
        </li>
    }
}
