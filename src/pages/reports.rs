//! Incident reports. Admins review every report, guards file reports and
//! attach photos, clients read the reports about their vehicles.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::report_dialogs::{ReportCreateDialog, ReportDetailDialog, ReportUploadDialog};
use crate::net::AppGateway;
use crate::net::reports::{self, ReportScope};
use crate::net::types::Report;
use crate::state::access::{self, Action};
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;
use crate::util::format;
use crate::util::notify::Notifier;

fn page_title(scope: Option<ReportScope>) -> &'static str {
    match scope {
        Some(ReportScope::All) => "Incident reports",
        Some(ReportScope::Filed) => "My reports",
        Some(ReportScope::Concerning) => "Reports about my vehicles",
        None => "Reports",
    }
}

/// Newest first. Timestamps are ISO-8601 so they order as text; ties and
/// missing dates fall back to the id.
fn newest_first(mut list: Vec<Report>) -> Vec<Report> {
    list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    list
}

#[derive(Clone, Debug, PartialEq)]
enum Open {
    Create,
    Upload(i64),
    Detail(Report),
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, access::allowed_roles(Action::ViewReports), use_navigate());

    let roles = move || auth.with(AuthState::roles);
    let scope = Signal::derive(move || ReportScope::for_roles(&roles()));
    let can_file = move || access::can(&roles(), Action::FileReports);
    let can_review = move || access::can(&roles(), Action::ReviewReports);

    let list = RwSignal::new(Vec::<Report>::new());
    let loaded = RwSignal::new(false);
    let open = RwSignal::new(None::<Open>);

    let reload = Callback::new(move |()| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match reports::list_reports(&gateway, scope).await {
                Ok(items) => {
                    list.try_set(newest_first(items));
                }
                Err(err) => {
                    list.try_set(Vec::new());
                    notifier.failure(&err);
                }
            }
            loaded.try_set(true);
        });
    });
    reload.run(());

    let close = Callback::new(move |()| open.set(None));
    let saved = Callback::new(move |()| {
        open.set(None);
        reload.run(());
    });
    let on_view = Callback::new(move |report: Report| open.set(Some(Open::Detail(report))));
    let on_upload = Callback::new(move |report_id: i64| open.set(Some(Open::Upload(report_id))));

    view! {
        <Show
            when=move || auth.with(|state| state.user.is_some())
            fallback=|| view! { <p class="page-placeholder">"Redirecting to login..."</p> }
        >
            <div class="reports-page">
                <NavBar title=page_title(scope.get_untracked())/>
                <Show when=can_file>
                    <div class="reports-page__actions">
                        <button class="btn btn--primary" on:click=move |_| open.set(Some(Open::Create))>
                            "+ New report"
                        </button>
                    </div>
                </Show>
                <Show
                    when=move || !list.with(Vec::is_empty)
                    fallback=move || view! {
                        <p class="reports-page__empty">{move || if loaded.get() { "No reports" } else { "Loading reports..." }}</p>
                    }
                >
                    <table class="reports-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Status"</th>
                                <th>"Filed"</th>
                                <th>"Client"</th>
                                <th>"Vehicle"</th>
                                <th>"Guard"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let uploads = can_file();
                                list.get()
                                    .into_iter()
                                    .map(|report| view! {
                                        <ReportRow report=report uploads=uploads on_view=on_view on_upload=on_upload/>
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
                {move || match open.get() {
                    Some(Open::Create) => view! { <ReportCreateDialog on_cancel=close on_saved=saved/> }.into_any(),
                    Some(Open::Upload(report_id)) => {
                        view! { <ReportUploadDialog report_id=report_id on_cancel=close on_saved=saved/> }.into_any()
                    }
                    Some(Open::Detail(report)) => {
                        view! { <ReportDetailDialog report=report review=can_review() on_close=close on_saved=saved/> }.into_any()
                    }
                    None => ().into_any(),
                }}
            </div>
        </Show>
    }
}

#[component]
fn ReportRow(report: Report, uploads: bool, on_view: Callback<Report>, on_upload: Callback<i64>) -> impl IntoView {
    let id = report.id;
    let row = report.clone();

    view! {
        <tr class="reports-table__row">
            <td>{id}</td>
            <td><span class=format!("badge {}", report.status.css_modifier())>{report.status.label()}</span></td>
            <td>{format::timestamp(report.created_at.as_deref())}</td>
            <td>{format::report_client(&report)}</td>
            <td>{format::report_vehicle(&report)}</td>
            <td>{report.guard_name.clone().unwrap_or_else(|| "-".to_owned())}</td>
            <td class="reports-table__controls">
                <button class="btn" on:click=move |_| on_view.run(row.clone())>
                    "View"
                </button>
                <Show when=move || uploads>
                    <button class="btn btn--primary" on:click=move |_| on_upload.run(id)>
                        "Add images"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
