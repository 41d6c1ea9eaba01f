//! Incident report dialogs: filing a report, attaching photos, and the
//! detail view where admins record their decision.

use leptos::prelude::*;

use crate::net::AppGateway;
use crate::net::gateway::Upload;
use crate::net::people::{self, PersonKind};
use crate::net::reports;
use crate::net::types::{PersonRecord, Report, ReportStatus, Vehicle};
use crate::state::forms::parse_choice;
use crate::state::reports::{ReportForm, ReviewForm, check_uploads};
use crate::util::files;
use crate::util::format;
use crate::util::notify::Notifier;

/// Guard's form for a new report.
#[component]
pub fn ReportCreateDialog(on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(ReportForm::default());
    let clients = RwSignal::new(Vec::<PersonRecord>::new());
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let load_gateway = gateway.clone();
    leptos::task::spawn_local(async move {
        match people::list_people(&load_gateway, PersonKind::Client, "").await {
            Ok(list) => {
                clients.try_set(list);
            }
            Err(err) => notifier.failure(&err),
        }
    });

    let vehicle_gateway = gateway.clone();
    let on_client = move |ev: leptos::ev::Event| {
        let picked = parse_choice(&event_target_value(&ev));
        if !form.try_update(|f| f.choose_client(picked)).unwrap_or(false) {
            return;
        }
        vehicles.set(Vec::new());
        let Some(client_id) = picked else {
            return;
        };
        let gateway = vehicle_gateway.clone();
        leptos::task::spawn_local(async move {
            let list = people::client_vehicles(&gateway, client_id).await.unwrap_or_else(|err| {
                log::warn!("vehicle lookup for client {client_id} failed: {err}");
                Vec::new()
            });
            // The guard may have switched clients while this was loading.
            if form.try_with_untracked(|f| f.client_id == Some(client_id)).unwrap_or(false) {
                vehicles.try_set(list);
            }
        });
    };

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let report = match form.with_untracked(ReportForm::validate) {
            Ok(report) => report,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match reports::create_report(&gateway, &report).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| "Report created".to_owned()));
                    on_saved.run(());
                }
                Err(err) => notifier.failure(&err),
            }
            busy.try_set(false);
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New incident report"</h2>
                <label class="dialog__label">
                    "Client"
                    <select class="dialog__input" on:change=on_client>
                        <option value="" selected=move || form.with(|f| f.client_id.is_none())>"Choose a client"</option>
                        {move || {
                            clients
                                .get()
                                .into_iter()
                                .map(|client| {
                                    let id = client.id;
                                    let dni = client.dni.clone().unwrap_or_default();
                                    let name = format::full_name(&[Some(client.full_name.as_str()), client.last_names.as_deref()]);
                                    view! {
                                        <option value=id.to_string() selected=move || form.with(|f| f.client_id == Some(id))>
                                            {format!("{name} (DNI {dni})")}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Vehicle"
                    <select
                        class="dialog__input"
                        disabled=move || form.with(|f| f.client_id.is_none())
                        on:change=move |ev| {
                            let picked = parse_choice(&event_target_value(&ev));
                            form.update(|f| f.vehicle_id = picked);
                        }
                    >
                        <option value="" selected=move || form.with(|f| f.vehicle_id.is_none())>
                            {move || {
                                let has_client = form.with(|f| f.client_id.is_some());
                                if has_client && vehicles.with(Vec::is_empty) { "No vehicles for this client" } else { "Choose a vehicle" }
                            }}
                        </option>
                        {move || {
                            vehicles
                                .get()
                                .into_iter()
                                .map(|vehicle| {
                                    let id = vehicle.id;
                                    view! {
                                        <option value=id.to_string() selected=move || form.with(|f| f.vehicle_id == Some(id))>
                                            {format!("{} {}", vehicle.plate, vehicle.description())}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        placeholder="Describe the incident..."
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        {move || if busy.get() { "Creating..." } else { "Create report" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Guard's photo upload for an existing report.
#[component]
pub fn ReportUploadDialog(report_id: i64, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    let picked = RwSignal::new(Vec::<Upload>::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_pick = move |ev: leptos::ev::Event| {
        files::read_picked(&ev, move |uploads| {
            picked.try_set(uploads);
        });
    };

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        if let Err(message) = picked.with_untracked(|uploads| check_uploads(uploads)) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        busy.set(true);
        let uploads = picked.get_untracked();
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match reports::upload_images(&gateway, report_id, uploads).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| "Images uploaded".to_owned()));
                    on_saved.run(());
                }
                Err(err) => notifier.failure(&err),
            }
            busy.try_set(false);
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Add images to report #{report_id}")}</h2>
                <input class="dialog__input" type="file" accept="image/*" multiple=true on:change=on_pick/>
                <ul class="dialog__chips">
                    {move || {
                        picked
                            .get()
                            .into_iter()
                            .map(|upload| view! {
                                <li class="dialog__chip">
                                    {format!("{} ({})", upload.file_name, format::file_size(upload.bytes.len()))}
                                </li>
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        {move || if busy.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Every field of a report plus its images. With `review` set, the admin can
/// change the status and leave a comment.
#[component]
pub fn ReportDetailDialog(report: Report, review: bool, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let notifier = expect_context::<Notifier>();
    let form = RwSignal::new(ReviewForm::for_report(&report));
    let busy = RwSignal::new(false);
    let report_id = report.id;

    let save = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let update = form.with_untracked(ReviewForm::to_update);
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match reports::update_status(&gateway, report_id, &update).await {
                Ok(message) => {
                    notifier.success(message.unwrap_or_else(|| format!("Report marked {}", update.status.label())));
                    on_saved.run(());
                }
                Err(err) => notifier.failure(&err),
            }
            busy.try_set(false);
        });
    });

    let guard = format!(
        "{} ({})",
        report.guard_name.as_deref().unwrap_or("-"),
        report.guard_username.as_deref().unwrap_or("-")
    );
    let client = format!(
        "{} (DNI {})",
        format::report_client(&report),
        report.client_dni.as_deref().unwrap_or("-")
    );
    let images = report.images.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Report #{report_id}")}</h2>
                <dl class="report-detail">
                    <dt>"Status"</dt>
                    <dd class=format!("badge {}", report.status.css_modifier())>{report.status.label()}</dd>
                    <dt>"Filed"</dt>
                    <dd>{format::timestamp(report.created_at.as_deref())}</dd>
                    <dt>"Client"</dt>
                    <dd>{client}</dd>
                    <dt>"Vehicle"</dt>
                    <dd>{format::report_vehicle(&report)}</dd>
                    <dt>"Guard"</dt>
                    <dd>{guard}</dd>
                    {report.reviewed_by.clone().map(|admin| view! {
                        <dt>"Reviewed by"</dt>
                        <dd>{admin}</dd>
                    })}
                    <dt>"Description"</dt>
                    <dd class="report-detail__text">{report.description.clone()}</dd>
                    <dt>"Admin comment"</dt>
                    <dd class="report-detail__text">
                        {report.admin_comment.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| "No comment".to_owned())}
                    </dd>
                </dl>
                <h3>"Images"</h3>
                <Show
                    when={
                        let empty = images.is_empty();
                        move || !empty
                    }
                    fallback=|| view! { <p class="report-detail__hint">"No images"</p> }
                >
                    <div class="report-detail__images">
                        {images
                            .iter()
                            .map(|image| view! {
                                <a href=image.download_url.clone() target="_blank" rel="noopener noreferrer">
                                    <img class="report-detail__thumb" src=image.download_url.clone() alt=image.file_name.clone()/>
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>
                <Show when=move || review>
                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            on:change=move |ev| form.update(|f| f.status = ReportStatus::from_wire(&event_target_value(&ev)))
                        >
                            {ReportStatus::ALL
                                .into_iter()
                                .map(|status| view! {
                                    <option value=status.as_wire() selected=move || form.with(|f| f.status == status)>
                                        {status.label()}
                                    </option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Comment"
                        <textarea
                            class="dialog__input"
                            placeholder="Optional"
                            prop:value=move || form.with(|f| f.comment.clone())
                            on:input=move |ev| form.update(|f| f.comment = event_target_value(&ev))
                        ></textarea>
                    </label>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <Show when=move || review>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| save.run(())>
                            "Save changes"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
