//! Pending-registration approvals: the moderation table.
//!
//! One snapshot is fetched per visit (and after every approve/reject);
//! refinement, search and pagination are local slices of that snapshot, so
//! typing in the search box or flipping pages never refetches.

use dioxus::prelude::*;

use api::{ApprovalRequest, PendingUser};
use ui::{
    moderation, push_notice, use_access_gate, use_api, use_app_config, use_notices, Access,
    LogoutButton, NoticeLevel, MODERATOR_ROLES,
};

#[component]
pub fn Approvals() -> Element {
    let mut records = use_signal(Vec::<PendingUser>::new);
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut armed_reject = use_signal(|| Option::<i64>::None);
    let mut fetching = use_signal(|| false);
    let mut approving = use_signal(|| false);
    let mut rejecting = use_signal(|| false);

    let mut notices = use_notices();
    let api = use_api();
    let config = use_app_config();
    let page_size = config.pagination.page_size;
    let fetch_limit = config.pagination.fetch_limit;

    let access = use_access_gate(&MODERATOR_ROLES);

    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            // peek: the mount effect calls this and must not subscribe to
            // the in-flight flag, or every completed fetch would retrigger it
            if *fetching.peek() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                fetching.set(true);
                match api.pending_registrations(1, fetch_limit).await {
                    Ok(batch) => records.set(moderation::working_list(batch)),
                    Err(err) => {
                        tracing::error!("failed to load pending registrations: {err}");
                        push_notice(&mut notices, NoticeLevel::Error, err.to_string());
                        records.set(Vec::new());
                    }
                }
                fetching.set(false);
            });
        }
    });

    // No fetch happens unless the gate granted access.
    use_effect(move || {
        if access == Access::Granted {
            refresh.call(());
        }
    });

    if access != Access::Granted {
        return rsx! {};
    }

    let list = records();
    let visible = moderation::filter_by_query(&list, &query());
    let pages = moderation::page_count(visible.len(), page_size);
    let current = page().min(pages);
    let rows = moderation::page_slice(&visible, current, page_size);
    let selected_record = selected().and_then(|id| list.iter().find(|r| r.id == id).cloned());
    let busy = approving() || rejecting();

    rsx! {
        div {
            class: "app-page",

            header {
                class: "app-header",
                h1 { "Pending registrations" }
                div {
                    class: "app-header-actions",
                    button {
                        class: "button secondary",
                        disabled: fetching(),
                        onclick: move |_| refresh.call(()),
                        if fetching() { "Loading..." } else { "Refresh" }
                    }
                    LogoutButton { class: "button secondary" }
                }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by name or email",
                value: query(),
                oninput: move |evt| {
                    query.set(evt.value());
                    page.set(1);
                    armed_reject.set(None);
                },
            }

            if rows.is_empty() {
                p {
                    class: "empty-state",
                    if fetching() { "Loading pending registrations..." } else { "No pending registrations." }
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Mobile" }
                            th { "Country" }
                            th { "Company" }
                            th { "" }
                        }
                    }
                    tbody {
                        for record in rows {
                            tr {
                                key: "{record.id}",
                                class: if selected() == Some(record.id) { "selected" } else { "" },

                                td { "{record.name}" }
                                td { "{record.email}" }
                                td { "{record.mobile}" }
                                td { "{record.country}" }
                                td { "{record.client_name}" }
                                td {
                                    class: "row-actions",

                                    button {
                                        class: "button secondary",
                                        onclick: {
                                            let id = record.id;
                                            move |_| {
                                                selected.set(Some(id));
                                                armed_reject.set(None);
                                            }
                                        },
                                        "View"
                                    }

                                    button {
                                        class: "button primary",
                                        disabled: busy || !moderation::can_approve(selected(), record.id),
                                        onclick: {
                                            let record = record.clone();
                                            let api = api.clone();
                                            move |_| {
                                                if busy {
                                                    return;
                                                }
                                                if !moderation::can_approve(selected(), record.id) {
                                                    push_notice(
                                                        &mut notices,
                                                        NoticeLevel::Warning,
                                                        "Open the record with View before approving it",
                                                    );
                                                    return;
                                                }
                                                let record = record.clone();
                                                let api = api.clone();
                                                spawn(async move {
                                                    approving.set(true);
                                                    let request = ApprovalRequest::for_record(&record);
                                                    match api.approve_registration(&request).await {
                                                        Ok(()) => {
                                                            selected.set(None);
                                                            push_notice(
                                                                &mut notices,
                                                                NoticeLevel::Success,
                                                                format!("Approved {}", record.name),
                                                            );
                                                            approving.set(false);
                                                            refresh.call(());
                                                        }
                                                        Err(err) => {
                                                            tracing::error!("approval failed: {err}");
                                                            push_notice(
                                                                &mut notices,
                                                                NoticeLevel::Error,
                                                                err.to_string(),
                                                            );
                                                            approving.set(false);
                                                        }
                                                    }
                                                });
                                            }
                                        },
                                        "Approve"
                                    }

                                    button {
                                        class: "button danger",
                                        disabled: busy,
                                        onclick: {
                                            let record = record.clone();
                                            let api = api.clone();
                                            move |_| {
                                                if busy {
                                                    return;
                                                }
                                                if !moderation::can_reject(armed_reject(), record.id) {
                                                    armed_reject.set(Some(record.id));
                                                    push_notice(
                                                        &mut notices,
                                                        NoticeLevel::Warning,
                                                        format!(
                                                            "Click reject again to confirm removing {}",
                                                            record.name
                                                        ),
                                                    );
                                                    return;
                                                }
                                                armed_reject.set(None);
                                                let record = record.clone();
                                                let api = api.clone();
                                                spawn(async move {
                                                    rejecting.set(true);
                                                    match api.reject_registration(record.id).await {
                                                        Ok(()) => {
                                                            selected.set(None);
                                                            push_notice(
                                                                &mut notices,
                                                                NoticeLevel::Success,
                                                                format!("Rejected {}", record.name),
                                                            );
                                                            rejecting.set(false);
                                                            refresh.call(());
                                                        }
                                                        Err(err) => {
                                                            tracing::error!("rejection failed: {err}");
                                                            push_notice(
                                                                &mut notices,
                                                                NoticeLevel::Error,
                                                                err.to_string(),
                                                            );
                                                            rejecting.set(false);
                                                        }
                                                    }
                                                });
                                            }
                                        },
                                        if moderation::can_reject(armed_reject(), record.id) { "Confirm reject" } else { "Reject" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "pagination",
                    button {
                        class: "button secondary",
                        disabled: current <= 1,
                        onclick: move |_| {
                            page.set(page().saturating_sub(1).max(1));
                            armed_reject.set(None);
                        },
                        "Previous"
                    }
                    span { "Page {current} of {pages}" }
                    button {
                        class: "button secondary",
                        disabled: current >= pages,
                        onclick: move |_| {
                            page.set((page() + 1).min(pages));
                            armed_reject.set(None);
                        },
                        "Next"
                    }
                }
            }

            if let Some(detail) = selected_record {
                div {
                    class: "detail-panel",
                    h2 { "{detail.name}" }
                    dl {
                        dt { "Email" }
                        dd { "{detail.email}" }
                        dt { "Mobile" }
                        dd { "{detail.mobile}" }
                        dt { "Country" }
                        dd { "{detail.country}" }
                        dt { "Company" }
                        dd { "{detail.client_name}" }
                        dt { "Address" }
                        dd { "{detail.client_address}" }
                        dt { "Phone" }
                        dd { "{detail.client_phone}" }
                        dt { "GST" }
                        dd { "{detail.gst_number}" }
                        dt { "PAN" }
                        dd { "{detail.pan}" }
                    }
                }
            }
        }
    }
}
