//! Full-record modal for the claim selected in the table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opens whenever `AdminState.selected` is set. Clicking the backdrop, the
//! close icon, or "Close" clears the selection. "Delete claim" removes the
//! record on the backend and re-fetches the list on success.

#[cfg(test)]
#[path = "claim_detail_modal_test.rs"]
mod claim_detail_modal_test;

use claims::ClaimRecord;
use claims::format::{anomaly_label, score_label};
use claims::record::{CATEGORY, DESCRIPTION, FRAUD_RISK, RANK_SCORE, STATUS, TENURE, TIMESTAMP, URGENCY};
use leptos::prelude::*;

use super::claims_table::{amount_label, risk_class};
use crate::net::api::ApiConfig;
use crate::state::admin::AdminState;
use crate::util::liveness::{Liveness, use_liveness};

/// Alert prefix when the backend refuses a delete.
pub const DELETE_REJECTED_PREFIX: &str = "Error deleting claim: ";
/// Alert shown when the delete request never reached the backend.
pub const DELETE_UNREACHABLE: &str = "Failed to connect to server.";

/// Label/value pairs for the detail list, in display order.
///
/// `Urgency` and `Status` are only listed when the backend supplied them.
pub(crate) fn detail_lines(claim: &ClaimRecord) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Customer ID", claim.customer_id()),
        ("Category", claim.text(CATEGORY)),
        ("Amount", amount_label(claim)),
        ("Tenure", format!("{} Years", claim.text(TENURE))),
        ("Date", claim.text(TIMESTAMP)),
    ];
    for (label, key) in [("Urgency", URGENCY), ("Status", STATUS)] {
        let value = claim.text(key);
        if !value.is_empty() {
            lines.push((label, value));
        }
    }
    lines
}

#[component]
pub fn ClaimDetailModal() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    // Dashboard-scoped: outlives each dialog, so a delete that lands after
    // the dialog closed still refreshes the list.
    let liveness = use_liveness();
    let selected = Memo::new(move |_| admin.with(|s| s.selected.clone()));

    move || {
        let liveness = liveness.clone();
        selected.get().map(|claim| view! { <ClaimDetail claim=claim liveness=liveness/> })
    }
}

#[component]
fn ClaimDetail(claim: ClaimRecord, liveness: Liveness) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let api = expect_context::<ApiConfig>();

    let close = move || admin.update(|s| s.selected = None);
    let delete_key = claim.delete_key();
    let can_delete = delete_key.is_some();

    let on_delete = move |_| {
        let Some((customer_id, timestamp)) = delete_key.clone() else {
            return;
        };
        if admin.with_untracked(|s| s.deleting) {
            return;
        }
        if !crate::util::alert::confirm(&format!("Delete claim {customer_id}?")) {
            return;
        }
        admin.update(|s| s.deleting = true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let liveness = liveness.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_claim(&api, &customer_id, &timestamp).await;
                if !liveness.alive() {
                    return;
                }
                let _ = admin.try_update(|s| s.deleting = false);
                match result {
                    Ok(()) => {
                        log::info!("deleted claim {customer_id} @ {timestamp}");
                        let _ = admin.try_update(|s| s.selected = None);
                        crate::pages::admin::load_claims(api, admin, liveness);
                    }
                    Err(err) => {
                        log::error!("delete claim failed: {err}");
                        crate::util::alert::alert(&err.alert_text(DELETE_REJECTED_PREFIX, DELETE_UNREACHABLE));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &liveness, customer_id, timestamp);
        }
    };

    let lines = detail_lines(&claim)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <p>
                    <strong>{label} ":"</strong>
                    " "
                    <span>{value}</span>
                </p>
            }
        })
        .collect_view();

    let scores = [
        ("Authenticity", score_label(claim.authenticity_score()), "detail-score"),
        ("Priority", score_label(claim.priority_score()), "detail-score"),
        ("Rank", score_label(claim.number(RANK_SCORE)), "detail-score detail-score--rank"),
    ]
    .into_iter()
    .map(|(label, value, class)| {
        view! {
            <div class=class>
                <div class="detail-score__label">{label}</div>
                <div class="detail-score__value">{value}</div>
            </div>
        }
    })
    .collect_view();

    let risk = claim.text(FRAUD_RISK);
    let risk_class = risk_class(&claim);
    let anomaly = anomaly_label(claim.anomaly_score());
    let description = claim.text(DESCRIPTION);

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal card" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3>"Claim Details"</h3>
                    <button class="modal__close" title="Close" on:click=move |_| close()>"✕"</button>
                </div>

                <div class="details">
                    {lines}
                    <div class="detail-scores">{scores}</div>
                    <p>
                        <strong>"Fraud Risk:"</strong>
                        " "
                        <span class=risk_class>{risk}</span>
                    </p>
                    <p>
                        <strong>"Anomaly Score:"</strong>
                        " "
                        <span>{anomaly}</span>
                    </p>
                </div>

                <div class="modal__description">
                    <strong>"Description:"</strong>
                    <p class="modal__description-text">{description}</p>
                </div>

                <div class="modal__actions">
                    <button class="btn btn--secondary" on:click=move |_| close()>"Close"</button>
                    {can_delete.then(|| view! {
                        <button
                            class="btn btn--danger"
                            disabled=move || admin.with(|s| s.deleting)
                            on:click=on_delete
                        >
                            {move || if admin.with(|s| s.deleting) { "Deleting..." } else { "Delete claim" }}
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}
