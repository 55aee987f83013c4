//! Ranked claim table for the selected classification bucket.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `AdminState` from context. The visible rows are the fetched list
//! filtered to the active bucket and sorted by `rank_score`; clicking a row
//! stores it as the selected claim, which opens the detail modal.

#[cfg(test)]
#[path = "claims_table_test.rs"]
mod claims_table_test;

use claims::format::score_label;
use claims::record::{AMOUNT, CATEGORY, FRAUD_RISK, RANK_SCORE};
use claims::{ClaimRecord, ScoreTone};
use leptos::prelude::*;

use crate::state::admin::AdminState;

/// Message shown when the active bucket holds no claims.
pub const EMPTY_BUCKET: &str = "No claims in this category.";

const COLUMNS: [&str; 8] = ["ID", "Auth", "Prio", "Rank", "Category", "Amount", "Risk", "Action"];

/// Amount cell text, dollar-prefixed.
pub(crate) fn amount_label(record: &ClaimRecord) -> String {
    format!("${}", record.text(AMOUNT))
}

/// Color class for the fraud-risk flag.
pub(crate) fn risk_class(record: &ClaimRecord) -> &'static str {
    if record.is_high_fraud_risk() { "risk-flag risk-flag--high" } else { "risk-flag risk-flag--low" }
}

#[component]
pub fn ClaimsTable() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    let visible = Memo::new(move |_| {
        admin.with(|s| s.visible_claims().into_iter().cloned().collect::<Vec<_>>())
    });

    let rows = move || {
        let claims = visible.get();
        if claims.is_empty() {
            return view! {
                <tr>
                    <td class="claims-table__empty" colspan="8">{EMPTY_BUCKET}</td>
                </tr>
            }
            .into_any();
        }
        claims
            .into_iter()
            .map(|claim| view! { <ClaimRow claim=claim/> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="claims-table__wrap">
            <table class="claims-table">
                <thead>
                    <tr>{COLUMNS.into_iter().map(|name| view! { <th>{name}</th> }).collect_view()}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn ClaimRow(claim: ClaimRecord) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    let auth = claim.authenticity_score();
    let id = claim.customer_id();
    let priority = score_label(claim.priority_score());
    let rank = score_label(claim.number(RANK_SCORE));
    let category = claim.text(CATEGORY);
    let amount = amount_label(&claim);
    let risk = claim.text(FRAUD_RISK);
    let risk_class = risk_class(&claim);

    let on_open = move |_| {
        let claim = claim.clone();
        admin.update(|s| s.selected = Some(claim));
    };

    view! {
        <tr class="claims-table__row" on:click=on_open>
            <td>{id}</td>
            <td>
                <span class=ScoreTone::of(auth).css_class()>{score_label(auth)}</span>
            </td>
            <td>{priority}</td>
            <td class="claims-table__rank">{rank}</td>
            <td>{category}</td>
            <td>{amount}</td>
            <td>
                <span class=risk_class>{risk}</span>
            </td>
            <td>
                <button class="btn btn--secondary btn--small">"View"</button>
            </td>
        </tr>
    }
}
