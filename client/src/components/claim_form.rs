//! Public claim submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field values live in a page-local `SubmissionState`. Required inputs rely
//! on native browser constraints; the submit handler only builds the JSON
//! payload, posts it, and either navigates to the status page or alerts.
//!
//! The attachment input is collected but never uploaded; only its name is
//! kept on the draft.

use claims::InsuranceType;
use leptos::prelude::*;

use crate::net::api::ApiConfig;
use crate::pages::status::STATUS_PATH;
use crate::state::submission::{SubmissionState, SubmitOutcome};
use crate::util::liveness::use_liveness;

#[component]
pub fn ClaimForm() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let state = RwSignal::new(SubmissionState::default());
    let liveness = use_liveness();
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = state.try_update(SubmissionState::begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let problems = state.with_untracked(|s| s.draft.problems());
            if !problems.is_empty() {
                log::warn!("submitting with form problems: {problems:?}");
            }
            let api = api.clone();
            let liveness = liveness.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_claim(&api, &submission).await;
                if !liveness.alive() {
                    return;
                }
                if let Err(err) = &result {
                    log::error!("claim submission failed: {err}");
                }
                match state.try_update(|s| s.settle(&result)) {
                    Some(SubmitOutcome::Navigate) => {
                        navigate(STATUS_PATH, leptos_router::NavigateOptions::default());
                    }
                    Some(SubmitOutcome::Alert(message)) => crate::util::alert::alert(&message),
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &liveness, &navigate, submission);
        }
    };

    let on_attachment = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let name = input.files().and_then(|files| files.get(0)).map(|file| file.name());
            state.update(|s| s.draft.attachment_name = name);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let insurance_options = InsuranceType::ALL
        .into_iter()
        .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
        .collect_view();

    view! {
        <form class="card claim-form" on:submit=on_submit>
            <h3>"Claim Submission Form"</h3>
            <p class="subtitle">"This is the data collection layer for your AI pipeline."</p>

            <label>"Insurance Type *"</label>
            <select
                required
                prop:value=move || state.with(|s| s.draft.insurance_type.as_str())
                on:change=move |ev| {
                    if let Some(kind) = InsuranceType::parse(&event_target_value(&ev)) {
                        state.update(|s| s.draft.insurance_type = kind);
                    }
                }
            >
                {insurance_options}
            </select>

            <div class="row">
                <div>
                    <label>"Policy Number *"</label>
                    <input
                        type="text"
                        required
                        placeholder="e.g. POL-123456"
                        prop:value=move || state.with(|s| s.draft.policy_number.clone())
                        on:input=move |ev| state.update(|s| s.draft.policy_number = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label>"Customer Tenure (Years)"</label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        prop:value=move || state.with(|s| s.draft.tenure.clone())
                        on:input=move |ev| state.update(|s| s.draft.tenure = event_target_value(&ev))
                    />
                </div>
            </div>

            <label>"Your Email *"</label>
            <input
                type="email"
                required
                prop:value=move || state.with(|s| s.draft.email.clone())
                on:input=move |ev| state.update(|s| s.draft.email = event_target_value(&ev))
            />

            <div class="row">
                <div>
                    <label>"Date of Incident *"</label>
                    <input
                        type="date"
                        required
                        prop:value=move || state.with(|s| s.draft.date_of_incident.clone())
                        on:input=move |ev| state.update(|s| s.draft.date_of_incident = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label>"Claim Amount ($) *"</label>
                    <input
                        type="number"
                        required
                        placeholder="Enter amount"
                        prop:value=move || state.with(|s| s.draft.claim_amount.clone())
                        on:input=move |ev| state.update(|s| s.draft.claim_amount = event_target_value(&ev))
                    />
                </div>
            </div>

            <label>"Location *"</label>
            <input
                type="text"
                required
                prop:value=move || state.with(|s| s.draft.location.clone())
                on:input=move |ev| state.update(|s| s.draft.location = event_target_value(&ev))
            />

            <label>"Claim Description *"</label>
            <textarea
                required
                placeholder="Describe the incident..."
                prop:value=move || state.with(|s| s.draft.description.clone())
                on:input=move |ev| state.update(|s| s.draft.description = event_target_value(&ev))
            ></textarea>

            <label>"Upload Documents (optional)"</label>
            <input type="file" on:change=on_attachment/>

            <button type="submit" class="btn" disabled=move || state.with(|s| s.submitting)>
                {move || state.with(SubmissionState::button_label)}
            </button>
        </form>
    }
}
