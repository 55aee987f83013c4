//! Training upload panel with CSV preview and current model status.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected file is read in the browser and previewed before upload so
//! the operator sees its header, first rows, and column warnings. The upload
//! itself re-sends the already-read bytes as multipart field `file`.
//!
//! The training flag in `AdminState` is the only guard against double
//! uploads; it is independent of the claim form's submitting flag. The flag
//! lives on the page-level state, so an upload is settled against the page's
//! liveness rather than this panel's: switching tabs mid-upload must not
//! leave the flag stuck.

#[cfg(test)]
#[path = "train_panel_test.rs"]
mod train_panel_test;

use claims::{ApiError, ModelStatus, TrainResponse};
use leptos::prelude::*;

use crate::net::api::ApiConfig;
use crate::state::admin::{AdminState, TrainingSelection};
use crate::util::liveness::Liveness;

pub const TRAINING_COMPLETE: &str = "Training Complete!";
pub const TRAIN_REJECTED_PREFIX: &str = "Training failed: ";
pub const TRAIN_UNREACHABLE: &str = "Training error";
pub const NO_MODEL: &str = "No model active. Please train the system.";

/// Trained-at and training-count text for an active model.
pub(crate) fn model_summary(status: &ModelStatus) -> Option<(String, String)> {
    if !status.active {
        return None;
    }
    let meta = status.meta.clone().unwrap_or_default();
    let trained_at = meta.timestamp.unwrap_or_default();
    let count = meta.training_count.map(|n| n.to_string()).unwrap_or_default();
    Some((trained_at, count))
}

/// Apply a finished upload to the dashboard state.
///
/// The training flag is always cleared (a no-op once the state is
/// disposed). Returns the alert text only while `liveness` is still alive.
pub(crate) fn settle_training(
    admin: RwSignal<AdminState>,
    liveness: &Liveness,
    result: Result<TrainResponse, ApiError>,
) -> Option<String> {
    let message = match result {
        Ok(resp) => {
            let _ = admin.try_update(|s| s.finish_training(resp.meta));
            TRAINING_COMPLETE.to_owned()
        }
        Err(err) => {
            let _ = admin.try_update(AdminState::fail_training);
            err.alert_text(TRAIN_REJECTED_PREFIX, TRAIN_UNREACHABLE)
        }
    };
    liveness.alive().then_some(message)
}

pub(crate) fn train_button_label(training: bool) -> &'static str {
    if training { "Training..." } else { "🚀 Train Model Now" }
}

#[component]
pub fn TrainPanel(liveness: Liveness) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let api = expect_context::<ApiConfig>();

    let on_file_change = {
        let liveness = liveness.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "hydrate")]
            {
                let input: web_sys::HtmlInputElement = event_target(&ev);
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    admin.update(|s| s.training_file = None);
                    return;
                };
                let liveness = liveness.clone();
                leptos::task::spawn_local(async move {
                    let name = file.name();
                    let bytes = crate::util::file_read::read_bytes(&file).await.unwrap_or_else(|e| {
                        log::error!("reading {name} failed: {e}");
                        Vec::new()
                    });
                    if !liveness.alive() {
                        return;
                    }
                    let selection = TrainingSelection::new(name, bytes);
                    if !selection.is_utf8() {
                        log::warn!("{} is not valid UTF-8; uploading raw bytes", selection.file_name);
                    }
                    let _ = admin.try_update(|s| s.training_file = Some(selection));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (ev, &liveness);
            }
        }
    };

    let on_train = move |_| {
        let Some((file_name, bytes)) = admin.try_update(AdminState::begin_training).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let liveness = liveness.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::train_model(&api, &file_name, &bytes).await;
                match &result {
                    Ok(resp) => log::info!("training finished: {:?}", resp.message),
                    Err(err) => log::error!("training failed: {err}"),
                }
                if let Some(message) = settle_training(admin, &liveness, result) {
                    crate::util::alert::alert(&message);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &liveness, file_name, bytes);
        }
    };

    view! {
        <div class="train-panel">
            <h3>"Upload Training Data"</h3>
            <p class="subtitle">
                "Upload a CSV containing historical claims (Description, Policy_Type, Amount, Customer_Tenure)."
            </p>

            <div class="train-panel__picker">
                <input type="file" accept=".csv" on:change=on_file_change/>
            </div>

            <TrainingPreviewCard/>

            <button
                class="btn train-panel__submit"
                disabled=move || !admin.with(AdminState::can_train)
                on:click=on_train
            >
                {move || train_button_label(admin.with(|s| s.training))}
            </button>

            <ModelStatusCard/>
        </div>
    }
}

#[component]
fn TrainingPreviewCard() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let selection = Memo::new(move |_| admin.with(|s| s.training_file.clone()));

    move || {
        let current = selection.get()?;
        let view = match current.preview {
            Err(err) => view! {
                <p class="train-panel__error danger">{format!("{}: {err}", current.file_name)}</p>
            }
            .into_any(),
            Ok(preview) => {
                let warnings = preview
                    .warnings()
                    .into_iter()
                    .map(|w| view! { <li class="train-panel__warning">{w}</li> })
                    .collect_view();
                let headers = preview.headers.iter().map(|h| view! { <th>{h.clone()}</th> }).collect_view();
                let rows = preview
                    .rows
                    .iter()
                    .map(|row| {
                        let cells = row.iter().map(|c| view! { <td>{c.clone()}</td> }).collect_view();
                        view! { <tr>{cells}</tr> }
                    })
                    .collect_view();
                view! {
                    <div class="train-panel__preview details">
                        <p>
                            <strong>{current.file_name.clone()}</strong>
                            {format!(" \u{b7} {} records", preview.record_count)}
                        </p>
                        <ul class="train-panel__warnings">{warnings}</ul>
                        <div class="claims-table__wrap">
                            <table class="claims-table claims-table--preview">
                                <thead><tr>{headers}</tr></thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    </div>
                }
                .into_any()
            }
        };
        Some(view)
    }
}

#[component]
fn ModelStatusCard() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let status = Memo::new(move |_| admin.with(|s| s.model_status.clone()));

    move || {
        let current = status.get()?;
        let body = match model_summary(&current) {
            Some((trained_at, count)) => view! {
                <p><span class="success">"Active"</span></p>
                <p><strong>"Trained At:"</strong> " " <span>{trained_at}</span></p>
                <p><strong>"Training Count:"</strong> " " <span>{count}</span></p>
            }
            .into_any(),
            None => view! { <p class="danger">{NO_MODEL}</p> }.into_any(),
        };
        Some(view! {
            <div class="details model-status">
                <h4>"Current Model Status"</h4>
                {body}
            </div>
        })
    }
}
