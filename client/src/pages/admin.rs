//! Admin dashboard: model training and bucketed claim review.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `AdminState` signal for the route and provides it to the panels.
//! Model status is fetched on mount and on every tab switch; the claim list
//! is fetched whenever the claims tab becomes active and on refresh.
//!
//! Fetch continuations are guarded by a page-scoped `Liveness` so responses
//! that arrive after navigation never write to disposed signals.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use claims::{Bucket, BucketCounts};
use leptos::prelude::*;

use crate::components::claim_detail_modal::ClaimDetailModal;
use crate::components::claims_table::ClaimsTable;
use crate::components::train_panel::TrainPanel;
use crate::net::api::ApiConfig;
use crate::state::admin::{AdminState, AdminTab};
use crate::util::liveness::{Liveness, use_liveness};

/// Alert shown when the visible view has nothing to export.
pub const NOTHING_TO_EXPORT: &str = "No claims to export.";

/// Tab button class: the active tab is primary, the rest secondary.
pub(crate) fn tab_class(active: bool) -> &'static str {
    if active { "btn admin-tab" } else { "btn btn--secondary admin-tab" }
}

/// Bucket tab class including its color modifier when selected.
pub(crate) fn bucket_class(bucket: Bucket, selected: bool) -> String {
    if selected {
        format!("bucket-tab bucket-tab--{} bucket-tab--active", bucket.as_str())
    } else {
        "bucket-tab".to_owned()
    }
}

/// Bucket tab text with its claim count.
pub(crate) fn bucket_tab_label(bucket: Bucket, counts: BucketCounts) -> String {
    format!("{} ({})", bucket.label(), counts.get(bucket))
}

/// Refresh model status into `admin`. Failures are logged only.
pub(crate) fn load_model_status(api: ApiConfig, admin: RwSignal<AdminState>, liveness: Liveness) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_model_status(&api).await;
        if !liveness.alive() {
            return;
        }
        match result {
            Ok(status) => {
                let _ = admin.try_update(|s| s.model_status = Some(status));
            }
            Err(err) => log::error!("model status fetch failed: {err}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, admin, liveness);
    }
}

/// Re-fetch the full claim list into `admin`.
pub(crate) fn load_claims(api: ApiConfig, admin: RwSignal<AdminState>, liveness: Liveness) {
    let _ = admin.try_update(|s| s.claims_loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_claims(&api).await;
        if !liveness.alive() {
            return;
        }
        match result {
            Ok(claims) => {
                log::debug!("fetched {} claims", claims.len());
                let _ = admin.try_update(|s| s.set_claims(claims));
            }
            Err(err) => {
                log::error!("claims fetch failed: {err}");
                let _ = admin.try_update(|s| s.set_claims_error(err.to_string()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, liveness);
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = RwSignal::new(AdminState::default());
    provide_context(admin);
    let api = expect_context::<ApiConfig>();
    let liveness = use_liveness();

    let tab = Memo::new(move |_| admin.with(|s| s.tab));

    Effect::new({
        let api = api.clone();
        let liveness = liveness.clone();
        move || {
            let active = tab.get();
            load_model_status(api.clone(), admin, liveness.clone());
            if active == AdminTab::Claims {
                load_claims(api.clone(), admin, liveness.clone());
            }
        }
    });

    let select_tab = move |next: AdminTab| admin.update(|s| s.tab = next);

    view! {
        <div class="container">
            <div class="card admin">
                <h2 class="admin__title">"🛡️ Admin Command Center"</h2>

                <div class="admin__tabs">
                    <button
                        class=move || tab_class(tab.get() == AdminTab::Train)
                        on:click=move |_| select_tab(AdminTab::Train)
                    >
                        "🧠 Train AI Brain"
                    </button>
                    <button
                        class=move || tab_class(tab.get() == AdminTab::Claims)
                        on:click=move |_| select_tab(AdminTab::Claims)
                    >
                        "📊 View Claims"
                    </button>
                </div>

                {move || match tab.get() {
                    AdminTab::Train => view! { <TrainPanel liveness=liveness.clone()/> }.into_any(),
                    AdminTab::Claims => {
                        view! { <ClaimsView api=api.clone() liveness=liveness.clone()/> }.into_any()
                    }
                }}
            </div>
            <ClaimDetailModal/>
        </div>
    }
}

#[component]
fn ClaimsView(api: ApiConfig, liveness: Liveness) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let counts = Memo::new(move |_| admin.with(AdminState::counts));

    let on_export = move |_| {
        let iso_now = crate::util::download::now_iso();
        match admin.with_untracked(|s| s.export(&iso_now)) {
            None => crate::util::alert::alert(NOTHING_TO_EXPORT),
            Some((filename, csv)) => {
                if let Err(err) = crate::util::download::trigger_download(
                    &filename,
                    &csv,
                    crate::util::download::CSV_MIME,
                ) {
                    crate::util::alert::alert(&format!("Export failed: {err}"));
                }
            }
        }
    };

    let on_refresh = move |_| load_claims(api.clone(), admin, liveness.clone());

    let bucket_tabs = Bucket::ALL
        .into_iter()
        .map(|bucket| {
            view! {
                <button
                    class=move || bucket_class(bucket, admin.with(|s| s.bucket) == bucket)
                    on:click=move |_| admin.update(|s| s.bucket = bucket)
                >
                    {move || bucket_tab_label(bucket, counts.get())}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="claims-view">
            <div class="claims-view__header">
                <h3>"Submitted Claims Log"</h3>
                <div class="claims-view__actions">
                    <button
                        class="btn btn--secondary"
                        disabled=move || admin.with(|s| s.claims_loading)
                        on:click=on_refresh
                    >
                        {move || if admin.with(|s| s.claims_loading) { "Loading..." } else { "🔄 Refresh" }}
                    </button>
                    <button class="btn btn--export" on:click=on_export>"📥 Export to CSV"</button>
                </div>
            </div>

            <div class="bucket-tabs">{bucket_tabs}</div>

            {move || {
                admin
                    .with(|s| s.claims_error.clone())
                    .map(|err| view! { <p class="danger claims-view__error">{err}</p> })
            }}

            <ClaimsTable/>
        </div>
    }
}
