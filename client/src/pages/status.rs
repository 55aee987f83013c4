//! Confirmation view shown after a claim is accepted.

use leptos::prelude::*;

/// Route the claim form navigates to on a successful submission.
pub const STATUS_PATH: &str = "/status";

#[component]
pub fn StatusPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="card status-card">
                <h3>"Claim Received"</h3>
                <p class="subtitle">
                    "Your claim was submitted and is pending review. Our team will contact you by email."
                </p>
                <a href="/" class="btn btn--secondary">"Submit another claim"</a>
            </div>
        </div>
    }
}
