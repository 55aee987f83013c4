//! Landing route: the public claim submission form.

use leptos::prelude::*;

use crate::components::claim_form::ClaimForm;

#[component]
pub fn SubmitPage() -> impl IntoView {
    view! {
        <div class="container">
            <ClaimForm/>
        </div>
    }
}
