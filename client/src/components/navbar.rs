//! Top navigation bar with route links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above every route. The toggle flips `UiState.theme` and
//! mirrors the new value into the `<html data-theme>` attribute and
//! `localStorage`.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Brand shown at the left of the bar.
pub const BRAND: &str = "InsuranceClaimFusion AI";

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">{BRAND}</a>
            <div class="navbar__links">
                <a href="/" class="navbar__link">"Submit Claim"</a>
                <a href="/admin" class="navbar__link">"Admin"</a>
                <button
                    class="navbar__theme-toggle"
                    title="Toggle theme"
                    on:click=on_toggle
                >
                    {move || ui.get().theme.toggle_icon()}
                </button>
            </div>
        </nav>
    }
}
