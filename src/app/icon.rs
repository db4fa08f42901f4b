use leptos::prelude::*;

use crate::content::Icon;

/// Inline SVG for an [`Icon`], stroked in the current text colour.
#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(default = 18)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=icon.markup()
        ></svg>
    }
}
