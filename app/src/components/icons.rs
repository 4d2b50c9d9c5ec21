use icondata::Icon;
use leptos::{
    html::{a, div, span},
    prelude::*,
};

use crate::site::{SOCIAL_LINKS, SocialLink};

/// Renders a named `icondata` icon as an inline SVG glyph.
pub fn glyph(icon: Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            viewBox=icon.view_box
            fill=icon.fill.unwrap_or("currentColor")
            stroke=icon.stroke
            aria-hidden="true"
            focusable="false"
            class=class
            inner_html=icon.data
        ></svg>
    }
}

fn social_link(link: &'static SocialLink) -> impl IntoView {
    let external = link.is_external();
    a().href(link.href)
        .target(external.then_some("_blank"))
        .rel(external.then_some("noopener noreferrer"))
        .aria_label(link.label)
        .class("transition-all text-white duration-500 hover:text-[#ffef5c]")
        .child(
            span()
                .attr("data-text", link.label)
                .child(glyph(link.icon, "size-6")),
        )
}

/// The row of social profile links shown in the header and the mobile menu.
pub fn component() -> impl IntoView {
    div()
        .class("social-media flex flex-row gap-3 items-center h-10")
        .child(SOCIAL_LINKS.iter().map(social_link).collect_view())
}
