//! The routed pages behind the header's navigation links.

use leptos::{
    html::{h1, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::site::OWNER;

fn page(title: &'static str, heading: &'static str, lead: &'static str) -> impl IntoView {
    section().class("flex flex-col gap-6").child((
        Title(TitleProps::builder().text(format!("{title} | {OWNER}")).build()),
        h1().class("text-4xl font-extrabold leading-tight sm:text-5xl text-[#ffef5c]")
            .child(heading),
        p().class("text-lg text-gray-300").child(lead),
    ))
}

pub fn home() -> impl IntoView {
    page(
        "Home",
        "Hi, I'm Joe.",
        "I build web applications and enjoy turning ideas into tidy, usable interfaces.",
    )
}

pub fn about() -> impl IntoView {
    page(
        "About",
        "About me",
        "A developer with a background in design, currently focused on front-end engineering.",
    )
}

pub fn projects() -> impl IntoView {
    page(
        "Projects",
        "Projects",
        "A selection of things I have built. Source for most of them lives on GitHub.",
    )
}
