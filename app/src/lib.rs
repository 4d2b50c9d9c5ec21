// Portfolio site: application shell, routes and the components they mount.
use crate::components::{error_template, header, icons};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
mod components;
mod contact;
pub mod listener;
pub mod nav;
mod pages;
pub mod site;
pub mod validation;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text(format!("{} \u{2013} Portfolio", site::OWNER))
                    .build(),
            ),
        )),
        body().class("bg-[#1e1e1e]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto min-h-screen text-white font-poppins">
                {header::component}
                <main class="container flex flex-col gap-8 px-4 pt-10 pb-24 mx-auto mt-20 max-w-4xl md:px-0">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(AppError::NotFound);
                        error_template::component(outside_errors)
                    }>
                        <Route path=StaticSegment("") view=pages::home/>
                        <Route path=StaticSegment("about") view=pages::about/>
                        <Route path=StaticSegment("projects") view=pages::projects/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("fixed right-0 bottom-0 left-0 z-10 py-2 text-center md:py-4 bg-[#1e1e1e]/80 backdrop-blur-md")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child((
                p().class("text-gray-400")
                    .child(format!("\u{a9} {} {}", Utc::now().year(), site::OWNER)),
                div().class("block md:hidden").child(icons::component),
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_builds() {
        let options = LeptosOptions::builder().output_name("portfolio").build();
        drop(shell(options));
    }

    #[test]
    fn component_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;
    }
}
