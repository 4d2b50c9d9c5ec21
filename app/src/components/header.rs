//! The site header: logo, desktop navigation, social links, the hamburger
//! toggle with its mobile panel, and the contact modal.

use leptos::{ev, html, leptos_dom::helpers::WindowListenerHandle, prelude::*};
use leptos_router::{components::A, hooks::use_location};
use wasm_bindgen::JsCast;

use crate::components::{icons, modal};
use crate::contact;
use crate::listener::scoped_listener;
use crate::nav::{self, HeaderState, PointerTarget};
use crate::site::{LOGO_ALT, LOGO_SRC, NAV_ITEMS};

const MOBILE_NAV_ID: &str = "mobile-nav";

fn as_node<T: AsRef<web_sys::Node>>(element: &T) -> &web_sys::Node {
    element.as_ref()
}

#[expect(clippy::too_many_lines)]
pub fn component() -> impl IntoView {
    let state = HeaderState::new();
    let panel_ref = NodeRef::<html::Nav>::new();
    let toggle_ref = NodeRef::<html::Button>::new();
    let pathname = use_location().pathname;

    // Listen for outside clicks only while the mobile menu is open.
    let outside_click = scoped_listener::<WindowListenerHandle>();
    Effect::new(move |_| {
        let open = state.menu_open();
        outside_click.update_value(|listener| {
            listener.sync(open, || {
                window_event_listener(ev::mousedown, move |ev| {
                    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                    let panel = panel_ref.get_untracked();
                    let toggle = toggle_ref.get_untracked();
                    state.pointer_down(PointerTarget::locate(
                        target.as_ref(),
                        panel.as_ref().map(as_node),
                        toggle.as_ref().map(as_node),
                    ));
                })
            });
        });
    });

    let close_modal = Callback::new(move |()| state.close_modal());

    let desktop_links = NAV_ITEMS
        .iter()
        .map(|item| {
            view! {
                <li>
                    <A
                        href=item.path
                        exact=true
                        attr:class=move || nav::link_class(nav::is_active(&pathname.get(), item.path))
                    >
                        {item.label}
                    </A>
                </li>
            }
        })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .iter()
        .map(|item| {
            view! {
                <li on:click=move |_| state.close_menu()>
                    <A
                        href=item.path
                        exact=true
                        attr:class=move || nav::link_class(nav::is_active(&pathname.get(), item.path))
                    >
                        {item.label}
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header fixed top-0 right-0 left-0 z-20 py-4 px-4 md:px-6 bg-[#1e1e1e]/80 backdrop-blur-md">
            <div class="header-content container flex flex-row justify-between items-center mx-auto max-w-5xl text-white">
                <div class="logo">
                    <A href="/">
                        <img src=LOGO_SRC alt=LOGO_ALT class="h-10 w-auto"/>
                    </A>
                </div>

                <nav class="desktop-nav hidden md:block" aria-label="Primary">
                    <ul class="nav-list flex flex-row gap-6 items-center text-lg">
                        {desktop_links}
                        <li>
                            <button
                                type="button"
                                class=nav::link_class(false)
                                on:click=move |_| state.open_modal()
                            >
                                "Contact"
                            </button>
                        </li>
                    </ul>
                </nav>

                <div class="hidden md:block">{icons::component()}</div>

                <button
                    node_ref=toggle_ref
                    type="button"
                    class="hamburger-button md:hidden"
                    aria-label=move || if state.menu_open() { "Close menu" } else { "Open menu" }
                    aria-controls=MOBILE_NAV_ID
                    aria-expanded=move || state.menu_open().to_string()
                    on:click=move |_| state.toggle_menu()
                >
                    {move || icons::glyph(nav::toggle_icon(state.menu_open()), "size-[30px]")}
                </button>
            </div>

            <nav
                node_ref=panel_ref
                id=MOBILE_NAV_ID
                aria-label="Mobile"
                class=move || nav::mobile_panel_class(state.menu_open())
            >
                <ul class="mobile-nav-list flex flex-col gap-4 py-4 text-lg text-white">
                    {mobile_links}
                    <li>
                        <button type="button" on:click=move |_| state.open_modal()>
                            "Contact"
                        </button>
                    </li>
                    <li class="social-media-mobile">{icons::component()}</li>
                </ul>
            </nav>
        </header>
        {modal::component(
            state.modal_signal(),
            close_modal,
            ViewFn::from(move || contact::component(close_modal)),
        )}
    }
}
