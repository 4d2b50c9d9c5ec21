//! This module defines the contact form mounted inside the header's modal.
//!
//! The form keeps its own field state, submits through the `contact` server
//! function, and hands control back to its host through `on_close` once the
//! message is sent or the visitor cancels.

use leptos::prelude::*;

use crate::api::{ContactRequest, contact};

const INPUT_CLASS: &str = "py-3 px-4 w-full placeholder-gray-400 text-white transition-shadow focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]";

/// Renders the contact form.
///
/// `on_close` runs after a successful submission and when the visitor
/// presses "Cancel". Failed submissions keep the form open and show the
/// server's message.
pub fn component(on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(ContactRequest::default());
    let error = RwSignal::new(None::<String>);
    let submit = Action::new(move |data: &ContactRequest| {
        let data = data.clone();
        async move {
            match contact(data).await {
                Ok(()) => {
                    state.set(ContactRequest::default());
                    error.set(None);
                    on_close.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });
    let pending = submit.pending();

    view! {
        <h2 id="contact-modal-title" class="mb-6 text-3xl font-bold text-[#ffef5c]">"Get In Touch"</h2>
        <form class="space-y-6" on:submit=move |ev| {
            ev.prevent_default();
            let _ = submit.dispatch(state.get_untracked());
        }>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                <input
                    id="name"
                    name="name"
                    placeholder="Your Name"
                    type="text"
                    autocomplete="name"
                    required
                    prop:value=move || state.get().name
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        state.update(|prev| prev.name = name);
                    }
                    class=INPUT_CLASS
                />
                <input
                    id="email"
                    name="email"
                    placeholder="Your Email"
                    type="email"
                    autocomplete="email"
                    required
                    prop:value=move || state.get().email
                    on:input=move |ev| {
                        let email = event_target_value(&ev);
                        state.update(|prev| prev.email = email);
                    }
                    class=INPUT_CLASS
                />
            </div>
            <input
                id="subject"
                name="subject"
                placeholder="Subject"
                type="text"
                prop:value=move || state.get().subject
                on:input=move |ev| {
                    let subject = event_target_value(&ev);
                    state.update(|prev| prev.subject = subject);
                }
                class=INPUT_CLASS
            />
            <textarea
                id="message"
                name="message"
                placeholder="Your Message"
                autocomplete="off"
                required
                rows="6"
                prop:value=move || state.get().message
                on:input=move |ev| {
                    let message = event_target_value(&ev);
                    state.update(|prev| prev.message = message);
                }
                class=INPUT_CLASS
            />
            // Hidden from people; bots tend to fill every field.
            <input
                name="website"
                type="text"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                class="hidden"
                prop:value=move || state.get().website.unwrap_or_default()
                on:input=move |ev| {
                    let website = event_target_value(&ev);
                    state.update(|prev| prev.website = Some(website));
                }
            />
            <Show when=move || error.get().is_some()>
                <p role="alert" class="text-red-400">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="flex flex-row gap-4">
                <button
                    type="button"
                    class="py-3 px-6 w-1/3 text-lg text-white border border-gray-500 transition-colors hover:border-[#ffef5c]"
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="flex justify-center items-center py-3 px-6 w-2/3 text-lg font-semibold transition-colors bg-[#ffef5c] text-[#1e1e1e] hover:bg-[#ffef5c]/90"
                >
                    <Show when=move || pending.get() fallback=|| "Send Message">
                        "Sending..."
                    </Show>
                </button>
            </div>
        </form>
    }
}
