//! The modal host used by the header to show the contact form.
//!
//! The host decides only whether its content is mounted. The content itself
//! gets nothing but a close callback.

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, prelude::*};

use crate::components::icons;
use crate::listener::scoped_listener;

/// Whether a key press should dismiss the modal.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Tracks whether a backdrop click both started and ended on the backdrop,
/// so a drag out of the dialog does not dismiss it.
#[derive(Debug, Default, Clone, Copy)]
struct BackdropPress {
    started_on_backdrop: bool,
}

impl BackdropPress {
    fn press(&mut self, on_backdrop: bool) {
        self.started_on_backdrop = on_backdrop;
    }

    fn release(&mut self, on_backdrop: bool) -> bool {
        std::mem::take(&mut self.started_on_backdrop) && on_backdrop
    }
}

fn targets_itself(ev: &ev::MouseEvent) -> bool {
    let target = ev.target();
    target.is_some() && target == ev.current_target()
}

/// Renders `content` inside a dialog while `is_open` is true.
///
/// Clicking the backdrop, the close button, or pressing Escape calls
/// `on_close`. The Escape listener is only registered while the modal is open
/// and is removed when the host is torn down.
pub fn component(is_open: Signal<bool>, on_close: Callback<()>, content: ViewFn) -> impl IntoView {
    let escape = scoped_listener::<WindowListenerHandle>();
    Effect::new(move |_| {
        let open = is_open.get();
        escape.update_value(|listener| {
            listener.sync(open, || {
                window_event_listener(ev::keydown, move |ev| {
                    if is_dismiss_key(&ev.key()) {
                        on_close.run(());
                    }
                })
            });
        });
    });

    let press = StoredValue::new(BackdropPress::default());

    view! {
        <Show when=move || is_open.get()>
            <div
                class="flex fixed inset-0 z-30 justify-center items-center px-4 bg-black/70 backdrop-blur-sm"
                on:mousedown=move |ev| press.update_value(|press| press.press(targets_itself(&ev)))
                on:click=move |ev| {
                    let on_backdrop = targets_itself(&ev);
                    if press.try_update_value(|press| press.release(on_backdrop)).unwrap_or(false) {
                        on_close.run(());
                    }
                }
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-modal-title"
                    class="relative p-6 w-full max-w-2xl rounded-lg shadow-xl bg-[#2a2a2a]"
                >
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute top-4 right-4 text-gray-400 transition-colors hover:text-[#ffef5c]"
                        on:click=move |_| on_close.run(())
                    >
                        {icons::glyph(icondata::BsX, "size-6")}
                    </button>
                    {content.run()}
                </div>
            </div>
        </Show>
    }
}
