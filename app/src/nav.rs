//! Navigation state behind the site header.
//!
//! The header owns two flags: whether the mobile menu is open and whether the
//! contact modal is shown. Everything the header renders is derived from
//! these flags and the current route, so the helpers here are plain
//! functions that the view calls on every render.

use leptos::prelude::*;

/// Reactive state of one header instance.
///
/// Opening the contact modal always closes the mobile menu; closing the modal
/// leaves the menu alone.
#[derive(Debug, Clone, Copy)]
pub struct HeaderState {
    menu_open: RwSignal<bool>,
    modal_open: RwSignal<bool>,
}

impl HeaderState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            modal_open: RwSignal::new(false),
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open.get()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        set_if_changed(self.menu_open, false);
    }

    pub fn open_modal(&self) {
        set_if_changed(self.modal_open, true);
        set_if_changed(self.menu_open, false);
    }

    pub fn close_modal(&self) {
        set_if_changed(self.modal_open, false);
    }

    /// Reacts to a pointer-down seen by the window-wide listener.
    ///
    /// Returns `true` if the event closed the menu.
    pub fn pointer_down(&self, target: PointerTarget) -> bool {
        if target != PointerTarget::Outside {
            return false;
        }
        let closed = set_if_changed(self.menu_open, false);
        if closed {
            log::debug!("mobile menu closed by outside click");
        }
        closed
    }

    /// The modal flag as a read-only signal for the modal host.
    #[must_use]
    pub fn modal_signal(&self) -> Signal<bool> {
        self.modal_open.into()
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

fn set_if_changed(signal: RwSignal<bool>, value: bool) -> bool {
    let changed = signal.get_untracked() != value;
    if changed {
        signal.set(value);
    }
    changed
}

/// Where a pointer-down landed relative to the header's mobile controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    MenuPanel,
    ToggleButton,
    Outside,
    /// One of the reference elements is not mounted; nothing can be decided.
    Unknown,
}

impl PointerTarget {
    /// Classifies containment results. The panel wins if both are true.
    #[must_use]
    pub const fn classify(in_panel: bool, on_toggle: bool) -> Self {
        match (in_panel, on_toggle) {
            (true, _) => Self::MenuPanel,
            (false, true) => Self::ToggleButton,
            (false, false) => Self::Outside,
        }
    }

    /// Locates `target` against the mounted panel and toggle button.
    ///
    /// A node counts as inside an element when it is that element or one of
    /// its descendants.
    pub fn locate(
        target: Option<&web_sys::Node>,
        panel: Option<&web_sys::Node>,
        toggle: Option<&web_sys::Node>,
    ) -> Self {
        match (panel, toggle) {
            (Some(panel), Some(toggle)) => {
                Self::classify(panel.contains(target), toggle.contains(target))
            }
            _ => Self::Unknown,
        }
    }
}

/// Whether a link to `link_path` is active at `current_path`.
///
/// Paths must match exactly; `/projects/x` does not activate `/projects`.
/// A trailing slash on either side is ignored, except for the root.
#[must_use]
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    normalize(current_path) == normalize(link_path)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[must_use]
pub const fn link_class(active: bool) -> &'static str {
    if active {
        "font-semibold text-[#ffef5c] underline underline-offset-8"
    } else {
        "text-white transition-colors duration-300 hover:text-[#ffef5c]"
    }
}

#[must_use]
pub const fn mobile_panel_class(open: bool) -> &'static str {
    if open {
        "mobile-nav open block md:hidden"
    } else {
        "mobile-nav hidden"
    }
}

/// Icon shown by the hamburger button.
#[must_use]
pub fn toggle_icon(open: bool) -> icondata::Icon {
    if open { icondata::BsX } else { icondata::BsList }
}
