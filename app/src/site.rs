//! Static site configuration: who owns the portfolio, which pages the header
//! links to, and where the social profiles live.

use icondata::Icon;

/// Name shown in the document title and footer.
pub const OWNER: &str = "Josephine Closan";

/// Logo rendered at the left of the header.
pub const LOGO_SRC: &str = "/assets/logo.png";
pub const LOGO_ALT: &str = "Joe's logo";

/// A primary navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "About", path: "/about" },
    NavItem { label: "Projects", path: "/projects" },
];

/// A social profile link with the icon used to render it.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl SocialLink {
    /// `mailto:` links stay in the current tab; everything else opens a new one.
    #[must_use]
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/josephine-closan/",
        icon: icondata::BsLinkedin,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/JoeClos",
        icon: icondata::BsGithub,
    },
    SocialLink {
        label: "Email",
        href: "mailto:josephine.closan@yahoo.com",
        icon: icondata::BsEnvelope,
    },
];
