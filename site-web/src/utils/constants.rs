//! Application constants

/// `localStorage` key of the chosen language.
pub const LANGUAGE_STORAGE_KEY: &str = "site.language";

/// Query parameter that overrides the stored language, e.g. `?lang=ar`.
pub const LANGUAGE_QUERY_PARAM: &str = "lang";

/// Same-origin contact endpoint served by the backend.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Client-side message limit; the server enforces its own configured limit.
pub const MAX_MESSAGE_LEN: usize = 5000;

/// `scrollY` past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_AT: f64 = 10.0;

/// Navigation targets: translation key and section anchor.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("nav.home", "home"),
    ("nav.about", "about"),
    ("nav.operations", "operations"),
    ("nav.sustainability", "sustainability"),
    ("nav.media", "media"),
    ("nav.contact", "contact"),
];

/// Switchboard number shown in the footer and contact section.
pub const CONTACT_PHONE: &str = "+20 2 2614 0000";

pub const CONTACT_EMAIL: &str = "info@bapetco.com";
