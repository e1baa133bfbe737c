//! UI Components

pub mod footer;
pub mod language_font;
pub mod loading_screen;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod starfield;

pub use footer::Footer;
pub use language_font::LanguageFont;
pub use loading_screen::LoadingScreen;
pub use navbar::Navbar;
pub use parallax::Parallax;
pub use reveal::{Entrance, Reveal};
pub use starfield::Starfield;
