//! Page sections, top to bottom.

pub mod about;
pub mod contact;
pub mod hero;
pub mod media;
pub mod operations;
pub mod sustainability;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use media::Media;
pub use operations::Operations;
pub use sustainability::Sustainability;
