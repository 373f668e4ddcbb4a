mod about;
mod animated;
mod contact;
mod features;
mod footer;
mod hero;
mod icon;
mod nav;
mod progress_bar;

pub use about::About;
pub use animated::Animated;
pub use contact::Contact;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icon::Icon;
pub use nav::Nav;
pub use progress_bar::ProgressBar;
