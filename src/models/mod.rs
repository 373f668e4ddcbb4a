mod icon;
mod motion;
mod section;

pub use icon::IconKind;
pub use motion::{Motion, Pose, Transition, Trigger};
pub use section::{Feature, Section, Stat, CONTACT, FEATURES, SECTIONS, STATS};
