use super::IconKind;

/// An anchor-addressable region of the page reachable from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub id: &'static str,
}

pub const SECTIONS: [Section; 3] = [
    Section { name: "Features", id: "features" },
    Section { name: "About", id: "about" },
    Section { name: "Contact", id: "contact" },
];

/// Section the hero call-to-action scrolls to.
pub const CONTACT: &str = "contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: IconKind::Code,
        title: "Clean Code",
        description: "Write beautiful, maintainable code with our modern development tools.",
    },
    Feature {
        icon: IconKind::Rocket,
        title: "Fast Performance",
        description: "Lightning-fast performance optimized for the modern web.",
    },
    Feature {
        icon: IconKind::Sparkles,
        title: "Beautiful Design",
        description: "Create stunning user interfaces that captivate your audience.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: IconKind,
    pub text: &'static str,
}

pub const STATS: [Stat; 2] = [
    Stat { icon: IconKind::Users, text: "10K+ Users" },
    Stat { icon: IconKind::Star, text: "4.9 Rating" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_sections_are_in_page_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["features", "about", "contact"]);
    }

    #[test]
    fn contact_target_is_a_nav_section() {
        assert!(SECTIONS.iter().any(|s| s.id == CONTACT));
    }
}
