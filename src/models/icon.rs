/// Glyphs drawn by the `Icon` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Code,
    Rocket,
    Sparkles,
    Mail,
    Users,
    Star,
    Copyright,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::ArrowRight => "arrow-right",
            IconKind::Code => "code",
            IconKind::Rocket => "rocket",
            IconKind::Sparkles => "sparkles",
            IconKind::Mail => "mail",
            IconKind::Users => "users",
            IconKind::Star => "star",
            IconKind::Copyright => "copyright",
        }
    }
}
