//! Declarative animation descriptors.
//!
//! A [`Motion`] never animates anything by itself. It renders to the `motion`
//! class, a set of CSS custom properties and `data-motion*` attributes; the
//! stylesheet transitions between the poses and the browser-side driver in
//! `services::motion_driver` decides when an element becomes `is-active`.

use std::fmt::Write;

/// A visual state: any field left `None` falls back to the identity value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    pub rotate: Option<f64>,
}

impl Pose {
    /// Fully visible, untransformed.
    pub fn rest() -> Self {
        Self::default()
    }

    /// Fully transparent, untransformed.
    pub fn hidden() -> Self {
        Self::default().opacity(0.0)
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn x(mut self, px: f64) -> Self {
        self.x = Some(px);
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn scale_x(mut self, scale: f64) -> Self {
        self.scale_x = Some(scale);
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate = Some(deg);
        self
    }

    /// Fields set on `self` win, everything else comes from `base`.
    pub fn over(&self, base: &Pose) -> Pose {
        Pose {
            opacity: self.opacity.or(base.opacity),
            x: self.x.or(base.x),
            y: self.y.or(base.y),
            scale: self.scale.or(base.scale),
            scale_x: self.scale_x.or(base.scale_x),
            rotate: self.rotate.or(base.rotate),
        }
    }

    pub fn css_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// Always emits the same function list so any two poses interpolate
    /// component-wise.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) scaleX({}) rotate({}deg)",
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.scale.unwrap_or(1.0),
            self.scale_x.unwrap_or(1.0),
            self.rotate.unwrap_or(0.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Tween { duration_ms: u32, delay_ms: u32 },
    Spring { stiffness: u32, delay_ms: u32 },
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Tween {
            duration_ms: 300,
            delay_ms: 0,
        }
    }
}

impl Transition {
    /// Springs are approximated by a fixed overshoot curve whose length
    /// shrinks with stiffness.
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Transition::Tween { duration_ms, .. } => duration_ms,
            Transition::Spring { stiffness, .. } => {
                (7000.0 / f64::from(stiffness.max(1)).sqrt()).round() as u32
            }
        }
    }

    pub fn delay_ms(&self) -> u32 {
        match *self {
            Transition::Tween { delay_ms, .. } | Transition::Spring { delay_ms, .. } => delay_ms,
        }
    }

    pub fn easing(&self) -> &'static str {
        match self {
            Transition::Tween { .. } => "cubic-bezier(0.25, 0.1, 0.25, 1)",
            Transition::Spring { .. } => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }

    fn with_delay(self, delay_ms: u32) -> Self {
        match self {
            Transition::Tween { duration_ms, .. } => Transition::Tween {
                duration_ms,
                delay_ms,
            },
            Transition::Spring { stiffness, .. } => Transition::Spring {
                stiffness,
                delay_ms,
            },
        }
    }
}

/// When an element moves from its initial to its target pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the page is interactive.
    Mount,
    /// While the element intersects the viewport shrunk by `margin_px`
    /// (negative values shrink). Leaving the viewport replays the entrance.
    InView { margin_px: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub target: Pose,
    pub transition: Transition,
    pub trigger: Trigger,
    pub hover: Option<Pose>,
    pub tap: Option<Pose>,
    pub focus: Option<Pose>,
}

impl Motion {
    pub fn on_mount(initial: Pose, target: Pose) -> Self {
        Self {
            initial,
            target,
            transition: Transition::default(),
            trigger: Trigger::Mount,
            hover: None,
            tap: None,
            focus: None,
        }
    }

    pub fn in_view(initial: Pose, target: Pose) -> Self {
        Self {
            trigger: Trigger::InView { margin_px: 0 },
            ..Self::on_mount(initial, target)
        }
    }

    /// No entrance animation, only hover/tap/focus feedback.
    pub fn interactive() -> Self {
        Self::on_mount(Pose::rest(), Pose::rest())
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        let delay_ms = self.transition.delay_ms();
        self.transition = Transition::Tween {
            duration_ms,
            delay_ms,
        };
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.transition = self.transition.with_delay(delay_ms);
        self
    }

    pub fn spring(mut self, stiffness: u32) -> Self {
        let delay_ms = self.transition.delay_ms();
        self.transition = Transition::Spring {
            stiffness,
            delay_ms,
        };
        self
    }

    pub fn margin(mut self, px: i32) -> Self {
        if let Trigger::InView { margin_px } = &mut self.trigger {
            *margin_px = px;
        }
        self
    }

    pub fn hover(mut self, pose: Pose) -> Self {
        self.hover = Some(pose);
        self
    }

    pub fn tap(mut self, pose: Pose) -> Self {
        self.tap = Some(pose);
        self
    }

    pub fn focus(mut self, pose: Pose) -> Self {
        self.focus = Some(pose);
        self
    }

    pub fn class(&self, extra: &str) -> String {
        if extra.is_empty() {
            "motion".to_string()
        } else {
            format!("motion {extra}")
        }
    }

    pub fn trigger_attr(&self) -> &'static str {
        match self.trigger {
            Trigger::Mount => "mount",
            Trigger::InView { .. } => "view",
        }
    }

    pub fn margin_attr(&self) -> Option<String> {
        match self.trigger {
            Trigger::InView { margin_px } if margin_px != 0 => Some(format!("{margin_px}px")),
            _ => None,
        }
    }

    /// Inline style carrying every pose as a custom property. Interaction
    /// poses are always written, defaulting to the target pose, so nested
    /// motion elements never inherit an ancestor's hover state.
    pub fn style(&self) -> String {
        let settle = |pose: Option<Pose>| {
            pose.map(|p| p.over(&self.target))
                .unwrap_or(self.target)
                .css_transform()
        };

        let mut css = String::new();
        let _ = write!(
            css,
            "--m-from: {}; --m-from-opacity: {}; --m-to: {}; --m-to-opacity: {}; ",
            self.initial.css_transform(),
            self.initial.css_opacity(),
            self.target.css_transform(),
            self.target.css_opacity(),
        );
        let _ = write!(
            css,
            "--m-duration: {}ms; --m-delay: {}ms; --m-ease: {}; ",
            self.transition.duration_ms(),
            self.transition.delay_ms(),
            self.transition.easing(),
        );
        let _ = write!(
            css,
            "--m-hover: {}; --m-tap: {}; --m-focus: {}",
            settle(self.hover),
            settle(self.tap.or(self.hover)),
            settle(self.focus),
        );
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_render_as_identity() {
        assert_eq!(
            Pose::rest().css_transform(),
            "translate(0px, 0px) scale(1) scaleX(1) rotate(0deg)"
        );
        assert_eq!(Pose::rest().css_opacity(), 1.0);
        assert_eq!(
            Pose::hidden().y(-50.0).css_transform(),
            "translate(0px, -50px) scale(1) scaleX(1) rotate(0deg)"
        );
    }

    #[test]
    fn over_prefers_own_fields() {
        let target = Pose::rest().opacity(1.0).x(0.0).scale(1.0);
        let hover = Pose::default().scale(1.1).rotate(5.0);
        let merged = hover.over(&target);
        assert_eq!(merged.scale, Some(1.1));
        assert_eq!(merged.rotate, Some(5.0));
        assert_eq!(merged.opacity, Some(1.0));
        assert_eq!(merged.x, Some(0.0));
    }

    #[test]
    fn style_carries_both_poses_and_timing() {
        let m = Motion::on_mount(Pose::hidden().y(-50.0), Pose::rest().opacity(1.0).y(0.0))
            .duration(800)
            .delay(200);
        let css = m.style();
        assert!(css.contains("--m-from: translate(0px, -50px)"));
        assert!(css.contains("--m-from-opacity: 0;"));
        assert!(css.contains("--m-to-opacity: 1;"));
        assert!(css.contains("--m-duration: 800ms;"));
        assert!(css.contains("--m-delay: 200ms;"));
    }

    #[test]
    fn interaction_poses_default_to_target() {
        let m = Motion::interactive();
        let rest = Pose::rest().css_transform();
        let css = m.style();
        assert!(css.contains(&format!("--m-hover: {rest};")));
        assert!(css.contains(&format!("--m-focus: {rest}")));
    }

    #[test]
    fn tap_falls_back_to_hover() {
        let m = Motion::interactive().hover(Pose::default().scale(1.05));
        let hovered = Pose::default().scale(1.05).css_transform();
        let css = m.style();
        assert!(css.contains(&format!("--m-hover: {hovered};")));
        assert!(css.contains(&format!("--m-tap: {hovered};")));
    }

    #[test]
    fn spring_duration_shrinks_with_stiffness() {
        let soft = Motion::interactive().spring(200).transition;
        let stiff = Motion::interactive().spring(300).transition;
        assert_eq!(soft.duration_ms(), 495);
        assert_eq!(stiff.duration_ms(), 404);
        assert_eq!(stiff.easing(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
    }

    #[test]
    fn delay_survives_switching_to_spring() {
        let t = Motion::interactive().delay(400).spring(300).transition;
        assert_eq!(t.delay_ms(), 400);
        let t = Motion::interactive().spring(300).delay(100).transition;
        assert_eq!(t, Transition::Spring { stiffness: 300, delay_ms: 100 });
    }

    #[test]
    fn trigger_attributes() {
        let mount = Motion::interactive();
        assert_eq!(mount.trigger_attr(), "mount");
        assert_eq!(mount.margin(-100).margin_attr(), None);

        let section = Motion::in_view(Pose::hidden(), Pose::rest()).margin(-100);
        assert_eq!(section.trigger_attr(), "view");
        assert_eq!(section.margin_attr().as_deref(), Some("-100px"));

        let flush = Motion::in_view(Pose::hidden(), Pose::rest());
        assert_eq!(flush.margin_attr(), None);
    }

    #[test]
    fn settled_elements_drop_the_entrance_delay() {
        let css = include_str!("../../style/main.css");
        let rule = css
            .split(".motion.is-settled {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .unwrap_or_default();
        assert!(rule.contains("transition-delay: 0ms"));
    }

    #[test]
    fn underline_grows_horizontally_on_hover() {
        let collapsed = Pose::default().scale_x(0.0);
        let m = Motion::on_mount(collapsed, collapsed)
            .duration(300)
            .hover(Pose::default().scale_x(1.0));
        let css = m.style();
        assert!(css.contains("--m-to: translate(0px, 0px) scale(1) scaleX(0) rotate(0deg);"));
        assert!(css.contains("--m-hover: translate(0px, 0px) scale(1) scaleX(1) rotate(0deg);"));
        assert!(css.contains("--m-duration: 300ms;"));
    }

    #[test]
    fn class_prefixes_motion() {
        let m = Motion::interactive();
        assert_eq!(m.class(""), "motion");
        assert_eq!(m.class("btn btn-primary"), "motion btn btn-primary");
    }
}
