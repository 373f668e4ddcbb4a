use chrono::{Datelike, Local};
use leptos::prelude::*;

use super::{Animated, Icon};
use crate::models::{IconKind, Motion, Pose};

const OWNER: &str = "Adhipatya Saxena";

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("{year} {owner}")
}

#[component]
pub fn Footer() -> impl IntoView {
    let bar = Motion::on_mount(Pose::hidden(), Pose::rest()).delay(500);
    let left = Motion::on_mount(Pose::hidden().x(-20.0), Pose::rest().x(0.0)).delay(700);
    let right = Motion::on_mount(Pose::hidden().x(20.0), Pose::rest().x(0.0))
        .delay(700)
        .hover(Pose::default().scale(1.05))
        .tap(Pose::default().scale(0.95));

    view! {
        <footer class="site-footer">
            <Animated motion=bar>
                <div class="container footer-inner">
                    <Animated motion=left class="footer-copy">
                        <Icon kind=IconKind::Copyright class="icon-sm"/>
                        <span>{copyright_line(Local::now().year(), OWNER)}</span>
                    </Animated>
                    <a
                        href="#"
                        class=right.class("footer-link")
                        style=right.style()
                        data-motion=right.trigger_attr()
                    >
                        "Terms & Conditions"
                    </a>
                </div>
            </Animated>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_puts_year_first() {
        assert_eq!(copyright_line(2026, OWNER), "2026 Adhipatya Saxena");
    }
}
