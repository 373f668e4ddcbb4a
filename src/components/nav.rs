use leptos::prelude::*;

use super::Icon;
use crate::models::{IconKind, Motion, Pose, SECTIONS};
use crate::services::{identity, navigation, with_host};

#[component]
pub fn Nav() -> impl IntoView {
    let logo = Motion::on_mount(Pose::default().scale(0.0), Pose::default().scale(1.0))
        .spring(300)
        .hover(Pose::default().scale(1.1).rotate(5.0))
        .tap(Pose::default().scale(0.9));
    let links = Motion::on_mount(Pose::hidden().x(100.0), Pose::rest().x(0.0)).delay(400);
    let link = Motion::interactive()
        .hover(Pose::default().scale(1.05))
        .tap(Pose::default().scale(0.95));
    let collapsed = Pose::default().scale_x(0.0);
    let underline = Motion::on_mount(collapsed, collapsed)
        .duration(300)
        .hover(Pose::default().scale_x(1.0));

    view! {
        <nav class="main-nav">
            <div
                class=logo.class("nav-brand")
                style=logo.style()
                data-motion=logo.trigger_attr()
                on:click=move |_| with_host(|host| identity::reset_identity(host))
            >
                <Icon kind=IconKind::Sparkles class="icon-lg"/>
                "Innovate"
            </div>

            <div
                class=links.class("nav-links")
                style=links.style()
                data-motion=links.trigger_attr()
            >
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let id = section.id;
                        view! {
                            <button
                                class=link.class("nav-link")
                                style=link.style()
                                data-motion=link.trigger_attr()
                                on:click=move |_| with_host(|host| navigation::scroll_to_section(host, id))
                            >
                                {section.name}
                                <span
                                    class=underline.class("nav-underline")
                                    style=underline.style()
                                    data-motion=underline.trigger_attr()
                                ></span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
