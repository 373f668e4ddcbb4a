use leptos::prelude::*;

use super::{Animated, Icon, Nav};
use crate::models::{IconKind, Motion, Pose, CONTACT};
use crate::services::{navigation, with_host};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=800&q=80";

#[component]
pub fn Hero() -> impl IntoView {
    let header = Motion::on_mount(Pose::hidden().y(-50.0), Pose::rest().y(0.0)).duration(800);
    let body = Motion::in_view(Pose::hidden(), Pose::rest()).duration(800);
    let copy = Motion::in_view(Pose::hidden().x(-100.0), Pose::rest().x(0.0)).delay(200);
    let image = Motion::in_view(Pose::hidden().scale(0.5), Pose::rest().scale(1.0)).delay(400);
    let cta = Motion::interactive()
        .hover(Pose::default().scale(1.05))
        .tap(Pose::default().scale(0.95));

    view! {
        <header class="container hero">
            <Animated motion=header>
                <Nav/>

                <Animated motion=body class="hero-body">
                    <Animated motion=copy class="half">
                        <h1 class="hero-title">"Transform Your Ideas Into Reality"</h1>
                        <p class="lead">
                            "Unleash your creativity with our innovative platform. "
                            "Build, deploy, and scale your next big project with ease."
                        </p>
                        <button
                            class=cta.class("btn btn-primary")
                            style=cta.style()
                            data-motion=cta.trigger_attr()
                            on:click=move |_| with_host(|host| navigation::scroll_to_section(host, CONTACT))
                        >
                            "Get Started"
                            <Icon kind=IconKind::ArrowRight/>
                        </button>
                    </Animated>

                    <Animated motion=image class="half">
                        <img src=HERO_IMAGE alt="Hero" class="photo"/>
                    </Animated>
                </Animated>
            </Animated>
        </header>
    }
}
