use leptos::prelude::*;

use super::features::{rise, section_entrance};
use super::{Animated, Icon};
use crate::models::{Motion, Pose, STATS};

const TEAM_IMAGE: &str =
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=800&q=80";

#[component]
pub fn About() -> impl IntoView {
    let copy = Motion::in_view(Pose::hidden().x(-50.0), Pose::rest().x(0.0)).delay(200);
    let image = Motion::in_view(Pose::hidden().x(50.0), Pose::rest().x(0.0)).delay(400);
    let stat = Motion::in_view(Pose::hidden().scale(0.8), Pose::rest().scale(1.0))
        .hover(Pose::default().scale(1.05));

    view! {
        <section id="about" class="container section panel">
            <Animated motion=section_entrance()>
                <div class="split">
                    <Animated motion=copy class="half">
                        <Animated motion=rise() class="section-title">
                            <h2>"About Our Mission"</h2>
                        </Animated>
                        <p class="lead">
                            "We're passionate about empowering developers and businesses to create "
                            "exceptional digital experiences. Our platform combines cutting-edge "
                            "technology with intuitive design to make development faster and more efficient."
                        </p>
                        <div class="stats">
                            {STATS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <Animated motion=stat class="stat">
                                            <div class="stat-icon">
                                                <Icon kind=s.icon/>
                                            </div>
                                            <span>{s.text}</span>
                                        </Animated>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Animated>

                    <Animated motion=image class="half">
                        <img src=TEAM_IMAGE alt="Team" class="photo"/>
                    </Animated>
                </div>
            </Animated>
        </section>
    }
}
