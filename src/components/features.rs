use leptos::prelude::*;

use super::{Animated, Icon};
use crate::models::{Motion, Pose, FEATURES};

/// Entrance shared by every page section.
pub(crate) fn section_entrance() -> Motion {
    Motion::in_view(Pose::hidden().y(50.0), Pose::rest().y(0.0))
        .duration(800)
        .margin(-100)
}

/// Fade-and-rise used by section headings.
pub(crate) fn rise() -> Motion {
    Motion::in_view(Pose::hidden().y(20.0), Pose::rest().y(0.0))
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="container section">
            <Animated motion=section_entrance()>
                <Animated motion=rise() class="section-title centered">
                    <h2>"Why Choose Us"</h2>
                </Animated>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            let card = rise()
                                .delay(index as u32 * 200)
                                .hover(Pose::default().scale(1.05));
                            let badge = Motion::in_view(
                                Pose::default().scale(0.0),
                                Pose::default().scale(1.0),
                            );
                            view! {
                                <Animated motion=card class="feature-card">
                                    <Animated motion=badge class="feature-icon">
                                        <Icon kind=feature.icon class="icon-lg"/>
                                    </Animated>
                                    <h3>{feature.title}</h3>
                                    <p class="muted">{feature.description}</p>
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </Animated>
        </section>
    }
}
