use leptos::{ev::SubmitEvent, prelude::*};

use super::features::{rise, section_entrance};
use super::{Animated, Icon};
use crate::models::{IconKind, Motion, Pose};

#[component]
pub fn Contact() -> impl IntoView {
    let mail = Motion::in_view(
        Pose::default().scale(0.0).rotate(-180.0),
        Pose::default().scale(1.0).rotate(0.0),
    )
    .spring(200);
    let field = Motion::interactive().focus(Pose::default().scale(1.02));
    let send = Motion::interactive()
        .hover(Pose::default().scale(1.05))
        .tap(Pose::default().scale(0.95));

    // Sending messages is out of scope; keep the browser from navigating.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        tracing::debug!("contact form submitted, no handler configured");
    };

    view! {
        <section id="contact" class="container section">
            <Animated motion=section_entrance()>
                <div class="narrow centered">
                    <Animated motion=mail class="mail-icon">
                        <Icon kind=IconKind::Mail class="icon-xl"/>
                    </Animated>
                    <Animated motion=rise() class="section-title">
                        <h2>"Get in Touch"</h2>
                    </Animated>
                    <p class="lead">
                        "Ready to start your journey? We're here to help you build something amazing."
                    </p>

                    <Animated motion=rise().delay(200)>
                        <form class="contact-form" on:submit=on_submit>
                            <div class="field-row">
                                <input
                                    type="text"
                                    name="name"
                                    placeholder="Your Name"
                                    class=field.class("field")
                                    style=field.style()
                                    data-motion=field.trigger_attr()
                                />
                                <input
                                    type="email"
                                    name="email"
                                    placeholder="Your Email"
                                    class=field.class("field")
                                    style=field.style()
                                    data-motion=field.trigger_attr()
                                />
                            </div>
                            <textarea
                                name="message"
                                placeholder="Your Message"
                                rows="6"
                                class=field.class("field wide")
                                style=field.style()
                                data-motion=field.trigger_attr()
                            ></textarea>
                            <button
                                type="submit"
                                class=send.class("btn btn-primary")
                                style=send.style()
                                data-motion=send.trigger_attr()
                            >
                                "Send Message"
                                <Icon kind=IconKind::ArrowRight/>
                            </button>
                        </form>
                    </Animated>
                </div>
            </Animated>
        </section>
    }
}
