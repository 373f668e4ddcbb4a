use leptos::prelude::*;

use crate::components::{About, Contact, Features, Footer, Hero, ProgressBar};
use crate::services::start_motion;

#[component]
pub fn LandingPage() -> impl IntoView {
    Effect::new(move |_| start_motion());

    view! {
        <div id="root" class="landing">
            <ProgressBar/>
            <Hero/>
            <Features/>
            <About/>
            <Contact/>
            <Footer/>
        </div>
    }
}
