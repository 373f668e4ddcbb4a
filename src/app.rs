use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/innovate.css"/>
        <Title text="Innovate - Transform Your Ideas Into Reality"/>
        <Meta name="description" content="Build, deploy, and scale your next big project with ease."/>
        <Link rel="icon" href="/favicon.svg"/>

        <Router>
            <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
