pub mod components;
#[cfg(feature = "hydrate")]
mod host;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use maintenance_app::domain::content;

use pages::MaintenancePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=content::PAGE_TITLE/>
        <Meta name="description" content=content::PAGE_DESCRIPTION/>

        // every path shows the maintenance page
        <Router>
            <Routes fallback=|| view! { <MaintenancePage/> }>
                <Route path=path!("/") view=MaintenancePage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
