use super::{SettingsIcon, WrenchIcon};
use leptos::prelude::*;
use maintenance_app::domain::{content, PointerOffset, Tilt, TiltTarget};

/// Three small badges that lean with the pointer a little harder than the rest.
#[component]
pub fn DecorativeRow(#[prop(into)] offset: Signal<PointerOffset>) -> impl IntoView {
    let style = move || Tilt::for_target(TiltTarget::Decorative, offset.get()).style();

    view! {
        <div class="decor">
            <div class="decor__badge decor__badge--blue" style=style>
                <WrenchIcon class="icon icon--small"/>
            </div>
            <div class="decor__badge decor__badge--yellow" style=style>
                <SettingsIcon class="icon icon--small"/>
            </div>
            <div class="decor__badge decor__badge--sky" style=style>
                <img src=content::LOGO_SRC alt=content::LOGO_ALT class="decor__logo"/>
            </div>
        </div>
    }
}
