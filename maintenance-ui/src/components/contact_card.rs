use super::MailIcon;
use leptos::prelude::*;
use maintenance_app::domain::{content, PointerOffset, Tilt, TiltTarget};

#[component]
pub fn ContactCard(#[prop(into)] offset: Signal<PointerOffset>) -> impl IntoView {
    let style = move || Tilt::for_target(TiltTarget::ContactCard, offset.get()).style();

    view! {
        <div class="contact" style=style>
            <div class="contact__header">
                <MailIcon class="icon icon--mail"/>
                <span class="contact__label">{content::CONTACT_LABEL}</span>
            </div>
            <a href=content::CONTACT_HREF class="contact__link">
                {content::CONTACT_EMAIL}
            </a>
        </div>
    }
}
