use crate::components::{ContactCard, DecorativeRow, SpinBadge};
use leptos::html::Div;
use leptos::prelude::*;
use maintenance_app::domain::{content, RevealSection, ViewState};

#[cfg(feature = "hydrate")]
use crate::host::BrowserHost;
#[cfg(feature = "hydrate")]
use maintenance_app::PageLifecycle;

/// Full-screen "back soon" page.
///
/// Server rendering produces the hidden initial state; timers and the pointer
/// listener only exist once the page is hydrated in the browser.
#[component]
pub fn MaintenancePage() -> impl IntoView {
    let view_state = RwSignal::new(ViewState::default());
    let container = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    let lifecycle = mount_lifecycle(view_state, container);

    let loaded = Memo::new(move |_| view_state.get().loaded);
    let spinning = Memo::new(move |_| view_state.get().spinning);
    let offset = Memo::new(move |_| view_state.get().pointer_offset);

    let reveal_class = move |section: RevealSection| move || section.class(loaded.get());

    let on_icon_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        lifecycle.spin();
    };

    view! {
        <div class="maintenance">
            <div class="maintenance__backdrop">
                <div class="maintenance__pattern"></div>
            </div>
            <div class="maintenance__arc maintenance__arc--top"></div>

            <div node_ref=container class="maintenance__container">
                <div class="maintenance__content">
                    <div class=reveal_class(RevealSection::Icon) style=RevealSection::Icon.style()>
                        <SpinBadge offset=offset spinning=spinning on_click=on_icon_click/>
                    </div>

                    <h1
                        class=move || format!("maintenance__title {}", RevealSection::Heading.class(loaded.get()))
                        style=RevealSection::Heading.style()
                    >
                        {content::HEADLINE}
                    </h1>

                    <div class=reveal_class(RevealSection::Body) style=RevealSection::Body.style()>
                        <p class="maintenance__lead">
                            <span class="maintenance__brand">{content::BRAND}</span>
                            {content::UNAVAILABLE_REASON}
                        </p>
                        <p class="maintenance__thanks">{content::THANKS}</p>
                    </div>

                    <div class=reveal_class(RevealSection::Contact) style=RevealSection::Contact.style()>
                        <ContactCard offset=offset/>
                    </div>

                    <div class=reveal_class(RevealSection::Decorations) style=RevealSection::Decorations.style()>
                        <DecorativeRow offset=offset/>
                    </div>
                </div>
            </div>

            <div class="maintenance__arc maintenance__arc--bottom"></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn mount_lifecycle(
    view_state: RwSignal<ViewState>,
    container: NodeRef<Div>,
) -> PageLifecycle<BrowserHost> {
    use send_wrapper::SendWrapper;

    let lifecycle = PageLifecycle::new(BrowserHost::new(container), move |next| {
        // the signal may already be disposed while the page is torn down
        let _ = view_state.try_set(next);
    });
    lifecycle.mount();

    let guard = SendWrapper::new(lifecycle.clone());
    on_cleanup(move || guard.unmount());

    lifecycle
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        let owner = Owner::new();
        owner.set();
        view! { <MaintenancePage/> }.to_html()
    }

    #[test]
    fn test_sections_hidden_on_first_render() {
        let html = render();
        assert_eq!(html.matches("reveal--hidden").count(), RevealSection::ALL.len());
        for section in RevealSection::ALL {
            assert!(!html.contains(section.animation().class()));
            assert!(html.contains(&section.style()));
        }
    }

    #[test]
    fn test_fixed_copy_and_mailto() {
        let html = render();
        for text in [
            content::HEADLINE,
            content::BRAND,
            content::UNAVAILABLE_REASON,
            content::THANKS,
            content::CONTACT_EMAIL,
        ] {
            assert!(html.contains(text), "missing {:?}", text);
        }
        assert!(html.contains(r#"href="mailto:fatbikeparts@gmail.com""#));
    }

    #[test]
    fn test_tilts_start_flat() {
        let html = render();
        // top icon, contact card and three decorative badges
        assert_eq!(
            html.matches("perspective(1000px) rotateX(0deg) rotateY(0deg)")
                .count(),
            5
        );
        assert!(!html.contains("spin-target--active"));
    }
}
