use super::SettingsIcon;
use leptos::prelude::*;
use maintenance_app::domain::{PointerOffset, Tilt, TiltTarget};

/// Round badge at the top of the page. Spins one turn while `spinning` is set.
#[component]
pub fn SpinBadge<F>(
    #[prop(into)] offset: Signal<PointerOffset>,
    #[prop(into)] spinning: Signal<bool>,
    on_click: F,
) -> impl IntoView
where
    F: FnMut(leptos::ev::MouseEvent) + 'static,
{
    let style = move || Tilt::for_target(TiltTarget::TopIcon, offset.get()).style();
    let spin_class = move || {
        if spinning.get() {
            "spin-target spin-target--active"
        } else {
            "spin-target"
        }
    };

    view! {
        <div class="badge" on:click=on_click style=style>
            <span class=spin_class>
                <SettingsIcon class="icon icon--large"/>
            </span>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(offset: PointerOffset, spinning: bool) -> String {
        let owner = Owner::new();
        owner.set();
        let offset = RwSignal::new(offset);
        let spinning = RwSignal::new(spinning);
        view! {
            <SpinBadge offset=offset spinning=spinning on_click=|_: leptos::ev::MouseEvent| {}/>
        }
        .to_html()
    }

    #[test]
    fn test_tilts_with_top_icon_sensitivity() {
        let html = render(PointerOffset { x: 10.0, y: -10.0 }, false);
        assert!(html.contains("perspective(1000px) rotateX(3deg) rotateY(3deg)"));
    }

    #[test]
    fn test_spin_class_follows_flag() {
        assert!(render(PointerOffset::ZERO, true).contains("spin-target--active"));
        assert!(!render(PointerOffset::ZERO, false).contains("spin-target--active"));
    }
}
