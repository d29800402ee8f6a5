use leptos::prelude::*;
use leptos_meta::MetaTags;
use maintenance_app::domain::content;
use maintenance_ui::App;

const CSS: &str = r#"
:root {
    --blue-100: #dbeafe;
    --blue-200: #bfdbfe;
    --blue-300: #93c5fd;
    --blue-400: #60a5fa;
    --blue-500: #3b82f6;
    --blue-600: #2563eb;
    --blue-800: #1e40af;
    --yellow-300: #fde047;
    --yellow-400: #facc15;
    --yellow-500: #eab308;
    --gray-800: #1f2937;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    min-height: 100vh;
}
.maintenance { position: relative; min-height: 100vh; overflow: hidden; }
.maintenance__backdrop {
    position: absolute; inset: 0;
    background: linear-gradient(to bottom right, var(--blue-400), var(--blue-500), var(--blue-600));
}
.maintenance__pattern {
    position: absolute; inset: 0; opacity: 0.08;
    background-image: radial-gradient(circle at 1px 1px, #fff 1px, transparent 0);
    background-size: 32px 32px;
}
.maintenance__arc { position: absolute; left: 0; width: 100%; }
.maintenance__arc--top {
    top: 0; height: 16rem; background: var(--blue-300); opacity: 0.3;
    border-radius: 0 0 9999px 9999px; transform: translateY(-8rem);
}
.maintenance__arc--bottom {
    bottom: 0; height: 8rem; background: var(--yellow-400); opacity: 0.2;
    border-radius: 9999px 9999px 0 0; transform: translateY(4rem);
}
.maintenance__container {
    position: relative; z-index: 10; min-height: 100vh;
    display: flex; align-items: center; justify-content: center; padding: 0 1rem;
}
.maintenance__content { max-width: 42rem; margin: 0 auto; text-align: center; }
.maintenance__title {
    font-size: clamp(3rem, 8vw, 4.5rem); font-weight: 700; color: #fff; margin-bottom: 1.5rem;
}
.maintenance__lead { font-size: clamp(1.25rem, 3vw, 1.5rem); color: #fff; font-weight: 500; margin-bottom: 1rem; }
.maintenance__brand { color: var(--yellow-300); font-weight: 700; }
.maintenance__thanks { font-size: clamp(1.125rem, 2.5vw, 1.25rem); color: var(--blue-100); margin-bottom: 2rem; }

.badge {
    display: inline-flex; align-items: center; justify-content: center;
    width: 6rem; height: 6rem; margin-bottom: 2rem; background: #fff; border-radius: 9999px;
    border: 4px solid var(--blue-500); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    color: var(--blue-600); cursor: pointer; animation: pulse-gentle 3s ease-in-out infinite;
}
.spin-target { display: inline-flex; transition: transform 1000ms; }
.spin-target--active { transform: rotate(360deg); }
.icon { display: block; }
.icon--large { width: 3rem; height: 3rem; }
.icon--small { width: 1.5rem; height: 1.5rem; color: #fff; }
.icon--mail { width: 1.5rem; height: 1.5rem; color: var(--blue-500); margin-right: 0.5rem; }

.contact {
    background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(4px);
    border-radius: 1rem; padding: 1.5rem; border: 1px solid var(--blue-200);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}
.contact__header { display: flex; align-items: center; justify-content: center; margin-bottom: 0.75rem; }
.contact__label { color: var(--gray-800); font-weight: 600; }
.contact__link {
    color: var(--blue-600); font-weight: 500; font-size: 1.125rem;
    text-decoration: none; transition: color 300ms;
}
.contact__link:hover { color: var(--blue-800); text-decoration: underline; }

.decor { display: flex; justify-content: center; gap: 2rem; margin-top: 3rem; }
.decor__badge {
    display: flex; align-items: center; justify-content: center; overflow: hidden;
    width: 3rem; height: 3rem; border-radius: 9999px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.decor__badge--blue { background: var(--blue-500); }
.decor__badge--yellow { background: var(--yellow-500); }
.decor__badge--sky { background: var(--blue-400); }
.decor__logo { width: 2rem; height: 2rem; filter: brightness(0) invert(1); }

.reveal { animation-fill-mode: both; animation-timing-function: ease-out; }
.reveal--hidden { opacity: 0; }
.reveal--scale-in { animation-name: scale-in; }
.reveal--slide-down { animation-name: slide-down; }
.reveal--fade-in { animation-name: fade-in; }
.reveal--slide-up { animation-name: slide-up; }

@keyframes scale-in { from { opacity: 0; transform: scale(0.5); } to { opacity: 1; transform: scale(1); } }
@keyframes slide-down { from { opacity: 0; transform: translateY(-2rem); } to { opacity: 1; transform: translateY(0); } }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes slide-up { from { opacity: 0; transform: translateY(2rem); } to { opacity: 1; transform: translateY(0); } }
@keyframes pulse-gentle { 0%, 100% { box-shadow: 0 0 0 0 rgba(59, 130, 246, 0.4); } 50% { box-shadow: 0 0 0 12px rgba(59, 130, 246, 0); } }
"#;

// Without the wasm bundle nothing ever reveals the sections.
const NOSCRIPT_CSS: &str = ".reveal--hidden { opacity: 1; }";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="nl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{content::PAGE_TITLE}</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔧</text></svg>"/>
                <style>{CSS}</style>
                <noscript><style>{NOSCRIPT_CSS}</style></noscript>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
