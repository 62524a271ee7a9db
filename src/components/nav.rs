use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::MENU_SCROLL_DELAY_MS;
use crate::dom;
use crate::effects::anchor::scroll_to_fragment;
use crate::effects::frame::FrameScroll;
use crate::motion::header::{HeaderLook, HeaderState};

const MENU_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#services", "Services"),
    ("#approach", "Approach"),
    ("#work", "Work"),
    ("#process", "Process"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_start_project: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let look = use_state_eq(HeaderLook::default);
    let menu_open = use_state_eq(|| false);
    let pending_scroll = use_mut_ref(|| None::<Timeout>);

    {
        let look = look.clone();
        use_effect_with_deps(
            move |_| {
                let header = RefCell::new(HeaderState::new());
                let subscription = FrameScroll::subscribe_primed(move |viewport| {
                    look.set(header.borrow_mut().on_scroll(viewport.scroll_y));
                });
                let subscription = dom::log_failure("header scroll", subscription);
                move || drop(subscription)
            },
            (),
        );
    }

    // Lock page scrolling behind the overlay.
    use_effect_with_deps(
        |open| {
            if let Some(body) = dom::body() {
                dom::set_style(&body, "overflow", if *open { "hidden" } else { "auto" });
            }
            || ()
        },
        *menu_open,
    );

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_on_backdrop = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                menu_open.set(false);
            }
        })
    };

    let start_project = {
        let on_start_project = props.on_start_project.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_start_project.emit(());
        })
    };

    let open = *menu_open;
    let links = MENU_LINKS.iter().enumerate().map(|(index, (href, label))| {
        let onclick = {
            let menu_open = menu_open.clone();
            let pending_scroll = pending_scroll.clone();
            let href = href.to_string();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                let href = href.clone();
                // Wait for the overlay to fade before moving the page.
                *pending_scroll.borrow_mut() = Some(Timeout::new(MENU_SCROLL_DELAY_MS, move || {
                    scroll_to_fragment(&href);
                }));
            })
        };
        let delay = if open {
            format!("transition-delay: {:.1}s", index as f64 * 0.1 + 0.1)
        } else {
            "transition-delay: 0s".to_string()
        };
        html! {
            <li>
                <a href={*href} class="nav-menu-link" style={delay} {onclick}>
                    <span class="nav-menu-index">{format!("{:02}", index + 1)}</span>
                    {*label}
                </a>
            </li>
        }
    });

    html! {
        <>
            <style>{NAV_CSS}</style>
            <header class={classes!(
                "navigation",
                look.elevated.then_some("scrolled"),
                (look.hidden && !open).then_some("nav-hidden"),
            )}>
                <div class="nav-inner">
                    <a href="#top" class="nav-logo">{"Northlight"}<span>{"."}</span></a>
                    <div class="nav-actions">
                        <button class="nav-cta" onclick={start_project.clone()}>{"Start a project"}</button>
                        <button
                            id="navToggle"
                            class={classes!("nav-toggle", open.then_some("active"))}
                            aria-label="Toggle navigation"
                            aria-expanded={open.to_string()}
                            onclick={toggle_menu}
                        >
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </header>
            <div id="navOverlay" class={classes!("nav-overlay", open.then_some("active"))} onclick={close_on_backdrop}>
                <nav class="nav-menu">
                    <ul>{ for links }</ul>
                    <button class="nav-menu-cta" onclick={start_project}>{"Tell us about your project →"}</button>
                </nav>
            </div>
        </>
    }
}

const NAV_CSS: &str = r#"
    .navigation {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: rgba(255, 255, 255, 0.95);
        transition: transform 0.35s ease, box-shadow 0.35s ease, background 0.35s ease;
    }
    .navigation.scrolled {
        background: rgba(255, 255, 255, 0.98);
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
    }
    .navigation.nav-hidden {
        transform: translateY(-100%);
    }
    .nav-inner {
        max-width: 1280px;
        margin: 0 auto;
        height: 80px;
        padding: 0 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.4rem;
        font-weight: 700;
        letter-spacing: -0.02em;
        color: var(--ink);
        text-decoration: none;
    }
    .nav-logo span { color: var(--accent); }
    .nav-actions { display: flex; align-items: center; gap: 1.25rem; }
    .nav-cta {
        border: 1px solid var(--ink);
        background: transparent;
        border-radius: 999px;
        padding: 0.6rem 1.25rem;
        font: inherit;
        cursor: pointer;
    }
    .nav-toggle {
        width: 44px;
        height: 44px;
        border: none;
        background: none;
        position: relative;
        cursor: pointer;
        z-index: 120;
    }
    .nav-toggle span {
        position: absolute;
        left: 10px;
        right: 10px;
        height: 2px;
        background: var(--ink);
        transition: transform 0.3s ease;
    }
    .nav-toggle span:first-child { top: 17px; }
    .nav-toggle span:last-child { top: 25px; }
    .nav-toggle.active span:first-child { transform: translateY(4px) rotate(45deg); }
    .nav-toggle.active span:last-child { transform: translateY(-4px) rotate(-45deg); }
    .nav-overlay {
        position: fixed;
        inset: 0;
        z-index: 90;
        background: rgba(12, 12, 14, 0.96);
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 0;
        visibility: hidden;
        transition: opacity 0.4s ease, visibility 0.4s ease;
    }
    .nav-overlay.active { opacity: 1; visibility: visible; }
    .nav-menu ul { list-style: none; margin: 0; padding: 0; }
    .nav-menu-link {
        display: block;
        color: #fff;
        font-size: clamp(2rem, 5vw, 3.5rem);
        text-decoration: none;
        padding: 0.35rem 0;
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.5s ease, transform 0.5s ease;
    }
    .nav-overlay.active .nav-menu-link { opacity: 1; transform: translateY(0); }
    .nav-menu-index {
        font-size: 0.9rem;
        color: var(--accent);
        margin-right: 1rem;
        vertical-align: super;
    }
    .nav-menu-cta {
        margin-top: 2rem;
        background: none;
        border: none;
        color: var(--accent);
        font: inherit;
        font-size: 1.1rem;
        cursor: pointer;
    }
    @media (max-width: 768px) {
        .nav-cta { display: none; }
    }
"#;
