use yew::prelude::*;

use crate::config::CURSOR_SMOOTHING;
use crate::effects::cursor::{use_cursor_hover, use_cursor_trail};

#[derive(Properties, PartialEq)]
pub struct CustomCursorProps {
    pub enabled: bool,
}

#[function_component(CustomCursor)]
pub fn custom_cursor(props: &CustomCursorProps) -> Html {
    let cursor = use_node_ref();
    let follower = use_node_ref();

    use_cursor_trail(cursor.clone(), follower.clone(), props.enabled, CURSOR_SMOOTHING);
    use_cursor_hover();

    html! {
        <>
            <style>{CURSOR_CSS}</style>
            <div ref={cursor} class="cursor" aria-hidden="true"></div>
            <div ref={follower} class="cursor-follower" aria-hidden="true"></div>
        </>
    }
}

const CURSOR_CSS: &str = r#"
    .cursor, .cursor-follower {
        position: fixed;
        top: 0;
        left: 0;
        pointer-events: none;
        border-radius: 50%;
        transform: translate(-50%, -50%);
        z-index: 1000;
        display: none;
    }
    .cursor { width: 8px; height: 8px; background: var(--accent); }
    .cursor-follower {
        width: 36px;
        height: 36px;
        border: 1px solid var(--accent);
        transition: width 0.25s ease, height 0.25s ease, background 0.25s ease;
    }
    body.cursor-hover .cursor-follower {
        width: 60px;
        height: 60px;
        background: rgba(255, 94, 58, 0.12);
    }
"#;
