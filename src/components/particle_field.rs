use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{PARTICLE_COUNT, PARTICLE_TICK_MS};
use crate::motion::particles::{FieldAction, ParticleField};

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    /// Hides the dots and stops the drift.
    pub reduced: bool,
}

#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let field = use_reducer(|| ParticleField::new(PARTICLE_COUNT, js_sys::Math::random));

    {
        let dispatcher = field.dispatcher();
        use_effect_with_deps(
            move |reduced| {
                dispatcher.dispatch(if *reduced {
                    FieldAction::Reduce
                } else {
                    FieldAction::Restore
                });
                || ()
            },
            props.reduced,
        );
    }

    {
        let dispatcher = field.dispatcher();
        use_interval(
            move || {
                let now = chrono::Utc::now().timestamp_millis() as f64;
                dispatcher.dispatch(FieldAction::Nudge(now));
            },
            if field.is_reduced() { 0 } else { PARTICLE_TICK_MS },
        );
    }

    let hidden = field.is_reduced();
    html! {
        <div id="particleGrid" class="particle-grid" aria-hidden="true">
            <style>{PARTICLES_CSS}</style>
            { for field.particles().iter().map(|particle| html! {
                <span class="particle" style={particle.style(hidden)}></span>
            }) }
        </div>
    }
}

const PARTICLES_CSS: &str = r#"
    .particle-grid {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 0;
        overflow: hidden;
    }
    .particle {
        position: absolute;
        width: 3px;
        height: 3px;
        border-radius: 50%;
        background: var(--accent);
        animation-name: particleFloat;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
    }
    @keyframes particleFloat {
        0%, 100% { transform: translate(0, 0); }
        50% { transform: translate(12px, -18px); }
    }
"#;
