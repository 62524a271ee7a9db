use yew::prelude::*;

use crate::effects::stack::use_pinned_stack;
use crate::motion::stack::StackMode;

struct Stage {
    title: &'static str,
    caption: &'static str,
    hue: u16,
}

const STAGES: &[Stage] = &[
    Stage { title: "Listen", caption: "Workshops with the people who use the thing.", hue: 18 },
    Stage { title: "Sketch", caption: "Paper first, pixels later.", hue: 42 },
    Stage { title: "Prototype", caption: "Clickable within the first fortnight.", hue: 168 },
    Stage { title: "Build", caption: "Weekly releases you can poke at.", hue: 212 },
    Stage { title: "Launch", caption: "Measured, rehearsed and a little bit loud.", hue: 286 },
];

#[derive(Properties, PartialEq)]
pub struct ImageStackProps {
    pub mode: StackMode,
}

#[function_component(ImageStack)]
pub fn image_stack(props: &ImageStackProps) -> Html {
    let section = use_node_ref();
    let track = use_node_ref();

    use_pinned_stack(section.clone(), track.clone(), props.mode);

    let mode_class = match props.mode {
        StackMode::Vertical => "stack-vertical",
        StackMode::Horizontal => "stack-horizontal",
    };

    html! {
        <section id="process" ref={section} class={classes!("stack-section", mode_class)}>
            <style>{STACK_CSS}</style>
            <div class="stack-pin">
                <div class="stack-copy">
                    <span class="section-label">{"Process"}</span>
                    <h2>{"Five steps, no surprises"}</h2>
                    <ol class="stack-index">
                        { for STAGES.iter().enumerate().map(|(i, stage)| html! {
                            <li class={classes!((i == 0).then_some("active"))}>{stage.title}</li>
                        }) }
                    </ol>
                </div>
                <div class="stack-frame">
                    <div class="stack-track" ref={track}>
                        { for STAGES.iter().enumerate().map(|(i, stage)| html! {
                            <figure
                                class={classes!("stack-item", (i == 0).then_some("is-active"))}
                                style={format!("--stage-hue: {}", stage.hue)}
                            >
                                <div class="stack-art"></div>
                                <figcaption>
                                    <strong>{format!("{:02} {}", i + 1, stage.title)}</strong>
                                    <span>{stage.caption}</span>
                                </figcaption>
                            </figure>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

const STACK_CSS: &str = r#"
    .stack-section { position: relative; }
    .stack-pin {
        position: sticky;
        top: 0;
        height: 100vh;
        overflow: hidden;
        display: grid;
        grid-template-columns: 1fr 1.4fr;
        align-items: center;
        gap: 3rem;
        padding: 0 4rem;
        box-sizing: border-box;
    }
    .stack-index { list-style: none; padding: 0; margin: 2rem 0 0; }
    .stack-index li {
        padding: 0.5rem 0;
        color: var(--muted);
        transition: color 0.3s ease, transform 0.3s ease;
    }
    .stack-index li.active { color: var(--ink); transform: translateX(8px); }
    .stack-frame { height: 100%; position: relative; }
    .stack-track { will-change: transform; }
    .stack-vertical .stack-track { padding-top: 20vh; }
    .stack-horizontal .stack-pin { grid-template-columns: 1fr; padding: 0 1.5rem; }
    .stack-horizontal .stack-frame { height: auto; }
    .stack-horizontal .stack-track { display: flex; }
    .stack-item {
        margin: 0;
        height: 60vh;
        box-sizing: border-box;
        padding: 1rem 0;
        opacity: 0.45;
        transition: opacity 0.4s ease;
    }
    .stack-horizontal .stack-item { flex: 0 0 80vw; height: 50vh; padding: 0 1rem 0 0; }
    .stack-item.is-active { opacity: 1; }
    .stack-art {
        height: calc(100% - 3rem);
        border-radius: 20px;
        background: linear-gradient(140deg, hsl(var(--stage-hue), 70%, 60%), hsl(var(--stage-hue), 60%, 25%));
    }
    .stack-item figcaption { display: flex; gap: 1rem; margin-top: 0.75rem; }
"#;
