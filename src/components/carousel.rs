use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::motion::carousel::{Carousel, CarouselAction};

struct Slide {
    client: &'static str,
    title: &'static str,
    summary: &'static str,
    tone: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        client: "Halden Ferries",
        title: "Timetables people actually read",
        summary: "A booking flow rebuilt around the three questions every traveller asks first.",
        tone: "#1f3a5f",
    },
    Slide {
        client: "Moss & Mortar",
        title: "A brand that smells like sawdust",
        summary: "Identity, signage and a site for a family of carpenters in their third generation.",
        tone: "#5b4636",
    },
    Slide {
        client: "Kite Health",
        title: "Calmer clinic check-ins",
        summary: "Kiosk and mobile check-in that cut front-desk queues by a third.",
        tone: "#2f6f62",
    },
    Slide {
        client: "Arcadia Records",
        title: "Liner notes, reimagined",
        summary: "An archive that lets listeners wander through forty years of sleeves.",
        tone: "#6b2d5c",
    },
    Slide {
        client: "Polar Grid",
        title: "Energy data without the jargon",
        summary: "A dashboard that turns meter readings into a weekly story.",
        tone: "#24466b",
    },
    Slide {
        client: "Lumen Studio",
        title: "Launch film and landing page",
        summary: "Motion design and a scroll-told launch for a lighting start-up.",
        tone: "#7a5a1e",
    },
];

#[function_component(SlideCarousel)]
pub fn slide_carousel() -> Html {
    let carousel = use_reducer(|| Carousel::new(SLIDES.len()));
    let hovered = use_state_eq(|| false);

    {
        let dispatcher = carousel.dispatcher();
        // An interval of 0 pauses autoplay; a fresh one starts on leave.
        use_interval(
            move || dispatcher.dispatch(CarouselAction::Next),
            if *hovered { 0 } else { CAROUSEL_INTERVAL_MS },
        );
    }

    {
        let dispatcher = carousel.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => dispatcher.dispatch(CarouselAction::Prev),
            "ArrowRight" => dispatcher.dispatch(CarouselAction::Next),
            _ => {}
        });
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let prev = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Prev))
    };
    let next = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Next))
    };

    let slides = SLIDES.iter().enumerate().map(|(index, slide)| {
        html! {
            <article
                class={classes!("slide", carousel.is_active(index).then_some("active"))}
                style={format!("--slide-tone: {}", slide.tone)}
                aria-hidden={(!carousel.is_active(index)).to_string()}
            >
                <span class="slide-client">{slide.client}</span>
                <h3 class="slide-title">{slide.title}</h3>
                <p class="slide-summary">{slide.summary}</p>
            </article>
        }
    });

    let dots = (0..carousel.count()).map(|index| {
        let dispatcher = carousel.dispatcher();
        html! {
            <button
                class={classes!("dot", carousel.is_active(index).then_some("active"))}
                aria-label={format!("Show slide {}", index + 1)}
                onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::JumpTo(index)))}
            />
        }
    });

    html! {
        <div class="slider-wrapper" {onmouseenter} {onmouseleave}>
            <style>{CAROUSEL_CSS}</style>
            <div class="slider-viewport">
                <div id="slider" class="slider" style={format!("transform: {}", carousel.strip_transform())}>
                    { for slides }
                </div>
            </div>
            <div class="slider-controls">
                <button class="slider-arrow" aria-label="Previous slide" onclick={prev}>{"←"}</button>
                <div class="slider-dots">{ for dots }</div>
                <button class="slider-arrow" aria-label="Next slide" onclick={next}>{"→"}</button>
            </div>
        </div>
    }
}

const CAROUSEL_CSS: &str = r#"
    .slider-wrapper {
        position: relative;
        max-width: 1100px;
        margin: 0 auto;
    }
    .slider-viewport {
        overflow: hidden;
        border-radius: 24px;
    }
    .slider {
        display: flex;
        transition: transform 0.8s cubic-bezier(0.77, 0, 0.175, 1);
    }
    .slide {
        flex: 0 0 100%;
        min-height: 420px;
        padding: 4rem;
        box-sizing: border-box;
        color: #fff;
        background: linear-gradient(135deg, var(--slide-tone), #111);
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
    }
    .slide-client {
        text-transform: uppercase;
        letter-spacing: 0.18em;
        font-size: 0.8rem;
        opacity: 0.7;
    }
    .slide-title {
        font-size: clamp(1.8rem, 4vw, 3rem);
        margin: 0.75rem 0;
    }
    .slide-summary { max-width: 36rem; opacity: 0.85; }
    .slider-controls {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 1.5rem;
    }
    .slider-arrow {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        border: 1px solid var(--line);
        background: #fff;
        cursor: pointer;
        font-size: 1.1rem;
    }
    .slider-dots { display: flex; gap: 0.6rem; }
    .dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        border: none;
        padding: 0;
        background: var(--line);
        cursor: pointer;
        transition: transform 0.3s ease, background 0.3s ease;
    }
    .dot.active { background: var(--accent); transform: scale(1.4); }
    @media (max-width: 768px) {
        .slide { padding: 2rem; min-height: 340px; }
    }
"#;
