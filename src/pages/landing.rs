use yew::prelude::*;

use crate::components::carousel::SlideCarousel;
use crate::components::contact_wizard::ContactWizard;
use crate::components::cursor::CustomCursor;
use crate::components::image_stack::ImageStack;
use crate::components::nav::Nav;
use crate::components::particle_field::Particles;
use crate::effects::anchor::use_anchor_scroll;
use crate::effects::page::use_page_lifecycle;
use crate::effects::parallax::use_hero_parallax;
use crate::effects::progress::use_scroll_progress;
use crate::effects::reveal::use_reveal_on_scroll;
use crate::effects::scrub::use_scroll_scrub;
use crate::effects::viewport::use_viewport_mode;

const FEATURES: &[(&str, &str)] = &[
    ("Small team", "Four people who each touch every project."),
    ("Plain contracts", "Fixed scope, fixed price, no hourly surprises."),
    ("Open handover", "You own the code, the files and the fonts."),
];

const SERVICES: &[(&str, &str)] = &[
    ("Web design", "Sites that load fast and read well on a bus."),
    ("Brand identity", "Names, marks and the rules that keep them tidy."),
    ("Product apps", "Web and mobile tools people return to."),
    ("Motion", "Launch films, micro-interactions, scroll stories."),
];

const CHALLENGES: &[(&str, &str)] = &[
    ("Find the real question", "Most briefs describe a symptom. We look for the cause first."),
    ("Make it small", "The smallest version that proves the idea ships before anything else."),
    ("Test with strangers", "Friends are polite. Strangers tell us what is broken."),
    ("Keep the promise", "Launch day is the middle of the project, not the end."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("They asked better questions than our board did.", "Ida Lind, Halden Ferries"),
    ("Our check-in queue simply disappeared.", "Dr. Omar Haddad, Kite Health"),
    ("The only agency that answered email on a Sunday, and apologised for it.", "Ruth Okafor, Polar Grid"),
];

const SCRUB_SECTIONS: &[(&str, &[&str])] = &[
    ("Design that moves", &["Motion", "Rhythm", "Depth"]),
    ("Built to last", &["Rust", "Accessible", "Fast"]),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state_eq(|| false);
    let mode = use_viewport_mode();

    use_page_lifecycle();
    use_anchor_scroll();
    use_reveal_on_scroll();
    use_scroll_progress();
    use_hero_parallax();
    use_scroll_scrub();

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };
    let cta = {
        let open_modal = open_modal.clone();
        Callback::from(move |_: MouseEvent| open_modal.emit(()))
    };

    html! {
        <>
            <style>{LANDING_CSS}</style>
            <Particles reduced={mode.compact} />
            <CustomCursor enabled={!mode.compact} />
            <Nav on_start_project={open_modal} />

            <main>
                <section id="top" class="hero">
                    <div class="orb orb-one"></div>
                    <div class="orb orb-two"></div>
                    <div class="floating-shape shape-circle"></div>
                    <div class="floating-shape shape-square"></div>
                    <div class="floating-shape shape-ring"></div>
                    <div class="hero-content">
                        <span class="section-label">{"Independent design studio"}</span>
                        <h1>{"We make the web feel "}<em>{"considered"}</em>{"."}</h1>
                        <p>{"Brand, product and motion for teams who would rather be understood than noticed."}</p>
                        <div class="hero-actions">
                            <button class="btn" onclick={cta.clone()}>{"Start a project"}</button>
                            <a href="#work" class="btn btn-ghost">{"See our work"}</a>
                        </div>
                    </div>
                    <div class="hero-visual" aria-hidden="true"></div>
                    <a href="#about" class="scroll-indicator">{"Scroll"}</a>
                </section>

                <section id="about" class="section" data-reveal="">
                    <div class="section-transition"></div>
                    <span class="section-number">{"01"}</span>
                    <span class="section-label">{"About"}</span>
                    <h2 class="section-title">{"A studio the size of a kitchen table"}</h2>
                    <p class="section-description">{"Big enough to ship, small enough that you always talk to the people doing the work."}</p>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|(title, body)| html! {
                            <div class="feature-item">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="services" class="section" data-reveal="">
                    <div class="section-transition"></div>
                    <span class="section-number">{"02"}</span>
                    <span class="section-label">{"Services"}</span>
                    <h2 class="section-title">{"What we do"}</h2>
                    <p class="section-description">{"Four disciplines under one roof, usually on the same project."}</p>
                    <div class="service-grid">
                        { for SERVICES.iter().enumerate().map(|(i, (title, body))| html! {
                            <article class="service-card">
                                <span class="service-number">{format!("{:02}", i + 1)}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }) }
                    </div>
                </section>

                <section id="approach" class="approach">
                    <aside class="progress-rail">
                        <span class="progress-counter">{"01"}</span>
                        <div class="progress-track-vertical">
                            <div class="progress-line"></div>
                        </div>
                    </aside>
                    <div class="challenge-list">
                        { for CHALLENGES.iter().map(|(title, body)| html! {
                            <div class="challenge-viewport">
                                <div class="challenge-content">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="work" class="section">
                    <div class="section-transition"></div>
                    <span class="section-number">{"03"}</span>
                    <span class="section-label">{"Selected work"}</span>
                    <h2 class="section-title">{"Recent projects"}</h2>
                    <SlideCarousel />
                </section>

                <ImageStack mode={mode.stack} />

                { for SCRUB_SECTIONS.iter().map(|(heading, accents)| html! {
                    <section class="scroll-anim-section">
                        <h2 class="scroll-anim-heading">{*heading}</h2>
                        <div class="scroll-anim-accents">
                            { for accents.iter().map(|accent| html! {
                                <span class="scroll-anim-accent">{*accent}</span>
                            }) }
                        </div>
                    </section>
                }) }

                <section id="testimonials" class="section" data-reveal="">
                    <div class="section-transition"></div>
                    <span class="section-number">{"04"}</span>
                    <span class="section-label">{"Kind words"}</span>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <blockquote class="testimonial">
                                <p>{*quote}</p>
                                <cite>{*author}</cite>
                            </blockquote>
                        }) }
                    </div>
                </section>

                <section id="contact" class="section contact" data-reveal="">
                    <div class="section-transition"></div>
                    <span class="section-number">{"05"}</span>
                    <span class="section-label">{"Contact"}</span>
                    <h2 class="section-title">{"Got something in mind?"}</h2>
                    <div class="contact-grid">
                        <div class="contact-item">
                            <h3>{"Email"}</h3>
                            <a href="mailto:hello@northlight.studio">{"hello@northlight.studio"}</a>
                        </div>
                        <div class="contact-item">
                            <h3>{"Studio"}</h3>
                            <p>{"Kaisaniemenkatu 4, Helsinki"}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Hours"}</h3>
                            <p>{"Mon to Thu, 9 to 17"}</p>
                        </div>
                    </div>
                    <button class="btn btn-large" onclick={cta}>{"Start a project"}</button>
                </section>
            </main>

            <footer class="footer">
                <span>{"© Northlight Studio"}</span>
                <a href="#top">{"Back to top ↑"}</a>
            </footer>

            <ContactWizard open={*modal_open} on_close={close_modal} />
        </>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --ink: #141414;
        --muted: #8a8a8a;
        --accent: #ff5e3a;
        --line: #e6e3de;
        --paper: #faf8f5;
    }
    * { box-sizing: border-box; }
    html { scroll-behavior: auto; }
    body {
        margin: 0;
        font-family: "Inter", system-ui, sans-serif;
        color: var(--ink);
        background: var(--paper);
        line-height: 1.6;
    }
    body.loading { visibility: hidden; }
    body:not(.touch-device) { cursor: none; }
    body.touch-device .cursor, body.touch-device .cursor-follower { display: none !important; }
    body.fallback-mode [data-reveal] .service-card,
    body.fallback-mode [data-reveal] .feature-item,
    body.fallback-mode [data-reveal] .testimonial,
    body.fallback-mode [data-reveal] .contact-item {
        opacity: 1 !important;
        transform: none !important;
    }
    main { position: relative; z-index: 1; }
    h1, h2, h3 { line-height: 1.15; letter-spacing: -0.02em; }
    h2 { font-size: clamp(2rem, 4vw, 3.2rem); margin: 0.5rem 0 2.5rem; }
    .section { max-width: 1200px; margin: 0 auto; padding: 8rem 2rem; }
    .section-label {
        text-transform: uppercase;
        letter-spacing: 0.2em;
        font-size: 0.75rem;
        color: var(--accent);
    }
    .btn {
        display: inline-block;
        border: none;
        border-radius: 999px;
        padding: 0.9rem 1.8rem;
        font: inherit;
        color: #fff;
        background: var(--ink);
        text-decoration: none;
        cursor: pointer;
    }
    .btn-ghost { background: transparent; color: var(--ink); border: 1px solid var(--ink); }
    .btn-large { margin-top: 3rem; padding: 1.1rem 2.4rem; font-size: 1.1rem; }

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding: 0 2rem;
        overflow: hidden;
    }
    .hero-content { position: relative; z-index: 2; max-width: 760px; margin-left: 8vw; }
    .hero h1 { font-size: clamp(2.8rem, 7vw, 6rem); margin: 1rem 0; }
    .hero h1 em { font-style: normal; color: var(--accent); }
    .hero-actions { display: flex; gap: 1rem; margin-top: 2rem; }
    .hero-visual {
        position: absolute;
        right: 6vw;
        top: 20vh;
        width: 32vw;
        height: 60vh;
        border-radius: 200px 200px 24px 24px;
        background: linear-gradient(160deg, var(--accent), #ffb199);
        opacity: 0.85;
    }
    .orb {
        position: absolute;
        border-radius: 50%;
        filter: blur(60px);
        opacity: 0.5;
    }
    .orb-one { width: 420px; height: 420px; background: #ffd3c4; top: -120px; left: -80px; }
    .orb-two { width: 320px; height: 320px; background: #c9dcff; bottom: -80px; right: 30vw; }
    .floating-shape { position: absolute; z-index: 1; }
    .shape-circle { width: 60px; height: 60px; border-radius: 50%; background: var(--ink); top: 22vh; left: 52vw; }
    .shape-square { width: 40px; height: 40px; background: var(--accent); top: 70vh; left: 12vw; }
    .shape-ring { width: 90px; height: 90px; border-radius: 50%; border: 2px solid var(--ink); top: 60vh; left: 60vw; }
    .scroll-indicator {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        font-size: 0.75rem;
        letter-spacing: 0.25em;
        text-transform: uppercase;
        color: var(--muted);
        text-decoration: none;
    }

    [data-reveal] .feature-item,
    [data-reveal] .service-card,
    [data-reveal] .testimonial,
    [data-reveal] .contact-item {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .feature-grid, .service-grid, .testimonial-grid, .contact-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .service-card, .feature-item, .testimonial, .contact-item {
        background: #fff;
        border: 1px solid var(--line);
        border-radius: 18px;
        padding: 2rem;
        margin: 0;
    }
    .service-number { font-size: 0.8rem; color: var(--muted); }
    .testimonial p { font-size: 1.2rem; }
    .testimonial cite { font-style: normal; color: var(--muted); }

    .approach {
        display: grid;
        grid-template-columns: 120px 1fr;
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .progress-rail {
        position: sticky;
        top: 30vh;
        height: 40vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
    }
    .progress-counter { font-size: 2rem; font-weight: 700; }
    .progress-track-vertical { flex: 1; width: 2px; background: var(--line); }
    .progress-line { width: 100%; height: 0; background: var(--accent); }
    .challenge-viewport { min-height: 80vh; display: flex; align-items: center; }
    .challenge-content {
        opacity: 0.2;
        transform: translateX(-20px);
        transition: opacity 0.5s ease, transform 0.5s ease;
    }
    .challenge-content.active { opacity: 1; transform: translateX(0); }
    .challenge-content h3 { font-size: clamp(1.8rem, 3vw, 2.6rem); }

    .scroll-anim-section {
        min-height: 80vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        perspective: 800px;
    }
    .scroll-anim-heading { font-size: clamp(2.5rem, 6vw, 5rem); opacity: 0; }
    .scroll-anim-accents { display: flex; gap: 1rem; }
    .scroll-anim-accent {
        opacity: 0;
        padding: 0.5rem 1.2rem;
        border: 1px solid var(--ink);
        border-radius: 999px;
    }

    .contact { text-align: center; }
    .contact-grid { text-align: left; }
    .footer {
        display: flex;
        justify-content: space-between;
        max-width: 1200px;
        margin: 0 auto;
        padding: 3rem 2rem;
        border-top: 1px solid var(--line);
        color: var(--muted);
    }
    .footer a { color: inherit; }

    .section-transition {
        height: 1px;
        margin-bottom: 3rem;
        background: var(--line);
        transform: scaleX(0);
        transform-origin: left;
    }
    .section-number {
        display: block;
        font-size: 0.8rem;
        color: var(--muted);
        margin-bottom: 0.25rem;
    }
    .section-description { max-width: 40rem; color: var(--muted); margin: -1.5rem 0 2.5rem; }
    .section-number, .section-title, .section-description { opacity: 0; }
    .section-number.animate-in,
    .section-title.animate-in,
    .section-description.animate-in {
        animation: fadeInUp 0.8s ease both;
    }
    body.fallback-mode .section-number,
    body.fallback-mode .section-title,
    body.fallback-mode .section-description { opacity: 1; }

    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes scaleInX { from { transform: scaleX(0); } to { transform: scaleX(1); } }
    @media (max-width: 968px) {
        body { cursor: auto; }
        .hero-visual { display: none; }
        .hero-content { margin-left: 0; }
        .approach { grid-template-columns: 60px 1fr; }
    }
    @media (prefers-reduced-motion: reduce) {
        *, *::before, *::after { animation-duration: 0.01ms !important; transition-duration: 0.01ms !important; }
    }
"#;
