use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use gloo_timers::callback::Timeout;

use crate::config;
use crate::story_engine::{
    active_index, focus_opacity, focus_scale, scroll_progress, section_focus, IntroPhase,
    CONTENT_DELAY_MS, INTRO_DURATION_MS,
};

pub struct Section {
    pub title: &'static str,
    pub content: &'static str,
}

pub const SECTIONS: [Section; 7] = [
    Section {
        title: "The Pattern Hidden in Plain Sight",
        content: "In finance, I spotted it first—the way AI wasn't just automating jobs, but reshaping entire thinking patterns. That observation became an obsession: understanding how technology transforms not just what we do, but how we think. This led me from Wall Street to teaching design at Parsons, where I discovered something no one was talking about.",
    },
    Section {
        title: "The Deconstruction Method",
        content: "At Parsons, teaching students to see technology differently, I developed a framework I call 'conscious deconstruction.' Instead of learning tools, we break down thought patterns. The result? Students started seeing AI differently—not as software to master, but as systems to reshape. Their work began outpacing industry veterans. That's when tech companies started calling.",
    },
    Section {
        title: "Breaking Industry Barriers",
        content: "In 2024, Jai spoke at the United Nations about the intersection of two very different ideas:  AI + Vedic Wisdom. With a small group of CEOs, startup founders and small business owners, I reconstructed their entire approach to technology. Result: A team of 20 achieved what their competitors needed 200 people for. The CEO of a publicly traded company saw this and asked me to rebuild them. Same method, different industry, 10x results. A pattern was emerging.",
    },
    Section {
        title: "Where Vision Meets Proof",
        content: "Now I teach others to see these patterns. My students don't just use AI—they reshape industries with it. A designer who reinvented her agency's entire workflow. A doctor who rebuilt patient care systems. A teacher who transformed online education. They all started with the same framework: conscious deconstruction of existing patterns.",
    },
    Section {
        title: "Beyond Just AI Skills",
        content: "This isn't about surviving AI disruption—it's about seeing the deeper patterns that will shape the next decade. In our community, we're applying Jony Ive's design thinking to technical learning, Yeezy's creative disruption to industry transformation, and Eastern philosophy to technological evolution. The result? A new way of thinking that turns industry chaos into career opportunity.",
    },
    Section {
        title: "Your Pattern Recognition Begins",
        content: "Most AI education focuses on tools that will be obsolete in months. We focus on pattern recognition that will keep you ahead for years. The same framework that took me from finance to design to tech leadership, that helped my students disrupt their industries rather than just survive them. Ready to see the patterns hidden in plain sight?",
    },
    Section {
        title: "Join us",
        content: "We're re-writing the story on AI education by creating a radically inclusive and accessible curriculum. We're having a massive impact in the:  healthcare, financial services, online education and food & beverage industries. Our goal is to build a talent pipelne of \"amplifiers\" who can solve problems across multiple industries and job functions. I can't predict the future, but I can guarantee that you're going to love coming to class.",
    },
];

// Only the section carrying this title gets the enroll button.
pub const FINAL_SECTION_TITLE: &str = SECTIONS[SECTIONS.len() - 1].title;

#[derive(Properties, PartialEq)]
pub struct StoryScrollProps {
    /// Suspends the intro timers so tests can drive the phases themselves.
    #[prop_or(false)]
    pub test_mode: bool,
}

#[function_component(StoryScroll)]
pub fn story_scroll(props: &StoryScrollProps) -> Html {
    let intro_phase = use_state(|| IntroPhase::Intro);
    let progress = use_state(|| 0.0_f64);
    let current_section = use_state(|| 0_usize);
    let has_scrolled = use_state(|| false);
    let container_ref = use_node_ref();

    // Intro sequence: splash for 3s, then reveal the hero half a second later.
    // The handles are dropped on unmount, which cancels anything still pending.
    {
        let intro_phase = intro_phase.clone();
        use_effect_with_deps(
            move |test_mode: &bool| {
                let mut timers: Vec<Timeout> = Vec::new();
                if !*test_mode {
                    let dismiss_splash = intro_phase.setter();
                    timers.push(Timeout::new(INTRO_DURATION_MS, move || {
                        dismiss_splash.set(IntroPhase::PostIntro);
                    }));
                    let reveal_content = intro_phase.setter();
                    timers.push(Timeout::new(
                        INTRO_DURATION_MS + CONTENT_DELAY_MS,
                        move || {
                            reveal_content.set(IntroPhase::ContentVisible);
                        },
                    ));
                }
                move || drop(timers)
            },
            props.test_mode,
        );
    }

    // Track scroll progress through the story container and feed it to the
    // section activation state. Handlers run synchronously per event.
    {
        let progress = progress.clone();
        let current_section = current_section.clone();
        let has_scrolled = has_scrolled.clone();
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let listener_window = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(container) = container_ref.cast::<HtmlElement>() {
                        let scroll_y = listener_window.scroll_y().unwrap_or(0.0);
                        let viewport_height = listener_window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);

                        let value = scroll_progress(
                            scroll_y,
                            container.offset_top() as f64,
                            container.offset_height() as f64,
                            viewport_height,
                        );

                        if value > 0.0 {
                            // Monotonic latch, only ever goes false -> true.
                            has_scrolled.set(true);
                        }
                        current_section.set(active_index(value, SECTIONS.len()));
                        progress.set(value);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                window
                    .add_event_listener_with_callback(
                        "resize",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let overlay_visible = intro_phase.content_visible() && !*has_scrolled;

    html! {
        <div class="story-page">
            {
                if intro_phase.splash_visible() {
                    html! { <IntroSplash /> }
                } else {
                    html! {}
                }
            }

            <div
                class="progress-bar"
                style={format!("transform: scaleX({});", *progress)}
            ></div>

            {
                if overlay_visible {
                    html! {
                        <>
                            <Hero />
                            <ScrollIndicator />
                        </>
                    }
                } else {
                    html! {}
                }
            }

            <div ref={container_ref} class="story-container">
                <div class="story-spacer"></div>
                <div class="section-container">
                    {
                        SECTIONS.iter().enumerate().map(|(index, section)| {
                            let focus = section_focus(*progress, index, SECTIONS.len());
                            html! {
                                <SectionView
                                    key={index}
                                    title={section.title}
                                    content={section.content}
                                    focus={focus}
                                    active={*current_section == index}
                                    is_final={section.title == FINAL_SECTION_TITLE}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .story-page {
                    min-height: 100vh;
                    color: #ffffff;
                }

                .intro-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    background: #000000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                }

                .intro-logo {
                    width: 100%;
                    height: 100%;
                    max-width: 56rem;
                }

                .intro-logo path {
                    stroke-dasharray: 2400;
                    stroke-dashoffset: 2400;
                    animation: signalDraw 2s ease-in-out forwards,
                               signalReveal 0.5s ease forwards;
                }

                @keyframes signalDraw {
                    to { stroke-dashoffset: 0; }
                }

                @keyframes signalReveal {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                .progress-bar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: #ffffff;
                    transform-origin: left;
                    z-index: 50;
                }

                .hero-panel {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    text-align: center;
                    animation: fadeIn 1.5s cubic-bezier(0.22, 1, 0.36, 1) 0.5s both;
                }

                .hero-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin: 0 0 2rem 0;
                    animation: fadeUp 1.2s cubic-bezier(0.22, 1, 0.36, 1) 1s both;
                }

                .hero-portrait {
                    width: 42%;
                    height: auto;
                    border-radius: 8px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.5);
                }

                .hero-tagline {
                    font-size: 1.25rem;
                    max-width: 42rem;
                    color: #d1d5db;
                    animation: fadeUp 1.2s cubic-bezier(0.22, 1, 0.36, 1) 1.3s both;
                }

                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes fadeUp {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .scroll-indicator {
                    position: fixed;
                    bottom: 3rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    animation: fadeUp 1s cubic-bezier(0.22, 1, 0.36, 1) 2s both;
                }

                .scroll-indicator svg {
                    width: 2rem;
                    height: 2rem;
                    animation: bounce 2s ease-in-out infinite;
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }

                .story-container {
                    position: relative;
                }

                .story-spacer {
                    position: sticky;
                    top: 0;
                    height: 60vh;
                }

                .section-container {
                    position: relative;
                }

                .story-section {
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                }

                .section-inner {
                    max-width: 42rem;
                }

                .section-heading {
                    font-size: 2rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem 0;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1),
                                transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .section-body {
                    font-size: 1.125rem;
                    color: #d1d5db;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1) 0.2s,
                                transform 0.8s cubic-bezier(0.22, 1, 0.36, 1) 0.2s;
                }

                .story-section.active .section-heading,
                .story-section.active .section-body {
                    opacity: 1;
                    transform: translateY(0);
                }

                .enroll-cta {
                    margin-top: 1.5rem;
                }

                .enroll-button {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: #111827;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    overflow: hidden;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .enroll-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 30px rgba(255, 215, 0, 0.3);
                }

                .enroll-button svg {
                    width: 1.5rem;
                    height: 1.5rem;
                    fill: #facc15;
                    transition: transform 0.3s ease;
                }

                .enroll-button:hover svg {
                    transform: scale(1.1);
                }

                .enroll-button span {
                    color: #facc15;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                }

                .enroll-button::after {
                    content: '';
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    background: linear-gradient(
                        to right,
                        rgba(250, 204, 21, 0) 0%,
                        rgba(250, 204, 21, 0.1) 50%,
                        rgba(250, 204, 21, 0) 100%
                    );
                    animation: shimmer 2s infinite;
                }

                @keyframes shimmer {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(100%); }
                }

                @media (min-width: 768px) {
                    .hero-title {
                        font-size: 4.5rem;
                    }

                    .hero-tagline {
                        font-size: 1.5rem;
                    }

                    .section-heading {
                        font-size: 3rem;
                    }

                    .section-body {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(IntroSplash)]
fn intro_splash() -> Html {
    html! {
        <div class="intro-overlay">
            <svg
                class="intro-logo"
                viewBox="0 0 1283 610"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
            >
                <defs>
                    <radialGradient id="batSignal" cx="50%" cy="50%" r="50%" fx="50%" fy="50%">
                        <stop offset="0%" stop-color="#FFD700" />
                        <stop offset="100%" stop-color="#000000" />
                    </radialGradient>
                </defs>
                <path
                    d="M641.5 305L450 150L500 450L641.5 305ZM641.5 305L833 150L783 450L641.5 305Z"
                    stroke="url(#batSignal)"
                    stroke-width="2"
                />
            </svg>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <div class="hero-panel">
            <h1 class="hero-title">{"Welcome to the Bat Cave."}</h1>
            <img
                src={config::get_portrait_src()}
                alt="Jai"
                loading="lazy"
                class="hero-portrait"
            />
            <p class="hero-tagline">
                {"From finance, agriculture to healthcare, here's how we're experimenting with AI."}
            </p>
        </div>
    }
}

#[function_component(ScrollIndicator)]
fn scroll_indicator() -> Html {
    html! {
        <div class="scroll-indicator">
            <svg
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="m6 9 6 6 6-6" />
            </svg>
        </div>
    }
}

#[function_component(EnrollButton)]
fn enroll_button() -> Html {
    html! {
        <div class="enroll-cta">
            <a
                href={config::get_enroll_url()}
                target="_blank"
                rel="noopener noreferrer"
            >
                <button class="enroll-button">
                    <svg viewBox="0 0 24 24">
                        <path d="M12 1 9 4h6l-3-3zm6.324 12.926c.208-.195.407-.404.596-.626A9.953 9.953 0 0 0 20 8a1 1 0 0 0-1-1h-3.501L12 2.999 8.501 7H5a1 1 0 0 0-1 1 9.953 9.953 0 0 0 1.08 5.3c.189.222.388.431.596.626C3.872 15.671 3 16.806 3 18a1 1 0 0 0 1 1h16a1 1 0 0 0 1-1c0-1.194-.872-2.329-2.676-4.074zM7 10a1 1 0 1 1 0-2 1 1 0 0 1 0 2zm10 0a1 1 0 1 1 0-2 1 1 0 0 1 0 2z" />
                    </svg>
                    <span>{"JOIN THE ACADEMY"}</span>
                </button>
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: &'static str,
    content: &'static str,
    focus: f64,
    active: bool,
    is_final: bool,
}

#[function_component(SectionView)]
fn section_view(props: &SectionProps) -> Html {
    let section_class = if props.active {
        "story-section active"
    } else {
        "story-section"
    };

    let section_style = format!(
        "opacity: {}; transform: scale({});",
        focus_opacity(props.focus),
        focus_scale(props.focus),
    );

    html! {
        <div class={section_class} style={section_style}>
            <div class="section-inner">
                <h2 class="section-heading">{props.title}</h2>
                <div class="section-body">
                    <p>{props.content}</p>
                    {
                        if props.is_final {
                            html! { <EnrollButton /> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_has_seven_sections() {
        assert_eq!(SECTIONS.len(), 7);
    }

    #[test]
    fn only_the_last_section_is_final() {
        let finals: Vec<usize> = SECTIONS
            .iter()
            .enumerate()
            .filter(|(_, section)| section.title == FINAL_SECTION_TITLE)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(finals, vec![SECTIONS.len() - 1]);
    }

    #[test]
    fn sections_have_copy() {
        for section in SECTIONS.iter() {
            assert!(!section.title.is_empty());
            assert!(!section.content.is_empty());
        }
    }
}
