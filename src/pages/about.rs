use yew::prelude::*;

use crate::config;

#[function_component(About)]
pub fn about() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"Meet Jai"}</h1>
                <img
                    src={config::get_portrait_src()}
                    alt="Jai"
                    loading="lazy"
                    class="about-portrait"
                />
                <p class="about-subtitle">{"Founder of Amplified Intelligence Academy"}</p>
                <div class="about-emblem">
                    <BatEmblem />
                </div>
            </section>

            <section class="journey-section">
                <div class="journey-content">
                    <h2>{"The Journey"}</h2>
                    <div class="journey-grid">
                        <div class="journey-card">
                            <h3>{"Teaching & Technology"}</h3>
                            <p>{"From teaching design at Parsons to advising tech companies, I've discovered how AI isn't just changing what we do—it's transforming how we think."}</p>
                        </div>
                        <div class="journey-card">
                            <h3>{"Eastern Wisdom"}</h3>
                            <p>{"Following my grandfather's footsteps, I've integrated ancient Vedic knowledge with modern technology, creating a unique approach to education."}</p>
                        </div>
                        <div class="journey-card">
                            <h3>{"The Mission"}</h3>
                            <p>{"Today, I'm making AI education radically accessible, helping others navigate this technological revolution while staying grounded in timeless wisdom."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="impact-section">
                <div class="impact-content">
                    <h2>{"Impact & Results"}</h2>
                    <div class="impact-grid">
                        <div class="impact-stat">
                            <h3>{"300+"}</h3>
                            <p>{"Students Transformed"}</p>
                        </div>
                        <div class="impact-stat">
                            <h3>{"10x"}</h3>
                            <p>{"Productivity Gains"}</p>
                        </div>
                        <div class="impact-stat">
                            <h3>{"4"}</h3>
                            <p>{"Industries Disrupted"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="join-section">
                <div class="join-content">
                    <h2>{"Ready to Transform?"}</h2>
                    <p>{"Join our community and master the must-have AI skills for 2025"}</p>
                    <a
                        href={config::get_enroll_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <button class="join-button">
                            <BatEmblem />
                            <span>{"JOIN THE ACADEMY"}</span>
                        </button>
                    </a>
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    min-height: 100vh;
                    background: #000000;
                    color: #ffffff;
                }

                .about-hero {
                    text-align: center;
                    padding: 7rem 1rem 0 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    animation: heroRise 0.8s ease both;
                }

                @keyframes heroRise {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .about-hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem 0;
                }

                .about-portrait {
                    width: 42%;
                    height: auto;
                    border-radius: 8px;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.5);
                }

                .about-subtitle {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    margin-bottom: 2rem;
                }

                .about-emblem {
                    display: flex;
                    justify-content: center;
                }

                .about-emblem svg {
                    width: 4rem;
                    height: 4rem;
                    fill: #facc15;
                }

                .journey-section {
                    padding: 5rem 1rem;
                }

                .journey-content {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .journey-content h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .journey-grid {
                    display: grid;
                    gap: 2rem;
                }

                .journey-card {
                    background: #111827;
                    padding: 2rem;
                    border-radius: 8px;
                }

                .journey-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #facc15;
                    margin: 0 0 1rem 0;
                }

                .journey-card p {
                    color: #d1d5db;
                    margin: 0;
                }

                .impact-section {
                    padding: 5rem 1rem;
                    background: #111827;
                }

                .impact-content {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .impact-content h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 3rem;
                }

                .impact-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    text-align: center;
                }

                .impact-stat h3 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #facc15;
                    margin: 0 0 1rem 0;
                }

                .impact-stat p {
                    color: #d1d5db;
                    margin: 0;
                }

                .join-section {
                    padding: 5rem 1rem;
                }

                .join-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .join-content h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .join-content p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    margin-bottom: 3rem;
                }

                .join-button {
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

                .join-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 30px rgba(255, 215, 0, 0.3);
                }

                .join-button svg {
                    width: 1.5rem;
                    height: 1.5rem;
                    fill: #facc15;
                }

                .join-button span {
                    color: #facc15;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                }

                @media (min-width: 768px) {
                    .about-hero h1 {
                        font-size: 4.5rem;
                    }

                    .about-subtitle {
                        font-size: 1.5rem;
                    }

                    .journey-content h2,
                    .impact-content h2,
                    .join-content h2 {
                        font-size: 2.5rem;
                    }

                    .impact-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(BatEmblem)]
fn bat_emblem() -> Html {
    html! {
        <svg viewBox="0 0 24 24">
            <path d="M12 1 9 4h6l-3-3zm6.324 12.926c.208-.195.407-.404.596-.626A9.953 9.953 0 0 0 20 8a1 1 0 0 0-1-1h-3.501L12 2.999 8.501 7H5a1 1 0 0 0-1 1 9.953 9.953 0 0 0 1.08 5.3c.189.222.388.431.596.626C3.872 15.671 3 16.806 3 18a1 1 0 0 0 1 1h16a1 1 0 0 0 1-1c0-1.194-.872-2.329-2.676-4.074zM7 10a1 1 0 1 1 0-2 1 1 0 0 1 0 2zm10 0a1 1 0 1 1 0-2 1 1 0 0 1 0 2z" />
        </svg>
    }
}
