use yew::prelude::*;

use crate::config;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    content: &'static str,
    rating: u32,
    image: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "UX Designer",
        company: "TechCorp",
        content: "The AI course completely transformed my approach to design. I now see patterns I never noticed before!",
        rating: 5,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=256&h=256&q=80",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Software Engineer",
        company: "InnovateSoft",
        content: "Jai's method of teaching AI is revolutionary. It's not just about the tools, but about reshaping how we think.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1519345182560-3f2917c472ef?ixlib=rb-1.2.1&auto=format&fit=crop&w=256&h=256&q=80",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Product Manager",
        company: "FutureTech",
        content: "This course gave me the edge I needed in my career. I'm now leading AI initiatives in my company.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=256&h=256&q=80",
    },
];

const MAX_RATING: u32 = 5;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
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
        <div class="testimonials-page">
            <div class="testimonials-header">
                <h1>{"What Our Students Say"}</h1>
                <p>{"Join the community of transformed professionals"}</p>
            </div>

            <div class="testimonials-grid">
                {
                    TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                        html! {
                            <div class="testimonial-card" key={index}>
                                <div class="testimonial-person">
                                    <img
                                        src={testimonial.image}
                                        alt={testimonial.name}
                                        class="testimonial-avatar"
                                    />
                                    <div>
                                        <h3>{testimonial.name}</h3>
                                        <p class="testimonial-role">
                                            {format!("{} at {}", testimonial.role, testimonial.company)}
                                        </p>
                                    </div>
                                </div>
                                <p class="testimonial-quote">{testimonial.content}</p>
                                <div class="testimonial-rating">
                                    <div class="testimonial-stars">
                                        {
                                            (0..MAX_RATING).map(|star| {
                                                let star_class = if star < testimonial.rating {
                                                    "star filled"
                                                } else {
                                                    "star"
                                                };
                                                html! {
                                                    <svg class={star_class} viewBox="0 0 24 24" key={star}>
                                                        <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
                                                    </svg>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </div>
                                    <span class="testimonial-score">
                                        {format!("{}.0", testimonial.rating)}
                                    </span>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="testimonials-cta">
                <a
                    href={config::get_enroll_url()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="community-button"
                >
                    {"Join Our Community"}
                </a>
            </div>

            <style>
                {r#"
                .testimonials-page {
                    min-height: 100vh;
                    background: #000000;
                    padding: 6rem 1rem 3rem 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .testimonials-header {
                    text-align: center;
                    margin-bottom: 3rem;
                    animation: headerDrop 0.5s ease both;
                }

                @keyframes headerDrop {
                    from {
                        opacity: 0;
                        transform: translateY(-20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .testimonials-header h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0 0 1rem 0;
                }

                .testimonials-header p {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    margin: 0;
                }

                .testimonials-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .testimonial-card {
                    background: rgba(17, 24, 39, 0.5);
                    backdrop-filter: blur(16px);
                    border-radius: 8px;
                    padding: 1.5rem;
                    transition: background 0.3s ease;
                }

                .testimonial-card:hover {
                    background: rgba(17, 24, 39, 0.7);
                }

                .testimonial-person {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    object-fit: cover;
                    margin-right: 1rem;
                }

                .testimonial-person h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #ffffff;
                    margin: 0;
                }

                .testimonial-role {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    margin: 0;
                }

                .testimonial-quote {
                    color: #d1d5db;
                    margin: 0 0 1rem 0;
                }

                .testimonial-rating {
                    display: flex;
                    align-items: center;
                }

                .testimonial-stars {
                    display: flex;
                    margin-right: 0.5rem;
                }

                .star {
                    width: 1.25rem;
                    height: 1.25rem;
                    fill: #4b5563;
                }

                .star.filled {
                    fill: #facc15;
                }

                .testimonial-score {
                    color: #9ca3af;
                }

                .testimonials-cta {
                    text-align: center;
                    margin-top: 3rem;
                    animation: ctaFade 0.5s ease 0.5s both;
                }

                @keyframes ctaFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                .community-button {
                    display: inline-block;
                    padding: 1rem 2rem;
                    background: #facc15;
                    color: #000000;
                    font-weight: 700;
                    border-radius: 8px;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .community-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 30px rgba(255, 215, 0, 0.3);
                }

                @media (min-width: 768px) {
                    .testimonials-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .testimonials-header h1 {
                        font-size: 3rem;
                    }
                }

                @media (min-width: 1024px) {
                    .testimonials-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
