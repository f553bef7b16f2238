use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod story_engine;
mod pages {
    pub mod about;
    pub mod story;
    pub mod testimonials;
}

use pages::{about::About, story::StoryScroll, testimonials::Testimonials};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/testimonials")]
    Testimonials,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Story page");
            html! { <StoryScroll /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        },
        Route::NotFound => {
            // Unknown paths keep the nav bar and nothing else.
            info!("No page at this path");
            html! {}
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <svg class="nav-logo-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <rect x="2" y="7" width="16" height="10" rx="2" ry="2" />
                        <line x1="22" y1="11" x2="22" y2="13" />
                    </svg>
                    <span>{"The Batcave"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Testimonials} classes="nav-link">
                            {"Testimonials"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(16px);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    transition: transform 0.2s ease;
                }

                .nav-logo:hover {
                    transform: scale(1.05);
                }

                .nav-logo-icon {
                    width: 2rem;
                    height: 2rem;
                    color: #facc15;
                }

                .nav-links {
                    display: flex;
                    align-items: baseline;
                    gap: 2rem;
                }

                .nav-link {
                    color: #d1d5db;
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #facc15;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }

                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #d1d5db;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        display: none;
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0.25rem;
                        position: absolute;
                        top: 4rem;
                        left: 0;
                        width: 100%;
                        padding: 0.5rem 1rem 1rem 1rem;
                        background: rgba(0, 0, 0, 0.9);
                    }

                    .nav-links.mobile-menu-open .nav-link {
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_three_site_paths() {
        assert!(matches!(Route::recognize("/"), Some(Route::Home)));
        assert!(matches!(Route::recognize("/about"), Some(Route::About)));
        assert!(matches!(
            Route::recognize("/testimonials"),
            Some(Route::Testimonials)
        ));
    }

    #[test]
    fn unknown_paths_fall_through_to_the_empty_page() {
        assert!(matches!(Route::recognize("/unknown"), Some(Route::NotFound)));
        assert!(matches!(
            Route::recognize("/testimonials/extra"),
            Some(Route::NotFound)
        ));
    }
}
