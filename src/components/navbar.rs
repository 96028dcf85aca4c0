use yew::prelude::*;
use yew_router::components::Link;

use crate::utils::scroll;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Current window scroll depth, owned by the page's scroll listener.
    pub scroll_y: f64,
}

fn anchor_link(label: &'static str, target: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::smooth_scroll_to(target);
    });
    html! {
        <a href={format!("#{}", target)} class="nav-link" {onclick}>{label}</a>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="top-nav" style={scroll::nav_background(props.scroll_y)}>
            <Link<Route> to={Route::Home} classes="nav-logo">
                {"AI Hiring Assistant"}
            </Link<Route>>
            <div class="nav-links">
                { anchor_link("Features", "features") }
                { anchor_link("Pipeline", "pipeline") }
                { anchor_link("Contact", "contact") }
            </div>
            <style>
                {r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 10;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 2rem;
        backdrop-filter: blur(10px);
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .nav-logo {
        font-size: 1.2rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
    }
    .nav-link {
        color: rgba(255, 255, 255, 0.8);
        text-decoration: none;
        font-size: 0.95rem;
        transition: color 0.3s ease;
    }
    .nav-link:hover {
        color: #7EB2FF;
    }
    @media (max-width: 768px) {
        .top-nav {
            padding: 0.75rem 1rem;
        }
        .nav-links {
            gap: 1rem;
        }
    }
                "#}
            </style>
        </nav>
    }
}
