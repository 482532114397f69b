use leptos::prelude::*;

/// Path of the logo image, resolved by the static asset pipeline.
pub const LOGO_SRC: &str = "/M4U_logo.png";

/// Path of the page stylesheet, resolved by the static asset pipeline.
pub const STYLESHEET_HREF: &str = "/App.css";

/// The Music 4 You page shell.
///
/// Static layout only: the buttons carry no handlers and the inputs are
/// uncontrolled, so nothing typed or clicked reaches application state.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <div class="top-bar">
                <button class="menu-button">"Menu"</button>
                <div class="header">
                    <h1>"Music 4 You"</h1>
                    <img src=LOGO_SRC class="logo" alt="M4U logo" />
                </div>
            </div>
            <div class="input-section">
                <input type="text" placeholder="Enter playlist name" class="text-input" />
                <input type="text" placeholder="Songs like..." class="text-input" />
                <button class="create-playlist-btn">"Create Playlist"</button>
            </div>
        </div>
    }
}
