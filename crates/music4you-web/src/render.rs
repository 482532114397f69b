use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::{App, STYLESHEET_HREF};

/// Renders [`App`] to an HTML fragment.
pub fn render_app() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <App /> }.to_html())
}

/// Renders [`App`] inside a complete HTML document linking the page stylesheet.
pub fn render_document() -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>Music 4 You</title>\n\
         <link rel=\"stylesheet\" href=\"{STYLESHEET_HREF}\" />\n\
         </head>\n\
         <body>{body}</body>\n\
         </html>\n",
        body = render_app()
    )
}
