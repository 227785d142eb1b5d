use crate::frontend::pages::success::ConfirmationView;
use leptos::{config::LeptosOptions, prelude::*};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

/// Full HTML document around [`App`] for server rendering.
pub fn shell(_options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Checkout"</title>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| "Page not found".into_view()>
                    <Route
                        path=(StaticSegment("checkout"), StaticSegment("success"))
                        view=ConfirmationView
                    />
                </Routes>
            </main>
        </Router>
    }
}
