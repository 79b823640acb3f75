use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the event"}
            </Link<Route>>
        </main>
    }
}
