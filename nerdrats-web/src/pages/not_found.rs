use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found" id="main">
            <h1>{ "404" }</h1>
            <p>{ "Esse rato se perdeu do ninho." }</p>
            <Link<Route> to={Route::Home} classes="btn">{ "Voltar para o início" }</Link<Route>>
        </main>
    }
}
