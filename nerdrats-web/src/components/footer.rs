use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            { "NERDRATS — medindo o sedentarismo com orgulho desde o hackathon." }
        </footer>
    }
}
