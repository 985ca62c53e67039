use yew::prelude::*;

use crate::components::typewriter::TypeWriter;

const WELCOME_QUOTES: &[&str] = &[
    "Quantos quilômetros seu mouse já correu?",
    "Campeonato mundial de maratona sentada.",
    "Cada tecla conta. Cada pixel também.",
    "Sedentarismo competitivo, finalmente.",
];

const TRACKER_LINUX_URL: &str =
    "https://github.com/nerdrats/tracker/releases/latest/download/nerdrats-tracker-linux.zip";
const TRACKER_WINDOWS_URL: &str =
    "https://github.com/nerdrats/tracker/releases/latest/download/nerdrats-tracker-win.zip";

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let words: Vec<AttrValue> = WELCOME_QUOTES.iter().map(|q| AttrValue::from(*q)).collect();

    html! {
        <main class="home" id="main">
            <TypeWriter {words} delay_ms={80} />

            <p class="home__pitch">
                { "Junte-se à comunidade dos mestres da inércia e descubra que nem tudo \
                   na vida é sobre se mover — às vezes, é só sobre estar presente... no \
                   mesmo lugar." }
            </p>

            <div class="home__downloads">
                <a class="btn" href={TRACKER_LINUX_URL}>{ "Download Linux" }</a>
                <a class="btn" href={TRACKER_WINDOWS_URL}>{ "Download Windows" }</a>
            </div>
        </main>
    }
}
