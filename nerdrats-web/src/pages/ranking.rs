use yew::prelude::*;

use crate::components::ranking_tabs::RankingTabs;

#[function_component(RankingPage)]
pub fn ranking_page() -> Html {
    html! {
        <main class="ranking" id="main">
            <h1>{ "Ranking de Líderes" }</h1>
            <p class="ranking__blurb">
                { "Confira os melhores jogadores classificados por distância percorrida (km) \
                   e teclas pressionadas. Alterne entre as abas para ver diferentes rankings." }
            </p>
            <RankingTabs />
        </main>
    }
}
