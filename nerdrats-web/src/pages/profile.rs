use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, RankingEntry};
use crate::components::ranking_card::{initials_for, medal_for, wpm_estimate};
use crate::components::user_badges::{BadgeDisplay, UserBadges};
use crate::dom;
use crate::router::Route;
use crate::session::SessionUser;
use nerdrats_core::{Track, position_of, rank_by};

/// Find a user's leaderboard position in one track's response.
#[must_use]
pub fn position_in(entries: Vec<RankingEntry>, track: Track, user: &SessionUser) -> Option<usize> {
    let standings = rank_by(entries, |entry| entry.metric(track));
    position_of(&standings, |entry| {
        entry.username == user.name || (!user.user_github.is_empty() && entry.username == user.user_github)
    })
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub user: Option<SessionUser>,
}

#[derive(Clone, PartialEq, Default)]
struct Positions {
    distance: Option<usize>,
    keydowns: Option<usize>,
}

/// The logged-in user's profile: identity, per-track stats, full badge grids.
///
/// Visiting while logged out redirects to the home page.
#[function_component(ProfilePage)]
pub fn profile_page(props: &Props) -> Html {
    let navigator = use_navigator();
    let positions = use_state(Positions::default);

    {
        let logged_out = props.user.is_none();
        use_effect_with(logged_out, move |logged_out| {
            if *logged_out && let Some(nav) = navigator {
                nav.push(&Route::Home);
            }
        });
    }

    {
        let positions = positions.clone();
        let user = props.user.clone();
        use_effect_with(user, move |user| {
            let Some(user) = user.clone() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                let mut found = Positions::default();
                match api::fetch_rankings(Track::Distance).await {
                    Ok(entries) => {
                        found.distance = position_in(entries, Track::Distance, &user);
                    }
                    Err(err) => {
                        dom::console_error(&format!("failed to fetch distance ranking: {err}"));
                    }
                }
                match api::fetch_rankings(Track::Keydowns).await {
                    Ok(entries) => {
                        found.keydowns = position_in(entries, Track::Keydowns, &user);
                    }
                    Err(err) => {
                        dom::console_error(&format!("failed to fetch keydown ranking: {err}"));
                    }
                }
                positions.set(found);
            });
        });
    }

    let Some(user) = &props.user else {
        return Html::default();
    };
    let progress = user.progress();

    html! {
        <main class="profile" id="main">
            <div class="profile__top">
                <Link<Route> to={Route::Home} classes="btn btn--ghost">{ "← Voltar" }</Link<Route>>
                <h1>{ "Meu Perfil" }</h1>
            </div>

            <div class="profile__grid">
                <section class="card profile__identity">
                    <span class="profile__avatar" aria-hidden="true">{ initials_for(&user.name) }</span>
                    <h2>{ &user.name }</h2>
                    <p class="profile__email">{ &user.email }</p>
                    {
                        if user.user_github.is_empty() {
                            Html::default()
                        } else {
                            html! { <p class="profile__github">{ format!("@{}", user.user_github) }</p> }
                        }
                    }
                </section>

                <section class="card profile__stats">
                    <h2>{ "Estatísticas" }</h2>
                    <p class="card__subtitle">{ "Seu desempenho nos rankings" }</p>

                    <div class="stat-block">
                        <h3>{ "🖱️ Ranking de Distância" }</h3>
                        <dl>
                            <dt>{ "Posição Atual" }</dt>
                            <dd>{ position_readout(positions.distance) }</dd>
                            <dt>{ "Distância Total" }</dt>
                            <dd>{ format!("{:.1} km", progress.distance_km) }</dd>
                        </dl>
                    </div>

                    <div class="stat-block">
                        <h3>{ "⌨️ Ranking de Teclas" }</h3>
                        <dl>
                            <dt>{ "Posição Atual" }</dt>
                            <dd>{ position_readout(positions.keydowns) }</dd>
                            <dt>{ "Total de Teclas" }</dt>
                            <dd>{ progress.keydowns }</dd>
                            <dt>{ "WPM Médio" }</dt>
                            <dd>{ wpm_estimate(progress.metric(Track::Keydowns)) }</dd>
                        </dl>
                    </div>
                </section>

                <section class="card profile__badges">
                    <h2>{ "Meus Badges" }</h2>
                    <h3>{ "Distância" }</h3>
                    <UserBadges
                        track={Track::Distance}
                        metric={progress.metric(Track::Distance)}
                        display={BadgeDisplay::Grid}
                    />
                    <h3>{ "Teclas" }</h3>
                    <UserBadges
                        track={Track::Keydowns}
                        metric={progress.metric(Track::Keydowns)}
                        display={BadgeDisplay::Grid}
                    />
                </section>
            </div>
        </main>
    }
}

fn position_readout(position: Option<usize>) -> Html {
    match position {
        Some(position) => html! {
            <>
                {
                    medal_for(position)
                        .map(|medal| html! { <span aria-hidden="true">{ medal }</span> })
                        .unwrap_or_default()
                }
                { format!("{position}º") }
            </>
        },
        None => html! { { "—" } },
    }
}
