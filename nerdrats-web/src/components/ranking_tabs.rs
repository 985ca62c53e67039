use yew::prelude::*;

use crate::api::{self, RankingEntry};
use crate::components::ranking_card::{RankedPlayer, RankingCard, initials_for};
use crate::dom;
use nerdrats_core::{Track, rank_by};

/// Order one track's response into positioned leaderboard rows.
///
/// The core owns the ordering rule; this only adapts the wire shape into the
/// card view model.
#[must_use]
pub fn to_players(entries: Vec<RankingEntry>, track: Track) -> Vec<RankedPlayer> {
    rank_by(entries, |entry| entry.metric(track))
        .into_iter()
        .map(|standing| {
            let entry = standing.entry;
            let initials = if entry.initials.is_empty() {
                initials_for(&entry.username)
            } else {
                entry.initials.clone()
            };
            RankedPlayer {
                position: standing.position,
                metric: entry.metric(track),
                name: entry.username,
                initials,
                change: entry.status,
            }
        })
        .collect()
}

#[derive(Clone, PartialEq, Default)]
struct TabData {
    distance: Vec<RankedPlayer>,
    keydowns: Vec<RankedPlayer>,
    loading: bool,
}

/// Tab switcher over the two ranking tracks.
///
/// Both tracks load once on mount; a failed fetch logs and renders as an
/// empty list (the service is fail-atomic, there are no partial results).
#[function_component(RankingTabs)]
pub fn ranking_tabs() -> Html {
    let active = use_state(|| Track::Distance);
    let data = use_state(|| TabData {
        loading: true,
        ..TabData::default()
    });

    {
        let data = data.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                let distance = match api::fetch_rankings(Track::Distance).await {
                    Ok(entries) => to_players(entries, Track::Distance),
                    Err(err) => {
                        dom::console_error(&format!("failed to fetch distance ranking: {err}"));
                        Vec::new()
                    }
                };
                let keydowns = match api::fetch_rankings(Track::Keydowns).await {
                    Ok(entries) => to_players(entries, Track::Keydowns),
                    Err(err) => {
                        dom::console_error(&format!("failed to fetch keydown ranking: {err}"));
                        Vec::new()
                    }
                };
                data.set(TabData {
                    distance,
                    keydowns,
                    loading: false,
                });
            });
        });
    }

    let select_tab = |track: Track| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(track))
    };

    let tab_class = |track: Track| {
        if *active == track {
            "tabs__tab tabs__tab--active"
        } else {
            "tabs__tab"
        }
    };

    let players = match *active {
        Track::Distance => &data.distance,
        Track::Keydowns => &data.keydowns,
    };

    html! {
        <div class="tabs">
            <div class="tabs__list" role="tablist" aria-label="Rankings">
                <button
                    role="tab"
                    class={tab_class(Track::Distance)}
                    aria-selected={(*active == Track::Distance).to_string()}
                    onclick={select_tab(Track::Distance)}
                >
                    { "🖱️ Distância" }
                </button>
                <button
                    role="tab"
                    class={tab_class(Track::Keydowns)}
                    aria-selected={(*active == Track::Keydowns).to_string()}
                    onclick={select_tab(Track::Keydowns)}
                >
                    { "⌨️ Teclas" }
                </button>
            </div>

            {
                if data.loading {
                    html! { <div class="tabs__loading">{ "Carregando rankings..." }</div> }
                } else if players.is_empty() {
                    html! { <div class="tabs__empty">{ "Nenhum jogador no ranking ainda." }</div> }
                } else {
                    html! {
                        <div class="tabs__cards">
                            { for players.iter().map(|player| html! {
                                <RankingCard track={*active} player={player.clone()} />
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
