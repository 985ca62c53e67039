use yew::prelude::*;

use crate::api::RankChange;
use crate::components::quotes::position_quote;
use crate::components::user_badges::UserBadges;
use nerdrats_core::Track;

/// View model for one leaderboard row, already positioned by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub position: usize,
    pub name: String,
    pub initials: String,
    pub metric: f64,
    pub change: RankChange,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub track: Track,
    pub player: RankedPlayer,
}

/// Avatar fallback: first two characters of the name, uppercased.
#[must_use]
pub fn initials_for(name: &str) -> String {
    let short: String = name.chars().take(2).collect();
    if short.is_empty() {
        "??".to_string()
    } else {
        short.to_uppercase()
    }
}

/// Rough words-per-minute proxy the dashboard shows next to key counts.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wpm_estimate(keydowns: f64) -> u64 {
    (keydowns / 5.0).floor().max(0.0) as u64
}

/// Podium glyph for the top three positions.
#[must_use]
pub const fn medal_for(position: usize) -> Option<&'static str> {
    match position {
        1 => Some("🏆"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

fn metric_readout(track: Track, metric: f64) -> Html {
    match track {
        Track::Distance => html! {
            <span class="ranking-card__metric">
                <strong>{ format!("{metric:.1}") }</strong>
                <span class="ranking-card__unit">{ "km" }</span>
            </span>
        },
        Track::Keydowns => html! {
            <span class="ranking-card__metric">
                <strong>{ format!("{metric:.0}") }</strong>
                <span class="ranking-card__unit">{ "teclas" }</span>
                <span class="ranking-card__wpm">{ format!("~{} wpm", wpm_estimate(metric)) }</span>
            </span>
        },
    }
}

fn change_chip(change: RankChange) -> Html {
    let (class, label) = match change {
        RankChange::Up => ("chip chip--up", "▲ Subiu"),
        RankChange::Down => ("chip chip--down", "▼ Desceu"),
        RankChange::Same => ("chip chip--same", "● Manteve"),
    };
    html! { <span class={class}>{ label }</span> }
}

#[function_component(RankingCard)]
pub fn ranking_card(props: &Props) -> Html {
    let player = &props.player;
    let podium_class = match player.position {
        1 => "ranking-card ranking-card--gold",
        2 => "ranking-card ranking-card--silver",
        3 => "ranking-card ranking-card--bronze",
        _ => "ranking-card",
    };
    let quote = position_quote(props.track, player.position, &player.name);
    let initials = if player.initials.is_empty() {
        initials_for(&player.name)
    } else {
        player.initials.clone()
    };

    html! {
        <article class={podium_class}>
            <div class="ranking-card__row">
                <span class="ranking-card__position">
                    {
                        match medal_for(player.position) {
                            Some(medal) => html! { <span aria-hidden="true">{ medal }</span> },
                            None => html! { <span>{ player.position }</span> },
                        }
                    }
                </span>
                <span class="ranking-card__avatar" aria-hidden="true">{ initials }</span>
                <div class="ranking-card__body">
                    <div class="ranking-card__name">{ &player.name }</div>
                    { metric_readout(props.track, player.metric) }
                    <UserBadges track={props.track} metric={player.metric} />
                </div>
                { change_chip(player.change) }
            </div>
            <p class="ranking-card__quote">{ quote }</p>
        </article>
    }
}
