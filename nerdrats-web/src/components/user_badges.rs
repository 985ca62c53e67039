use std::rc::Rc;

use yew::prelude::*;

use nerdrats_core::{BadgeCatalog, BadgeDefinition, SortOrder, Track, evaluate, top_n};

/// How many chips a compact strip shows before collapsing into "+N".
const STRIP_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeDisplay {
    /// Hardest earned badges first, at most [`STRIP_LIMIT`] chips plus overflow.
    Strip,
    /// Every badge of the track, locked ones greyed out. Used on the profile page.
    Grid,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub track: Track,
    /// The user's cumulative metric for that track.
    pub metric: f64,
    #[prop_or(BadgeDisplay::Strip)]
    pub display: BadgeDisplay,
}

/// Earned-badge decoration for ranking cards and the profile grid.
///
/// The catalog comes from the app-level context; it is fetched once per page
/// load, not per component. No context (or a failed load upstream) degrades
/// to rendering nothing (strip) or an empty grid, never an error state.
#[function_component(UserBadges)]
pub fn user_badges(props: &Props) -> Html {
    let catalog = use_context::<Rc<BadgeCatalog>>().unwrap_or_default();
    let track_badges = catalog.track(props.track);

    match props.display {
        BadgeDisplay::Strip => {
            let result = evaluate(track_badges, props.metric);
            render_strip(&result.earned)
        }
        BadgeDisplay::Grid => render_grid(track_badges, props.track, props.metric),
    }
}

fn render_strip(earned: &[BadgeDefinition]) -> Html {
    if earned.is_empty() {
        return Html::default();
    }
    let shown = top_n(earned, STRIP_LIMIT, SortOrder::Descending);
    let overflow = earned.len().saturating_sub(STRIP_LIMIT);
    html! {
        <div class="badge-strip">
            { for shown.iter().map(badge_chip) }
            {
                if overflow > 0 {
                    html! { <span class="badge-chip badge-chip--more">{ format!("+{overflow}") }</span> }
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

fn render_grid(track_badges: &[BadgeDefinition], track: Track, metric: f64) -> Html {
    let ordered = top_n(track_badges, track_badges.len(), SortOrder::Ascending);
    html! {
        <div class="badge-grid">
            { for ordered.iter().map(|badge| {
                let earned = badge.threshold <= metric;
                let cell_class = if earned { "badge-cell badge-cell--earned" } else { "badge-cell badge-cell--locked" };
                html! {
                    <div class={cell_class} title={grid_tooltip(badge, earned, metric)}>
                        <div class="badge-cell__glyph">{ &badge.glyph }</div>
                        <div class="badge-cell__name">{ &badge.name }</div>
                        <div class="badge-cell__threshold">{ threshold_label(badge, track) }</div>
                        {
                            if earned {
                                Html::default()
                            } else {
                                html! { <span class="badge-cell__lock">{ "Bloqueado" }</span> }
                            }
                        }
                    </div>
                }
            }) }
        </div>
    }
}

fn badge_chip(badge: &BadgeDefinition) -> Html {
    let tooltip = format!("{}: {} — {}", badge.name, badge.description, badge.nerd_taunt);
    html! {
        <span class="badge-chip" title={tooltip}>{ &badge.glyph }</span>
    }
}

fn threshold_label(badge: &BadgeDefinition, track: Track) -> String {
    match track {
        Track::Distance => format!("{} km", badge.threshold),
        Track::Keydowns => format!("{} teclas", badge.threshold),
    }
}

fn grid_tooltip(badge: &BadgeDefinition, earned: bool, metric: f64) -> String {
    if earned {
        format!(
            "{} — {} | {} | {}",
            badge.name, badge.description, badge.fun_fact, badge.nerd_taunt
        )
    } else {
        let remaining = badge.threshold - metric;
        match badge.track {
            Track::Distance => format!(
                "{} — percorra mais {remaining:.1} km para desbloquear!",
                badge.name
            ),
            Track::Keydowns => format!(
                "{} — pressione mais {remaining:.0} teclas para desbloquear!",
                badge.name
            ),
        }
    }
}
