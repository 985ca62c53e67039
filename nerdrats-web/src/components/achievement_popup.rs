use std::rc::Rc;

use yew::prelude::*;

use crate::session::{self, SessionUser};
use nerdrats_core::{BadgeCatalog, BadgeDefinition, Track, UserProgress, evaluate, select_notable};

/// Run the evaluator over both tracks and pick the single achievement to
/// surface, if any.
#[must_use]
pub fn notable_for(catalog: &BadgeCatalog, progress: UserProgress) -> Option<BadgeDefinition> {
    let distance = evaluate(&catalog.distance, progress.metric(Track::Distance));
    let keydowns = evaluate(&catalog.keydowns, progress.metric(Track::Keydowns));
    select_notable(
        distance.last.as_ref(),
        keydowns.last.as_ref(),
        progress.metric(Track::Distance),
        progress.metric(Track::Keydowns),
    )
}

/// "Nova conquista!" popup shown once per page load.
///
/// The session snapshot is read at mount and the badge catalog comes from the
/// app-level context, so the selection tracks the single shared catalog load.
/// Logged-out visitors and users with nothing earned see no popup.
#[function_component(AchievementPopup)]
pub fn achievement_popup() -> Html {
    let catalog = use_context::<Rc<BadgeCatalog>>().unwrap_or_default();
    let user = use_state(|| None::<SessionUser>);
    let dismissed = use_state(|| false);

    {
        let user = user.clone();
        use_effect_with((), move |()| {
            user.set(session::load_user());
        });
    }

    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    let Some(badge) = (*user)
        .as_ref()
        .and_then(|user| notable_for(&catalog, user.progress()))
    else {
        return Html::default();
    };
    if *dismissed {
        return Html::default();
    }

    html! {
        <div class="achievement-popup" role="status">
            <div class="achievement-popup__card">
                <span class="achievement-popup__glyph" aria-hidden="true">{ &badge.glyph }</span>
                <div class="achievement-popup__body">
                    <div class="achievement-popup__title">
                        { "Nova conquista!" }
                        <span class="badge-chip">{ &badge.name }</span>
                    </div>
                    <p class="achievement-popup__taunt">{ format!("\u{201c}{}\u{201d}", badge.nerd_taunt) }</p>
                </div>
                <button
                    type="button"
                    class="achievement-popup__close"
                    aria-label="Fechar notificação"
                    onclick={on_dismiss}
                >
                    { "✕" }
                </button>
            </div>
        </div>
    }
}
