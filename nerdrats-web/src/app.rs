use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::a11y;
use crate::catalog;
use crate::components::achievement_popup::AchievementPopup;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::login_modal::LoginModal;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::ranking::RankingPage;
use crate::router::Route;
use crate::session::{self, SessionUser};
use nerdrats_core::BadgeCatalog;

/// Everything inside the router: header, routed page, dialogs, footer.
///
/// Session state lives here so the header, the login dialog and the profile
/// page all see the same logged-in user. The badge catalog is fetched once
/// here and shared through context; badge-rendering components never issue
/// their own requests for it.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let user = use_state(|| None::<SessionUser>);
    let login_open = use_state(|| false);
    let badge_catalog = use_state(|| Rc::new(BadgeCatalog::empty()));

    {
        let user = user.clone();
        use_effect_with((), move |()| {
            user.set(session::load_user());
        });
    }

    {
        let badge_catalog = badge_catalog.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                badge_catalog.set(Rc::new(catalog::load_catalog_or_empty().await));
            });
        });
    }

    let on_open_login = {
        let login_open = login_open.clone();
        Callback::from(move |()| login_open.set(true))
    };
    let on_close_login = {
        let login_open = login_open.clone();
        Callback::from(move |()| login_open.set(false))
    };
    let on_login = {
        let user = user.clone();
        let login_open = login_open.clone();
        Callback::from(move |logged_in: SessionUser| {
            session::store_user(&logged_in);
            a11y::set_status(&format!("Sessão iniciada como {}", logged_in.display_name()));
            user.set(Some(logged_in));
            login_open.set(false);
        })
    };
    let on_logout = {
        let user = user.clone();
        Callback::from(move |()| {
            session::clear_user();
            a11y::set_status("Sessão encerrada");
            user.set(None);
        })
    };

    let switch = {
        let user = (*user).clone();
        move |route: Route| match route {
            Route::Home => html! { <HomePage /> },
            Route::Ranking => html! { <RankingPage /> },
            Route::Profile => html! { <ProfilePage user={user.clone()} /> },
            Route::NotFound => html! { <NotFoundPage /> },
        }
    };

    html! {
        <ContextProvider<Rc<BadgeCatalog>> context={(*badge_catalog).clone()}>
            <Header
                user={(*user).clone()}
                on_open_login={on_open_login}
                on_logout={on_logout}
            />
            <Switch<Route> render={switch} />
            <LoginModal
                open={*login_open}
                on_close={on_close_login}
                on_login={on_login}
            />
            <AchievementPopup />
            <Footer />
            <div id="status-helper" class="sr-only" aria-live="polite"></div>
        </ContextProvider<Rc<BadgeCatalog>>>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}
