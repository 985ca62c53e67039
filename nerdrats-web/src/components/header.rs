use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::SessionUser;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Logged-in user, if any; decides which controls show.
    pub user: Option<SessionUser>,
    pub on_open_login: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let open_login = {
        let cb = p.on_open_login.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header class="site-header" role="banner">
            <div class="site-header__inner">
                <Link<Route> to={Route::Home} classes="site-header__logo">
                    <span class="site-header__logo-glyph" aria-hidden="true">{ "🐀" }</span>
                    { "NERDRATS" }
                </Link<Route>>

                <nav class="site-header__nav" aria-label="Navegação principal">
                    <Link<Route> to={Route::Ranking}>{ "Ranking" }</Link<Route>>
                </nav>

                <div class="site-header__actions">
                    {
                        if let Some(user) = &p.user {
                            html! {
                                <>
                                    <Link<Route> to={Route::Profile} classes="btn btn--ghost">
                                        { format!("Perfil ({})", user.display_name()) }
                                    </Link<Route>>
                                    <button class="btn btn--dark" onclick={logout}>{ "Sair" }</button>
                                </>
                            }
                        } else {
                            html! {
                                <button id="login-open-btn" class="btn btn--dark" onclick={open_login}>
                                    { "Entrar" }
                                </button>
                            }
                        }
                    }
                </div>
            </div>
        </header>
    }
}
