use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::api;
use crate::components::button::Button;
use crate::components::modal::Modal;
use crate::dom;
use crate::session::SessionUser;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Local syntactic check before the round-trip to the scoring service.
#[must_use]
pub fn is_email_plausible(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Emitted with the matched user record on a successful lookup.
    pub on_login: Callback<SessionUser>,
}

/// Email-based login dialog.
///
/// There is no password: the scoring service resolves a registered email to
/// its user record, and that record becomes the session.
#[function_component(LoginModal)]
pub fn login_modal(props: &Props) -> Html {
    let email = use_state(String::new);
    let busy = use_state(|| false);
    let rejected = use_state(|| false);

    let on_input = {
        let email = email.clone();
        let rejected = rejected.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                email.set(input.value());
                rejected.set(false);
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let busy = busy.clone();
        let rejected = rejected.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = (*email).clone();
            if *busy || !is_email_plausible(&address) {
                rejected.set(!address.is_empty());
                return;
            }

            busy.set(true);
            let email = email.clone();
            let busy = busy.clone();
            let rejected = rejected.clone();
            let on_login = on_login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_user_by_email(&address).await {
                    Ok(Some(user)) => {
                        email.set(String::new());
                        on_login.emit(user);
                    }
                    Ok(None) => rejected.set(true),
                    Err(err) => {
                        dom::console_error(&format!("login lookup failed: {err}"));
                        rejected.set(true);
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_cancel = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <Modal
            open={props.open}
            title="Entrar na sua conta"
            on_close={props.on_close.clone()}
            return_focus_id="login-open-btn"
        >
            <form class="login-form" onsubmit={on_submit}>
                <label for="login-email">{ "Email" }</label>
                <input
                    id="login-email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_input}
                    placeholder="Digite seu email"
                    autocomplete="email"
                    required=true
                    class={if *rejected { "input input--invalid" } else { "input" }}
                />
                {
                    if *rejected {
                        html! { <p class="login-form__error">{ "Email inválido ou não encontrado" }</p> }
                    } else {
                        Html::default()
                    }
                }
                <div class="login-form__actions">
                    <Button label="Cancelar" onclick={on_cancel} disabled={*busy} />
                    <button type="submit" class="btn btn--dark" disabled={*busy}>
                        { if *busy { "Entrando..." } else { "Entrar" } }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
