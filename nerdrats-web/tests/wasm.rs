#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use nerdrats_web::session::{self, SessionUser};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_round_trips_through_storage() {
    session::clear_user();
    assert!(session::load_user().is_none());

    let user = SessionUser {
        id: "7".to_string(),
        name: "Carlos Silva".to_string(),
        email: "carlos@nerdrats.dev".to_string(),
        user_github: "csilva".to_string(),
        quant_dist: 42.5,
        quant_keys: 31_337,
    };
    session::store_user(&user);
    assert_eq!(session::load_user(), Some(user));

    session::clear_user();
    assert!(session::load_user().is_none());
}

#[wasm_bindgen_test]
fn login_url_percent_encodes_the_email() {
    assert_eq!(
        nerdrats_web::api::user_by_email_url("rato@nerdrats.dev"),
        "https://nerds-rats-hackathon.onrender.com/user-by-email/rato%40nerdrats.dev"
    );
    // Characters that would otherwise truncate or reroute the path.
    assert_eq!(
        nerdrats_web::api::user_by_email_url("a#b?c/d@x.dev"),
        "https://nerds-rats-hackathon.onrender.com/user-by-email/a%23b%3Fc%2Fd%40x.dev"
    );
}

#[wasm_bindgen_test]
fn malformed_session_record_is_discarded() {
    let storage = nerdrats_web::dom::session_storage().unwrap();
    storage
        .set_item(session::SESSION_KEY, "{not json")
        .unwrap();

    assert!(session::load_user().is_none());
    assert!(storage.get_item(session::SESSION_KEY).unwrap().is_none());
}
