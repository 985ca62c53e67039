use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/ranking")]
    Ranking,
    #[at("/perfil")]
    Profile,
    #[at("/404")]
    #[not_found]
    NotFound,
}
