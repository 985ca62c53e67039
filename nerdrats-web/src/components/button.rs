use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::from("btn"))]
    pub class: AttrValue,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    html! {
        <button class={p.class.clone()} {onclick} disabled={p.disabled}>
            { p.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label_and_disabled_state() {
        let props = Props {
            label: AttrValue::from("Entrar"),
            onclick: Callback::noop(),
            disabled: true,
            class: AttrValue::from("btn btn--primary"),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("Entrar"));
        assert!(html.contains("disabled"));
    }
}
