use crate::a11y::{restore_focus, trap_focus_in};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static DIALOG_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Element to re-focus when the dialog closes (usually the opener).
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Accessible dialog shell: backdrop click and Escape close it, focus moves
/// inside on open and returns to the opener on close.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let dialog_id = use_state(|| DIALOG_IDS.fetch_add(1, Ordering::Relaxed));
    let container_id = format!("dialog-{}", *dialog_id);
    let title_id = format!("dialog-title-{}", *dialog_id);
    let prev_open = use_mut_ref(|| props.open);

    {
        let container_id = container_id.clone();
        let return_focus = props.return_focus_id.clone();
        let prev_open_handle = prev_open;
        use_effect_with(
            (props.open, return_focus),
            move |(is_open, return_focus_id)| {
                let was_open = *prev_open_handle.borrow();
                *prev_open_handle.borrow_mut() = *is_open;
                if *is_open {
                    trap_focus_in(&container_id);
                } else if was_open && let Some(id) = return_focus_id.as_ref() {
                    restore_focus(id);
                }
                || {}
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let on_backdrop_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Clicks inside the dialog must not bubble into the backdrop handler.
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        let return_focus_id = props.return_focus_id.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
                if let Some(id) = return_focus_id.as_ref() {
                    restore_focus(id);
                }
            }
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_backdrop_click}>
            <div
                id={container_id}
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                onclick={on_dialog_click}
                onkeydown={on_keydown}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label="Fechar" onclick={on_close}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
