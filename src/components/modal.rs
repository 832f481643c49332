use web_sys::MouseEvent;
use yew::prelude::*;

use crate::icons::SafeIcon;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-dialog" onclick={keep_open}>
                <div class="modal-header">
                    <h3>{&props.title}</h3>
                    <button class="modal-close" onclick={close}>
                        <SafeIcon name="x" size={24} />
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
