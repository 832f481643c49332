use yew::prelude::*;

use crate::catalog::{format_price, Puppy};
use crate::hooks::{reveal_class, use_in_view};
use crate::icons::SafeIcon;

#[derive(Properties, PartialEq)]
pub struct PuppyCardProps {
    pub puppy: &'static Puppy,
    pub on_book: Callback<()>,
}

#[function_component(PuppyCard)]
pub fn puppy_card(props: &PuppyCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let puppy = props.puppy;

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <div ref={node} class={classes!("puppy-card", reveal_class(in_view))}>
            <div class="puppy-photo">
                <img src={puppy.image} alt={puppy.name} loading="lazy" />
                if let Some(badge) = puppy.badge {
                    <div class="puppy-badge">{badge}</div>
                }
                <div class="puppy-gender">
                    <SafeIcon name="heart" size={14} color="#ef4444" />
                    {puppy.gender.label()}
                </div>
            </div>
            <div class="puppy-body">
                <h3>{puppy.name}</h3>
                <p class="puppy-age">
                    <SafeIcon name="calendar" size={16} />
                    {puppy.age}
                </p>
                <div class="puppy-price-row">
                    <span class="puppy-price">{format!("{} ₽", format_price(puppy.price))}</span>
                    if puppy.badge.is_some() {
                        <span class="puppy-old-price">
                            {format!("{} ₽", format_price(puppy.original_price()))}
                        </span>
                    }
                </div>
                <button class="puppy-book" onclick={book}>
                    <SafeIcon name="phone" size={18} />
                    {"Забронировать"}
                </button>
            </div>
        </div>
    }
}
