use yew::prelude::*;

use crate::catalog::Testimonial;
use crate::icons::SafeIcon;

/// Steps `index` by `step` and wraps around `len` in both directions.
pub fn cycle(index: usize, len: usize, step: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + step).rem_euclid(len as isize) as usize
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub items: &'static [Testimonial],
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let current = use_state(|| 0usize);
    let len = props.items.len();

    let Some(item) = props.items.get(*current) else {
        return html! {};
    };

    let step = |by: isize| {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(cycle(*current, len, by)))
    };

    html! {
        <div class="testimonial-card">
            <div class="testimonial-stars">
                { for (0..item.rating).map(|_| html! {
                    <SafeIcon name="star" size={24} color="#facc15" />
                })}
            </div>
            // keyed so the fade-in restarts on every switch
            <div class="testimonial-body" key={*current}>
                <p class="testimonial-text">{format!("\"{}\"", item.text)}</p>
                <div class="testimonial-author">
                    <img src={item.image} alt={item.name} />
                    <div>
                        <p class="testimonial-name">{item.name}</p>
                        <p class="testimonial-role">{"Владелец японского шпица"}</p>
                    </div>
                </div>
            </div>
            <div class="testimonial-nav">
                <button class="testimonial-arrow" aria-label="Назад" onclick={step(-1)}>{"‹"}</button>
                { for (0..len).map(|index| {
                    let select = {
                        let current = current.clone();
                        Callback::from(move |_: MouseEvent| current.set(index))
                    };
                    html! {
                        <button
                            class={classes!("testimonial-dot", (index == *current).then(|| "active"))}
                            onclick={select}
                        />
                    }
                })}
                <button class="testimonial-arrow" aria-label="Вперёд" onclick={step(1)}>{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_forward_and_back() {
        assert_eq!(cycle(2, 3, 1), 0);
        assert_eq!(cycle(0, 3, -1), 2);
        assert_eq!(cycle(1, 3, 1), 2);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        assert_eq!(cycle(0, 0, 1), 0);
    }
}
