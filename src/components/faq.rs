use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::FaqEntry;
use crate::icons::SafeIcon;

/// Clicking the open question closes it, any other one opens instead.
pub fn toggle_index(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">
                    <SafeIcon name="chevron-down" size={24} />
                </span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

/// Accordion with at most one answer expanded; the first starts open.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| Some(0usize));

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_| open.set(toggle_index(*open, index)))
                };
                html! {
                    <FaqItem
                        question={entry.question}
                        answer={entry.answer}
                        is_open={*open == Some(index)}
                        on_toggle={on_toggle}
                    />
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_open_entry_closes_it() {
        assert_eq!(toggle_index(Some(2), 2), None);
    }

    #[test]
    fn toggling_other_entry_switches() {
        assert_eq!(toggle_index(Some(0), 3), Some(3));
        assert_eq!(toggle_index(None, 1), Some(1));
    }
}
