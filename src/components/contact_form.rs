use stylist::yew::styled_component;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::RelayConfig;
use crate::icons::SafeIcon;
use crate::lead::{send_lead, ContactFormModel, Field, FormAction, SubmissionState};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub relay: RelayConfig,
    /// Name and phone only, for the "call me back" dialog.
    #[prop_or_default]
    pub compact: bool,
}

#[styled_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactFormModel::default);

    // Fires once per accepted submit; `attempt` does not change otherwise.
    {
        let in_flight = form.in_flight.clone();
        let dispatcher = form.dispatcher();
        let endpoint = props.relay.endpoint.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(payload) = in_flight {
                    spawn_local(async move {
                        let outcome = send_lead(&endpoint, &payload).await;
                        dispatcher.dispatch(FormAction::Completed(outcome));
                    });
                }
                || ()
            },
            form.attempt,
        );
    }

    let edit = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let edit_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        let access_key = props.relay.access_key.clone();
        let with_message = !props.compact;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit {
                access_key: access_key.clone(),
                with_message,
            });
        })
    };

    let on_reset = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::Reset))
    };

    let style = css!(r#"
        display: flex;
        flex-direction: column;
        gap: 16px;

        input, textarea {
            width: 100%;
            box-sizing: border-box;
            padding: 12px 16px;
            background: #f9fafb;
            border: 1px solid #e5e7eb;
            border-radius: 12px;
            font: inherit;
        }
        input:focus, textarea:focus {
            outline: none;
            border-color: #f97316;
            box-shadow: 0 0 0 2px #fed7aa;
        }
        textarea {
            resize: none;
        }
        .form-error {
            color: #ef4444;
            font-size: 0.875rem;
            background: #fef2f2;
            padding: 12px;
            border-radius: 8px;
        }
        button[type="submit"] {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 8px;
            padding: 12px;
            border: none;
            border-radius: 12px;
            font-weight: 700;
            color: #fff;
            background: linear-gradient(to right, #f97316, #ea580c);
            cursor: pointer;
        }
        button[type="submit"]:disabled {
            background: linear-gradient(to right, #9ca3af, #6b7280);
            cursor: not-allowed;
        }
        .spinner {
            width: 20px;
            height: 20px;
            border: 2px solid rgba(255, 255, 255, 0.3);
            border-top-color: #fff;
            border-radius: 50%;
            animation: spin 1s linear infinite;
        }
        @keyframes spin {
            to { transform: rotate(360deg); }
        }
    "#);

    if form.state == SubmissionState::Succeeded {
        return html! {
            <div class="form-success">
                <div class="form-success-icon">
                    <SafeIcon name="check-circle" size={40} color="#16a34a" />
                </div>
                <h3>{"Заявка отправлена!"}</h3>
                <p>{"Спасибо за обращение! Мы свяжемся с вами в ближайшее время."}</p>
                <button class="link-button" onclick={on_reset}>
                    {"Отправить еще одну заявку"}
                </button>
            </div>
        };
    }

    let submitting = form.state.is_submitting();

    html! {
        <form class={style} onsubmit={onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Ваше имя"
                required=true
                value={form.fields.name.clone()}
                oninput={edit(Field::Name)}
            />
            <input
                type="tel"
                name="phone"
                placeholder="Ваш телефон"
                required=true
                value={form.fields.phone.clone()}
                oninput={edit(Field::Phone)}
            />
            if !props.compact {
                <textarea
                    name="message"
                    placeholder="Ваше сообщение (необязательно)"
                    rows="3"
                    value={form.fields.message.clone()}
                    oninput={edit_message}
                />
            }
            if let Some(message) = form.state.error_message() {
                <div class="form-error">{message}</div>
            }
            <button type="submit" disabled={submitting}>
                if submitting {
                    <div class="spinner"></div>
                    {"Отправка..."}
                } else {
                    <SafeIcon name="send" size={18} />
                    {if props.compact { "Заказать звонок" } else { "Отправить заявку" }}
                }
            </button>
        </form>
    }
}
