use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::catalog::{self, ADDRESS, EMAIL, PHONE};
use crate::components::{
    contact_form::ContactForm,
    faq::FaqList,
    modal::Modal,
    puppy_card::PuppyCard,
    testimonials::TestimonialCarousel,
};
use crate::config::RelayConfig;
use crate::countdown::CountdownTimer;
use crate::hooks::{reveal_class, use_in_view};
use crate::icons::SafeIcon;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=800&q=80";

const GALLERY: &[(&str, &str)] = &[
    ("https://images.unsplash.com/photo-1596492784531-6e6eb5ea9993?w=400&q=80", "Щенок японского шпица"),
    ("https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=400&q=80", "Японский шпиц играет"),
    ("https://images.unsplash.com/photo-1601979031925-424e53b6caaa?w=400&q=80", "Взрослый японский шпиц"),
    ("https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&q=80", "Японский шпиц портрет"),
];

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "О породе"),
    ("#puppies", "Щенки"),
    ("#faq", "FAQ"),
    ("#contacts", "Контакты"),
];

const SOCIALS: &[&str] = &["instagram", "send", "facebook", "youtube"];

#[derive(Properties, PartialEq)]
struct HeaderProps {
    on_call: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *menu_open {
                menu_open.toggle();
            }
        })
    };

    let call = {
        let on_call = props.on_call.clone();
        Callback::from(move |_: MouseEvent| on_call.emit(()))
    };

    html! {
        <header class="top-nav">
            <nav class="nav-content">
                <a href="#" class="nav-logo">
                    <div class="nav-logo-icon">
                        <SafeIcon name="dog" size={24} />
                    </div>
                    <div class="nav-logo-text">
                        <span class="nav-logo-title">{"JapanSpitz"}</span>
                        <span class="nav-logo-subtitle">{"Питомник"}</span>
                    </div>
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <SafeIcon name="menu" size={24} />
                </button>
                <div class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    })}
                </div>
                <div class="nav-actions">
                    <button class="nav-call" onclick={call}>
                        <SafeIcon name="phone" size={18} />
                        <span>{"Заказать звонок"}</span>
                    </button>
                    <a href="#puppies" class="nav-cta">{"Выбрать щенка"}</a>
                </div>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_discount: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let discount = {
        let on_discount = props.on_discount.clone();
        Callback::from(move |_: MouseEvent| on_discount.emit(()))
    };

    html! {
        <section ref={node} class="hero">
            <div class={classes!("hero-copy", reveal_class(in_view))}>
                <div class="hero-pill">
                    <SafeIcon name="sparkles" size={16} />
                    {"Помет 2024 года"}
                </div>
                <h1>{"Японский "}<br /><span class="accent">{"Шпиц"}</span></h1>
                <p class="hero-subtitle">
                    {"Белоснежные облачка с чёрными глазками. Преданные компаньоны для всей семьи. Щенки с документами РКF от чемпионов."}
                </p>
                <div class="hero-countdown">
                    <p>{"До конца акции осталось:"}</p>
                    <CountdownTimer />
                </div>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={discount}>
                        <SafeIcon name="gift" size={20} />
                        {"Получить скидку 20%"}
                    </button>
                    <a href="#puppies" class="hero-secondary">
                        <SafeIcon name="play-circle" size={20} />
                        {"Смотреть щенков"}
                    </a>
                </div>
                <div class="hero-owners">
                    <div class="hero-avatars">
                        { for (0..4).map(|_| html! {
                            <div class="hero-avatar"><SafeIcon name="user" size={16} /></div>
                        })}
                    </div>
                    <div><span class="accent">{"500+"}</span>{" счастливых владельцев"}</div>
                </div>
            </div>
            <div class={classes!("hero-visual", reveal_class(in_view))}>
                <img src={HERO_IMAGE} alt="Японский шпиц" />
                <div class="floating-card floating-card-left">
                    <SafeIcon name="check-circle" size={24} color="#16a34a" />
                    <div>
                        <p class="floating-title">{"Привиты"}</p>
                        <p class="floating-note">{"По возрасту"}</p>
                    </div>
                </div>
                <div class="floating-card floating-card-right">
                    <SafeIcon name="award" size={24} color="#ea580c" />
                    <div>
                        <p class="floating-title">{"RKF/FCI"}</p>
                        <p class="floating-note">{"Документы"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="features">
            { for catalog::FEATURES.iter().enumerate().map(|(index, feature)| html! {
                <div
                    class={classes!("feature-card", reveal_class(in_view))}
                    style={format!("transition-delay: {}ms;", index * 100)}
                >
                    <div class="feature-icon">
                        <SafeIcon name={feature.icon} size={28} />
                    </div>
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            })}
        </section>
    }
}

#[function_component(AboutBreed)]
fn about_breed() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="about" ref={node} class="about">
            <div class={classes!("about-copy", reveal_class(in_view))}>
                <h2>{"О породе "}<span class="accent">{"Японский Шпиц"}</span></h2>
                <p>
                    {"Японский шпиц — это компактная, но крепкая собака с пышной белой шерстью и чёрными глазами. Их часто называют «улыбающимися собаками» за характерное выражение морды."}
                </p>
                <p>
                    {"Эти собаки идеально подходят для жизни в квартире: они чистоплотны, не пахнут, легко обучаются и прекрасно ладят с детьми. Шпицы очень преданы своей семье и станут настоящими друзьями на многие годы."}
                </p>
                <div class="about-stats">
                    <div><div class="stat-value">{"33-38"}</div><div class="stat-label">{"см в холке"}</div></div>
                    <div><div class="stat-value">{"6-10"}</div><div class="stat-label">{"кг вес"}</div></div>
                    <div><div class="stat-value">{"12-16"}</div><div class="stat-label">{"лет жизни"}</div></div>
                </div>
                <a href="#puppies" class="about-link">
                    {"Посмотреть доступных щенков"}
                    <SafeIcon name="arrow-right" size={20} />
                </a>
            </div>
            <div class={classes!("about-gallery", reveal_class(in_view))}>
                { for GALLERY.iter().map(|(src, alt)| html! {
                    <div class="gallery-tile"><img src={*src} alt={*alt} loading="lazy" /></div>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PuppiesProps {
    on_order: Callback<()>,
}

#[function_component(Puppies)]
fn puppies(props: &PuppiesProps) -> Html {
    let order = {
        let on_order = props.on_order.clone();
        Callback::from(move |_: MouseEvent| on_order.emit(()))
    };

    html! {
        <section id="puppies" class="puppies">
            <div class="section-heading">
                <span class="section-pill">{"Доступны для бронирования"}</span>
                <h2>{"Наши "}<span class="accent">{"малыши"}</span></h2>
                <p>
                    {"Каждый щенок выращен с любовью и заботой. Все малыши привиты, имеют документы и готовы переехать в новый дом."}
                </p>
            </div>
            <div class="puppy-grid">
                { for catalog::PUPPIES.iter().map(|puppy| html! {
                    <PuppyCard puppy={puppy} on_book={props.on_order.clone()} />
                })}
            </div>
            <div class="puppies-more">
                <button class="outline-button" onclick={order}>
                    <SafeIcon name="bell" size={20} />
                    {"Узнать о новых пометах"}
                </button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactsProps {
    relay: RelayConfig,
}

#[function_component(Contacts)]
fn contacts(props: &ContactsProps) -> Html {
    let details = [("phone", "Телефон", PHONE), ("mail", "Email", EMAIL), ("map-pin", "Адрес", ADDRESS)];

    html! {
        <section id="contacts" class="contacts">
            <div class="contacts-info">
                <h2>{"Свяжитесь с "}<span class="accent">{"нами"}</span></h2>
                <p>
                    {"Остались вопросы? Заполните форму, и мы перезвоним вам в ближайшее время. Или свяжитесь с нами напрямую через мессенджеры."}
                </p>
                <div class="contact-details">
                    { for details.iter().map(|(icon, label, value)| html! {
                        <div class="contact-detail">
                            <div class="contact-icon"><SafeIcon name={*icon} size={24} /></div>
                            <div>
                                <p class="contact-label">{*label}</p>
                                <p class="contact-value">{*value}</p>
                            </div>
                        </div>
                    })}
                </div>
                <p class="socials-title">{"Мы в соцсетях:"}</p>
                <div class="socials">
                    { for SOCIALS.iter().map(|icon| html! {
                        <a href="#" class="social-link"><SafeIcon name={*icon} size={24} /></a>
                    })}
                </div>
            </div>
            <div class="contacts-form">
                <h3>{"Форма заявки"}</h3>
                <ContactForm relay={props.relay.clone()} />
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="nav-logo">
                        <div class="nav-logo-icon"><SafeIcon name="dog" size={24} /></div>
                        <span class="nav-logo-title">{"JapanSpitz"}</span>
                    </div>
                    <p>
                        {"Профессиональный питомник японских шпицев. Мы выращиваем здоровых, социализированных щенков с отличной родословной."}
                    </p>
                </div>
                <div>
                    <h4>{"Навигация"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href}>{*label}</a></li>
                        })}
                    </ul>
                </div>
                <div>
                    <h4>{"Контакты"}</h4>
                    <ul>
                        <li>{PHONE}</li>
                        <li>{EMAIL}</li>
                        <li>{"Москва, Россия"}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 JapanSpitz. Все права защищены."}</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub relay: RelayConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let call_modal = use_bool_toggle(false);
    let order_modal = use_bool_toggle(false);

    let open = |modal: &UseToggleHandle<bool>| {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            if !*modal {
                modal.toggle();
            }
        })
    };
    let close = |modal: &UseToggleHandle<bool>| {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            if *modal {
                modal.toggle();
            }
        })
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Header on_call={open(&call_modal)} />
            <Hero on_discount={open(&order_modal)} />
            <Features />
            <AboutBreed />
            <Puppies on_order={open(&order_modal)} />

            <section class="testimonials">
                <h2>{"Отзывы "}<span class="accent">{"владельцев"}</span></h2>
                <TestimonialCarousel items={catalog::TESTIMONIALS} />
            </section>

            <section id="faq" class="faq">
                <h2>{"Часто задаваемые "}<span class="accent">{"вопросы"}</span></h2>
                <p>{"Ответы на популярные вопросы о породе и покупке щенка"}</p>
                <FaqList entries={catalog::FAQS} />
            </section>

            <Contacts relay={props.relay.clone()} />
            <Footer />

            <Modal is_open={*call_modal} on_close={close(&call_modal)} title="Заказать звонок">
                <p class="modal-text">
                    {"Оставьте ваш номер телефона, и мы перезвоним вам в ближайшее время."}
                </p>
                <ContactForm relay={props.relay.clone()} compact=true />
            </Modal>

            <Modal is_open={*order_modal} on_close={close(&order_modal)} title="Получить скидку 20%">
                <div class="modal-note">
                    <SafeIcon name="gift" size={16} />
                    {"При бронировании щенка до конца месяца вы получаете скидку 20% на покупку!"}
                </div>
                <ContactForm relay={props.relay.clone()} />
            </Modal>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #111827;
        background: linear-gradient(to bottom, #fff7ed, #ffffff);
    }
    .landing-page section {
        max-width: 1200px;
        margin: 0 auto;
        padding: 80px 24px;
    }
    .accent {
        color: #ea580c;
    }
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }

    .top-nav {
        position: sticky;
        top: 0;
        z-index: 40;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(8px);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 16px 24px;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 24px;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 8px;
        text-decoration: none;
        color: inherit;
    }
    .nav-logo-icon {
        background: linear-gradient(135deg, #f97316, #ea580c);
        color: #fff;
        border-radius: 12px;
        padding: 8px;
    }
    .nav-logo-text {
        display: flex;
        flex-direction: column;
    }
    .nav-logo-title {
        font-weight: 800;
        font-size: 1.25rem;
    }
    .nav-logo-subtitle {
        font-size: 0.75rem;
        color: #6b7280;
    }
    .nav-links {
        display: flex;
        gap: 32px;
    }
    .nav-link {
        color: #374151;
        text-decoration: none;
        font-weight: 500;
    }
    .nav-link:hover {
        color: #ea580c;
    }
    .nav-actions {
        display: flex;
        gap: 12px;
    }
    .nav-call, .nav-cta, .hero-cta, .outline-button, .puppy-book {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        border-radius: 9999px;
        padding: 10px 20px;
        font-weight: 700;
        cursor: pointer;
        text-decoration: none;
    }
    .nav-call {
        background: none;
        border: 1px solid #fdba74;
        color: #ea580c;
    }
    .nav-cta, .hero-cta, .puppy-book {
        border: none;
        color: #fff;
        background: linear-gradient(to right, #f97316, #ea580c);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
    }

    .hero {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 48px;
        align-items: center;
    }
    .hero-pill, .section-pill {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        background: #ffedd5;
        color: #c2410c;
        padding: 6px 16px;
        border-radius: 9999px;
        font-weight: 600;
        font-size: 0.875rem;
    }
    .hero h1 {
        font-size: 4rem;
        font-weight: 900;
        line-height: 1.1;
        margin: 24px 0;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #4b5563;
    }
    .hero-countdown {
        margin: 32px 0;
        padding: 24px;
        border-radius: 24px;
        background: linear-gradient(to right, #fb923c, #ef4444);
        color: #fff;
    }
    .hero-cta-group {
        display: flex;
        gap: 16px;
        flex-wrap: wrap;
    }
    .hero-secondary {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        color: #374151;
        font-weight: 600;
        text-decoration: none;
    }
    .hero-owners {
        display: flex;
        align-items: center;
        gap: 16px;
        margin-top: 32px;
        color: #4b5563;
    }
    .hero-avatars {
        display: flex;
    }
    .hero-avatar {
        width: 40px;
        height: 40px;
        margin-left: -8px;
        border-radius: 50%;
        border: 2px solid #fff;
        background: #fed7aa;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .hero-visual {
        position: relative;
        transition-delay: 0.2s;
    }
    .hero-visual img {
        width: 100%;
        border-radius: 48px;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .floating-card {
        position: absolute;
        display: flex;
        align-items: center;
        gap: 12px;
        background: #fff;
        border-radius: 16px;
        padding: 16px;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .floating-card p {
        margin: 0;
    }
    .floating-card-left {
        bottom: -24px;
        left: -24px;
    }
    .floating-card-right {
        top: 24px;
        right: -24px;
    }
    .floating-title {
        font-weight: 700;
    }
    .floating-note {
        font-size: 0.875rem;
        color: #6b7280;
    }

    .features {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 24px;
    }
    .feature-card {
        background: #fff;
        border-radius: 24px;
        padding: 24px;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.05);
    }
    .feature-icon {
        display: inline-flex;
        padding: 12px;
        border-radius: 16px;
        background: #ffedd5;
        color: #ea580c;
    }

    .about {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 48px;
        align-items: center;
    }
    .about h2, .puppies h2, .testimonials h2, .faq h2, .contacts h2 {
        font-size: 2.5rem;
        font-weight: 900;
    }
    .about-stats {
        display: flex;
        gap: 32px;
        margin: 32px 0;
    }
    .stat-value {
        font-size: 2rem;
        font-weight: 900;
        color: #ea580c;
    }
    .stat-label {
        color: #6b7280;
        font-size: 0.875rem;
    }
    .about-link {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        color: #ea580c;
        font-weight: 700;
        text-decoration: none;
    }
    .about-gallery {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 16px;
    }
    .gallery-tile img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: 24px;
    }

    .section-heading {
        text-align: center;
        margin-bottom: 48px;
    }
    .puppy-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 32px;
    }
    .puppy-card {
        background: #fff;
        border-radius: 24px;
        overflow: hidden;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .puppy-photo {
        position: relative;
        height: 256px;
        overflow: hidden;
    }
    .puppy-photo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }
    .puppy-card:hover .puppy-photo img {
        transform: scale(1.1);
    }
    .puppy-badge {
        position: absolute;
        top: 16px;
        left: 16px;
        background: #ef4444;
        color: #fff;
        padding: 4px 12px;
        border-radius: 9999px;
        font-weight: 700;
        font-size: 0.875rem;
    }
    .puppy-gender {
        position: absolute;
        top: 16px;
        right: 16px;
        display: flex;
        align-items: center;
        gap: 4px;
        background: rgba(255, 255, 255, 0.9);
        padding: 4px 12px;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .puppy-body {
        padding: 24px;
    }
    .puppy-age {
        display: flex;
        align-items: center;
        gap: 8px;
        color: #6b7280;
    }
    .puppy-price-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 16px;
    }
    .puppy-price {
        font-size: 1.875rem;
        font-weight: 900;
        color: #ea580c;
    }
    .puppy-old-price {
        color: #9ca3af;
        text-decoration: line-through;
        font-size: 0.875rem;
    }
    .puppy-book {
        width: 100%;
        justify-content: center;
        border-radius: 12px;
    }
    .puppies-more {
        text-align: center;
        margin-top: 48px;
    }
    .outline-button {
        background: #fff;
        border: 2px solid #f97316;
        color: #ea580c;
    }

    .testimonials {
        text-align: center;
    }
    .testimonial-card {
        max-width: 768px;
        margin: 0 auto;
        background: #fff;
        border-radius: 24px;
        padding: 48px;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .testimonial-body {
        animation: fadeIn 0.3s ease-out;
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateX(20px); }
        to { opacity: 1; transform: none; }
    }
    .testimonial-text {
        font-size: 1.25rem;
        font-style: italic;
        color: #374151;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 16px;
    }
    .testimonial-author img {
        width: 56px;
        height: 56px;
        border-radius: 50%;
        object-fit: cover;
    }
    .testimonial-name {
        font-weight: 700;
        margin: 0;
    }
    .testimonial-role {
        color: #6b7280;
        font-size: 0.875rem;
        margin: 0;
    }
    .testimonial-nav {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 8px;
        margin-top: 32px;
    }
    .testimonial-dot {
        width: 12px;
        height: 12px;
        border-radius: 50%;
        border: none;
        background: #d1d5db;
        cursor: pointer;
    }
    .testimonial-dot.active {
        background: #f97316;
    }
    .testimonial-arrow {
        background: none;
        border: none;
        font-size: 1.5rem;
        color: #9ca3af;
        cursor: pointer;
    }

    .faq {
        max-width: 768px !important;
    }
    .faq-list {
        background: #fff;
        border-radius: 24px;
        padding: 8px 32px;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.05);
    }
    .faq-item {
        border-bottom: 1px solid #e5e7eb;
    }
    .faq-item:last-child {
        border-bottom: none;
    }
    .faq-question {
        width: 100%;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 20px 0;
        background: none;
        border: none;
        text-align: left;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
    }
    .faq-question:hover {
        color: #ea580c;
    }
    .toggle-icon {
        color: #f97316;
        transition: transform 0.3s ease;
    }
    .faq-item.open .toggle-icon {
        transform: rotate(180deg);
    }
    .faq-answer {
        color: #4b5563;
        line-height: 1.6;
        animation: fadeIn 0.3s ease-out;
    }

    .contacts {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 48px;
    }
    .contact-details {
        display: flex;
        flex-direction: column;
        gap: 24px;
        margin: 32px 0;
    }
    .contact-detail {
        display: flex;
        align-items: center;
        gap: 16px;
    }
    .contact-icon, .social-link {
        display: flex;
        padding: 12px;
        border-radius: 16px;
        background: #ffedd5;
        color: #ea580c;
        text-decoration: none;
    }
    .contact-label {
        color: #6b7280;
        font-size: 0.875rem;
        margin: 0;
    }
    .contact-value {
        font-weight: 700;
        margin: 0;
    }
    .socials {
        display: flex;
        gap: 12px;
    }
    .contacts-form {
        background: #fff;
        border-radius: 24px;
        padding: 32px;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .link-button {
        background: none;
        border: none;
        color: #ea580c;
        font-weight: 600;
        cursor: pointer;
    }
    .form-success {
        text-align: center;
        padding: 32px 0;
    }
    .form-success-icon {
        width: 80px;
        height: 80px;
        border-radius: 50%;
        background: #dcfce7;
        display: flex;
        align-items: center;
        justify-content: center;
        margin: 0 auto 24px;
    }
    .form-success h3 {
        font-size: 1.5rem;
        font-weight: 700;
        color: #111827;
        margin-bottom: 8px;
    }
    .form-success p {
        color: #4b5563;
        margin-bottom: 24px;
    }

    .footer {
        background: #111827;
        color: #9ca3af;
        padding: 48px 24px 24px;
    }
    .footer-grid {
        max-width: 1200px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 32px;
    }
    .footer h4, .footer .nav-logo-title {
        color: #fff;
    }
    .footer ul {
        list-style: none;
        padding: 0;
    }
    .footer a {
        color: inherit;
        text-decoration: none;
    }
    .footer-bottom {
        max-width: 1200px;
        margin: 32px auto 0;
        padding-top: 24px;
        border-top: 1px solid #1f2937;
        text-align: center;
        font-size: 0.875rem;
    }

    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 16px;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(4px);
        animation: fadeIn 0.2s ease-out;
    }
    .modal-dialog {
        background: #fff;
        border-radius: 24px;
        width: 100%;
        max-width: 448px;
        max-height: 90vh;
        overflow-y: auto;
        padding: 24px;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .modal-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 24px;
    }
    .modal-close {
        background: none;
        border: none;
        border-radius: 50%;
        padding: 8px;
        color: #6b7280;
        cursor: pointer;
    }
    .modal-text {
        color: #4b5563;
    }
    .modal-note {
        display: flex;
        align-items: center;
        gap: 8px;
        margin-bottom: 24px;
        padding: 16px;
        border-radius: 12px;
        background: #fff7ed;
        border: 1px solid #fed7aa;
        color: #9a3412;
        font-size: 0.875rem;
    }

    @media (max-width: 768px) {
        .hero, .about, .contacts, .features, .puppy-grid, .footer-grid {
            grid-template-columns: 1fr;
        }
        .hero h1 {
            font-size: 3rem;
        }
        .burger-menu {
            display: block;
        }
        .nav-links {
            display: none;
        }
        .nav-links.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            padding: 24px;
            background: #fff;
        }
        .nav-cta {
            display: none;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_panel_is_styled() {
        for selector in [".form-success {", ".form-success-icon {"] {
            assert!(LANDING_CSS.contains(selector), "missing {selector}");
        }
        assert!(LANDING_CSS.contains("border-radius: 50%;\n        background: #dcfce7;"));
    }
}
