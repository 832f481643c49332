use yew::prelude::*;

/// Every glyph the page can show. Anything not listed falls back to
/// `HelpCircle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Heart,
    Calendar,
    Phone,
    ChevronDown,
    X,
    CheckCircle,
    Send,
    Sparkles,
    Gift,
    PlayCircle,
    User,
    Award,
    ShieldCheck,
    FileText,
    Truck,
    HeartHandshake,
    ArrowRight,
    Bell,
    Star,
    Mail,
    MapPin,
    Instagram,
    Facebook,
    Youtube,
    Dog,
    Menu,
    HelpCircle,
}

const TABLE: &[(&str, Glyph)] = &[
    ("heart", Glyph::Heart),
    ("calendar", Glyph::Calendar),
    ("phone", Glyph::Phone),
    ("chevron-down", Glyph::ChevronDown),
    ("x", Glyph::X),
    ("check-circle", Glyph::CheckCircle),
    ("send", Glyph::Send),
    ("sparkles", Glyph::Sparkles),
    ("gift", Glyph::Gift),
    ("play-circle", Glyph::PlayCircle),
    ("user", Glyph::User),
    ("award", Glyph::Award),
    ("shield-check", Glyph::ShieldCheck),
    ("file-text", Glyph::FileText),
    ("truck", Glyph::Truck),
    ("heart-handshake", Glyph::HeartHandshake),
    ("arrow-right", Glyph::ArrowRight),
    ("bell", Glyph::Bell),
    ("star", Glyph::Star),
    ("mail", Glyph::Mail),
    ("map-pin", Glyph::MapPin),
    ("instagram", Glyph::Instagram),
    ("facebook", Glyph::Facebook),
    ("youtube", Glyph::Youtube),
    ("dog", Glyph::Dog),
    ("menu", Glyph::Menu),
];

impl Glyph {
    pub fn from_name(name: &str) -> Self {
        TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, glyph)| *glyph)
            .unwrap_or(Glyph::HelpCircle)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Heart => "♥",
            Glyph::Calendar => "📅",
            Glyph::Phone => "📞",
            Glyph::ChevronDown => "⌄",
            Glyph::X => "✕",
            Glyph::CheckCircle => "✔",
            Glyph::Send => "➤",
            Glyph::Sparkles => "✨",
            Glyph::Gift => "🎁",
            Glyph::PlayCircle => "▶",
            Glyph::User => "👤",
            Glyph::Award => "🏅",
            Glyph::ShieldCheck => "🛡",
            Glyph::FileText => "📄",
            Glyph::Truck => "🚚",
            Glyph::HeartHandshake => "🤝",
            Glyph::ArrowRight => "→",
            Glyph::Bell => "🔔",
            Glyph::Star => "★",
            Glyph::Mail => "✉",
            Glyph::MapPin => "📍",
            Glyph::Instagram => "📷",
            Glyph::Facebook => "f",
            Glyph::Youtube => "▷",
            Glyph::Dog => "🐕",
            Glyph::Menu => "☰",
            Glyph::HelpCircle => "?",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SafeIconProps {
    pub name: AttrValue,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

#[function_component(SafeIcon)]
pub fn safe_icon(props: &SafeIconProps) -> Html {
    let glyph = Glyph::from_name(&props.name);
    let mut style = format!(
        "display: inline-flex; align-items: center; justify-content: center; width: {0}px; height: {0}px; font-size: {1}px; line-height: 1;",
        props.size,
        props.size * 4 / 5
    );
    if let Some(color) = &props.color {
        style.push_str(&format!(" color: {};", color));
    }

    html! {
        <span
            class={classes!("icon", props.class.clone())}
            style={style}
            role="img"
            aria-label={props.name.clone()}
        >
            {glyph.symbol()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Glyph::from_name("chevron-down"), Glyph::ChevronDown);
        assert_eq!(Glyph::from_name("heart-handshake"), Glyph::HeartHandshake);
        assert_eq!(Glyph::from_name("x"), Glyph::X);
    }

    #[test]
    fn unknown_names_get_placeholder() {
        for name in ["", "rocket", "Heart", "chevron_down"] {
            assert_eq!(Glyph::from_name(name), Glyph::HelpCircle, "{name}");
        }
    }

    #[test]
    fn table_has_no_duplicates() {
        for (i, (name, _)) in TABLE.iter().enumerate() {
            assert!(TABLE[i + 1..].iter().all(|(other, _)| other != name), "{name}");
        }
    }
}
