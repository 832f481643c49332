//! Static content shown on the landing page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Мальчик",
            Gender::Female => "Девочка",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Puppy {
    pub name: &'static str,
    pub gender: Gender,
    pub age: &'static str,
    pub price: u32,
    pub image: &'static str,
    pub badge: Option<&'static str>,
}

impl Puppy {
    /// Struck-through "before discount" price shown next to badged puppies.
    pub fn original_price(&self) -> u32 {
        (f64::from(self.price) * 1.2).round() as u32
    }
}

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub rating: usize,
    pub image: &'static str,
}

pub const PHONE: &str = "+7 (999) 123-45-67";
pub const EMAIL: &str = "info@japan-spitz.ru";
pub const ADDRESS: &str = "Москва, ул. Примерная, 123";

pub const PUPPIES: &[Puppy] = &[
    Puppy {
        name: "Айс",
        gender: Gender::Male,
        age: "2 месяца",
        price: 45_000,
        image: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=600&q=80",
        badge: Some("Скидка 20%"),
    },
    Puppy {
        name: "Луна",
        gender: Gender::Female,
        age: "2.5 месяца",
        price: 52_000,
        image: "https://images.unsplash.com/photo-1596492784531-6e6eb5ea9993?w=600&q=80",
        badge: None,
    },
    Puppy {
        name: "Снежок",
        gender: Gender::Male,
        age: "3 месяца",
        price: 48_000,
        image: "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=600&q=80",
        badge: Some("Лучший выбор"),
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "shield-check",
        title: "Гарантия здоровья",
        description: "Все щенки проходят ветеринарный осмотр и имеют международный ветпаспорт",
    },
    Feature {
        icon: "file-text",
        title: "Документы RKF/FCI",
        description: "Полный пакет документов на чистокровность породы",
    },
    Feature {
        icon: "truck",
        title: "Доставка",
        description: "Безопасная доставка в любой город России и СНГ",
    },
    Feature {
        icon: "heart-handshake",
        title: "Поддержка 24/7",
        description: "Консультации по уходу и воспитанию питомца",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Какой характер у японского шпица?",
        answer: "Японский шпиц - это живая, общительная и ласковая порода. Они очень привязаны к семье, отлично ладят с детьми и другими животными. Шпицы умны, легко обучаемы и не склонны к агрессии.",
    },
    FaqEntry {
        question: "Как ухаживать за шерстью?",
        answer: "Несмотря на пышную шерсть, японский шпиц не требует сложного ухода. Достаточно расчесывать 2-3 раза в неделю специальной щеткой. В период линьки - чаще. Купать можно раз в 1-2 месяца.",
    },
    FaqEntry {
        question: "Сколько живут японские шпицы?",
        answer: "При правильном уходе и питании японские шпицы живут 12-16 лет. Это довольно здоровая порода с хорошим иммунитетом.",
    },
    FaqEntry {
        question: "Подходит ли порода для квартиры?",
        answer: "Да, японский шпиц прекрасно адаптируется к жизни в квартире. Они небольшие, чистоплотные и практически не пахнут. Главное - обеспечить достаточную физическую активность.",
    },
    FaqEntry {
        question: "Что входит в стоимость щенка?",
        answer: "В стоимость входят: щенок с документами РКФ, ветеринарный паспорт с прививками, чипирование, консультация по уходу, договор купли-продажи и корм на первое время.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Анна М.",
        text: "Взяли щенка 6 месяцев назад. Малыш адаптировался очень быстро, здоровый, активный. Спасибо питомнику за отличного питомца!",
        rating: 5,
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&q=80",
    },
    Testimonial {
        name: "Дмитрий К.",
        text: "Очень ответственный заводчик. Все документы в порядке, щенок привит по возрасту. Доставили в другой город без проблем.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&q=80",
    },
    Testimonial {
        name: "Елена С.",
        text: "Наш Айс - настоящий член семьи! Умный, послушный, красивый. Все дети в восторге. Рекомендую этот питомник!",
        rating: 5,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&q=80",
    },
];

/// Groups thousands with spaces the way Russian price tags are written.
pub fn format_price(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(45_000), "45 000");
        assert_eq!(format_price(1_234_567), "1 234 567");
    }

    #[test]
    fn original_price_is_twenty_percent_higher() {
        assert_eq!(PUPPIES[0].original_price(), 54_000);
        assert_eq!(PUPPIES[2].original_price(), 57_600);
    }

    #[test]
    fn every_feature_icon_is_known() {
        use crate::icons::Glyph;
        for feature in FEATURES {
            assert_ne!(Glyph::from_name(feature.icon), Glyph::HelpCircle, "{}", feature.icon);
        }
    }
}
