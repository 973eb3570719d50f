use crate::preferences::Language;

/// A quotation and its attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub source: &'static str,
}

const fn quote(text: &'static str, source: &'static str) -> Quote {
    Quote { text, source }
}

const EN: &[Quote] = &[
    quote(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    quote(
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    quote(
        "Choose a job you love, and you will never have to work a day in your life.",
        "Confucius",
    ),
    quote(
        "Opportunities don't happen. You create them.",
        "Chris Grosser",
    ),
    quote(
        "It always seems impossible until it's done.",
        "Nelson Mandela",
    ),
    quote(
        "Don't watch the clock; do what it does. Keep going.",
        "Sam Levenson",
    ),
];

const ID: &[Quote] = &[
    quote(
        "Satu-satunya cara untuk melakukan pekerjaan hebat adalah mencintai apa yang kamu lakukan.",
        "Steve Jobs",
    ),
    quote(
        "Kesuksesan bukanlah akhir, kegagalan tidaklah fatal: keberanian untuk terus melangkah yang berarti.",
        "Winston Churchill",
    ),
    quote(
        "Pilihlah pekerjaan yang kamu cintai, maka kamu tidak akan pernah bekerja sehari pun dalam hidupmu.",
        "Konfusius",
    ),
    quote(
        "Kesempatan tidak datang begitu saja. Kamu yang menciptakannya.",
        "Chris Grosser",
    ),
    quote(
        "Segalanya tampak mustahil sampai semuanya selesai.",
        "Nelson Mandela",
    ),
    quote(
        "Jangan pandangi jam; lakukan apa yang dilakukannya. Terus bergerak.",
        "Sam Levenson",
    ),
];

/// Built-in quotations, keyed by language.
pub struct QuoteBook;

impl QuoteBook {
    pub fn quotes(language: Language) -> &'static [Quote] {
        match language {
            Language::En => EN,
            Language::Id => ID,
        }
    }
}
