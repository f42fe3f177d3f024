//! Tone calibration — maps the requested greeting style to the tone phrase
//! the prompt asks for. Unknown or missing styles fall back to `Warm`.

/// Requested greeting style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Warm,
    Funny,
    Romantic,
    Short,
}

impl Style {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("funny") => Style::Funny,
            Some("romantic") => Style::Romantic,
            Some("short") => Style::Short,
            _ => Style::Warm,
        }
    }

    pub fn tone_phrase(self) -> &'static str {
        match self {
            Style::Warm => "тёплое, душевное, искреннее",
            Style::Funny => "с юмором, но доброе",
            Style::Romantic => "романтичное, нежное",
            Style::Short => "короткое, для смс",
        }
    }
}
