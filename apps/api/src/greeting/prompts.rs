// All LLM prompt text for the greeting generator.

use crate::greeting::models::{GreetingRequest, Relationship};
use crate::greeting::tone::Style;

/// Greeting generation prompt template.
/// Placeholders: {name}, {salutation}, {gender}, {age}, {relationship},
///               {from_name}, {hobby}, {traits}, {extra_details}, {tone}
pub const GREETING_PROMPT_TEMPLATE: &str = r#"Ты — мастер искренних поздравлений. Напиши **три разных варианта** поздравления с днём рождения для человека по имени {name}.

Детали:
- Обращение: {salutation}
- Пол: {gender}
- Возраст: {age} лет
- Отношения с поздравляющим: {relationship}
- Подпись от: {from_name}
- Увлечения: {hobby}
- Черты характера: {traits}
{extra_details}- Желаемый стиль: {tone}

Требования к каждому варианту:
- Живой, естественный язык, как будто писал настоящий человек.
- Разные интонации (например, один более эмоциональный, другой – сдержанный, третий – с лёгким юмором, если уместно).
- Длина: 2–4 предложения.
- Заканчивается подписью "{from_name}".

**Верни ТОЛЬКО JSON-массив из трёх строк** в формате:
["вариант 1", "вариант 2", "вариант 3"]
Никаких дополнительных пояснений, только массив.
"#;

/// Builds the generation prompt for a request.
///
/// Never fails: absent fields render as empty text.
pub fn build_prompt(request: &GreetingRequest) -> String {
    let mut extra_details = String::new();
    for clause in [dreams_clause(request), family_clause(request)]
        .into_iter()
        .flatten()
    {
        extra_details.push_str("- ");
        extra_details.push_str(&clause);
        extra_details.push('\n');
    }

    fill_template(
        GREETING_PROMPT_TEMPLATE,
        &[
            ("name", text(&request.name)),
            ("salutation", request.gender().salutation()),
            ("gender", text(&request.gender)),
            ("age", text(&request.age)),
            (
                "relationship",
                Relationship::resolve(request.relationship.as_deref()),
            ),
            ("from_name", text(&request.from_name)),
            ("hobby", text(&request.hobby)),
            ("traits", text(&request.traits)),
            ("extra_details", extra_details.as_str()),
            ("tone", Style::parse(request.style.as_deref()).tone_phrase()),
        ],
    )
}

/// `Семья: супруг(а) X, дети Y.` when at least one of spouse/children is given.
pub fn family_clause(request: &GreetingRequest) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(spouse) = non_empty(&request.spouse) {
        parts.push(format!("супруг(а) {spouse}"));
    }
    if let Some(children) = non_empty(&request.children) {
        parts.push(format!("дети {children}"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("Семья: {}.", parts.join(", ")))
    }
}

pub fn dreams_clause(request: &GreetingRequest) -> Option<String> {
    non_empty(&request.dreams).map(|dreams| format!("Особая мечта: {dreams}."))
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// Replaces `{key}` placeholders in a single left-to-right pass.
/// Substituted values are never rescanned; unknown placeholders are left as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let replacement = tail[1..].find('}').and_then(|end| {
            let key = &tail[1..=end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end + 2))
        });

        match replacement {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> GreetingRequest {
        GreetingRequest {
            name: Some("Анна".to_string()),
            gender: Some("female".to_string()),
            age: Some("30".to_string()),
            relationship: Some("wife".to_string()),
            from_name: Some("Олег".to_string()),
            hobby: Some("йога".to_string()),
            traits: Some("добрая".to_string()),
            dreams: Some("увидеть Японию".to_string()),
            spouse: Some("Олег".to_string()),
            children: Some("Маша и Петя".to_string()),
            style: Some("romantic".to_string()),
        }
    }

    #[test]
    fn test_prompt_contains_name_and_signature() {
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("по имени Анна."));
        assert!(prompt.contains("- Подпись от: Олег"));
        assert!(prompt.contains("Заканчивается подписью \"Олег\"."));
    }

    #[test]
    fn test_prompt_asks_for_three_variant_json_array() {
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("**три разных варианта**"));
        assert!(prompt.contains("**Верни ТОЛЬКО JSON-массив из трёх строк**"));
        assert!(prompt.trim_end().ends_with("Никаких дополнительных пояснений, только массив."));
    }

    #[test]
    fn test_prompt_interpolates_details() {
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("- Пол: female"));
        assert!(prompt.contains("- Возраст: 30 лет"));
        assert!(prompt.contains("- Отношения с поздравляющим: жена"));
        assert!(prompt.contains("- Увлечения: йога"));
        assert!(prompt.contains("- Черты характера: добрая"));
        assert!(prompt.contains("- Особая мечта: увидеть Японию.\n"));
        assert!(prompt.contains("- Семья: супруг(а) Олег, дети Маша и Петя.\n"));
        assert!(prompt.contains("- Желаемый стиль: романтичное, нежное"));
    }

    #[test]
    fn test_female_salutation() {
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("- Обращение: Дорогая\n"));
    }

    #[test]
    fn test_non_female_or_missing_gender_uses_masculine_salutation() {
        let mut request = full_request();
        request.gender = Some("male".to_string());
        assert!(build_prompt(&request).contains("- Обращение: Дорогой\n"));

        request.gender = None;
        assert!(build_prompt(&request).contains("- Обращение: Дорогой\n"));
    }

    #[test]
    fn test_husband_maps_to_fixed_noun() {
        let mut request = full_request();
        request.relationship = Some("husband".to_string());
        assert!(build_prompt(&request).contains("- Отношения с поздравляющим: муж\n"));
    }

    #[test]
    fn test_unknown_or_absent_relationship_is_generic() {
        let mut request = full_request();
        request.relationship = Some("landlord".to_string());
        assert!(build_prompt(&request).contains("- Отношения с поздравляющим: близкий человек\n"));

        request.relationship = None;
        assert!(build_prompt(&request).contains("- Отношения с поздравляющим: близкий человек\n"));
    }

    #[test]
    fn test_unknown_style_defaults_to_warm() {
        let mut request = full_request();
        request.style = Some("epic".to_string());
        assert!(build_prompt(&request).contains("- Желаемый стиль: тёплое, душевное, искреннее"));
    }

    #[test]
    fn test_family_clause_variants() {
        let mut request = GreetingRequest::default();
        assert_eq!(family_clause(&request), None);

        request.children = Some("Петя".to_string());
        assert_eq!(family_clause(&request).as_deref(), Some("Семья: дети Петя."));

        request.spouse = Some("Ира".to_string());
        assert_eq!(
            family_clause(&request).as_deref(),
            Some("Семья: супруг(а) Ира, дети Петя.")
        );
    }

    #[test]
    fn test_empty_dreams_has_no_clause() {
        let mut request = full_request();
        request.dreams = Some(String::new());
        assert_eq!(dreams_clause(&request), None);
        assert!(!build_prompt(&request).contains("Особая мечта"));
    }

    #[test]
    fn test_whitespace_only_values_still_produce_clauses() {
        let request = GreetingRequest {
            dreams: Some("  ".to_string()),
            spouse: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(dreams_clause(&request).as_deref(), Some("Особая мечта:   ."));
        assert_eq!(family_clause(&request).as_deref(), Some("Семья: супруг(а)  ."));
    }

    #[test]
    fn test_no_optional_clauses_leaves_no_blank_detail_lines() {
        let request = GreetingRequest {
            name: Some("Иван".to_string()),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("- Черты характера: \n- Желаемый стиль:"));
        assert!(!prompt.contains("Семья"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let prompt = build_prompt(&GreetingRequest::default());
        assert!(prompt.contains("по имени ."));
        assert!(prompt.contains("- Возраст:  лет"));
        assert!(prompt.contains("Заканчивается подписью \"\"."));
    }

    #[test]
    fn test_placeholders_in_user_values_are_not_expanded() {
        let mut request = full_request();
        request.hobby = Some("{from_name} and {name}".to_string());
        let prompt = build_prompt(&request);
        assert!(prompt.contains("- Увлечения: {from_name} and {name}\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&full_request()), build_prompt(&full_request()));
    }

    #[test]
    fn test_fill_template_leaves_unknown_and_unclosed_braces() {
        let filled = fill_template("{a} {b} {a", &[("a", "1")]);
        assert_eq!(filled, "1 {b} {a");
    }
}
