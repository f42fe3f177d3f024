//! Request/response types for the greeting endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

pub const MISSING_NAME_MESSAGE: &str = "Не указано имя именинника";

/// Inbound greeting request. Keys are camelCase on the wire; unknown keys are ignored.
///
/// Every field is optional here. `/generate` additionally requires `name`
/// (see [`GreetingRequest::validate`]); `/test` fills in defaults instead.
/// Numbers and booleans are accepted wherever text is expected and `null`
/// counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub relationship: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub from_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hobby: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub traits: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dreams: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub spouse: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub children: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub style: Option<String>,
}

impl GreetingRequest {
    /// Parses a raw request body.
    ///
    /// An empty body or a JSON `null` yields `Ok(None)`. Anything that is not
    /// a JSON object is a validation error.
    pub fn from_body(body: &[u8]) -> Result<Option<Self>, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let invalid = |e: serde_json::Error| {
            AppError::Validation(format!("Некорректный JSON в теле запроса: {e}"))
        };

        // Derived struct deserializers also accept arrays, so check the shape first.
        match serde_json::from_slice::<Value>(body).map_err(invalid)? {
            Value::Null => Ok(None),
            value @ Value::Object(_) => serde_json::from_value(value).map(Some).map_err(invalid),
            _ => Err(AppError::Validation(
                "Тело запроса должно быть JSON-объектом".to_string(),
            )),
        }
    }

    /// Ensures the fields the generation path cannot do without are present.
    /// A present but empty `name` passes and renders through the template as-is.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_some() {
            Ok(())
        } else {
            Err(AppError::Validation(MISSING_NAME_MESSAGE.to_string()))
        }
    }

    pub fn gender(&self) -> Gender {
        Gender::parse(self.gender.as_deref())
    }
}

/// Accepts strings, numbers and booleans as text; `null` becomes `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Binary gender branch used for the salutation. Only "female" is feminine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("female") => Gender::Female,
            _ => Gender::Male,
        }
    }

    pub fn salutation(self) -> &'static str {
        match self {
            Gender::Female => "Дорогая",
            Gender::Male => "Дорогой",
        }
    }
}

/// Relationship between sender and recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Husband,
    Wife,
    Boyfriend,
    Girlfriend,
    Friend,
    Colleague,
    Relative,
}

/// Used when the relationship is absent or not one we know.
pub const GENERIC_RELATIONSHIP: &str = "близкий человек";

impl Relationship {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "husband" => Some(Relationship::Husband),
            "wife" => Some(Relationship::Wife),
            "boyfriend" => Some(Relationship::Boyfriend),
            "girlfriend" => Some(Relationship::Girlfriend),
            "friend" => Some(Relationship::Friend),
            "colleague" => Some(Relationship::Colleague),
            "relative" => Some(Relationship::Relative),
            _ => None,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Relationship::Husband => "муж",
            Relationship::Wife => "жена",
            Relationship::Boyfriend => "парень",
            Relationship::Girlfriend => "девушка",
            Relationship::Friend => "друг/подруга",
            Relationship::Colleague => "коллега",
            Relationship::Relative => "родственник",
        }
    }

    /// Resolves a raw relationship value, falling back to the generic term.
    pub fn resolve(raw: Option<&str>) -> &'static str {
        raw.and_then(Relationship::parse)
            .map(Relationship::noun)
            .unwrap_or(GENERIC_RELATIONSHIP)
    }
}

/// Outbound body: always exactly three variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreetingResponse {
    pub variants: [String; 3],
}
