//! Canned greetings for the no-AI path.

use crate::greeting::models::{Gender, GreetingRequest};

pub const DEFAULT_NAME: &str = "друг";
pub const DEFAULT_GENDER: &str = "female";
pub const DEFAULT_FROM_NAME: &str = "Твой близкий";

/// Three fixed greetings with name, sender and salutation filled in.
pub fn canned_variants(request: &GreetingRequest) -> [String; 3] {
    let name = request.name.as_deref().unwrap_or(DEFAULT_NAME);
    let from_name = request.from_name.as_deref().unwrap_or(DEFAULT_FROM_NAME);
    let gender = Gender::parse(Some(request.gender.as_deref().unwrap_or(DEFAULT_GENDER)));
    let greeting = format!("{} {name}", gender.salutation());

    [
        format!(
            "{greeting}! От всей души поздравляю с днём рождения! Желаю счастья, здоровья и \
             исполнения самых заветных желаний. Пусть каждый день дарит радость!"
        ),
        format!(
            "С днём рождения, {name}! Ты удивительный человек. Пусть мечты сбываются, а рядом \
             будут только любящие люди. С любовью, {from_name}."
        ),
        format!(
            "{greeting}! Желаю тебе море улыбок, солнечного настроения и ярких впечатлений. \
             Пусть жизнь играет яркими красками!"
        ),
    ]
}
