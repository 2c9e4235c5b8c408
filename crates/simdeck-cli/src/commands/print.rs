//! `simdeck print <action>`: parse an action and echo its event form.

use crate::actions::Action;

pub fn render(action: &Action) -> String {
    match action.subject() {
        Some(subject) => format!("{} {}", action.event_name(), subject),
        None => action.event_name().to_string(),
    }
}

pub fn run(action: &Action) {
    println!("{}", render(action));
}
