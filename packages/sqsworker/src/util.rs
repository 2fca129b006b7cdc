use std::env;

pub fn generate_id() -> String {
    let id = uuid::Uuid::new_v4();
    id.to_string()
}

/// Read an environment variable, treating an empty value as unset.
pub fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
