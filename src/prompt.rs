//! Prompt text shown before every command line.

use std::env;

/// Used when the invoking user cannot be determined from the environment.
pub const FALLBACK_NAME: &str = "lsh";

/// Name of the invoking user, taken from `USER` or else `LOGNAME`.
pub fn display_name() -> String {
    pick_name(env::var("USER").ok(), env::var("LOGNAME").ok())
}

fn pick_name(user: Option<String>, logname: Option<String>) -> String {
    user.into_iter()
        .chain(logname)
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Renders the prompt for `name`, e.g. `alice> `.
pub fn format_prompt(name: &str) -> String {
    format!("{}> ", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_user_then_logname() {
        assert_eq!(pick_name(Some("alice".into()), Some("bob".into())), "alice");
        assert_eq!(pick_name(None, Some("bob".into())), "bob");
        assert_eq!(pick_name(Some(String::new()), Some("bob".into())), "bob");
    }

    #[test]
    fn test_falls_back_to_static_name() {
        assert_eq!(pick_name(None, None), FALLBACK_NAME);
        assert_eq!(pick_name(Some(String::new()), None), FALLBACK_NAME);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_prompt("alice"), "alice> ");
    }
}
