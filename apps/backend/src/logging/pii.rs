use std::fmt;

/// Masks a username for logs: first character kept, the rest replaced.
pub fn redact(input: &str) -> String {
    match input.chars().next() {
        None => String::new(),
        Some(first) => format!("{first}***"),
    }
}

/// A wrapper that redacts the wrapped string whenever it is formatted.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_redaction() {
        assert_eq!(redact("user1"), "u***");
        assert_eq!(redact("a"), "a***");
        assert_eq!(redact(""), "");
        assert_eq!(redact("émile"), "é***");
    }

    #[test]
    fn test_redacted_wrapper() {
        let redacted = Redacted("johndoe");
        assert_eq!(format!("{redacted}"), "j***");
        assert_eq!(format!("{redacted:?}"), "j***");
    }
}
