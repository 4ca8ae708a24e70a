//! Anchors linking navigation entries to gallery sections

/// Map a test's full title to a fragment identifier.
///
/// Every run of whitespace becomes a single `_`; nothing else is touched, so
/// link targets and section ids built from the same title always agree.
pub fn encode(full_title: &str) -> String {
    let mut anchor = String::with_capacity(full_title.len());
    let mut in_space = false;

    for c in full_title.chars() {
        if c.is_whitespace() {
            if !in_space {
                anchor.push('_');
            }
            in_space = true;
        } else {
            anchor.push(c);
            in_space = false;
        }
    }

    anchor
}

/// Link target pointing at an encoded anchor (`#anchor`)
pub fn link(anchor: &str) -> String {
    format!("#{}", anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Login renders", "Login_renders"; "single space")]
    #[test_case("Login  \t renders", "Login_renders"; "whitespace run")]
    #[test_case(" leading and trailing ", "_leading_and_trailing_"; "edges")]
    #[test_case("no-spaces", "no-spaces"; "untouched")]
    #[test_case("", ""; "empty")]
    #[test_case("a<b> & c", "a<b>_&_c"; "markup characters kept")]
    fn test_encode(input: &str, expected: &str) {
        assert_eq!(encode(input), expected);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let title = "Checkout flow shows\nsummary";
        assert_eq!(encode(title), encode(title));
        assert_eq!(link(&encode(title)), "#Checkout_flow_shows_summary");
    }
}
