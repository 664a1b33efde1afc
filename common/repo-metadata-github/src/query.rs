//! Repository query rendering

const REPOSITORY_QUERY_TEMPLATE: &str = include_str!("../queries/repository.graphql");

const OWNER_PLACEHOLDER: &str = "{owner}";
const NAME_PLACEHOLDER: &str = "{name}";

/// Render the repository query for `owner`/`name`
///
/// Both values are substituted into GraphQL string literals, so quotes and
/// backslashes are escaped. Substitution happens in a single pass over the
/// template: placeholder text inside a substituted value is left alone.
pub fn render_repository_query(owner: &str, name: &str) -> String {
    let mut rendered =
        String::with_capacity(REPOSITORY_QUERY_TEMPLATE.len() + owner.len() + name.len());
    let mut rest = REPOSITORY_QUERY_TEMPLATE;

    while let Some(pos) = rest.find('{') {
        rendered.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix(OWNER_PLACEHOLDER) {
            push_escaped(&mut rendered, owner);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(NAME_PLACEHOLDER) {
            push_escaped(&mut rendered, name);
            rest = after;
        } else {
            rendered.push('{');
            rest = &tail[1..];
        }
    }
    rendered.push_str(rest);

    rendered
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < ' ' => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_owner_and_name() {
        let query = render_repository_query("rust-lang", "cargo");
        assert!(query.contains(r#"repository(owner: "rust-lang", name: "cargo")"#));
        assert!(!query.contains(OWNER_PLACEHOLDER));
        assert!(!query.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_render_keeps_selection_braces() {
        let query = render_repository_query("a", "b");
        assert_eq!(query.matches('{').count(), query.matches('}').count());
        assert!(query.trim_start().starts_with("query {"));
        assert!(query.contains("nameWithOwner"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let query = render_repository_query(r#"evil") { viewer { login } } #"#, "x");
        assert!(query.contains(r#"owner: "evil\") { viewer { login } } #""#));
    }

    #[test]
    fn test_render_escapes_other_control_characters() {
        let query = render_repository_query("a\u{0}b\u{1b}", "c\u{1f}\td");
        assert!(query.contains(r#"owner: "a\u0000b\u001B""#));
        assert!(query.contains(r#"name: "c\u001F\td""#));
        assert!(!query.chars().any(|c| c < ' ' && c != '\n'));
    }

    #[test]
    fn test_render_does_not_expand_placeholders_in_values() {
        let query = render_repository_query("{name}", "real");
        assert!(query.contains(r#"repository(owner: "{name}", name: "real")"#));
    }

    #[test]
    fn test_render_empty_name() {
        let query = render_repository_query("solo", "");
        assert!(query.contains(r#"repository(owner: "solo", name: "")"#));
    }
}
