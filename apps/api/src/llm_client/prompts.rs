// Shared prompt constants used by more than one service.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona shared by the chat and narrative advice services.
pub const ADVISOR_SYSTEM: &str = "You are a seasoned financial advisor specializing in insurance adequacy. \
    Your role is to assess user queries with empathy, clarity, and precision. \
    Always provide structured, jargon-free advice tailored to the user's financial profile. \
    Use Indian financial notation (₹), and explain formulas when recommending coverage. \
    If the user provides incomplete information, ask clarifying questions before advising.";

/// Currency formatting rule appended to prompts that produce amounts.
pub const INDIAN_CURRENCY_INSTRUCTION: &str = "\
    Format all currency amounts in Indian Rupees (₹) using Indian number formatting \
    (e.g., ₹12,34,567.89) and also show the amount in words \
    (e.g., Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees and Eighty Nine Paise).";

/// Substitutes `{key}` placeholders in a single pass.
///
/// Substituted values are never re-scanned, so user text containing `{name}` and the
/// like is inserted verbatim. Unknown `{...}` sequences (e.g. JSON examples) are kept.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let matched = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));

        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_every_occurrence() {
        let filled = fill_template("Hello {name}. Bye {name}.", &[("name", "Asha")]);
        assert_eq!(filled, "Hello Asha. Bye Asha.");
    }

    #[test]
    fn test_fill_template_keeps_json_braces() {
        let filled = fill_template(r#"{"greeting": "Hi {name}"} {unknown}"#, &[("name", "Ravi")]);
        assert_eq!(filled, r#"{"greeting": "Hi Ravi"} {unknown}"#);
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "{a} and {b}",
            &[("a", "literal {b}"), ("b", "second")],
        );
        assert_eq!(filled, "literal {b} and second");
    }

    #[test]
    fn test_fill_template_handles_trailing_brace() {
        assert_eq!(fill_template("ends with {", &[("x", "y")]), "ends with {");
    }
}
