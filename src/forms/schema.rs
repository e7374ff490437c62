//! Declarative validation schemas interpreted by plain iteration. A schema
//! is defined once per form; the interpreter owns no state and every field
//! validates independently of the others.

use super::rules;

/// One field-level rule with its user-facing message. Presence is
/// exclusively `Required`'s concern: the format rules pass on blank input so
/// an empty field reports its required message and nothing else.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Fails on blank input, where whitespace-only counts as blank.
    Required(&'static str),
    /// Fails on non-blank input that does not look like an email address.
    Email(&'static str),
    /// Fails on non-blank input shorter than the given number of characters.
    MinLength(usize, &'static str),
    /// Fails on non-blank input outside the enumerated set.
    OneOf(&'static [&'static str], &'static str),
}

impl Rule {
    /// Checks `value`, returning the rule's message on failure.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required(message) => rules::is_blank(value).then_some(*message),
            Rule::Email(message) => {
                (!value.is_empty() && !rules::valid_email(value)).then_some(*message)
            }
            Rule::MinLength(min, message) => {
                (!value.is_empty() && value.chars().count() < *min).then_some(*message)
            }
            Rule::OneOf(allowed, message) => {
                (!value.is_empty() && !allowed.contains(&value)).then_some(*message)
            }
        }
    }
}

/// One form field: its name, initial value and ordered rules.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub initial: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            name,
            initial: "",
            rules,
        }
    }

    pub fn with_initial(self, initial: &'static str) -> Self {
        Self { initial, ..self }
    }

    /// Runs the field's rules in order; the first failure wins.
    pub fn validate(&self, value: &str) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validates a single field's value. Unknown fields validate clean.
    pub fn validate(&self, name: &str, value: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.validate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldSpec, Rule, Schema};

    #[test]
    fn required_wins_over_format_rules_on_blank_input() {
        let field = FieldSpec::new(
            "email",
            vec![
                Rule::Required("Email is required"),
                Rule::Email("Enter a valid email"),
            ],
        );

        assert_eq!(field.validate(""), Some("Email is required"));
        assert_eq!(field.validate("   "), Some("Email is required"));
        assert_eq!(field.validate("not-an-email"), Some("Enter a valid email"));
        assert_eq!(field.validate("a@example.com"), None);
    }

    #[test]
    fn format_rules_pass_on_blank_input() {
        assert_eq!(Rule::Email("bad email").check(""), None);
        assert_eq!(Rule::MinLength(6, "too short").check(""), None);
        assert_eq!(Rule::OneOf(&["patient"], "bad role").check(""), None);
    }

    #[test]
    fn min_length_counts_characters() {
        let rule = Rule::MinLength(6, "too short");

        assert_eq!(rule.check("12345"), Some("too short"));
        assert_eq!(rule.check("123456"), None);
    }

    #[test]
    fn one_of_rejects_values_outside_the_set() {
        let rule = Rule::OneOf(&["patient", "doctor"], "Invalid role");

        assert_eq!(rule.check("doctor"), None);
        assert_eq!(rule.check("admin"), Some("Invalid role"));
    }

    #[test]
    fn unknown_fields_validate_clean() {
        let schema = Schema::new(vec![FieldSpec::new(
            "email",
            vec![Rule::Required("Email is required")],
        )]);

        assert_eq!(schema.validate("ghost", "anything"), None);
    }
}
