//! Field definitions for the sign-in and sign-up forms: names, schemas with
//! their user-facing messages, and the submit-time payload builders.

use crate::features::auth::types::{LoginRequest, RegisterRequest, Role};
use crate::forms::{FieldSpec, FormState, Rule, Schema};

/// Field names, which double as the wire keys for the sign-up payload.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const ROLE: &str = "role";
    pub const RECAPTCHA: &str = "recaptcha";
}

pub fn signin_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new(
            fields::EMAIL,
            vec![
                Rule::Required("Email is required"),
                Rule::Email("Enter a valid email"),
            ],
        ),
        FieldSpec::new(fields::PASSWORD, vec![Rule::Required("Password is required")]),
        FieldSpec::new(
            fields::RECAPTCHA,
            vec![Rule::Required("Please complete the reCAPTCHA")],
        ),
    ])
}

pub fn signup_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new(
            fields::FIRST_NAME,
            vec![Rule::Required("First name is required")],
        ),
        FieldSpec::new(
            fields::LAST_NAME,
            vec![Rule::Required("Last name is required")],
        ),
        FieldSpec::new(
            fields::EMAIL,
            vec![
                Rule::Required("Email is required"),
                Rule::Email("Enter a valid email"),
            ],
        ),
        FieldSpec::new(
            fields::PASSWORD,
            vec![
                Rule::Required("Password is required"),
                Rule::MinLength(6, "Password should be of minimum 6 characters length"),
            ],
        ),
        FieldSpec::new(
            fields::PHONE_NUMBER,
            vec![Rule::Required("Phone number is required")],
        ),
        FieldSpec::new(
            fields::ROLE,
            vec![
                Rule::Required("Role is required"),
                Rule::OneOf(Role::VALUES, "Invalid role"),
            ],
        )
        .with_initial("patient"),
        FieldSpec::new(
            fields::RECAPTCHA,
            vec![Rule::Required("Please complete the reCAPTCHA")],
        ),
    ])
}

/// Builds the sign-in payload. The email is trimmed; the password is sent
/// exactly as typed. Call only after `validate_all` has passed.
pub fn login_request(form: &FormState) -> LoginRequest {
    LoginRequest {
        email: form.value(fields::EMAIL).trim().to_string(),
        password: form.value(fields::PASSWORD).to_string(),
    }
}

/// Builds the sign-up payload. Returns `None` only when the role value sits
/// outside the enumerated set, which `validate_all` already rules out.
pub fn register_request(form: &FormState) -> Option<RegisterRequest> {
    let role = Role::parse(form.value(fields::ROLE))?;

    Some(RegisterRequest {
        first_name: form.value(fields::FIRST_NAME).trim().to_string(),
        last_name: form.value(fields::LAST_NAME).trim().to_string(),
        email: form.value(fields::EMAIL).trim().to_string(),
        password: form.value(fields::PASSWORD).to_string(),
        phone_number: form.value(fields::PHONE_NUMBER).trim().to_string(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::{fields, login_request, register_request, signin_schema, signup_schema};
    use crate::features::auth::types::Role;
    use crate::forms::FormState;

    fn filled_signup_form() -> FormState {
        let mut form = FormState::new(signup_schema());
        form.set_field(fields::FIRST_NAME, "Ada");
        form.set_field(fields::LAST_NAME, "Lovelace");
        form.set_field(fields::EMAIL, "ada@example.com");
        form.set_field(fields::PASSWORD, "variables");
        form.set_field(fields::PHONE_NUMBER, "+15551234567");
        form.set_field(fields::RECAPTCHA, "widget-token");
        form
    }

    #[test]
    fn signin_blocks_submission_without_a_captcha_token() {
        let mut form = FormState::new(signin_schema());
        form.set_field(fields::EMAIL, "user@example.com");
        form.set_field(fields::PASSWORD, "hunter2");

        assert!(!form.validate_all());
        assert_eq!(
            form.error(fields::RECAPTCHA),
            Some("Please complete the reCAPTCHA")
        );
        assert_eq!(form.error(fields::EMAIL), None);
        assert_eq!(form.error(fields::PASSWORD), None);
    }

    #[test]
    fn signin_validates_email_shape() {
        let mut form = FormState::new(signin_schema());

        form.set_field(fields::EMAIL, "not-an-email");
        form.touch(fields::EMAIL);
        assert_eq!(form.error(fields::EMAIL), Some("Enter a valid email"));

        form.set_field(fields::EMAIL, "user@example.com");
        assert_eq!(form.error(fields::EMAIL), None);
    }

    #[test]
    fn completed_signin_form_passes_validation() {
        let mut form = FormState::new(signin_schema());
        form.set_field(fields::EMAIL, "user@example.com");
        form.set_field(fields::PASSWORD, "hunter2");
        form.set_field(fields::RECAPTCHA, "widget-token");

        assert!(form.validate_all());
    }

    #[test]
    fn signup_enforces_minimum_password_length() {
        let mut form = FormState::new(signup_schema());

        form.set_field(fields::PASSWORD, "12345");
        form.touch(fields::PASSWORD);
        assert_eq!(
            form.error(fields::PASSWORD),
            Some("Password should be of minimum 6 characters length")
        );

        form.set_field(fields::PASSWORD, "123456");
        assert_eq!(form.error(fields::PASSWORD), None);
    }

    #[test]
    fn signup_role_defaults_to_patient_on_the_wire() {
        let mut form = filled_signup_form();

        assert!(form.validate_all());
        let request = register_request(&form).expect("build register request");
        assert_eq!(request.role, Role::Patient);

        let json = serde_json::to_string(&request).expect("serialize register request");
        assert!(json.contains(r#""role":"patient""#));
    }

    #[test]
    fn signup_rejects_roles_outside_the_set() {
        let mut form = filled_signup_form();
        form.set_field(fields::ROLE, "admin");

        assert!(!form.validate_all());
        assert_eq!(form.error(fields::ROLE), Some("Invalid role"));
        assert!(register_request(&form).is_none());
    }

    #[test]
    fn signup_requires_every_field() {
        let mut form = FormState::new(signup_schema());

        assert!(!form.validate_all());
        assert_eq!(form.error(fields::FIRST_NAME), Some("First name is required"));
        assert_eq!(form.error(fields::LAST_NAME), Some("Last name is required"));
        assert_eq!(form.error(fields::EMAIL), Some("Email is required"));
        assert_eq!(form.error(fields::PASSWORD), Some("Password is required"));
        assert_eq!(
            form.error(fields::PHONE_NUMBER),
            Some("Phone number is required")
        );
        // Role is pre-filled with a valid default and stays clean.
        assert_eq!(form.error(fields::ROLE), None);
        assert_eq!(
            form.error(fields::RECAPTCHA),
            Some("Please complete the reCAPTCHA")
        );
    }

    #[test]
    fn login_request_trims_the_email_but_not_the_password() {
        let mut form = FormState::new(signin_schema());
        form.set_field(fields::EMAIL, "  user@example.com  ");
        form.set_field(fields::PASSWORD, " hunter2 ");

        let request = login_request(&form);
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.password, " hunter2 ");
    }
}
