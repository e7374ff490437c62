//! Small presentation components shared across routes.

mod button;
mod field;
mod notice;
mod spinner;

pub(crate) use button::Button;
pub(crate) use field::{FieldError, SelectField, TextField};
pub(crate) use notice::Notice;
pub(crate) use spinner::Spinner;
