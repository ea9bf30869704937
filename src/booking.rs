//! Appointment booking form state.
//!
//! The form can book for the patient themself or for a relative. Who the
//! booking is for is a [`BookingSubject`] variant, so relative details exist
//! exactly when they are required. Each kind of input has its own handler:
//! text fields go through [`BookingForm::set_field`], the "book for a
//! relative" checkbox through [`BookingForm::set_book_for_relative`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use medportal_widgets::booking::{BookingForm, Field};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
//! let mut form = BookingForm::new();
//! form.set_field(Field::PatientName, "Phạm Thu Hà");
//! form.set_field(Field::Phone, "0912345678");
//! form.set_field(Field::Specialty, "Nhi khoa");
//! form.set_field(Field::Time, "09:30");
//! form.set_date(NaiveDate::from_ymd_opt(2025, 8, 20));
//!
//! form.set_book_for_relative(true);
//! assert!(form.validate(today).is_err()); // relative details now required
//!
//! form.set_relative_name("Phạm Minh Khôi");
//! form.set_relative_phone("0987654321");
//! let request = form.validate(today).unwrap();
//! assert_eq!(request.into_appointment(42).id, 42);
//! ```

use crate::appointment::{Appointment, AppointmentStatus};
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Who the appointment is booked for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingSubject {
    /// The person filling in the form.
    #[default]
    Myself,
    /// A relative of the person filling in the form.
    Relative {
        /// The relative's full name.
        name: String,
        /// The relative's phone number.
        phone: String,
    },
}

/// Text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Name of the person booking.
    PatientName,
    /// Contact phone of the person booking.
    Phone,
    /// Optional contact email.
    Email,
    /// Requested specialty.
    Specialty,
    /// Optional preferred doctor.
    Doctor,
    /// Requested time, `HH:MM`.
    Time,
    /// Free-text symptoms or notes.
    Notes,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::PatientName => "patient name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Specialty => "specialty",
            Field::Doctor => "doctor",
            Field::Time => "time",
            Field::Notes => "notes",
        }
    }
}

/// Why a form could not be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required input is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A phone number is not 10-11 digits starting with 0.
    #[error("{field} {value:?} is not a valid phone number")]
    InvalidPhone {
        /// Which phone input.
        field: &'static str,
        /// What was entered.
        value: String,
    },

    /// The email has no `@` or nothing around it.
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),

    /// The time is not `HH:MM`.
    #[error("{0:?} is not a valid time (expected HH:MM)")]
    InvalidTime(String),

    /// The requested date is before today.
    #[error("{date} is in the past")]
    DateInPast {
        /// The requested date.
        date: NaiveDate,
    },
}

/// Raw state of the booking form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    patient_name: String,
    phone: String,
    email: String,
    specialty: String,
    doctor: String,
    date: Option<NaiveDate>,
    time: String,
    notes: String,
    subject: BookingSubject,
}

impl BookingForm {
    /// An empty form booking for the user themself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler for text inputs.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::PatientName => self.patient_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Specialty => self.specialty = value,
            Field::Doctor => self.doctor = value,
            Field::Time => self.time = value,
            Field::Notes => self.notes = value,
        }
    }

    /// Current text of an input.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::PatientName => &self.patient_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Specialty => &self.specialty,
            Field::Doctor => &self.doctor,
            Field::Time => &self.time,
            Field::Notes => &self.notes,
        }
    }

    /// Handler for the date picker.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// The picked date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Handler for the "book for a relative" checkbox.
    ///
    /// Checking it starts an empty relative; unchecking drops any relative
    /// details entered so far. Setting the current value again changes
    /// nothing.
    pub fn set_book_for_relative(&mut self, checked: bool) {
        match (&self.subject, checked) {
            (BookingSubject::Myself, true) => {
                self.subject = BookingSubject::Relative {
                    name: String::new(),
                    phone: String::new(),
                }
            }
            (BookingSubject::Relative { .. }, false) => self.subject = BookingSubject::Myself,
            _ => {}
        }
    }

    /// Whether the checkbox is checked.
    pub fn books_for_relative(&self) -> bool {
        matches!(self.subject, BookingSubject::Relative { .. })
    }

    /// Handler for the relative's name input. Ignored unless booking for a
    /// relative, since the input is hidden then.
    pub fn set_relative_name(&mut self, value: impl Into<String>) {
        if let BookingSubject::Relative { name, .. } = &mut self.subject {
            *name = value.into();
        }
    }

    /// Handler for the relative's phone input. Ignored unless booking for a
    /// relative.
    pub fn set_relative_phone(&mut self, value: impl Into<String>) {
        if let BookingSubject::Relative { phone, .. } = &mut self.subject {
            *phone = value.into();
        }
    }

    /// Who the booking is for.
    pub fn subject(&self) -> &BookingSubject {
        &self.subject
    }

    /// Checks the form and, if it is complete, returns the trimmed request.
    ///
    /// Errors are reported one at a time in form order.
    pub fn validate(&self, today: NaiveDate) -> Result<BookingRequest, BookingError> {
        let patient_name = required(Field::PatientName, &self.patient_name)?;
        let phone = phone_number(Field::Phone.label(), &self.phone)?;

        let email = optional(&self.email);
        if let Some(email) = &email {
            let valid = email
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
            if !valid {
                return Err(BookingError::InvalidEmail(email.clone()));
            }
        }

        let subject = match &self.subject {
            BookingSubject::Myself => BookingSubject::Myself,
            BookingSubject::Relative { name, phone } => BookingSubject::Relative {
                name: required_named("relative name", name)?,
                phone: phone_number("relative phone", phone)?,
            },
        };

        let specialty = required(Field::Specialty, &self.specialty)?;
        let date = self.date.ok_or(BookingError::MissingField("date"))?;
        if date < today {
            return Err(BookingError::DateInPast { date });
        }

        let raw_time = required(Field::Time, &self.time)?;
        let time = match NaiveTime::parse_from_str(&raw_time, "%H:%M") {
            Ok(parsed) => parsed.format("%H:%M").to_string(),
            Err(_) => return Err(BookingError::InvalidTime(raw_time)),
        };

        let request = BookingRequest {
            patient_name,
            phone,
            email,
            specialty,
            doctor: optional(&self.doctor),
            date,
            time,
            notes: optional(&self.notes),
            subject,
        };
        tracing::debug!(
            specialty = %request.specialty,
            date = %request.date,
            for_relative = matches!(request.subject, BookingSubject::Relative { .. }),
            "booking form validated"
        );
        Ok(request)
    }
}

fn required(field: Field, value: &str) -> Result<String, BookingError> {
    required_named(field.label(), value)
}

fn required_named(label: &'static str, value: &str) -> Result<String, BookingError> {
    optional(value).ok_or(BookingError::MissingField(label))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn phone_number(label: &'static str, value: &str) -> Result<String, BookingError> {
    let phone = required_named(label, value)?;
    let valid = (10..=11).contains(&phone.len())
        && phone.starts_with('0')
        && phone.bytes().all(|b| b.is_ascii_digit());
    if valid {
        Ok(phone)
    } else {
        Err(BookingError::InvalidPhone {
            field: label,
            value: phone,
        })
    }
}

/// A complete, validated booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Name of the person booking.
    pub patient_name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email, if given.
    pub email: Option<String>,
    /// Requested specialty.
    pub specialty: String,
    /// Preferred doctor, if any.
    pub doctor: Option<String>,
    /// Requested date.
    pub date: NaiveDate,
    /// Requested time, `HH:MM`.
    pub time: String,
    /// Symptoms or notes, if any.
    pub notes: Option<String>,
    /// Who the booking is for.
    pub subject: BookingSubject,
}

impl BookingRequest {
    /// The appointment this request creates, waiting for confirmation.
    pub fn into_appointment(self, id: u32) -> Appointment {
        Appointment {
            id,
            specialty: self.specialty,
            doctor: self.doctor,
            date: self.date,
            time: self.time,
            status: AppointmentStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 8, 1)
    }

    fn filled() -> BookingForm {
        let mut form = BookingForm::new();
        form.set_field(Field::PatientName, "  Phạm Thu Hà ");
        form.set_field(Field::Phone, "0912345678");
        form.set_field(Field::Specialty, "Tim mạch");
        form.set_field(Field::Time, "08:30");
        form.set_date(Some(date(2025, 8, 15)));
        form
    }

    #[test]
    fn test_complete_form_for_self() {
        let request = filled().validate(today()).unwrap();
        assert_eq!(request.patient_name, "Phạm Thu Hà");
        assert_eq!(request.subject, BookingSubject::Myself);
        assert_eq!(request.email, None);
        assert_eq!(request.doctor, None);
    }

    #[test]
    fn test_relative_details_required_only_for_relative() {
        let mut form = filled();
        form.set_book_for_relative(true);
        assert_eq!(
            form.validate(today()),
            Err(BookingError::MissingField("relative name"))
        );

        form.set_relative_name("Phạm Minh Khôi");
        assert_eq!(
            form.validate(today()),
            Err(BookingError::MissingField("relative phone"))
        );

        form.set_relative_phone("0987654321");
        let request = form.validate(today()).unwrap();
        assert_eq!(
            request.subject,
            BookingSubject::Relative {
                name: "Phạm Minh Khôi".to_string(),
                phone: "0987654321".to_string(),
            }
        );
    }

    #[test]
    fn test_unchecking_relative_drops_details() {
        let mut form = filled();
        form.set_book_for_relative(true);
        form.set_relative_name("Phạm Minh Khôi");
        form.set_book_for_relative(false);
        assert_eq!(form.subject(), &BookingSubject::Myself);

        form.set_book_for_relative(true);
        assert_eq!(
            form.subject(),
            &BookingSubject::Relative {
                name: String::new(),
                phone: String::new(),
            }
        );
    }

    #[test]
    fn test_rechecking_keeps_relative_details() {
        let mut form = filled();
        form.set_book_for_relative(true);
        form.set_relative_name("Phạm Minh Khôi");
        form.set_book_for_relative(true);
        assert!(matches!(
            form.subject(),
            BookingSubject::Relative { name, .. } if name == "Phạm Minh Khôi"
        ));
    }

    #[test]
    fn test_relative_inputs_ignored_for_self() {
        let mut form = filled();
        form.set_relative_name("ignored");
        assert_eq!(form.subject(), &BookingSubject::Myself);
        assert!(!form.books_for_relative());
    }

    #[test]
    fn test_text_handler_does_not_touch_checkbox() {
        let mut form = filled();
        form.set_field(Field::Notes, "true");
        assert!(!form.books_for_relative());
        assert_eq!(form.field(Field::Notes), "true");
    }

    #[test]
    fn test_phone_rules() {
        for bad in ["912345678", "09123", "0912-345-678", "091234567890"] {
            let mut form = filled();
            form.set_field(Field::Phone, bad);
            assert!(
                matches!(form.validate(today()), Err(BookingError::InvalidPhone { .. })),
                "{bad} should be rejected"
            );
        }
        let mut form = filled();
        form.set_field(Field::Phone, "02838123456");
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn test_email_rules() {
        let mut form = filled();
        form.set_field(Field::Email, "ha@");
        assert_eq!(
            form.validate(today()),
            Err(BookingError::InvalidEmail("ha@".to_string()))
        );
        form.set_field(Field::Email, "ha@example.vn");
        assert_eq!(
            form.validate(today()).unwrap().email.as_deref(),
            Some("ha@example.vn")
        );
    }

    #[test]
    fn test_date_rules() {
        let mut form = filled();
        form.set_date(None);
        assert_eq!(form.validate(today()), Err(BookingError::MissingField("date")));

        form.set_date(Some(date(2025, 7, 31)));
        assert_eq!(
            form.validate(today()),
            Err(BookingError::DateInPast {
                date: date(2025, 7, 31)
            })
        );

        form.set_date(Some(today()));
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn test_time_rules() {
        let mut form = filled();
        form.set_field(Field::Time, "25:00");
        assert_eq!(
            form.validate(today()),
            Err(BookingError::InvalidTime("25:00".to_string()))
        );

        form.set_field(Field::Time, "8:30");
        let request = form.validate(today()).unwrap();
        assert_eq!(request.time, "08:30");
        assert_eq!(request.into_appointment(3).time, "08:30");
    }

    #[test]
    fn test_request_becomes_pending_appointment() {
        let mut form = filled();
        form.set_field(Field::Doctor, "BS. Nguyễn Văn An");
        let appointment = form.validate(today()).unwrap().into_appointment(7);
        assert_eq!(appointment.id, 7);
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.doctor.as_deref(), Some("BS. Nguyễn Văn An"));
        assert_eq!(appointment.date, date(2025, 8, 15));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BookingError::MissingField("phone").to_string(),
            "phone is required"
        );
        assert_eq!(
            BookingError::InvalidTime("7h".to_string()).to_string(),
            "\"7h\" is not a valid time (expected HH:MM)"
        );
    }
}
