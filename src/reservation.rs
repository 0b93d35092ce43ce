use crate::error::{AppError, FieldErrors, Result};
use crate::models::{
    Occasion, Reservation, ReservationConfirmation, ReservationForm, ReservationOptions,
    SelectOption,
};
use chrono::{Local, NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{info, warn};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const SPECIAL_REQUESTS_MAX_CHARS: usize = 500;
pub const MAX_GUESTS: u8 = 10;

pub const SUCCESS_MESSAGE: &str = "Your reservation has been submitted successfully!";

pub const TIME_SLOTS: [&str; 16] = [
    "11:00", "11:30", "12:00", "12:30", "13:00", "13:30", "14:00", "18:00", "18:30", "19:00",
    "19:30", "20:00", "20:30", "21:00", "21:30", "22:00",
];

const OCCASIONS: [(Occasion, &str, &str); 8] = [
    (Occasion::Anniversary, "anniversary", "Anniversary"),
    (Occasion::Birthday, "birthday", "Birthday"),
    (Occasion::Business, "business", "Business Dinner"),
    (Occasion::Date, "date", "Date Night"),
    (Occasion::Family, "family", "Family Gathering"),
    (Occasion::Friends, "friends", "Friends Gathering"),
    (Occasion::Celebration, "celebration", "Special Celebration"),
    (Occasion::Other, "other", "Other"),
];

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
            .expect("email pattern compiles")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern compiles"))
}

pub fn parse_occasion(value: &str) -> Option<Occasion> {
    OCCASIONS
        .iter()
        .find(|(_, key, _)| *key == value)
        .map(|(occasion, _, _)| *occasion)
}

pub fn options(today: NaiveDate) -> ReservationOptions {
    let occasions = OCCASIONS
        .iter()
        .map(|(_, value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect();

    let guests = (1..=MAX_GUESTS)
        .map(|n| SelectOption {
            value: n.to_string(),
            label: match n {
                1 => "1 person".to_string(),
                MAX_GUESTS => format!("{}+ people", n),
                _ => format!("{} people", n),
            },
        })
        .collect();

    ReservationOptions {
        time_slots: TIME_SLOTS.iter().map(|slot| slot.to_string()).collect(),
        occasions,
        guests,
        defaults: ReservationForm::default(),
        min_date: today,
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Checks every field and reports all problems at once. `today` is the
/// earliest bookable date.
pub fn validate(form: &ReservationForm, today: NaiveDate) -> Result<Reservation> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    let name_len = name.chars().count();
    if name.is_empty() {
        errors.add("name", "Name is required");
    } else if name_len < NAME_MIN_CHARS {
        errors.add("name", "Name must be at least 2 characters");
    } else if name_len > NAME_MAX_CHARS {
        errors.add("name", "Name cannot exceed 50 characters");
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !email_pattern().is_match(email) {
        errors.add("email", "Invalid email address");
    }

    let phone = optional(&form.phone);
    if let Some(phone) = &phone {
        if !phone_pattern().is_match(phone) {
            errors.add("phone", "Invalid phone number");
        }
    }

    let date = match form.date.trim() {
        "" => {
            errors.add("date", "Date is required");
            None
        }
        raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) if date < today => {
                errors.add("date", "Date cannot be in the past");
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                errors.add("date", "Invalid date");
                None
            }
        },
    };

    let time = match form.time.trim() {
        "" => {
            errors.add("time", "Time is required");
            None
        }
        raw if TIME_SLOTS.contains(&raw) => NaiveTime::parse_from_str(raw, "%H:%M").ok(),
        _ => {
            errors.add("time", "Please select an available time");
            None
        }
    };

    let guests = match form.guests.trim() {
        "" => {
            errors.add("guests", "Number of people is required");
            None
        }
        raw => match raw.parse::<u8>() {
            Ok(n) if (1..=MAX_GUESTS).contains(&n) => Some(n),
            _ => {
                errors.add("guests", "Invalid number of people");
                None
            }
        },
    };

    let occasion = match optional(&form.occasion) {
        None => None,
        Some(raw) => {
            let parsed = parse_occasion(&raw);
            if parsed.is_none() {
                errors.add("occasion", "Invalid occasion");
            }
            parsed
        }
    };

    let special_requests = optional(&form.special_requests);
    if form.special_requests.chars().count() > SPECIAL_REQUESTS_MAX_CHARS {
        errors.add("specialRequests", "Special requests cannot exceed 500 characters");
    }

    match (date, time, guests) {
        (Some(date), Some(time), Some(guests)) if errors.is_empty() => Ok(Reservation {
            name: name.to_string(),
            email: email.to_string(),
            phone,
            date,
            time,
            guests,
            occasion,
            special_requests,
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

/// Takes reservation submissions one at a time.
#[derive(Debug, Default)]
pub struct ReservationDesk {
    submitting: AtomicBool,
}

struct SubmittingGuard<'a>(&'a AtomicBool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ReservationDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<SubmittingGuard<'_>> {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::SubmissionInProgress)?;
        Ok(SubmittingGuard(&self.submitting))
    }

    /// Validates, then holds the desk for `delay` before confirming. Nothing is
    /// sent anywhere.
    pub async fn submit(
        &self,
        form: ReservationForm,
        today: NaiveDate,
        delay: Duration,
    ) -> Result<ReservationConfirmation> {
        let reservation = validate(&form, today).map_err(|err| {
            if let AppError::Validation(fields) = &err {
                warn!(invalid_fields = fields.len(), "reservation rejected");
            }
            err
        })?;

        let _guard = self.begin()?;

        tokio::time::sleep(delay).await;

        info!(
            name = %reservation.name,
            date = %reservation.date,
            time = %reservation.time.format("%H:%M"),
            guests = reservation.guests,
            "reservation submitted"
        );

        Ok(ReservationConfirmation {
            reservation,
            message: SUCCESS_MESSAGE.to_string(),
            submitted_at: Local::now(),
        })
    }
}
