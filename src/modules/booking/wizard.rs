//! Three-step booking wizard state machine.
//!
//! The wizard owns a [`BookingDraft`] assembled across three steps: dates and
//! occupancy, guest details, payment details. Advancing runs the current
//! step's validator; on any violation the step holds and the full violation
//! set replaces the field errors. Editing a field optimistically clears its
//! stale error without re-validating. Values validated on an earlier step are
//! never re-checked retroactively.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Wizard step, rendered to the UI as 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Dates,
    GuestDetails,
    Payment,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Dates => 1,
            Step::GuestDetails => 2,
            Step::Payment => 3,
        }
    }

    fn forward(self) -> Option<Step> {
        match self {
            Step::Dates => Some(Step::GuestDetails),
            Step::GuestDetails => Some(Step::Payment),
            Step::Payment => None,
        }
    }

    fn back(self) -> Step {
        match self {
            Step::Dates | Step::GuestDetails => Step::Dates,
            Step::Payment => Step::GuestDetails,
        }
    }
}

/// A recognized draft field. Unrecognized names are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CheckIn,
    CheckOut,
    Guests,
    Rooms,
    FirstName,
    LastName,
    Email,
    Phone,
    SpecialRequests,
    CardNumber,
    ExpiryDate,
    Cvv,
    CardholderName,
}

/// Field-name-to-message map; present only for currently invalid fields.
pub type FieldErrors = BTreeMap<Field, String>;

/// A raw field value the draft could not absorb. The draft is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftValueError {
    #[error("'{0}' is not a calendar date (expected YYYY-MM-DD)")]
    Date(String),
    #[error("'{0}' is not a count of at least 1")]
    Count(String),
}

/// The mutable booking record assembled across the wizard's steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub guests: u32,
    pub rooms: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
}

impl BookingDraft {
    /// Number of nights between the selected dates.
    ///
    /// Falls back to 1 for price preview when either date is unset; the
    /// step-1 gate still requires both dates before advancing.
    pub fn nights(&self) -> u32 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                (check_out.to_julian_day() - check_in.to_julian_day()).unsigned_abs()
            }
            _ => 1,
        }
    }

    /// Total price for the stay: nightly rate times nights times rooms.
    pub fn total(&self, price_per_night: u32) -> u64 {
        u64::from(price_per_night) * u64::from(self.nights()) * u64::from(self.rooms)
    }
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: 2,
            rooms: 1,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            special_requests: String::new(),
            card_number: String::new(),
            expiry_date: String::new(),
            cvv: String::new(),
            cardholder_name: String::new(),
        }
    }
}

/// Outcome of a `go_next` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Validation failed; the step did not change and field errors were set.
    Stayed,
    /// The step advanced.
    Advanced(Step),
    /// The final step validated; the booking is complete.
    Completed,
}

/// Per-session wizard state: current step, draft, and field errors.
#[derive(Debug, Clone)]
pub struct WizardState {
    step: Step,
    draft: BookingDraft,
    field_errors: FieldErrors,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::Dates,
            draft: BookingDraft::default(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Write a raw value into the draft and clear the field's stale error.
    ///
    /// Dates accept `YYYY-MM-DD` or the empty string (which clears them);
    /// counts accept integers of at least 1. The new value is not validated
    /// beyond parsing; correctness is only checked at the next step gate.
    pub fn update_field(&mut self, field: Field, value: &str) -> Result<(), DraftValueError> {
        match field {
            Field::CheckIn => self.draft.check_in = parse_date(value)?,
            Field::CheckOut => self.draft.check_out = parse_date(value)?,
            Field::Guests => self.draft.guests = parse_count(value)?,
            Field::Rooms => self.draft.rooms = parse_count(value)?,
            Field::FirstName => self.draft.first_name = value.to_string(),
            Field::LastName => self.draft.last_name = value.to_string(),
            Field::Email => self.draft.email = value.to_string(),
            Field::Phone => self.draft.phone = value.to_string(),
            Field::SpecialRequests => self.draft.special_requests = value.to_string(),
            Field::CardNumber => self.draft.card_number = value.to_string(),
            Field::ExpiryDate => self.draft.expiry_date = value.to_string(),
            Field::Cvv => self.draft.cvv = value.to_string(),
            Field::CardholderName => self.draft.cardholder_name = value.to_string(),
        }

        self.field_errors.remove(&field);
        Ok(())
    }

    /// Run the current step's validator and advance if it passes.
    pub fn go_next(&mut self) -> Progress {
        let errors = match self.step {
            Step::Dates => validate_dates(&self.draft),
            Step::GuestDetails => validate_guest_details(&self.draft),
            Step::Payment => validate_payment(&self.draft),
        };

        if !errors.is_empty() {
            self.field_errors = errors;
            return Progress::Stayed;
        }

        self.field_errors.clear();
        match self.step.forward() {
            Some(next) => {
                self.step = next;
                Progress::Advanced(next)
            }
            None => Progress::Completed,
        }
    }

    /// Step backward; a no-op at the first step. Never validates.
    pub fn go_back(&mut self) {
        self.step = self.step.back();
    }

    /// Number of nights between the selected dates, see [`BookingDraft::nights`].
    pub fn nights(&self) -> u32 {
        self.draft.nights()
    }

    /// Total price for the stay, see [`BookingDraft::total`].
    pub fn total(&self, price_per_night: u32) -> u64 {
        self.draft.total(price_per_night)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(value: &str) -> Result<Option<Date>, DraftValueError> {
    if value.is_empty() {
        return Ok(None);
    }
    Date::parse(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DraftValueError::Date(value.to_string()))
}

fn parse_count(value: &str) -> Result<u32, DraftValueError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(DraftValueError::Count(value.to_string())),
    }
}

/// Step 1: both dates present and check-out strictly after check-in.
fn validate_dates(draft: &BookingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.check_in.is_none() {
        errors.insert(Field::CheckIn, "Check-in date is required".to_string());
    }
    if draft.check_out.is_none() {
        errors.insert(Field::CheckOut, "Check-out date is required".to_string());
    }
    if let (Some(check_in), Some(check_out)) = (draft.check_in, draft.check_out) {
        if check_in >= check_out {
            errors.insert(
                Field::CheckOut,
                "Check-out must be after check-in date".to_string(),
            );
        }
    }

    errors
}

/// Step 2: identity fields non-blank, email shaped like `local@domain.tld`.
fn validate_guest_details(draft: &BookingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "First name is required".to_string());
    }
    if draft.last_name.trim().is_empty() {
        errors.insert(Field::LastName, "Last name is required".to_string());
    }
    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    }
    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required".to_string());
    }

    // The pattern message wins over the required message for non-empty input.
    if !draft.email.is_empty() && !is_email_shaped(&draft.email) {
        errors.insert(
            Field::Email,
            "Please enter a valid email address".to_string(),
        );
    }

    errors
}

/// Step 3: all four payment fields non-blank. No format or validity checks.
fn validate_payment(draft: &BookingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.card_number.trim().is_empty() {
        errors.insert(Field::CardNumber, "Card number is required".to_string());
    }
    if draft.expiry_date.trim().is_empty() {
        errors.insert(Field::ExpiryDate, "Expiry date is required".to_string());
    }
    if draft.cvv.trim().is_empty() {
        errors.insert(Field::Cvv, "CVV is required".to_string());
    }
    if draft.cardholder_name.trim().is_empty() {
        errors.insert(
            Field::CardholderName,
            "Cardholder name is required".to_string(),
        );
    }

    errors
}

/// `local@domain.tld` shape: non-empty runs of non-space, non-`@` characters
/// around a single `@`, with a dot-separated TLD segment in the domain.
fn is_email_shaped(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_step1(state: &mut WizardState) {
        state.update_field(Field::CheckIn, "2024-03-01").unwrap();
        state.update_field(Field::CheckOut, "2024-03-04").unwrap();
    }

    fn filled_step2(state: &mut WizardState) {
        state.update_field(Field::FirstName, "John").unwrap();
        state.update_field(Field::LastName, "Doe").unwrap();
        state
            .update_field(Field::Email, "john.doe@example.com")
            .unwrap();
        state.update_field(Field::Phone, "+1 555 0100").unwrap();
    }

    fn filled_step3(state: &mut WizardState) {
        state
            .update_field(Field::CardNumber, "4242 4242 4242 4242")
            .unwrap();
        state.update_field(Field::ExpiryDate, "12/27").unwrap();
        state.update_field(Field::Cvv, "123").unwrap();
        state.update_field(Field::CardholderName, "John Doe").unwrap();
    }

    #[test]
    fn empty_dates_block_step_one() {
        let mut state = WizardState::new();

        assert_eq!(state.go_next(), Progress::Stayed);
        assert_eq!(state.step(), Step::Dates);
        assert_eq!(state.field_errors().len(), 2);
        assert!(state.field_errors().contains_key(&Field::CheckIn));
        assert!(state.field_errors().contains_key(&Field::CheckOut));
    }

    #[test]
    fn checkout_on_or_before_checkin_is_rejected() {
        let mut state = WizardState::new();
        state.update_field(Field::CheckIn, "2024-03-04").unwrap();
        state.update_field(Field::CheckOut, "2024-03-04").unwrap();

        assert_eq!(state.go_next(), Progress::Stayed);
        assert_eq!(state.field_errors().len(), 1);
        assert_eq!(
            state.field_errors().get(&Field::CheckOut).unwrap(),
            "Check-out must be after check-in date"
        );

        state.update_field(Field::CheckOut, "2024-03-01").unwrap();
        assert_eq!(state.go_next(), Progress::Stayed);
        assert!(state.field_errors().contains_key(&Field::CheckOut));
    }

    #[test]
    fn valid_dates_advance_to_guest_details() {
        let mut state = WizardState::new();
        filled_step1(&mut state);

        assert_eq!(state.go_next(), Progress::Advanced(Step::GuestDetails));
        assert_eq!(state.step(), Step::GuestDetails);
        assert!(state.field_errors().is_empty());
    }

    #[test]
    fn guest_step_reports_all_violations_in_one_pass() {
        let mut state = WizardState::new();
        filled_step1(&mut state);
        state.go_next();

        assert_eq!(state.go_next(), Progress::Stayed);
        assert_eq!(state.field_errors().len(), 4);
        assert!(state.field_errors().contains_key(&Field::FirstName));
        assert!(state.field_errors().contains_key(&Field::LastName));
        assert!(state.field_errors().contains_key(&Field::Email));
        assert!(state.field_errors().contains_key(&Field::Phone));
    }

    #[test]
    fn whitespace_only_names_are_rejected() {
        let mut state = WizardState::new();
        filled_step1(&mut state);
        state.go_next();
        filled_step2(&mut state);
        state.update_field(Field::FirstName, "   ").unwrap();

        assert_eq!(state.go_next(), Progress::Stayed);
        assert_eq!(state.field_errors().len(), 1);
        assert!(state.field_errors().contains_key(&Field::FirstName));
    }

    #[test]
    fn email_shape_is_enforced() {
        assert!(is_email_shaped("john.doe@example.com"));
        assert!(is_email_shaped("a@b.c"));
        assert!(!is_email_shaped("not-an-email"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("a@b@c.d"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("a@.com"));
        assert!(!is_email_shaped("a@b."));
        assert!(!is_email_shaped("a b@example.com"));
    }

    #[test]
    fn invalid_email_blocks_guest_step() {
        let mut state = WizardState::new();
        filled_step1(&mut state);
        state.go_next();
        filled_step2(&mut state);
        state.update_field(Field::Email, "a@b").unwrap();

        assert_eq!(state.go_next(), Progress::Stayed);
        assert_eq!(
            state.field_errors().get(&Field::Email).unwrap(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn back_then_forward_preserves_draft() {
        let mut state = WizardState::new();
        filled_step1(&mut state);
        state.go_next();

        let draft_before = state.draft().clone();
        state.go_back();
        assert_eq!(state.step(), Step::Dates);

        assert_eq!(state.go_next(), Progress::Advanced(Step::GuestDetails));
        assert_eq!(state.draft(), &draft_before);
    }

    #[test]
    fn back_is_a_no_op_at_the_first_step() {
        let mut state = WizardState::new();
        state.go_back();
        assert_eq!(state.step(), Step::Dates);
    }

    #[test]
    fn editing_a_field_clears_its_error_without_revalidating() {
        let mut state = WizardState::new();
        filled_step1(&mut state);
        state.go_next();
        state.go_next();
        assert!(state.field_errors().contains_key(&Field::Email));

        // Still invalid, but the stale marker goes away until the next gate.
        state.update_field(Field::Email, "still-not-an-email").unwrap();
        assert!(!state.field_errors().contains_key(&Field::Email));
        assert!(state.field_errors().contains_key(&Field::FirstName));
    }

    #[test]
    fn nights_and_total_derive_from_draft() {
        let mut state = WizardState::new();
        state.update_field(Field::CheckIn, "2024-05-01").unwrap();
        state.update_field(Field::CheckOut, "2024-05-04").unwrap();
        state.update_field(Field::Rooms, "2").unwrap();

        assert_eq!(state.nights(), 3);
        assert_eq!(state.total(200), 1200);
    }

    #[test]
    fn missing_dates_fall_back_to_one_night_for_preview() {
        let state = WizardState::new();
        assert_eq!(state.nights(), 1);
        assert_eq!(state.total(299), 299);
    }

    #[test]
    fn unparseable_values_leave_the_draft_untouched() {
        let mut state = WizardState::new();

        let err = state.update_field(Field::CheckIn, "tomorrow").unwrap_err();
        assert!(matches!(err, DraftValueError::Date(_)));
        assert!(state.draft().check_in.is_none());

        let err = state.update_field(Field::Rooms, "0").unwrap_err();
        assert!(matches!(err, DraftValueError::Count(_)));
        assert_eq!(state.draft().rooms, 1);
    }

    #[test]
    fn full_run_completes_at_payment_step() {
        let mut state = WizardState::new();
        filled_step1(&mut state);
        assert_eq!(state.go_next(), Progress::Advanced(Step::GuestDetails));
        filled_step2(&mut state);
        assert_eq!(state.go_next(), Progress::Advanced(Step::Payment));
        filled_step3(&mut state);
        assert_eq!(state.go_next(), Progress::Completed);
    }

    #[test]
    fn payment_step_requires_all_four_fields() {
        let mut state = WizardState::new();
        filled_step1(&mut state);
        state.go_next();
        filled_step2(&mut state);
        state.go_next();

        assert_eq!(state.go_next(), Progress::Stayed);
        assert_eq!(state.step(), Step::Payment);
        assert_eq!(state.field_errors().len(), 4);
    }

    #[test]
    fn default_occupancy_is_two_guests_one_room() {
        let draft = BookingDraft::default();
        assert_eq!(draft.guests, 2);
        assert_eq!(draft.rooms, 1);
    }
}
