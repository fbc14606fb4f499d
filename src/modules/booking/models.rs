use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::modules::catalog::models::Hotel;

use super::sessions::Snapshot;
use super::wizard::{BookingDraft, Field, FieldErrors};

/// Request model for opening a booking session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    /// Catalog id of the hotel being booked
    pub hotel_id: String,
}

/// Request model for writing a single draft field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFieldRequest {
    /// One of the recognized draft fields, camelCase (e.g. `checkIn`)
    pub field: Field,
    /// Raw value as typed; dates as `YYYY-MM-DD`, empty string clears
    pub value: String,
}

/// Per-render view of the wizard handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub current_step: u8,
    pub field_errors: FieldErrors,
    pub draft: BookingDraft,
    pub nights: u32,
    pub price_per_night: u32,
    pub total: u64,
}

impl WizardView {
    pub fn from_snapshot(snapshot: &Snapshot, price_per_night: u32) -> Self {
        Self {
            current_step: snapshot.state.step().number(),
            field_errors: snapshot.state.field_errors().clone(),
            draft: snapshot.state.draft().clone(),
            nights: snapshot.state.nights(),
            price_per_night,
            total: snapshot.state.total(price_per_night),
        }
    }
}

/// Response for a freshly opened session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub view: WizardView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NextOutcome {
    Stayed,
    Advanced,
    Completed,
}

/// Response for a Next action: either the (possibly unchanged) view, or the
/// confirmation when the final step passed.
#[derive(Debug, Clone, Serialize)]
pub struct NextResponse {
    pub outcome: NextOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<WizardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<BookingConfirmation>,
}

/// The completed booking, built from the real draft and the hotel record.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub confirmation_number: String,
    pub hotel_name: String,
    pub location: String,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub nights: u32,
    pub guests: u32,
    pub rooms: u32,
    pub price_per_night: u32,
    pub total: u64,
    pub guest_name: String,
    pub email: String,
}

impl BookingConfirmation {
    pub fn new(hotel: &Hotel, draft: &BookingDraft) -> Self {
        Self {
            confirmation_number: confirmation_number(),
            hotel_name: hotel.name.clone(),
            location: hotel.location.clone(),
            check_in: draft.check_in,
            check_out: draft.check_out,
            nights: draft.nights(),
            guests: draft.guests,
            rooms: draft.rooms,
            price_per_night: hotel.price_per_night,
            total: draft.total(hotel.price_per_night),
            guest_name: format!("{} {}", draft.first_name.trim(), draft.last_name.trim()),
            email: draft.email.clone(),
        }
    }
}

const CONFIRMATION_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `HB` followed by nine random characters drawn from 0-9/A-Z.
fn confirmation_number() -> String {
    let code: String = Uuid::new_v4()
        .into_bytes()
        .iter()
        .take(9)
        .map(|byte| CONFIRMATION_ALPHABET[*byte as usize % CONFIRMATION_ALPHABET.len()] as char)
        .collect();
    format!("HB{code}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::data;
    use crate::modules::booking::wizard::WizardState;

    fn draft_for_stay() -> BookingDraft {
        let mut state = WizardState::new();
        state.update_field(Field::CheckIn, "2024-05-01").unwrap();
        state.update_field(Field::CheckOut, "2024-05-04").unwrap();
        state.update_field(Field::Rooms, "2").unwrap();
        state.update_field(Field::FirstName, "John").unwrap();
        state.update_field(Field::LastName, "Doe").unwrap();
        state
            .update_field(Field::Email, "john.doe@example.com")
            .unwrap();
        state.draft().clone()
    }

    #[test]
    fn confirmation_carries_the_real_draft() {
        let hotel = data::hotel_by_id("1").unwrap();
        let draft = draft_for_stay();

        let confirmation = BookingConfirmation::new(hotel, &draft);
        assert_eq!(confirmation.hotel_name, "Grand Plaza Hotel");
        assert_eq!(confirmation.nights, 3);
        assert_eq!(confirmation.rooms, 2);
        assert_eq!(confirmation.total, 299 * 3 * 2);
        assert_eq!(confirmation.guest_name, "John Doe");
        assert_eq!(confirmation.email, "john.doe@example.com");
    }

    #[test]
    fn confirmation_numbers_are_prefixed_and_distinct() {
        let first = confirmation_number();
        let second = confirmation_number();

        assert!(first.starts_with("HB"));
        assert_eq!(first.len(), 11);
        assert_ne!(first, second);
    }

    #[test]
    fn confirmation_numbers_draw_from_the_full_alphanumeric_alphabet() {
        let codes: Vec<String> = (0..20).map(|_| confirmation_number()).collect();

        for code in &codes {
            assert!(code[2..]
                .bytes()
                .all(|byte| CONFIRMATION_ALPHABET.contains(&byte)));
        }
        // With 180 characters drawn, some letter beyond the hex range is
        // all but certain; hex-only output would mean a narrowed charset.
        assert!(codes
            .iter()
            .any(|code| code[2..].bytes().any(|byte| byte > b'F')));
    }
}
