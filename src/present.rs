//! Shapes handed to the rendering collaborators.
//!
//! The HTML roster view renders a [`RosterPage`]; the wallet-card JSON
//! template is filled from [`CardFields`]. Neither the templates nor card
//! issuance live in this crate.

use chrono::NaiveDate;
use serde::Serialize;

use crate::member::MemberRecord;

pub const CARD_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPage {
    pub members: Vec<MemberRecord>,
}

impl RosterPage {
    pub fn new(members: Vec<MemberRecord>) -> Self {
        RosterPage { members }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The values a wallet-card template is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFields {
    pub first_name: String,
    pub last_name: String,
    pub expiration_date: String,
}

impl CardFields {
    /// Raw values as they arrive from a card request; passed through unchanged.
    pub fn new(first_name: &str, last_name: &str, expiration_date: &str) -> Self {
        CardFields {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            expiration_date: expiration_date.to_string(),
        }
    }

    pub fn expiring(first_name: &str, last_name: &str, expiration_date: NaiveDate) -> Self {
        CardFields::new(
            first_name,
            last_name,
            &expiration_date.format(CARD_DATE_FORMAT).to_string(),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&MemberRecord> for CardFields {
    fn from(m: &MemberRecord) -> Self {
        CardFields::expiring(&m.first_name, &m.last_name, m.expiration_date)
    }
}
