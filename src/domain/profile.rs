use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Religion {
    Islam,
    Hinduism,
    Christianity,
    Buddhism,
    Other,
}

/// Citizen profile record. One per citizen; the same shape travels on the
/// wire for create/update submissions and is cached locally under the
/// `profile` storage key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CitizenProfile {
    pub name: String,
    pub fathers_name: String,
    pub mothers_name: String,
    pub date_of_birth: NaiveDate,
    pub nid_number: String,
    pub gender: Gender,
    pub religion: Religion,
    pub current_address: String,
    pub permanent_address: String,
    pub profession: String,
}
