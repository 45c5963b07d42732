use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::profile::{CitizenProfile, Gender, Religion};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for creating or updating the citizen profile. Every field is
/// required before any service application is possible.
pub struct ProfileForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub fathers_name: String,
    #[validate(length(min = 1))]
    pub mothers_name: String,
    pub date_of_birth: NaiveDate,
    #[validate(length(min = 1))]
    pub nid_number: String,
    pub gender: Gender,
    pub religion: Religion,
    #[validate(length(min = 1))]
    pub current_address: String,
    #[validate(length(min = 1))]
    pub permanent_address: String,
    #[validate(length(min = 1))]
    pub profession: String,
}

impl From<&ProfileForm> for CitizenProfile {
    /// Convert the [`ProfileForm`] into the wire/cache profile record.
    fn from(form: &ProfileForm) -> Self {
        CitizenProfile {
            name: form.name.clone(),
            fathers_name: form.fathers_name.clone(),
            mothers_name: form.mothers_name.clone(),
            date_of_birth: form.date_of_birth,
            nid_number: form.nid_number.clone(),
            gender: form.gender,
            religion: form.religion,
            current_address: form.current_address.clone(),
            permanent_address: form.permanent_address.clone(),
            profession: form.profession.clone(),
        }
    }
}
