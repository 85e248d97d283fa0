//! User profile models

use serde::{Deserialize, Serialize};

use crate::session::validation::{is_valid_email, ValidationError};

/// Profile shown on the profile screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub notifications_enabled: bool,
    pub location_enabled: bool,
}

impl Profile {
    /// Initial profile for a freshly signed-in user.
    ///
    /// Without a full name, the local part of the email is used.
    pub fn for_user(email: &str, full_name: Option<&str>) -> Self {
        let name = match full_name {
            Some(name) => name.to_string(),
            None => email.split('@').next().unwrap_or(email).to_string(),
        };

        Self {
            name,
            email: email.to_string(),
            phone: String::new(),
            location: String::new(),
            notifications_enabled: true,
            location_enabled: true,
        }
    }
}

/// Partial profile edit; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub notifications_enabled: Option<bool>,
    pub location_enabled: Option<bool>,
}

impl ProfileUpdate {
    /// Apply the edit, producing a new profile
    pub fn apply(self, current: &Profile) -> Result<Profile, ValidationError> {
        let mut next = current.clone();

        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::BlankName);
            }
            next.name = name.to_string();
        }
        if let Some(email) = self.email {
            let email = email.trim();
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail);
            }
            next.email = email.to_string();
        }
        if let Some(phone) = self.phone {
            next.phone = phone.trim().to_string();
        }
        if let Some(location) = self.location {
            next.location = location.trim().to_string();
        }
        if let Some(enabled) = self.notifications_enabled {
            next.notifications_enabled = enabled;
        }
        if let Some(enabled) = self.location_enabled {
            next.location_enabled = enabled;
        }

        Ok(next)
    }
}
