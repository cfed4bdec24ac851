use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl LeadRequest {
    /// Returns `None` unless first name, last name and email are all present.
    pub fn into_lead(self) -> Option<Lead> {
        Some(Lead {
            first_name: present(&self.first_name)?,
            last_name: present(&self.last_name)?,
            email: present(&self.email)?,
            phone: present(&self.phone),
            message: present(&self.message),
            created_at: Utc::now(),
        })
    }
}
