use serde::Serialize;

/// A registered account row.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub uid: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub role: String,
    pub created_at: String,
}

impl User {
    pub fn display_name(&self) -> String {
        if self.first_name.is_empty() {
            self.email.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string()
        }
    }
}
