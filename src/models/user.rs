use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Operator,
    Customer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String, // plain text demo fixture, a real deployment would hash
}

impl User {
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}
