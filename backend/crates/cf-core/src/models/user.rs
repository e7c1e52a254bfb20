//! Account identity as persisted in the credential store.

/// A registered account.
///
/// Not `Serialize`: the password hash stays behind the service layer and
/// responses are built from the profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    /// PHC-formatted password hash
    pub hashed_password: String,
}

/// Insert payload for a user; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
}

impl NewUser {
    pub fn new(name: String, username: String, email: String, hashed_password: String) -> Self {
        Self {
            name,
            username,
            email,
            hashed_password,
        }
    }
}
