use linkfeed_common::model::{
    Id,
    user::{User, UserMarker},
};
use std::fmt::{Debug, Formatter};

/// A user as the store keeps it, password included.
#[derive(Clone, Eq, PartialEq, Hash)]
pub(crate) struct UserRecord {
    pub id: Id<UserMarker>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub avatar: String,
}

impl UserRecord {
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl From<&UserRecord> for User {
    fn from(value: &UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            email: value.email.clone(),
            bio: value.bio.clone(),
            avatar: value.avatar.clone(),
        }
    }
}

impl Debug for UserRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish_non_exhaustive()
    }
}
