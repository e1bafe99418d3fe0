use std::fmt;
use uuid::Uuid;

/// A stored student account.
#[derive(Clone, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub enrolled_courses: Vec<Uuid>,
    pub credit_count: Option<f64>,
}

/// Fields required to create an account; the store assigns the id.
#[derive(Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl NewAccount {
    /// Materialize the account once the store has assigned an id.
    #[must_use]
    pub fn into_account(self, id: Uuid) -> Account {
        Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            enrolled_courses: Vec::new(),
            credit_count: None,
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"***")
            .field("is_admin", &self.is_admin)
            .field("enrolled_courses", &self.enrolled_courses)
            .field("credit_count", &self.credit_count)
            .finish()
    }
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("password_hash", &"***")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}
