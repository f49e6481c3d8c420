use std::fmt;

/// An employee as held by the roster store.
///
/// `display_name` is the case-insensitive login key. `office` and `groups`
/// are opaque metadata copied onto status records.
#[derive(Clone, PartialEq)]
pub struct Employee {
    pub display_name: String,
    pub full_name: String,
    pub password: String,
    pub office: String,
    pub groups: Vec<String>,
}

impl Employee {
    pub fn new(
        display_name: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
        office: impl Into<String>,
        groups: Vec<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            full_name: full_name.into(),
            password: password.into(),
            office: office.into(),
            groups,
        }
    }

    /// Case-insensitive comparison against the login key.
    pub fn matches(&self, display_name: &str) -> bool {
        self.display_name.to_lowercase() == display_name.to_lowercase()
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("display_name", &self.display_name)
            .field("full_name", &self.full_name)
            .field("password", &"<redacted>")
            .field("office", &self.office)
            .field("groups", &self.groups)
            .finish()
    }
}
