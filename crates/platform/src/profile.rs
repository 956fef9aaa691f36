//! User profile abstraction

/// Profile data shown in the dashboard drawer and on the profile screen.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Avatar initials.
    pub initials: String,
    /// Events the user attended.
    pub events_attended: u32,
    /// Events the user organized.
    pub events_created: u32,
    /// Average organizer rating, `0.0..=5.0`.
    pub rating: f32,
}

impl UserProfile {
    /// Rating with one decimal, as printed on the stats row.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Source of the signed-in user's profile.
pub trait ProfileStore {
    /// Profile of the current user.
    fn current_user(&self) -> UserProfile;
}
