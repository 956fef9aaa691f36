//! Profile screen state: user card, stats row and menu.

use platform::{Services, UserProfile};

use super::{leave_to_welcome, Effect};

/// Path of the settings destination the top-bar icon opens. No screen is
/// registered under it yet.
pub const SETTINGS_PATH: &str = "settings";

/// Rows of the profile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuItem {
    /// "Mis Eventos".
    MyEvents,
    /// "Eventos Asistidos".
    AttendedEvents,
    /// "Estadísticas".
    Statistics,
    /// "Configuración".
    Settings,
    /// "Licencias CC".
    Licenses,
}

impl ProfileMenuItem {
    /// Menu order.
    pub const ALL: [ProfileMenuItem; 5] = [
        ProfileMenuItem::MyEvents,
        ProfileMenuItem::AttendedEvents,
        ProfileMenuItem::Statistics,
        ProfileMenuItem::Settings,
        ProfileMenuItem::Licenses,
    ];

    /// Row label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProfileMenuItem::MyEvents => "Mis Eventos",
            ProfileMenuItem::AttendedEvents => "Eventos Asistidos",
            ProfileMenuItem::Statistics => "Estadísticas",
            ProfileMenuItem::Settings => "Configuración",
            ProfileMenuItem::Licenses => "Licencias CC",
        }
    }
}

/// User input on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    /// Top-bar back arrow.
    Back,
    /// Top-bar gear icon.
    OpenSettings,
    /// A menu row.
    Menu(ProfileMenuItem),
    /// "Cerrar Sesión".
    Logout,
}

/// State for the profile screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    /// The signed-in user.
    pub user: UserProfile,
}

impl ProfileState {
    /// Fetch the current user.
    pub fn load(services: &Services) -> Self {
        ProfileState {
            user: services.profiles.current_user(),
        }
    }

    /// Apply `action`.
    pub fn handle(&self, action: ProfileAction, services: &mut Services) -> Effect {
        match action {
            ProfileAction::Back => Effect::Back,
            ProfileAction::OpenSettings => Effect::Open(SETTINGS_PATH),
            ProfileAction::Menu(item) => {
                tracing::debug!(item = item.label(), "profile menu item has no destination");
                Effect::Stay
            }
            ProfileAction::Logout => {
                services.auth.sign_out();
                tracing::info!("signed out");
                leave_to_welcome()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixed_user() {
        let s = ProfileState::load(&Services::stub());
        assert_eq!(s.user.name, "Juan Pérez");
        assert_eq!(s.user.rating_label(), "4.8");
    }

    #[test]
    fn test_settings_opens_unregistered_path() {
        let mut services = Services::stub();
        let s = ProfileState::load(&services);
        assert_eq!(
            s.handle(ProfileAction::OpenSettings, &mut services),
            Effect::Open("settings")
        );
    }

    #[test]
    fn test_menu_rows_stay() {
        let mut services = Services::stub();
        let s = ProfileState::load(&services);
        for item in ProfileMenuItem::ALL {
            assert_eq!(s.handle(ProfileAction::Menu(item), &mut services), Effect::Stay);
        }
    }

    #[test]
    fn test_logout_leaves_to_welcome() {
        let mut services = Services::stub();
        let s = ProfileState::load(&services);
        assert_eq!(s.handle(ProfileAction::Logout, &mut services), leave_to_welcome());
    }
}
