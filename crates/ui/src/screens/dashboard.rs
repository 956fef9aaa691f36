//! Dashboard screen state: event cards, search box and the side drawer.

use events::{EventId, EventItem};
use platform::{Services, UserProfile};

use super::{leave_to_welcome, Effect};
use crate::error::NavError;
use crate::field::{set_text, Text};
use crate::route::Route;

/// Entries of the side drawer, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerItem {
    /// "Mi Perfil".
    Profile,
    /// "Mis Eventos".
    MyEvents,
    /// "Eventos Asistidos".
    AttendedEvents,
    /// "Configuración".
    Settings,
    /// "Licencias CC".
    Licenses,
}

impl DrawerItem {
    /// Drawer order.
    pub const ALL: [DrawerItem; 5] = [
        DrawerItem::Profile,
        DrawerItem::MyEvents,
        DrawerItem::AttendedEvents,
        DrawerItem::Settings,
        DrawerItem::Licenses,
    ];

    /// Row label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DrawerItem::Profile => "Mi Perfil",
            DrawerItem::MyEvents => "Mis Eventos",
            DrawerItem::AttendedEvents => "Eventos Asistidos",
            DrawerItem::Settings => "Configuración",
            DrawerItem::Licenses => "Licencias CC",
        }
    }

    /// Row icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            DrawerItem::Profile => "👤",
            DrawerItem::MyEvents => "📋",
            DrawerItem::AttendedEvents => "🎟️",
            DrawerItem::Settings => "⚙️",
            DrawerItem::Licenses => "📄",
        }
    }
}

/// User input on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Search box changed.
    EditSearch(String),
    /// Hamburger icon.
    OpenDrawer,
    /// Tap outside the drawer.
    CloseDrawer,
    /// Tap on a card.
    OpenEvent(EventId),
    /// "Asistir" / "Registrado" button on a card.
    ToggleAttend(EventId),
    /// Floating "+" button.
    CreateEvent,
    /// A drawer row.
    Menu(DrawerItem),
    /// "Cerrar Sesión" at the bottom of the drawer.
    Logout,
}

/// One card: the event and its local attend flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    /// The listed event.
    pub item: EventItem,
    /// Whether "Asistir" was tapped; never persisted.
    pub registered: bool,
}

impl EventCard {
    /// Attend button label.
    #[must_use]
    pub fn attend_label(&self) -> &'static str {
        if self.registered {
            "Registrado"
        } else {
            "Asistir"
        }
    }
}

/// State for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Search box contents.
    pub search: Text<64>,
    /// Whether the side drawer is open.
    pub drawer_open: bool,
    /// All cards in list order.
    pub cards: Vec<EventCard>,
    /// Drawer header user.
    pub user: UserProfile,
}

impl DashboardState {
    /// Fresh dashboard from the event store and profile store.
    pub fn load(services: &Services) -> Self {
        let cards = services
            .events
            .list()
            .into_iter()
            .map(|item| EventCard {
                item,
                registered: false,
            })
            .collect();
        DashboardState {
            search: Text::new(),
            drawer_open: false,
            cards,
            user: services.profiles.current_user(),
        }
    }

    /// Cards matching the search box.
    pub fn visible_cards(&self) -> impl Iterator<Item = &EventCard> {
        self.cards
            .iter()
            .filter(move |card| card.item.matches(&self.search))
    }

    /// Card for `id`, if listed.
    #[must_use]
    pub fn card(&self, id: &EventId) -> Option<&EventCard> {
        self.cards.iter().find(|card| &card.item.id == id)
    }

    /// Apply `action`.
    pub fn handle(
        &mut self,
        action: DashboardAction,
        services: &mut Services,
    ) -> Result<Effect, NavError> {
        match action {
            DashboardAction::EditSearch(v) => set_text(&mut self.search, &v),
            DashboardAction::OpenDrawer => self.drawer_open = true,
            DashboardAction::CloseDrawer => self.drawer_open = false,
            DashboardAction::OpenEvent(id) => return Ok(Effect::Push(Route::EventDetail(id))),
            DashboardAction::ToggleAttend(id) => self.toggle_attend(&id, services)?,
            DashboardAction::CreateEvent => return Ok(Effect::Push(Route::CreateEvent)),
            DashboardAction::Menu(item) => {
                self.drawer_open = false;
                if item == DrawerItem::Profile {
                    return Ok(Effect::Push(Route::Profile));
                }
                tracing::debug!(item = item.label(), "drawer item has no destination");
            }
            DashboardAction::Logout => {
                self.drawer_open = false;
                services.auth.sign_out();
                tracing::info!("signed out");
                return Ok(leave_to_welcome());
            }
        }
        Ok(Effect::Stay)
    }

    fn toggle_attend(&mut self, id: &EventId, services: &mut Services) -> Result<(), NavError> {
        let Some(card) = self.cards.iter_mut().find(|card| &card.item.id == id) else {
            tracing::warn!(%id, "attend toggled for an unlisted event");
            return Ok(());
        };
        let next = !card.registered;
        services.attendance.set_attending(id, next)?;
        card.registered = next;
        Ok(())
    }
}
