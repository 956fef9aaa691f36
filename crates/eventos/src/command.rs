//! Text commands understood by the driver.
//!
//! Most words mean different actions on different screens (`submit`,
//! `type`, `logout`, ...), so parsing takes the visible screen into account.

use events::EventId;
use ui::screens::{
    CreateEventAction, CreateEventField, DashboardAction, DrawerItem, EventDetailAction,
    LoginAction, ProfileAction, ProfileMenuItem, RegisterAction, RegisterField, WelcomeAction,
};
use ui::{Action, RouteKind};

/// One parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send an action to the visible screen.
    Dispatch(Action),
    /// System back.
    Back,
    /// Push a route by path.
    Go(String),
    /// Print the command list.
    Help,
    /// Stop reading.
    Quit,
}

/// A line that could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// First word is not a command.
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    /// The command exists but the visible screen has no such control.
    #[error("`{command}` is not available on {screen}")]
    NotAvailable {
        /// The command word.
        command: String,
        /// The visible screen.
        screen: RouteKind,
    },
    /// A required argument is missing.
    #[error("`{command}` needs <{argument}>")]
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// Malformed event id.
    #[error("`{0}` is not an event id")]
    BadEventId(String),
    /// `type` named a field the screen does not have.
    #[error("{screen} has no field `{field}`")]
    UnknownField {
        /// Field name as typed.
        field: String,
        /// The visible screen.
        screen: RouteKind,
    },
    /// `type` named a field that cannot be edited.
    #[error("field `{0}` is read-only")]
    ReadOnlyField(String),
    /// `menu` named an entry the screen does not list.
    #[error("no menu item `{0}`")]
    UnknownMenuItem(String),
    /// `drawer` took something other than open/close.
    #[error("`drawer` takes `open` or `close`, got `{0}`")]
    BadDrawerState(String),
}

/// Usage text for `help`.
pub const HELP: &str = "\
commands:
  login | register | guest            welcome buttons (login/register also switch forms)
  type <field> <text>                 edit a form field
  toggle-password | submit | google   form controls
  search <text> | open <id> | attend [id]
  drawer open|close | menu <item> | create | profile | logout
  share | settings
  back | go <path> | help | quit";

/// Parse `line` against the visible `screen`. Blank lines and `#` comments
/// yield `None`.
pub fn parse(line: &str, screen: RouteKind) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let not_here = || CommandError::NotAvailable {
        command: word.to_owned(),
        screen,
    };

    let action = match (word, screen) {
        ("quit" | "exit", _) => return Ok(Some(Command::Quit)),
        ("help", _) => return Ok(Some(Command::Help)),
        ("back", _) => return Ok(Some(Command::Back)),
        ("go", _) => {
            let path = required(rest, "go", "path")?;
            return Ok(Some(Command::Go(path.to_owned())));
        }

        ("login", RouteKind::Welcome) => Action::Welcome(WelcomeAction::Login),
        ("login", RouteKind::Register) => Action::Register(RegisterAction::GoToLogin),
        ("register", RouteKind::Welcome) => Action::Welcome(WelcomeAction::Register),
        ("register", RouteKind::Login) => Action::Login(LoginAction::GoToRegister),
        ("guest", RouteKind::Welcome) => Action::Welcome(WelcomeAction::ContinueWithoutAccount),

        ("type", _) => type_into(rest, screen)?,
        ("toggle-password", RouteKind::Login) => {
            Action::Login(LoginAction::TogglePasswordVisibility)
        }
        ("toggle-password", RouteKind::Register) => {
            Action::Register(RegisterAction::TogglePasswordVisibility)
        }
        ("submit", RouteKind::Login) => Action::Login(LoginAction::Submit),
        ("submit", RouteKind::Register) => Action::Register(RegisterAction::Submit),
        ("submit", RouteKind::CreateEvent) => Action::CreateEvent(CreateEventAction::Submit),
        ("google", RouteKind::Login) => Action::Login(LoginAction::ContinueWithGoogle),

        ("search", RouteKind::Dashboard) => {
            Action::Dashboard(DashboardAction::EditSearch(rest.to_owned()))
        }
        ("open", RouteKind::Dashboard) => {
            Action::Dashboard(DashboardAction::OpenEvent(event_id(required(rest, "open", "id")?)?))
        }
        ("attend", RouteKind::Dashboard) => Action::Dashboard(DashboardAction::ToggleAttend(
            event_id(required(rest, "attend", "id")?)?,
        )),
        ("attend", RouteKind::EventDetail) => {
            Action::EventDetail(EventDetailAction::ToggleRegistration)
        }
        ("drawer", RouteKind::Dashboard) => match rest {
            "open" => Action::Dashboard(DashboardAction::OpenDrawer),
            "close" => Action::Dashboard(DashboardAction::CloseDrawer),
            other => return Err(CommandError::BadDrawerState(other.to_owned())),
        },
        ("menu", RouteKind::Dashboard) => {
            let item = drawer_item(required(rest, "menu", "item")?)?;
            Action::Dashboard(DashboardAction::Menu(item))
        }
        ("menu", RouteKind::Profile) => {
            let item = profile_item(required(rest, "menu", "item")?)?;
            Action::Profile(ProfileAction::Menu(item))
        }
        ("create", RouteKind::Dashboard) => Action::Dashboard(DashboardAction::CreateEvent),
        ("profile", RouteKind::Dashboard) => {
            Action::Dashboard(DashboardAction::Menu(DrawerItem::Profile))
        }
        ("logout", RouteKind::Dashboard) => Action::Dashboard(DashboardAction::Logout),
        ("logout", RouteKind::Profile) => Action::Profile(ProfileAction::Logout),
        ("share", RouteKind::EventDetail) => Action::EventDetail(EventDetailAction::Share),
        ("settings", RouteKind::Profile) => Action::Profile(ProfileAction::OpenSettings),

        (
            "login" | "register" | "guest" | "toggle-password" | "submit" | "google" | "search"
            | "open" | "attend" | "drawer" | "menu" | "create" | "profile" | "logout" | "share"
            | "settings",
            _,
        ) => return Err(not_here()),
        (other, _) => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(Some(Command::Dispatch(action)))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn event_id(raw: &str) -> Result<EventId, CommandError> {
    EventId::parse(raw).ok_or_else(|| CommandError::BadEventId(raw.to_owned()))
}

fn type_into(rest: &str, screen: RouteKind) -> Result<Action, CommandError> {
    let field = required(rest, "type", "field")?;
    let (field, text) = match field.split_once(char::is_whitespace) {
        Some((field, text)) => (field, text.trim().to_owned()),
        None => (field, String::new()),
    };
    let unknown = || CommandError::UnknownField {
        field: field.to_owned(),
        screen,
    };
    let action = match screen {
        RouteKind::Login => match field {
            "email" => Action::Login(LoginAction::EditEmail(text)),
            "password" => Action::Login(LoginAction::EditPassword(text)),
            _ => return Err(unknown()),
        },
        RouteKind::Register => {
            let field = match field {
                "name" => RegisterField::Name,
                "email" => RegisterField::Email,
                "password" => RegisterField::Password,
                "phone" => RegisterField::Phone,
                _ => return Err(unknown()),
            };
            Action::Register(RegisterAction::Edit(field, text))
        }
        RouteKind::CreateEvent => {
            let field = match field {
                "title" => CreateEventField::Title,
                "description" => CreateEventField::Description,
                "date" => CreateEventField::Date,
                "time" => CreateEventField::Time,
                "location" => CreateEventField::Location,
                "max-attendees" | "max_attendees" => CreateEventField::MaxAttendees,
                "category" => return Err(CommandError::ReadOnlyField(field.to_owned())),
                _ => return Err(unknown()),
            };
            Action::CreateEvent(CreateEventAction::Edit(field, text))
        }
        RouteKind::Dashboard if field == "search" => {
            Action::Dashboard(DashboardAction::EditSearch(text))
        }
        _ => return Err(unknown()),
    };
    Ok(action)
}

fn drawer_item(raw: &str) -> Result<DrawerItem, CommandError> {
    match raw {
        "profile" => Ok(DrawerItem::Profile),
        "my-events" => Ok(DrawerItem::MyEvents),
        "attended-events" => Ok(DrawerItem::AttendedEvents),
        "settings" => Ok(DrawerItem::Settings),
        "licenses" => Ok(DrawerItem::Licenses),
        other => Err(CommandError::UnknownMenuItem(other.to_owned())),
    }
}

fn profile_item(raw: &str) -> Result<ProfileMenuItem, CommandError> {
    match raw {
        "my-events" => Ok(ProfileMenuItem::MyEvents),
        "attended-events" => Ok(ProfileMenuItem::AttendedEvents),
        "statistics" => Ok(ProfileMenuItem::Statistics),
        "settings" => Ok(ProfileMenuItem::Settings),
        "licenses" => Ok(ProfileMenuItem::Licenses),
        other => Err(CommandError::UnknownMenuItem(other.to_owned())),
    }
}
