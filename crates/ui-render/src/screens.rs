//! One render function per screen.
//!
//! Every function takes the display, the screen state and a registration
//! callback `(test_id, component_type, position, size)` invoked once per
//! interactive element.

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, Rectangle, RoundedRectangle},
};
use ui::screens::{
    CreateEventState, DashboardState, DrawerItem, EventCard, EventDetailState, LoginState,
    ProfileMenuItem, ProfileState, RegisterState,
};
use ui::ScreenState;

use crate::components::{fit, wrap, Button, ButtonStyle, Label, TextField, TextSize};
use crate::theme::{
    ACCENT, BRAND, INACTIVE, INK, MARGIN, MUTED, OUTLINE, PAPER, SURFACE, TOP_BAR_HEIGHT,
};

const GAP: i32 = 12;
const CARD_HEIGHT: u32 = 132;
const DRAWER_WIDTH: u32 = 280;
const ROW_HEIGHT: u32 = 44;

/// Icon at the left of the app bar.
#[derive(Clone, Copy)]
enum Leading {
    Back,
    Menu,
}

fn emit<R>(sink: &mut R, test_id: &str, component_type: &str, bounds: Rectangle)
where
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    sink(
        test_id,
        component_type,
        (bounds.top_left.x, bounds.top_left.y),
        (bounds.size.width, bounds.size.height),
    );
}

/// Draw `screen`, filling the whole display first.
pub fn render_screen<D, R>(
    display: &mut D,
    screen: &ScreenState,
    mut on_component: R,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    display.clear(PAPER)?;
    let reg = &mut on_component;
    match screen {
        ScreenState::Welcome(_) => render_welcome(display, reg),
        ScreenState::Login(s) => render_login(display, s, reg),
        ScreenState::Register(s) => render_register(display, s, reg),
        ScreenState::Dashboard(s) => render_dashboard(display, s, reg),
        ScreenState::EventDetail(s) => render_event_detail(display, s, reg),
        ScreenState::CreateEvent(s) => render_create_event(display, s, reg),
        ScreenState::Profile(s) => render_profile(display, s, reg),
    }
}

// ── shared pieces ────────────────────────────────────────────────────────────

fn content_width<D: Dimensions>(display: &D) -> u32 {
    display
        .bounding_box()
        .size
        .width
        .saturating_sub(2 * MARGIN as u32)
}

fn centered<D>(
    display: &mut D,
    text: &str,
    size: TextSize,
    color: Gray4,
    y: i32,
) -> Result<Rectangle, D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let width = display.bounding_box().size.width;
    let max_chars = (width / size.char_width()) as usize;
    let text = fit(text, max_chars);
    let label = Label::new(&text).size(size).color(color);
    let x = (width.saturating_sub(label.dimensions().width) / 2) as i32;
    label.render(display, Point::new(x, y))
}

/// Brand-coloured app bar. Returns the y coordinate below it.
fn top_bar<D, R>(
    display: &mut D,
    reg: &mut R,
    prefix: &str,
    title: &str,
    leading: Leading,
) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let width = display.bounding_box().size.width;
    Rectangle::new(Point::zero(), Size::new(width, TOP_BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BRAND))
        .draw(display)?;

    let (icon, suffix) = match leading {
        Leading::Back => ("<", "back-btn"),
        Leading::Menu => ("=", "menu-btn"),
    };
    let style = ButtonStyle {
        foreground: PAPER,
        ..ButtonStyle::text().filled(BRAND)
    };
    let bounds = Button::new(icon)
        .style(style)
        .render(display, Point::new(8, 12))?;
    emit(reg, &format!("{prefix}-{suffix}"), "Button", bounds);
    let title_x = bounds.top_left.x + bounds.size.width as i32 + 8;

    let max_chars = (width.saturating_sub(title_x as u32 + 48) / 10) as usize;
    Label::new(&fit(title, max_chars))
        .color(PAPER)
        .render(display, Point::new(title_x, 18))?;
    Ok(TOP_BAR_HEIGHT as i32 + GAP)
}

fn error_line<D>(display: &mut D, error: Option<&str>, y: i32) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let Some(message) = error else {
        return Ok(y);
    };
    let max_chars = (content_width(&*display) / TextSize::Small.char_width()) as usize;
    Label::new(&fit(message, max_chars))
        .size(TextSize::Small)
        .color(INK)
        .render(display, Point::new(MARGIN, y))?;
    Ok(y + 10 + GAP)
}

fn field<D, R>(
    display: &mut D,
    reg: &mut R,
    id: &str,
    field: TextField<'_>,
    y: i32,
) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let height = field.size().height as i32;
    let input = field.render(display, Point::new(MARGIN, y))?;
    emit(reg, id, "TextField", input);
    Ok(y + height + GAP)
}

fn wide_button<D, R>(
    display: &mut D,
    reg: &mut R,
    id: &str,
    button: Button<'_>,
    y: i32,
) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let width = content_width(&*display);
    let bounds = button.min_width(width).render(display, Point::new(MARGIN, y))?;
    emit(reg, id, "Button", bounds);
    Ok(y + bounds.size.height as i32 + GAP)
}

fn avatar<D>(display: &mut D, initials: &str, center: Point, diameter: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    let top_left = center - Point::new(diameter as i32 / 2, diameter as i32 / 2);
    RoundedRectangle::new(
        Rectangle::new(top_left, Size::new(diameter, diameter)),
        CornerRadii::new(Size::new(diameter / 2, diameter / 2)),
    )
    .into_styled(PrimitiveStyle::with_fill(ACCENT))
    .draw(display)?;
    let label = Label::new(initials).color(PAPER);
    let dims = label.dimensions();
    label.render(
        display,
        center - Point::new(dims.width as i32 / 2, dims.height as i32 / 2),
    )?;
    Ok(())
}

// ── welcome ──────────────────────────────────────────────────────────────────

/// Brand hero with badge, name and tagline over three entry buttons.
pub fn render_welcome<D, R>(display: &mut D, reg: &mut R) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let width = display.bounding_box().size.width;
    Rectangle::new(Point::zero(), Size::new(width, 300))
        .into_styled(PrimitiveStyle::with_fill(BRAND))
        .draw(display)?;

    let badge = Rectangle::new(Point::new(width as i32 / 2 - 40, 60), Size::new(80, 80));
    RoundedRectangle::new(badge, CornerRadii::new(Size::new(16, 16)))
        .into_styled(PrimitiveStyle::with_fill(PAPER))
        .draw(display)?;
    centered(display, platform::config::APP_BADGE, TextSize::Normal, BRAND, 90)?;
    let title = centered(display, platform::config::APP_NAME, TextSize::Normal, PAPER, 170)?;
    emit(reg, "welcome-title", "Label", title);
    centered(display, platform::config::APP_TAGLINE, TextSize::Small, PAPER, 200)?;

    let mut y = 340;
    y = wide_button(display, reg, "welcome-login-btn", Button::new("Iniciar Sesión"), y)?;
    y = wide_button(
        display,
        reg,
        "welcome-register-btn",
        Button::new("Registrarse").style(ButtonStyle::outlined()),
        y,
    )?;
    wide_button(
        display,
        reg,
        "welcome-guest-btn",
        Button::new("Continuar sin cuenta").style(ButtonStyle::text()),
        y,
    )?;
    Ok(())
}

// ── login / register ─────────────────────────────────────────────────────────

/// Sign-in form.
pub fn render_login<D, R>(display: &mut D, state: &LoginState, reg: &mut R) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let width = content_width(&*display);
    let mut y = top_bar(display, reg, "login", "Iniciar Sesión", Leading::Back)?;
    y = error_line(display, state.error.as_deref(), y)?;

    y = field(
        display,
        reg,
        "login-email",
        TextField::new("Correo electrónico", &state.email, width).placeholder("alumno@udb.edu.sv"),
        y,
    )?;
    // Bullets are outside Latin-1.
    let password = state.password_display().replace('•', "*");
    let password_top = y;
    y = field(
        display,
        reg,
        "login-password",
        TextField::new("Contraseña", &password, width).placeholder("********"),
        y,
    )?;
    let toggle = Button::new(if state.password_visible { "Ocultar" } else { "Ver" })
        .style(ButtonStyle::text());
    let toggle_x = MARGIN + width as i32 - toggle.size().width as i32 - 4;
    let bounds = toggle.render(
        display,
        Point::new(toggle_x, password_top + TextField::CAPTION_HEIGHT as i32 + 4),
    )?;
    emit(reg, "login-password-toggle", "Button", bounds);

    y = wide_button(display, reg, "login-submit-btn", Button::new("Iniciar Sesión"), y)?;
    y = wide_button(
        display,
        reg,
        "login-google-btn",
        Button::new("Continuar con Google").style(ButtonStyle::outlined()),
        y,
    )?;
    wide_button(
        display,
        reg,
        "login-register-link",
        Button::new("¿No tienes cuenta? Regístrate").style(ButtonStyle::text()),
        y,
    )?;
    Ok(())
}

/// Registration form.
pub fn render_register<D, R>(
    display: &mut D,
    state: &RegisterState,
    reg: &mut R,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let width = content_width(&*display);
    let mut y = top_bar(display, reg, "register", "Crear Cuenta", Leading::Back)?;
    y = error_line(display, state.error.as_deref(), y)?;

    // Bullets are outside Latin-1.
    let password = state.password_display().replace('•', "*");
    let fields = [
        ("register-name", TextField::new("Nombre completo", &state.name, width)),
        (
            "register-email",
            TextField::new("Correo electrónico", &state.email, width)
                .placeholder("alumno@udb.edu.sv"),
        ),
        (
            "register-password",
            TextField::new("Contraseña", &password, width).placeholder("********"),
        ),
        (
            "register-phone",
            TextField::new("Teléfono", &state.phone, width).placeholder("7777-7777"),
        ),
    ];
    for (id, f) in fields {
        y = field(display, reg, id, f, y)?;
    }

    y = wide_button(display, reg, "register-submit-btn", Button::new("Registrarse"), y)?;
    wide_button(
        display,
        reg,
        "register-login-link",
        Button::new("¿Ya tienes cuenta? Inicia sesión").style(ButtonStyle::text()),
        y,
    )?;
    Ok(())
}

// ── dashboard ────────────────────────────────────────────────────────────────

fn drawer_slug(item: DrawerItem) -> &'static str {
    match item {
        DrawerItem::Profile => "profile",
        DrawerItem::MyEvents => "my-events",
        DrawerItem::AttendedEvents => "attended-events",
        DrawerItem::Settings => "settings",
        DrawerItem::Licenses => "licenses",
    }
}

fn event_card<D, R>(display: &mut D, reg: &mut R, card: &EventCard, y: i32) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let width = content_width(&*display);
    let bounds = Rectangle::new(Point::new(MARGIN, y), Size::new(width, CARD_HEIGHT));
    let shape = RoundedRectangle::new(bounds, CornerRadii::new(Size::new(8, 8)));
    shape
        .into_styled(PrimitiveStyle::with_fill(SURFACE))
        .draw(display)?;
    shape
        .into_styled(PrimitiveStyle::with_stroke(OUTLINE, 1))
        .draw(display)?;
    let id = card.item.id.as_str();
    emit(reg, &format!("event-card-{id}"), "Card", bounds);

    let x = MARGIN + 12;
    let max_chars = (width.saturating_sub(24) / TextSize::Normal.char_width()) as usize;
    let small_chars = (width.saturating_sub(24) / TextSize::Small.char_width()) as usize;
    let item = &card.item;
    Label::new(&fit(&item.card_heading(), max_chars)).render(display, Point::new(x, y + 10))?;
    let lines = [
        item.date.as_str(),
        item.location.as_str(),
        item.attendees.as_str(),
    ];
    for (row, line) in lines.iter().enumerate() {
        Label::caption(&fit(line, small_chars))
            .render(display, Point::new(x, y + 38 + row as i32 * 14))?;
    }
    Label::new(&item.status)
        .size(TextSize::Small)
        .color(BRAND)
        .render(display, Point::new(x, y + CARD_HEIGHT as i32 - 26))?;

    let style = if card.registered {
        ButtonStyle::primary().filled(INACTIVE)
    } else {
        ButtonStyle::primary()
    };
    let button = Button::new(card.attend_label()).style(style);
    let bx = MARGIN + width as i32 - button.size().width as i32 - 12;
    let by = y + CARD_HEIGHT as i32 - button.size().height as i32 - 12;
    let attend = button.render(display, Point::new(bx, by))?;
    emit(reg, &format!("event-card-{id}-attend"), "Button", attend);

    Ok(y + CARD_HEIGHT as i32 + GAP)
}

fn drawer<D, R>(display: &mut D, state: &DashboardState, reg: &mut R) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let height = display.bounding_box().size.height;
    let panel = Rectangle::new(Point::zero(), Size::new(DRAWER_WIDTH, height));
    panel
        .into_styled(PrimitiveStyle::with_fill(PAPER))
        .draw(display)?;
    panel
        .into_styled(PrimitiveStyle::with_stroke(OUTLINE, 1))
        .draw(display)?;
    emit(reg, "dashboard-drawer", "Container", panel);

    Rectangle::new(Point::zero(), Size::new(DRAWER_WIDTH, 140))
        .into_styled(PrimitiveStyle::with_fill(BRAND))
        .draw(display)?;
    avatar(display, &state.user.initials, Point::new(MARGIN + 28, 48), 56)?;
    let chars = ((DRAWER_WIDTH - 2 * MARGIN as u32) / TextSize::Normal.char_width()) as usize;
    Label::new(&fit(&state.user.name, chars))
        .color(PAPER)
        .render(display, Point::new(MARGIN, 88))?;
    Label::new(&state.user.email)
        .size(TextSize::Small)
        .color(PAPER)
        .render(display, Point::new(MARGIN, 114))?;

    let mut y = 152;
    let rows = DrawerItem::ALL
        .iter()
        .map(|&item| (format!("drawer-{}", drawer_slug(item)), item.label()))
        .chain(core::iter::once(("drawer-logout".to_owned(), "Cerrar Sesión")));
    for (id, label) in rows {
        let row = Rectangle::new(Point::new(0, y), Size::new(DRAWER_WIDTH, ROW_HEIGHT));
        Label::new(label).render(display, Point::new(MARGIN, y + 12))?;
        emit(reg, &id, "Button", row);
        y += ROW_HEIGHT as i32;
    }
    Ok(())
}

/// Search box, event cards, create button and the optional drawer.
pub fn render_dashboard<D, R>(
    display: &mut D,
    state: &DashboardState,
    reg: &mut R,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let size = display.bounding_box().size;
    let width = content_width(&*display);
    let mut y = top_bar(
        display,
        reg,
        "dashboard",
        platform::config::APP_NAME,
        Leading::Menu,
    )?;

    y = field(
        display,
        reg,
        "dashboard-search",
        TextField::new("Buscar", &state.search, width).placeholder("Buscar eventos..."),
        y,
    )?;
    Label::new("Próximos Eventos").render(display, Point::new(MARGIN, y))?;
    y += 20 + GAP;

    for card in state.visible_cards() {
        if y >= size.height as i32 {
            break;
        }
        y = event_card(display, reg, card, y)?;
    }

    let fab = Button::new("+").style(ButtonStyle::primary().filled(ACCENT));
    let fab_size = fab.size();
    let fab_at = Point::new(
        size.width as i32 - fab_size.width as i32 - MARGIN,
        size.height as i32 - fab_size.height as i32 - MARGIN,
    );
    let bounds = fab.render(display, fab_at)?;
    emit(reg, "dashboard-create-btn", "Button", bounds);

    if state.drawer_open {
        drawer(display, state, reg)?;
    }
    Ok(())
}

// ── event detail ─────────────────────────────────────────────────────────────

/// Banner, facts, description, actions and organizer.
pub fn render_event_detail<D, R>(
    display: &mut D,
    state: &EventDetailState,
    reg: &mut R,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let screen_width = display.bounding_box().size.width;
    let width = content_width(&*display);
    let detail = &state.detail;
    let top = top_bar(display, reg, "detail", &detail.title, Leading::Back)?;

    let banner = Rectangle::new(Point::new(0, top - GAP), Size::new(screen_width, 96));
    banner
        .into_styled(PrimitiveStyle::with_fill(ACCENT))
        .draw(display)?;
    centered(display, &detail.emoji, TextSize::Normal, PAPER, top + 24)?;
    let mut y = top - GAP + 96 + GAP;

    let title = Label::new(&detail.title).render(display, Point::new(MARGIN, y))?;
    emit(reg, "detail-title", "Label", title);
    y += 20 + GAP;

    let small_chars = (width / TextSize::Small.char_width()) as usize;
    let when = format!("{}  {}", detail.date, detail.time);
    let attendees = detail.attendees_line();
    for line in [
        when.as_str(),
        detail.location.as_str(),
        detail.address.as_str(),
        attendees.as_str(),
    ] {
        Label::caption(&fit(line, small_chars)).render(display, Point::new(MARGIN, y))?;
        y += 14;
    }
    y += GAP;

    Label::new("Descripción:").render(display, Point::new(MARGIN, y))?;
    y += 20 + 4;
    for line in wrap(&detail.description, small_chars) {
        Label::new(&line)
            .size(TextSize::Small)
            .render(display, Point::new(MARGIN, y))?;
        y += 12;
    }
    y += GAP;

    let half = (width.saturating_sub(GAP as u32)) / 2;
    let style = if state.registered {
        ButtonStyle::primary().filled(INACTIVE)
    } else {
        ButtonStyle::primary()
    };
    let register_bounds = Button::new(state.register_label())
        .style(style)
        .min_width(half)
        .render(display, Point::new(MARGIN, y))?;
    emit(reg, "detail-register-btn", "Button", register_bounds);
    let share = Button::new("Compartir")
        .style(ButtonStyle::outlined())
        .min_width(half)
        .render(display, Point::new(MARGIN + half as i32 + GAP, y))?;
    emit(reg, "detail-share-btn", "Button", share);
    y += register_bounds.size.height as i32 + GAP;

    Label::caption("Organizado por").render(display, Point::new(MARGIN, y))?;
    y += 14;
    avatar(display, &detail.organizer_initials, Point::new(MARGIN + 20, y + 20), 40)?;
    let organizer = Label::new(&fit(&detail.organizer, small_chars / 2))
        .render(display, Point::new(MARGIN + 52, y + 10))?;
    emit(reg, "detail-organizer", "Label", organizer);
    Ok(())
}

// ── create event ─────────────────────────────────────────────────────────────

/// New-event form.
pub fn render_create_event<D, R>(
    display: &mut D,
    state: &CreateEventState,
    reg: &mut R,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let width = content_width(&*display);
    let half = (width.saturating_sub(GAP as u32)) / 2;
    let mut y = top_bar(display, reg, "create", "Crear Evento", Leading::Back)?;
    y = error_line(display, state.error.as_deref(), y)?;

    y = field(
        display,
        reg,
        "create-title",
        TextField::new("Título del evento", &state.title, width),
        y,
    )?;
    y = field(
        display,
        reg,
        "create-description",
        TextField::new("Descripción", &state.description, width),
        y,
    )?;

    let pairs = [
        (
            ("create-date", TextField::new("Fecha", &state.date, half)),
            ("create-time", TextField::new("Hora", &state.time, half)),
        ),
        (
            ("create-category", TextField::new("Categoría", &state.category, half).read_only()),
            ("create-max-attendees", TextField::new("Máx. asistentes", &state.max_attendees, half)),
        ),
    ];
    for ((left_id, left), (right_id, right)) in pairs {
        let height = left.size().height as i32;
        let l = left.render(display, Point::new(MARGIN, y))?;
        emit(reg, left_id, "TextField", l);
        let r = right.render(display, Point::new(MARGIN + half as i32 + GAP, y))?;
        emit(reg, right_id, "TextField", r);
        y += height + GAP;
    }
    y = field(
        display,
        reg,
        "create-location",
        TextField::new("Ubicación", &state.location, width),
        y,
    )?;

    wide_button(display, reg, "create-submit-btn", Button::new("Crear Evento"), y)?;
    Ok(())
}

// ── profile ──────────────────────────────────────────────────────────────────

fn profile_slug(item: ProfileMenuItem) -> &'static str {
    match item {
        ProfileMenuItem::MyEvents => "my-events",
        ProfileMenuItem::AttendedEvents => "attended-events",
        ProfileMenuItem::Statistics => "statistics",
        ProfileMenuItem::Settings => "settings",
        ProfileMenuItem::Licenses => "licenses",
    }
}

/// User card, stats row, menu and logout.
pub fn render_profile<D, R>(
    display: &mut D,
    state: &ProfileState,
    reg: &mut R,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    R: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let screen_width = display.bounding_box().size.width;
    let width = content_width(&*display);
    let mut y = top_bar(display, reg, "profile", "Mi Perfil", Leading::Back)?;

    let gear_style = ButtonStyle {
        foreground: PAPER,
        ..ButtonStyle::text().filled(BRAND)
    };
    let gear = Button::new("*").style(gear_style);
    let gear_at = Point::new(screen_width as i32 - gear.size().width as i32 - 8, 12);
    let bounds = gear.render(display, gear_at)?;
    emit(reg, "profile-settings-btn", "Button", bounds);

    let user = &state.user;
    avatar(display, &user.initials, Point::new(screen_width as i32 / 2, y + 40), 80)?;
    y += 92;
    let name = centered(display, &user.name, TextSize::Normal, INK, y)?;
    emit(reg, "profile-name", "Label", name);
    y += 24;
    centered(display, &user.email, TextSize::Small, MUTED, y)?;
    y += 10 + GAP;

    let third = width / 3;
    let rating = user.rating_label();
    let attended = user.events_attended.to_string();
    let created = user.events_created.to_string();
    let stats = [
        (attended.as_str(), "Asistidos"),
        (created.as_str(), "Creados"),
        (rating.as_str(), "Rating"),
    ];
    for (i, (value, caption)) in stats.iter().enumerate() {
        let x = MARGIN + (third * i as u32) as i32;
        let cell = Rectangle::new(Point::new(x, y), Size::new(third, 48));
        let value_label = Label::new(value).color(BRAND);
        let vx = x + (third.saturating_sub(value_label.dimensions().width) / 2) as i32;
        value_label.render(display, Point::new(vx, y + 4))?;
        let caption_label = Label::caption(caption);
        let cx = x + (third.saturating_sub(caption_label.dimensions().width) / 2) as i32;
        caption_label.render(display, Point::new(cx, y + 30))?;
        emit(reg, &format!("profile-stat-{i}"), "Label", cell);
    }
    y += 48 + GAP;

    for item in ProfileMenuItem::ALL {
        let row = Rectangle::new(Point::new(MARGIN, y), Size::new(width, ROW_HEIGHT));
        row.into_styled(PrimitiveStyle::with_stroke(OUTLINE, 1))
            .draw(display)?;
        Label::new(item.label()).render(display, Point::new(MARGIN + 12, y + 12))?;
        emit(reg, &format!("profile-menu-{}", profile_slug(item)), "Button", row);
        y += ROW_HEIGHT as i32;
    }
    y += GAP;

    wide_button(
        display,
        reg,
        "profile-logout-btn",
        Button::new("Cerrar Sesión").style(ButtonStyle::outlined()),
        y,
    )?;
    Ok(())
}
