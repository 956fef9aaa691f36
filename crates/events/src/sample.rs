//! Built-in demo data: three campus events and their detail records.

use crate::detail::EventDetail;
use crate::id::EventId;
use crate::item::EventItem;

fn id(raw: &str) -> EventId {
    EventId::parse_or_default(Some(raw))
}

/// The upcoming-events list shown on the dashboard.
#[must_use]
pub fn sample_items() -> Vec<EventItem> {
    vec![
        EventItem::new(
            id("1"),
            "Festival Cultural UDB",
            "25 May - 2:00 PM",
            "Campus UDB",
            "45 asistentes",
            "🎭",
            "Cultural",
        ),
        EventItem::new(
            id("2"),
            "Charla de Inteligencia Artificial",
            "28 May - 10:00 AM",
            "Aula Magna",
            "12 asistentes",
            "💻",
            "Académico",
        ),
        EventItem::new(
            id("3"),
            "Torneo Inter-Facultades",
            "30 May - 8:00 AM",
            "Campo Deportivo",
            "8 equipos",
            "⚽",
            "Deportes",
        ),
    ]
}

/// The fixed detail lookup table, keyed by event id.
#[must_use]
pub fn sample_details() -> Vec<(EventId, EventDetail)> {
    vec![
        (
            id("1"),
            EventDetail {
                title: "Festival Cultural UDB".to_owned(),
                emoji: "🎭".to_owned(),
                date: "Viernes, 25 Mayo".to_owned(),
                time: "2:00 PM - 6:00 PM".to_owned(),
                location: "Campus UDB".to_owned(),
                address: "Auditorio Principal".to_owned(),
                attendees: "45".to_owned(),
                description: "Celebremos la diversidad cultural con música, danza y comida \
                              tradicional. Un evento para toda la comunidad UDB."
                    .to_owned(),
                organizer: "Club Cultural UDB".to_owned(),
                organizer_initials: "CC".to_owned(),
            },
        ),
        (
            id("2"),
            EventDetail {
                title: "Charla de Inteligencia Artificial".to_owned(),
                emoji: "💻".to_owned(),
                date: "Lunes, 28 Mayo".to_owned(),
                time: "10:00 AM - 12:00 PM".to_owned(),
                location: "Aula Magna".to_owned(),
                address: "Campus Central".to_owned(),
                attendees: "12".to_owned(),
                description: "Explora el futuro de la inteligencia artificial y sus \
                              aplicaciones en el mundo moderno. Una charla técnica para \
                              estudiantes y profesionales."
                    .to_owned(),
                organizer: "Departamento de Ingeniería".to_owned(),
                organizer_initials: "DI".to_owned(),
            },
        ),
        (
            id("3"),
            EventDetail {
                title: "Torneo Inter-Facultades".to_owned(),
                emoji: "⚽".to_owned(),
                date: "Miércoles, 30 Mayo".to_owned(),
                time: "8:00 AM - 5:00 PM".to_owned(),
                location: "Campo Deportivo".to_owned(),
                address: "Instalaciones UDB".to_owned(),
                attendees: "8".to_owned(),
                description: "Competencia deportiva entre las diferentes facultades de la \
                              universidad. ¡Ven a apoyar a tu facultad favorita!"
                    .to_owned(),
                organizer: "Departamento de Deportes".to_owned(),
                organizer_initials: "DD".to_owned(),
            },
        ),
    ]
}
