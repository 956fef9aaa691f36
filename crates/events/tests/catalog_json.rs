//! Loading a replacement event list from JSON.

use events::{EventCatalog, EventId};

const LIST: &str = r#"[
    {
        "id": "2",
        "title": "Charla de Inteligencia Artificial",
        "date": "28 May - 10:00 AM",
        "location": "Aula Magna",
        "attendees": "12 asistentes",
        "emoji": "💻",
        "category": "Académico"
    },
    {
        "id": "10",
        "title": "Feria de Empleo",
        "date": "2 Jun - 9:00 AM",
        "location": "Gimnasio",
        "attendees": "120 asistentes",
        "emoji": "💼",
        "category": "Profesional",
        "status": "Pendiente"
    }
]"#;

#[test]
fn json_list_replaces_sample_items() {
    let c = EventCatalog::from_json(LIST).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.items()[1].status, "Pendiente");
    assert_eq!(c.items()[0].status, "Activo");
}

#[test]
fn json_items_keep_builtin_details() {
    let c = EventCatalog::from_json(LIST).unwrap();
    let two = EventId::parse("2").unwrap();
    assert_eq!(c.detail_or_placeholder(&two).organizer, "Departamento de Ingeniería");
}

#[test]
fn json_items_without_details_use_placeholder() {
    let c = EventCatalog::from_json(LIST).unwrap();
    let ten = EventId::parse("10").unwrap();
    assert!(c.items().iter().any(|item| item.id == ten));
    assert!(c.detail_or_placeholder(&ten).is_placeholder());
}

#[test]
fn json_rejects_malformed_id() {
    let bad = r#"[{"id":"a/b","title":"T","date":"D","location":"L",
        "attendees":"0","emoji":"x","category":"C"}]"#;
    assert!(EventCatalog::from_json(bad).is_err());
}
