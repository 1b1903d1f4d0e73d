use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::VocabularyRecord;

/// The authored payload for one term, before it carries any review state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub term: String,
    pub translation: String,
    pub context: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub vocabulary: Vec<VocabularyEntry>,
}

/// Seed fresh review records for a lesson's vocabulary. Ids are stable
/// across reseeds of the same lesson: `<lesson_id>-<index>`.
pub fn seed_records(lesson: &Lesson, now: DateTime<Utc>) -> Vec<VocabularyRecord> {
    lesson
        .vocabulary
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            VocabularyRecord::new(format!("{}-{}", lesson.id, index), entry, now)
        })
        .collect()
}

/// Built-in starter lesson: vocabulary for a first business meeting.
pub fn starter_lesson() -> Lesson {
    let vocabulary = [
        (
            "la reunión",
            "meeting",
            "reuniones",
            "La reunión empieza a las nueve en punto.",
        ),
        (
            "el presupuesto",
            "budget",
            "finanzas",
            "Necesitamos aprobar el presupuesto trimestral.",
        ),
        ("la factura", "invoice", "finanzas", "Enviaré la factura el lunes por la mañana."),
        ("el plazo", "deadline", "planificación", "El plazo de entrega es el viernes."),
        (
            "el cronograma",
            "schedule",
            "planificación",
            "El cronograma del proyecto está actualizado.",
        ),
        ("la nómina", "payroll", "recursos humanos", "La nómina se paga el último día del mes."),
        (
            "el informe",
            "report",
            "reuniones",
            "El informe de ventas sale cada trimestre.",
        ),
        (
            "las partes interesadas",
            "stakeholders",
            "gestión",
            "Las partes interesadas revisarán la propuesta.",
        ),
        ("networking", "professional networking", "eventos", "El networking es clave en las ferias."),
        ("feedback", "feedback", "gestión", "El equipo espera feedback tras la presentación."),
    ];

    Lesson {
        id: "primera-reunion".to_string(),
        title: "Tu primera reunión de negocios".to_string(),
        vocabulary: vocabulary
            .iter()
            .map(|(term, translation, context, example)| VocabularyEntry {
                term: term.to_string(),
                translation: translation.to_string(),
                context: context.to_string(),
                example: example.to_string(),
            })
            .collect(),
    }
}
