//! Búsqueda estática de textos localizados para un resultado de análisis.
//!
//! No hay traducción dinámica: todo sale de tablas redactadas de antemano
//! e indexadas por etiquetas estandarizadas (`DiseaseId`, estado, cultivo).

use serde::Serialize;

use crate::{
    crop_data::{self, CROPS, STATUSES},
    disease_data::{self, DiseaseRecord},
    languages::Language,
    models::{normalize_tag, DiseaseId},
    products::{self, ProductRecommendations},
};

/// Ficha de enfermedad para `id` en `language`.
///
/// Identificadores sin ficha → `UNKNOWN`; idiomas sin ficha → inglés.
pub fn disease_info(id: DiseaseId, language: Language) -> &'static DiseaseRecord {
    let records = disease_data::records_for(id).unwrap_or(disease_data::UNKNOWN_RECORDS);
    records
        .iter()
        .find(|(lang, _)| *lang == language)
        .or_else(|| records.iter().find(|(lang, _)| *lang == Language::English))
        .map(|(_, record)| record)
        .unwrap_or(&disease_data::UNKNOWN_RECORDS[0].1)
}

/// Igual que `disease_info` pero a partir de una etiqueta libre.
pub fn disease_info_for_tag(tag: Option<&str>, language: Language) -> &'static DiseaseRecord {
    let id = tag.map(DiseaseId::from_tag).unwrap_or_default();
    disease_info(id, language)
}

/// Nombre del cultivo; una etiqueta desconocida se devuelve tal cual.
pub fn crop_name(tag: &str, language: Language) -> String {
    crop_data::lookup(CROPS, &normalize_tag(tag), language)
        .map(str::to_string)
        .unwrap_or_else(|| tag.to_string())
}

/// Etiqueta visible del estado ("HEALTHY", "uncertain", ...).
pub fn status_label(tag: &str, language: Language) -> String {
    crop_data::lookup(STATUSES, &normalize_tag(tag), language)
        .map(str::to_string)
        .unwrap_or_else(|| tag.to_string())
}

/// Vista localizada de un resultado, lista para mostrar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedReport {
    pub language: Language,
    pub plant_name: String,
    pub status: String,
    pub disease_id: DiseaseId,
    /// Ausente cuando la planta está sana o el estado es incierto.
    pub disease: Option<&'static DiseaseRecord>,
    pub products: Option<ProductRecommendations>,
}

/// `detected_name` (nombre libre de la enfermedad) solo se usa cuando
/// `disease_tag` falta o no resuelve a una familia conocida.
pub fn localize_report(
    disease_tag: Option<&str>,
    detected_name: Option<&str>,
    status_tag: Option<&str>,
    plant_tag: Option<&str>,
    language: Language,
) -> LocalizedReport {
    let status_tag = status_tag.map(normalize_tag).unwrap_or_else(|| "UNKNOWN".to_string());
    let disease_id = disease_tag
        .map(DiseaseId::from_tag)
        .unwrap_or_default()
        .or_detected(detected_name);
    let has_problem = !matches!(status_tag.as_str(), "HEALTHY" | "UNCERTAIN")
        && disease_id != DiseaseId::Healthy;

    LocalizedReport {
        language,
        plant_name: crop_name(plant_tag.unwrap_or("UNKNOWN"), language),
        status: status_label(&status_tag, language),
        disease_id,
        disease: has_problem.then(|| disease_info(disease_id, language)),
        products: has_problem.then(|| products::recommendations_for(disease_id)),
    }
}
