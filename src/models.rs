//! Modelos de dominio: identidad de la planta, diagnóstico y resultado final.
//!
//! Los modelos de lenguaje devuelven JSON "aproximado" (mayúsculas
//! variables, números como texto, `null` donde se esperaba una cadena), así
//! que la deserialización es tolerante en los campos que lo permiten y
//! estricta sólo en `status`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

/// Normaliza una etiqueta libre: mayúsculas y separadores → `_`.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

// --- Estado de la planta ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlantStatus {
    Healthy,
    Diseased,
    Pest,
    NutrientDeficiency,
}

impl PlantStatus {
    pub fn tag(self) -> &'static str {
        match self {
            PlantStatus::Healthy => "HEALTHY",
            PlantStatus::Diseased => "DISEASED",
            PlantStatus::Pest => "PEST",
            PlantStatus::NutrientDeficiency => "NUTRIENT_DEFICIENCY",
        }
    }

    pub fn is_healthy(self) -> bool {
        self == PlantStatus::Healthy
    }
}

impl FromStr for PlantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "HEALTHY" => Ok(Self::Healthy),
            "DISEASED" => Ok(Self::Diseased),
            "PEST" => Ok(Self::Pest),
            "NUTRIENT_DEFICIENCY" => Ok(Self::NutrientDeficiency),
            other => Err(format!("estado de planta desconocido: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for PlantStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// --- Severidad ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl<'de> Deserialize<'de> for Severity {
    /// Cualquier valor no reconocido se trata como `medium`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(match raw.trim().to_lowercase().as_str() {
            "low" => Severity::Low,
            "high" => Severity::High,
            _ => Severity::Medium,
        })
    }
}

// --- Identificador estandarizado de enfermedad ---

/// Etiqueta cerrada que indexa las tablas de localización, separada del
/// nombre libre que devuelve el modelo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiseaseId {
    LeafSpot,
    Blight,
    Rust,
    PowderyMildew,
    LeafCurl,
    Wilt,
    RootRot,
    FruitBorer,
    Aphids,
    Thrips,
    Mites,
    NutrientDeficiency,
    Healthy,
    #[default]
    Unknown,
}

impl DiseaseId {
    pub const ALL: [DiseaseId; 14] = [
        DiseaseId::LeafSpot,
        DiseaseId::Blight,
        DiseaseId::Rust,
        DiseaseId::PowderyMildew,
        DiseaseId::LeafCurl,
        DiseaseId::Wilt,
        DiseaseId::RootRot,
        DiseaseId::FruitBorer,
        DiseaseId::Aphids,
        DiseaseId::Thrips,
        DiseaseId::Mites,
        DiseaseId::NutrientDeficiency,
        DiseaseId::Healthy,
        DiseaseId::Unknown,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DiseaseId::LeafSpot => "LEAF_SPOT",
            DiseaseId::Blight => "BLIGHT",
            DiseaseId::Rust => "RUST",
            DiseaseId::PowderyMildew => "POWDERY_MILDEW",
            DiseaseId::LeafCurl => "LEAF_CURL",
            DiseaseId::Wilt => "WILT",
            DiseaseId::RootRot => "ROOT_ROT",
            DiseaseId::FruitBorer => "FRUIT_BORER",
            DiseaseId::Aphids => "APHIDS",
            DiseaseId::Thrips => "THRIPS",
            DiseaseId::Mites => "MITES",
            DiseaseId::NutrientDeficiency => "NUTRIENT_DEFICIENCY",
            DiseaseId::Healthy => "HEALTHY",
            DiseaseId::Unknown => "UNKNOWN",
        }
    }

    /// Resuelve una etiqueta libre ("Early Blight", "powdery-mildew", ...).
    /// Primero por contención de las familias con ficha localizada, después
    /// por coincidencia exacta; lo demás es `Unknown`.
    pub fn from_tag(raw: &str) -> Self {
        let normalized = normalize_tag(raw);

        const FUZZY: [(&str, DiseaseId); 6] = [
            ("LEAF_SPOT", DiseaseId::LeafSpot),
            ("BLIGHT", DiseaseId::Blight),
            ("RUST", DiseaseId::Rust),
            ("MILDEW", DiseaseId::PowderyMildew),
            ("LEAF_CURL", DiseaseId::LeafCurl),
            ("WILT", DiseaseId::Wilt),
        ];
        if let Some((_, id)) = FUZZY.iter().find(|(needle, _)| normalized.contains(needle)) {
            return *id;
        }

        Self::ALL
            .into_iter()
            .find(|id| id.tag() == normalized)
            .unwrap_or(DiseaseId::Unknown)
    }

    /// Si el id quedó en `Unknown`, intenta resolverlo con el nombre libre
    /// de la enfermedad (p. ej. "Early Blight").
    pub fn or_detected(self, detected: Option<&str>) -> Self {
        match (self, detected) {
            (DiseaseId::Unknown, Some(name)) => DiseaseId::from_tag(name),
            (id, _) => id,
        }
    }
}

impl fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for DiseaseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for DiseaseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|tag| DiseaseId::from_tag(&tag)).unwrap_or_default())
    }
}

// --- Helpers de deserialización tolerante ---

/// Confianza 0–100: acepta número o texto ("85", "85%"); fuera de rango se
/// recorta y lo ilegible cuenta como 0.
fn confidence<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if raw.is_finite() { raw.clamp(0.0, 100.0) } else { 0.0 })
}

/// `isLeaf`: booleano, "true"/"false" en cualquier caja o 1/0. Lo demás es `false`.
fn leaf_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1"
        }
        _ => false,
    })
}

fn plant_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let tag = normalize_tag(&raw);
    Ok(if tag.is_empty() { unknown_plant() } else { tag })
}

fn unknown_plant() -> String {
    "UNKNOWN".to_string()
}

fn text_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn list_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn optional_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("null")))
}

// --- Salidas de las dos etapas ---

/// Salida de la etapa 1 (identificación).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantIdentity {
    #[serde(default = "unknown_plant", deserialize_with = "plant_tag")]
    pub plant_name: String,
    #[serde(default, deserialize_with = "leaf_flag")]
    pub is_leaf: bool,
    #[serde(default, deserialize_with = "confidence")]
    pub confidence: f64,
}

/// Salida de la etapa 2 (diagnóstico).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub status: PlantStatus,
    #[serde(default, deserialize_with = "optional_name")]
    pub disease_detected: Option<String>,
    #[serde(default)]
    pub disease_id: DiseaseId,
    #[serde(default, deserialize_with = "confidence")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "text_or_null")]
    pub description: String,
    #[serde(default, deserialize_with = "list_or_null")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub severity: Severity,
}

// --- Resultado del análisis ---

/// Fusión de identidad + diagnóstico. Transitorio: no se persiste.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub plant_name: String,
    pub plant_confidence: f64,
    pub status: PlantStatus,
    pub disease_detected: Option<String>,
    pub disease_id: DiseaseId,
    pub confidence: f64,
    pub description: String,
    pub recommendations: Vec<String>,
    pub precautions: Vec<String>,
    pub severity: Severity,
}

impl AnalysisResult {
    pub fn merge(analysis_id: Uuid, identity: PlantIdentity, diagnosis: Diagnosis) -> Self {
        Self {
            analysis_id,
            analyzed_at: Utc::now(),
            plant_name: identity.plant_name,
            plant_confidence: identity.confidence,
            status: diagnosis.status,
            disease_detected: diagnosis.disease_detected,
            disease_id: diagnosis.disease_id,
            confidence: diagnosis.confidence,
            description: diagnosis.description,
            recommendations: diagnosis.recommendations,
            precautions: diagnosis.precautions,
            severity: diagnosis.severity,
        }
    }
}

/// Corte temprano: la etapa 1 no identificó una hoja con suficiente confianza.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UncertainResult {
    pub status: &'static str,
    pub plant_name: String,
    pub confidence: f64,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Complete(AnalysisResult),
    Uncertain(UncertainResult),
}

impl AnalysisOutcome {
    pub fn is_uncertain(&self) -> bool {
        matches!(self, AnalysisOutcome::Uncertain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tag_joins_words() {
        assert_eq!(normalize_tag("  early blight "), "EARLY_BLIGHT");
        assert_eq!(normalize_tag("powdery-mildew"), "POWDERY_MILDEW");
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn disease_id_matches_families_fuzzily() {
        assert_eq!(DiseaseId::from_tag("Early Blight"), DiseaseId::Blight);
        assert_eq!(DiseaseId::from_tag("Downy mildew"), DiseaseId::PowderyMildew);
        assert_eq!(DiseaseId::from_tag("chilli leaf curl virus"), DiseaseId::LeafCurl);
        assert_eq!(DiseaseId::from_tag("FUSARIUM_WILT"), DiseaseId::Wilt);
        assert_eq!(DiseaseId::from_tag("aphids"), DiseaseId::Aphids);
        assert_eq!(DiseaseId::from_tag("HEALTHY"), DiseaseId::Healthy);
        assert_eq!(DiseaseId::from_tag("mosaic"), DiseaseId::Unknown);
    }

    #[test]
    fn status_is_case_insensitive() {
        assert_eq!("healthy".parse::<PlantStatus>(), Ok(PlantStatus::Healthy));
        assert_eq!(
            "Nutrient Deficiency".parse::<PlantStatus>(),
            Ok(PlantStatus::NutrientDeficiency)
        );
        assert!("fine".parse::<PlantStatus>().is_err());
    }

    #[test]
    fn identity_defaults_missing_fields() {
        let identity: PlantIdentity = serde_json::from_str(r#"{"confidence": "91%"}"#).unwrap();
        assert_eq!(identity.plant_name, "UNKNOWN");
        assert!(!identity.is_leaf);
        assert_eq!(identity.confidence, 91.0);
    }

    #[test]
    fn identity_clamps_confidence() {
        let identity: PlantIdentity =
            serde_json::from_str(r#"{"plantName": "tomato", "isLeaf": true, "confidence": 140}"#)
                .unwrap();
        assert_eq!(identity.plant_name, "TOMATO");
        assert_eq!(identity.confidence, 100.0);
    }

    #[test]
    fn identity_accepts_leaf_flag_as_text_or_number() {
        let leaf = |raw: &str| {
            serde_json::from_str::<PlantIdentity>(&format!(
                r#"{{"plantName": "TOMATO", "isLeaf": {raw}, "confidence": 90}}"#
            ))
            .unwrap()
            .is_leaf
        };
        assert!(leaf(r#""true""#));
        assert!(leaf(r#""TRUE""#));
        assert!(leaf("1"));
        assert!(!leaf(r#""false""#));
        assert!(!leaf("0"));
        assert!(!leaf(r#""yes please""#));
        assert!(!leaf("null"));
    }

    #[test]
    fn disease_id_falls_back_to_detected_name() {
        let diagnosis: Diagnosis = serde_json::from_str(
            r#"{"status": "DISEASED", "diseaseDetected": "Early Blight", "confidence": 80}"#,
        )
        .unwrap();
        let id = diagnosis.disease_id.or_detected(diagnosis.disease_detected.as_deref());
        assert_eq!(id, DiseaseId::Blight);

        assert_eq!(DiseaseId::Rust.or_detected(Some("Early Blight")), DiseaseId::Rust);
        assert_eq!(DiseaseId::Unknown.or_detected(None), DiseaseId::Unknown);
    }

    #[test]
    fn diagnosis_tolerates_nulls() {
        let diagnosis: Diagnosis = serde_json::from_str(
            r#"{"status": "HEALTHY", "diseaseDetected": null, "diseaseId": null,
                "confidence": 95, "description": null, "recommendations": null,
                "severity": "Low"}"#,
        )
        .unwrap();
        assert_eq!(diagnosis.status, PlantStatus::Healthy);
        assert_eq!(diagnosis.disease_detected, None);
        assert_eq!(diagnosis.disease_id, DiseaseId::Unknown);
        assert!(diagnosis.recommendations.is_empty());
        assert!(diagnosis.precautions.is_empty());
        assert_eq!(diagnosis.severity, Severity::Low);
    }

    #[test]
    fn diagnosis_requires_known_status() {
        let parsed = serde_json::from_str::<Diagnosis>(r#"{"status": "probably ok"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn uncertain_outcome_serializes_flat() {
        let outcome = AnalysisOutcome::Uncertain(UncertainResult {
            status: "uncertain",
            plant_name: "UNKNOWN".to_string(),
            confidence: 40.0,
            error: "msg".to_string(),
        });
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "uncertain");
        assert_eq!(value["plantName"], "UNKNOWN");
        assert_eq!(value["error"], "msg");
    }
}
