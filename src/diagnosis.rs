//! Diagnóstico de salud de cultivos en dos etapas contra un LLM con visión.
//!
//! Flujo:
//!   1. Identificación: el modelo devuelve `{plantName, isLeaf, confidence}`.
//!   2. Compuerta: si no es una hoja o la confianza es < 70, se devuelve un
//!      resultado `uncertain` y la etapa 2 no llega a ejecutarse.
//!   3. Diagnóstico acotado a la planta identificada.
//!   4. Post-proceso: aviso de baja confianza (< 65, salvo plantas sanas) y
//!      precaución obligatoria sobre el uso de químicos.
//!   5. Fusión de identidad + diagnóstico en el resultado final.
//!
//! Las dos llamadas son estrictamente secuenciales; cada análisis es
//! independiente y no comparte estado con otros.

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    error::DiagnosisError,
    image::ImagePayload,
    llm::{extract_json, ChatMessage, LlmManager},
    models::{AnalysisOutcome, AnalysisResult, Diagnosis, PlantIdentity, UncertainResult},
};

pub const IDENTIFICATION_CONFIDENCE_THRESHOLD: f64 = 70.0;
pub const DIAGNOSIS_CONFIDENCE_THRESHOLD: f64 = 65.0;

pub const LOW_CONFIDENCE_CAUTION: &str = "Possible condition detected. Please verify.";
pub const UNCERTAIN_IDENTIFICATION_MESSAGE: &str =
    "Unable to confidently identify crop. Please upload a clearer leaf image.";
pub const SAFETY_PRECAUTION: &str =
    "Consult a local agriculture officer before heavy chemical use.";

const IDENTIFICATION_PROMPT: &str = r#"
Identify the plant in this image.
Return ONLY a valid JSON object with this exact structure:
{
  "plantName": "Standardized ID of the plant (e.g. RICE, WHEAT, TOMATO, COTTON, MAIZE, CHILLI, etc.) in UPPERCASE.",
  "isLeaf": true,
  "confidence": 85
}
"isLeaf" is true ONLY if the image shows a clear leaf or plant part suitable for diagnosis.
"confidence" is a number 0-100 reflecting certainty.
If the image is not a plant or is too blurry to identify, set isLeaf to false and plantName to "UNKNOWN".
"#;

fn diagnosis_prompt(plant_name: &str, farmer_note: Option<&str>) -> String {
    let mut prompt = format!(
        r#"
You are an expert plant pathologist. The plant has been identified as {plant}.
Analyze the image for diseases, pests, or nutrient deficiencies SPECIFIC to {plant}.
Return ONLY a valid JSON object with this structure:
{{
  "status": "HEALTHY" | "DISEASED" | "PEST" | "NUTRIENT_DEFICIENCY",
  "diseaseDetected": "Specific disease name in English (e.g. Chilli Leaf Curl Virus, Rice Blast, Early Blight). If healthy, null.",
  "diseaseId": "Standardized ID from list: [LEAF_SPOT, BLIGHT, RUST, POWDERY_MILDEW, LEAF_CURL, WILT, ROOT_ROT, FRUIT_BORER, APHIDS, THRIPS, MITES, NUTRIENT_DEFICIENCY, UNKNOWN]. If healthy, HEALTHY.",
  "confidence": 90,
  "description": "Short problem description (max 2 sentences).",
  "recommendations": ["Immediate action 1", "Immediate action 2"],
  "precautions": ["Preventive measure 1", "Preventive measure 2"],
  "severity": "low" | "medium" | "high"
}}
"confidence" is a number 0-100 reflecting diagnosis certainty.
Always include: "{precaution}" in precautions.
"#,
        plant = plant_name,
        precaution = SAFETY_PRECAUTION,
    );

    if let Some(note) = farmer_note.map(str::trim).filter(|n| !n.is_empty()) {
        prompt.push_str("\nThe farmer added this note about the plant: ");
        prompt.push_str(note);
        prompt.push('\n');
    }
    prompt
}

/// Ejecuta el pipeline completo sobre una imagen.
///
/// Devuelve `Uncertain` (no error) cuando la identificación no supera la
/// compuerta. Los fallos del backend (p. ej. límite de peticiones) se
/// propagan sin envolver.
pub async fn analyze_plant_image(
    llm: &LlmManager,
    image: &ImagePayload,
    farmer_note: Option<&str>,
) -> Result<AnalysisOutcome, DiagnosisError> {
    let analysis_id = Uuid::new_v4();
    let span = info_span!("analysis", %analysis_id);
    run_analysis(llm, image, farmer_note, analysis_id)
        .instrument(span)
        .await
}

async fn run_analysis(
    llm: &LlmManager,
    image: &ImagePayload,
    farmer_note: Option<&str>,
    analysis_id: Uuid,
) -> Result<AnalysisOutcome, DiagnosisError> {
    // 1) Identificación
    let identity = identify_plant(llm, image).await?;
    info!(
        plant = %identity.plant_name,
        is_leaf = identity.is_leaf,
        confidence = identity.confidence,
        "Planta identificada"
    );

    // 2) Compuerta de confianza
    if !passes_identification_gate(&identity) {
        info!("Identificación no concluyente; se omite el diagnóstico");
        return Ok(AnalysisOutcome::Uncertain(UncertainResult {
            status: "uncertain",
            plant_name: identity.plant_name,
            confidence: identity.confidence,
            error: UNCERTAIN_IDENTIFICATION_MESSAGE.to_string(),
        }));
    }

    // 3) Diagnóstico acotado a la planta
    let diagnosis = diagnose_plant(llm, image, &identity.plant_name, farmer_note).await?;
    info!(
        status = diagnosis.status.tag(),
        disease_id = %diagnosis.disease_id,
        confidence = diagnosis.confidence,
        "Diagnóstico recibido"
    );

    // 4) y 5)
    let diagnosis = apply_diagnosis_policy(diagnosis);
    Ok(AnalysisOutcome::Complete(AnalysisResult::merge(
        analysis_id,
        identity,
        diagnosis,
    )))
}

async fn identify_plant(
    llm: &LlmManager,
    image: &ImagePayload,
) -> Result<PlantIdentity, DiagnosisError> {
    let reply = llm
        .vision(vec![ChatMessage::user_with_image(
            IDENTIFICATION_PROMPT,
            image.data_url(),
        )])
        .await?;

    extract_json(&reply).ok_or_else(|| {
        warn!("Respuesta de identificación sin JSON utilizable: '{}'", reply);
        DiagnosisError::IdentificationParse
    })
}

async fn diagnose_plant(
    llm: &LlmManager,
    image: &ImagePayload,
    plant_name: &str,
    farmer_note: Option<&str>,
) -> Result<Diagnosis, DiagnosisError> {
    let reply = llm
        .vision(vec![ChatMessage::user_with_image(
            diagnosis_prompt(plant_name, farmer_note),
            image.data_url(),
        )])
        .await?;

    extract_json(&reply).ok_or_else(|| {
        warn!("Respuesta de diagnóstico sin JSON utilizable: '{}'", reply);
        DiagnosisError::DiagnosisParse
    })
}

pub fn passes_identification_gate(identity: &PlantIdentity) -> bool {
    identity.is_leaf && identity.confidence >= IDENTIFICATION_CONFIDENCE_THRESHOLD
}

/// Reglas de negocio sobre la salida de la etapa 2.
pub fn apply_diagnosis_policy(mut diagnosis: Diagnosis) -> Diagnosis {
    diagnosis.disease_id = diagnosis
        .disease_id
        .or_detected(diagnosis.disease_detected.as_deref());

    if diagnosis.confidence < DIAGNOSIS_CONFIDENCE_THRESHOLD && !diagnosis.status.is_healthy() {
        diagnosis.description = if diagnosis.description.is_empty() {
            LOW_CONFIDENCE_CAUTION.to_string()
        } else {
            format!("{} {}", LOW_CONFIDENCE_CAUTION, diagnosis.description)
        };
    }

    let has_safety_note = diagnosis
        .precautions
        .iter()
        .any(|p| p.to_lowercase().contains("agriculture officer"));
    if !has_safety_note {
        diagnosis.precautions.push(SAFETY_PRECAUTION.to_string());
    }

    diagnosis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::languages::Language;
    use crate::llm::{ChatBackend, CompletionKind, CompletionRequest, ContentPart, MessageContent};
    use crate::localization::disease_info;
    use crate::models::{DiseaseId, PlantStatus, Severity};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use tokio_test::{assert_err, assert_ok};

    /// Backend guionizado: devuelve las respuestas en orden y registra
    /// cada petición recibida.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn prompt_text(&self, index: usize) -> String {
            let requests = self.requests.lock().unwrap();
            match &requests[index].messages[0].content {
                MessageContent::Parts(parts) => match &parts[0] {
                    ContentPart::Text { text } => text.clone(),
                    other => panic!("expected text part, got {other:?}"),
                },
                other => panic!("expected content parts, got {other:?}"),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("no more replies".to_string()))
        }
    }

    fn manager(backend: &Arc<ScriptedBackend>) -> LlmManager {
        LlmManager::with_backend(backend.clone(), "chat-model", "vision-model")
    }

    fn leaf() -> ImagePayload {
        ImagePayload::parse("aGVsbG8=").unwrap()
    }

    fn diagnosis_json(status: &str, disease_id: &str, confidence: u32) -> String {
        format!(
            r#"{{"status": "{status}", "diseaseDetected": "Early Blight", "diseaseId": "{disease_id}",
                "confidence": {confidence}, "description": "Dark concentric spots on lower leaves.",
                "recommendations": ["Remove affected leaves"], "precautions": ["Rotate crops"],
                "severity": "medium"}}"#
        )
    }

    #[tokio::test]
    async fn tomato_blight_with_low_confidence_is_annotated() {
        let backend = ScriptedBackend::new(vec![
            Ok(r#"{"plantName": "TOMATO", "isLeaf": true, "confidence": 82}"#.to_string()),
            Ok(diagnosis_json("DISEASED", "BLIGHT", 60)),
        ]);

        let outcome = assert_ok!(analyze_plant_image(&manager(&backend), &leaf(), None).await);
        let AnalysisOutcome::Complete(result) = outcome else {
            panic!("expected a complete analysis");
        };

        assert_eq!(backend.calls(), 2);
        assert_eq!(result.plant_name, "TOMATO");
        assert_eq!(result.plant_confidence, 82.0);
        assert_eq!(result.status, PlantStatus::Diseased);
        assert_eq!(result.disease_id, DiseaseId::Blight);
        assert_eq!(
            result.description,
            "Possible condition detected. Please verify. Dark concentric spots on lower leaves."
        );
        assert_eq!(disease_info(result.disease_id, Language::Hindi).name, "झुलसा रोग");
        assert_eq!(disease_info(result.disease_id, Language::English).name, "Blight");
    }

    #[tokio::test]
    async fn loosely_typed_model_output_still_completes() {
        let backend = ScriptedBackend::new(vec![
            Ok(r#"{"plantName": "tomato", "isLeaf": "true", "confidence": "90"}"#.to_string()),
            Ok(r#"{"status": "DISEASED", "diseaseDetected": "Early Blight", "confidence": 80}"#
                .to_string()),
        ]);

        let outcome = assert_ok!(analyze_plant_image(&manager(&backend), &leaf(), None).await);
        let AnalysisOutcome::Complete(result) = outcome else {
            panic!("expected a complete analysis");
        };

        assert_eq!(backend.calls(), 2);
        assert_eq!(result.plant_name, "TOMATO");
        assert_eq!(result.disease_id, DiseaseId::Blight);
    }

    #[tokio::test]
    async fn non_leaf_short_circuits_before_diagnosis() {
        let backend = ScriptedBackend::new(vec![Ok(
            r#"{"plantName": "UNKNOWN", "isLeaf": false, "confidence": 40}"#.to_string(),
        )]);

        let outcome = assert_ok!(analyze_plant_image(&manager(&backend), &leaf(), None).await);

        assert_eq!(backend.calls(), 1);
        assert!(outcome.is_uncertain());
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "uncertain");
        assert_eq!(value["confidence"], 40.0);
        assert_eq!(value["error"], UNCERTAIN_IDENTIFICATION_MESSAGE);
    }

    #[tokio::test]
    async fn gate_threshold_is_inclusive_at_seventy() {
        let below = ScriptedBackend::new(vec![Ok(
            r#"{"plantName": "RICE", "isLeaf": true, "confidence": 69.5}"#.to_string(),
        )]);
        let outcome = assert_ok!(analyze_plant_image(&manager(&below), &leaf(), None).await);
        assert!(outcome.is_uncertain());
        assert_eq!(below.calls(), 1);

        let at = ScriptedBackend::new(vec![
            Ok(r#"{"plantName": "RICE", "isLeaf": true, "confidence": 70}"#.to_string()),
            Ok(diagnosis_json("HEALTHY", "HEALTHY", 90)),
        ]);
        let outcome = assert_ok!(analyze_plant_image(&manager(&at), &leaf(), None).await);
        assert!(!outcome.is_uncertain());
        assert_eq!(at.calls(), 2);
    }

    #[tokio::test]
    async fn diagnosis_prompt_is_scoped_to_identified_plant() {
        let backend = ScriptedBackend::new(vec![
            Ok("Result:\n```json\n{\"plantName\": \"chilli\", \"isLeaf\": true, \"confidence\": 91}\n```".to_string()),
            Ok(diagnosis_json("PEST", "THRIPS", 88)),
        ]);

        assert_ok!(
            analyze_plant_image(&manager(&backend), &leaf(), Some("leaves curling since last week"))
                .await
        );

        let prompt = backend.prompt_text(1);
        assert!(prompt.contains("identified as CHILLI"));
        assert!(prompt.contains("leaves curling since last week"));

        let requests = backend.requests.lock().unwrap();
        assert!(requests.iter().all(|r| r.kind == CompletionKind::Vision));
        assert!(requests.iter().all(|r| r.model == "vision-model"));
    }

    #[tokio::test]
    async fn unparseable_identification_is_an_error() {
        let backend = ScriptedBackend::new(vec![Ok("I see a green thing.".to_string())]);
        let err = assert_err!(analyze_plant_image(&manager(&backend), &leaf(), None).await);
        assert!(matches!(err, DiagnosisError::IdentificationParse));
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn unparseable_diagnosis_is_an_error() {
        let backend = ScriptedBackend::new(vec![
            Ok(r#"{"plantName": "WHEAT", "isLeaf": true, "confidence": 95}"#.to_string()),
            Ok(r#"{"status": "looks fine to me"}"#.to_string()),
        ]);
        let err = assert_err!(analyze_plant_image(&manager(&backend), &leaf(), None).await);
        assert!(matches!(err, DiagnosisError::DiagnosisParse));
        assert_eq!(err.to_string(), "Failed to diagnose disease. Please try again.");
    }

    #[tokio::test]
    async fn rate_limit_during_diagnosis_propagates() {
        let backend = ScriptedBackend::new(vec![
            Ok(r#"{"plantName": "COTTON", "isLeaf": true, "confidence": 88}"#.to_string()),
            Err(LlmError::RateLimited),
        ]);
        let err = assert_err!(analyze_plant_image(&manager(&backend), &leaf(), None).await);
        assert!(matches!(err, DiagnosisError::Llm(LlmError::RateLimited)));
    }

    fn diagnosis(status: PlantStatus, confidence: f64) -> Diagnosis {
        Diagnosis {
            status,
            disease_detected: None,
            disease_id: DiseaseId::Unknown,
            confidence,
            description: "Yellowing between veins.".to_string(),
            recommendations: Vec::new(),
            precautions: Vec::new(),
            severity: Severity::Low,
        }
    }

    #[test]
    fn healthy_results_are_never_annotated() {
        let result = apply_diagnosis_policy(diagnosis(PlantStatus::Healthy, 30.0));
        assert_eq!(result.description, "Yellowing between veins.");
    }

    #[test]
    fn caution_applies_strictly_below_sixty_five() {
        let at = apply_diagnosis_policy(diagnosis(PlantStatus::NutrientDeficiency, 65.0));
        assert_eq!(at.description, "Yellowing between veins.");

        let below = apply_diagnosis_policy(diagnosis(PlantStatus::NutrientDeficiency, 64.9));
        assert!(below.description.starts_with(LOW_CONFIDENCE_CAUTION));
    }

    #[test]
    fn safety_precaution_added_once() {
        let first = apply_diagnosis_policy(diagnosis(PlantStatus::Pest, 90.0));
        assert_eq!(first.precautions, vec![SAFETY_PRECAUTION.to_string()]);

        let second = apply_diagnosis_policy(first);
        assert_eq!(second.precautions.len(), 1);
    }

    #[test]
    fn missing_disease_id_uses_detected_name() {
        let mut early_blight = diagnosis(PlantStatus::Diseased, 80.0);
        early_blight.disease_detected = Some("Early Blight".to_string());

        let result = apply_diagnosis_policy(early_blight);
        assert_eq!(result.disease_id, DiseaseId::Blight);
        assert_eq!(disease_info(result.disease_id, Language::English).name, "Blight");
    }
}
