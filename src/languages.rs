//! Idiomas soportados por el asistente.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Bengali,
    Marathi,
    Gujarati,
    Malayalam,
    Punjabi,
    Odia,
}

/// Ficha de un idioma tal y como la consume el cliente.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub value: Language,
    pub code: &'static str,
    pub locale: &'static str,
    pub label: &'static str,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Kannada,
        Language::Bengali,
        Language::Marathi,
        Language::Gujarati,
        Language::Malayalam,
        Language::Punjabi,
        Language::Odia,
    ];

    /// Resuelve la etiqueta del cliente; ausente o desconocida → inglés.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Language::English;
        };
        let tag = tag.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.value() == tag || lang.code() == tag)
            .unwrap_or_default()
    }

    pub fn value(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Tamil => "tamil",
            Language::Telugu => "telugu",
            Language::Kannada => "kannada",
            Language::Bengali => "bengali",
            Language::Marathi => "marathi",
            Language::Gujarati => "gujarati",
            Language::Malayalam => "malayalam",
            Language::Punjabi => "punjabi",
            Language::Odia => "odia",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Kannada => "kn",
            Language::Bengali => "bn",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
            Language::Malayalam => "ml",
            Language::Punjabi => "pa",
            Language::Odia => "or",
        }
    }

    /// Nombre en inglés, usado dentro de los prompts ("Respond in Tamil").
    pub fn prompt_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Kannada => "Kannada",
            Language::Bengali => "Bengali",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Malayalam => "Malayalam",
            Language::Punjabi => "Punjabi",
            Language::Odia => "Odia",
        }
    }

    pub fn info(self) -> LanguageInfo {
        let label = match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी (Hindi)",
            Language::Tamil => "தமிழ் (Tamil)",
            Language::Telugu => "తెలుగు (Telugu)",
            Language::Kannada => "ಕನ್ನಡ (Kannada)",
            Language::Bengali => "বাংলা (Bengali)",
            Language::Marathi => "मराठी (Marathi)",
            Language::Gujarati => "ગુજરાતી (Gujarati)",
            Language::Malayalam => "മലയാളം (Malayalam)",
            Language::Punjabi => "ਪੰਜਾਬੀ (Punjabi)",
            Language::Odia => "ଓଡ଼ିଆ (Odia)",
        };
        LanguageInfo {
            value: self,
            code: self.code(),
            locale: match self {
                Language::English => "en-IN",
                Language::Hindi => "hi-IN",
                Language::Tamil => "ta-IN",
                Language::Telugu => "te-IN",
                Language::Kannada => "kn-IN",
                Language::Bengali => "bn-IN",
                Language::Marathi => "mr-IN",
                Language::Gujarati => "gu-IN",
                Language::Malayalam => "ml-IN",
                Language::Punjabi => "pa-IN",
                Language::Odia => "or-IN",
            },
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_values_and_codes() {
        assert_eq!(Language::from_tag(Some("Tamil")), Language::Tamil);
        assert_eq!(Language::from_tag(Some("hi")), Language::Hindi);
        assert_eq!(Language::from_tag(Some(" odia ")), Language::Odia);
    }

    #[test]
    fn unknown_or_missing_is_english() {
        assert_eq!(Language::from_tag(Some("klingon")), Language::English);
        assert_eq!(Language::from_tag(None), Language::English);
    }

    #[test]
    fn info_serializes_value_in_lowercase() {
        let value = serde_json::to_value(Language::Malayalam.info()).unwrap();
        assert_eq!(value["value"], "malayalam");
        assert_eq!(value["locale"], "ml-IN");
    }
}
