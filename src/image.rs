//! Carga útil de imagen recibida del cliente (base64 crudo o data URL).

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
        DecodePaddingMode,
    },
    Engine as _,
};
use thiserror::Error;

const DEFAULT_MIME: &str = "image/jpeg";

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Se aceptan ambos alfabetos, con o sin `=` final.
const DECODERS: [GeneralPurpose; 2] = [
    GeneralPurpose::new(&alphabet::STANDARD, LENIENT),
    GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImagePayloadError {
    #[error("imageBase64 is empty")]
    Empty,
    #[error("imageBase64 is not valid base64")]
    InvalidBase64,
    #[error("unsupported data URL; expected data:image/<type>;base64,<data>")]
    UnsupportedDataUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime: String,
    base64: String,
}

impl ImagePayload {
    /// Valida la carga útil. Un data URL conserva su tipo MIME; el base64
    /// crudo se asume JPEG, que es lo que envía la app móvil tras redimensionar.
    pub fn parse(raw: &str) -> Result<Self, ImagePayloadError> {
        let raw = raw.trim();
        let (mime, data) = match raw.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest
                    .split_once(',')
                    .ok_or(ImagePayloadError::UnsupportedDataUrl)?;
                let mime = header
                    .strip_suffix(";base64")
                    .filter(|mime| mime.starts_with("image/"))
                    .ok_or(ImagePayloadError::UnsupportedDataUrl)?;
                (mime.to_string(), data)
            }
            None => (DEFAULT_MIME.to_string(), raw),
        };

        let data: String = data.chars().filter(|c| !c.is_whitespace()).collect();
        if data.is_empty() {
            return Err(ImagePayloadError::Empty);
        }
        let bytes = DECODERS
            .iter()
            .find_map(|engine| engine.decode(&data).ok())
            .ok_or(ImagePayloadError::InvalidBase64)?;

        // Se reenvía siempre en base64 estándar con relleno.
        Ok(Self {
            mime,
            base64: STANDARD.encode(bytes),
        })
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}
