//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! del registro de flota.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Acepta placas tipo "ABC-1234" y el formato Mercosur "ABC1D23"
    static ref PLATE_RE: Regex = Regex::new(r"^[A-Z]{3}-?[0-9][0-9A-Z][0-9]{2}$").unwrap();
}

/// Validar formato de placa de vehículo
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    if !PLATE_RE.is_match(value) {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"AAA-9999 / AAA9A99".to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar una placa antes de validar/persistir
pub fn normalize_plate(value: &str) -> String {
    value.trim().to_uppercase()
}
