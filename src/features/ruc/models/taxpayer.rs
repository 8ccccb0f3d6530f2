use serde::Serialize;
use serde_json::Value;

use crate::shared::constants::PLACEHOLDER;

/// Registry information for one taxpayer, built fresh from each upstream response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxpayerRecord {
    pub ruc: String,
    pub razon_social: String,
    pub estado: String,
    pub condicion: String,
    pub direccion: String,
    pub ubigeo: String,
    pub tipo_contribuyente: String,
    pub fecha_inscripcion: String,
}

impl TaxpayerRecord {
    /// Map an upstream registry payload onto the canonical field set.
    ///
    /// Falsy upstream values (`null`, `false`, `0`, `""`) count as missing and
    /// fall back to [`PLACEHOLDER`]. `ruc` falls back to the identifier that was
    /// requested. A payload that is not an object yields no fields at all.
    pub fn from_upstream(requested_ruc: &str, payload: &Value) -> Self {
        let field = |key: &str| truthy_text(payload.get(key));
        let or_placeholder = |value: Option<String>| value.unwrap_or_else(|| PLACEHOLDER.into());

        Self {
            ruc: field("numeroDocumento").unwrap_or_else(|| requested_ruc.to_string()),
            razon_social: or_placeholder(field("nombre").or_else(|| field("razonSocial"))),
            estado: or_placeholder(field("estado")),
            condicion: or_placeholder(field("condicion")),
            direccion: or_placeholder(field("direccion")),
            ubigeo: or_placeholder(field("ubigeo")),
            tipo_contribuyente: or_placeholder(field("tipoDocumento")),
            fecha_inscripcion: or_placeholder(field("fechaInscripcion")),
        }
    }

    pub fn is_active(&self) -> bool {
        self.estado == "ACTIVO"
    }

    pub fn is_habido(&self) -> bool {
        self.condicion == "HABIDO"
    }
}

/// Text for a truthy JSON value, `None` for falsy or absent ones.
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
