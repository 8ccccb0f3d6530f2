use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::ruc::models::TaxpayerRecord;

/// Query parameters for a RUC lookup
#[derive(Debug, Clone, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RucQuery {
    /// RUC to look up (11 digits)
    #[param(example = "20100070970")]
    #[validate(
        required(message = "numero is required"),
        length(equal = 11, message = "numero must have 11 characters")
    )]
    pub numero: Option<String>,
}

impl RucQuery {
    /// Build from raw query pairs. A repeated `numero` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            numero: first_value(pairs, "numero"),
        }
    }
}

/// First value of `key` in a list of query pairs
pub fn first_value(pairs: Vec<(String, String)>, key: &str) -> Option<String> {
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Response DTO for taxpayer registry data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RucResponseDto {
    #[schema(example = "20100070970")]
    pub ruc: String,
    #[schema(example = "SUPERMERCADOS PERUANOS SOCIEDAD ANONIMA")]
    pub razon_social: String,
    #[schema(example = "ACTIVO")]
    pub estado: String,
    #[schema(example = "HABIDO")]
    pub condicion: String,
    pub direccion: String,
    #[schema(example = "150131")]
    pub ubigeo: String,
    pub tipo_contribuyente: String,
    pub fecha_inscripcion: String,
}

impl From<TaxpayerRecord> for RucResponseDto {
    fn from(record: TaxpayerRecord) -> Self {
        Self {
            ruc: record.ruc,
            razon_social: record.razon_social,
            estado: record.estado,
            condicion: record.condicion,
            direccion: record.direccion,
            ubigeo: record.ubigeo,
            tipo_contribuyente: record.tipo_contribuyente,
            fecha_inscripcion: record.fecha_inscripcion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(numero: Option<&str>) -> RucQuery {
        RucQuery {
            numero: numero.map(str::to_string),
        }
    }

    #[test]
    fn test_query_requires_numero() {
        assert!(query(None).validate().is_err());
        assert!(query(Some("")).validate().is_err());
    }

    #[test]
    fn test_query_requires_exactly_eleven_characters() {
        assert!(query(Some("2010007097")).validate().is_err());
        assert!(query(Some("201000709701")).validate().is_err());
        assert!(query(Some("20100070970")).validate().is_ok());
    }

    #[test]
    fn test_repeated_numero_keeps_first_value() {
        let pairs = vec![
            ("otro".to_string(), "1".to_string()),
            ("numero".to_string(), "20100070970".to_string()),
            ("numero".to_string(), "x".to_string()),
        ];
        let query = RucQuery::from_pairs(pairs);

        assert_eq!(query.numero.as_deref(), Some("20100070970"));
        assert!(query.validate().is_ok());
        assert!(RucQuery::from_pairs(Vec::new()).numero.is_none());
    }

    #[test]
    fn test_response_uses_camel_case_keys() {
        let dto = RucResponseDto {
            ruc: "20100070970".into(),
            razon_social: "ACME".into(),
            estado: "ACTIVO".into(),
            condicion: "HABIDO".into(),
            direccion: "LIMA".into(),
            ubigeo: "150101".into(),
            tipo_contribuyente: "6".into(),
            fecha_inscripcion: "1993-11-03".into(),
        };
        let value = serde_json::to_value(&dto).unwrap();

        for key in [
            "ruc",
            "razonSocial",
            "estado",
            "condicion",
            "direccion",
            "ubigeo",
            "tipoContribuyente",
            "fechaInscripcion",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }
}
