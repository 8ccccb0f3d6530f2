use serde::Serialize;

use crate::features::lookup_form::models::{FormState, LookupForm};
use crate::features::ruc::dtos::first_value;
use crate::features::ruc::models::TaxpayerRecord;
use crate::shared::constants::{MSG_FORM_INVALID_RUC, MSG_FORM_TRANSPORT_FAILED};

/// Query parameters of the lookup page (plain form submission)
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// Raw text typed into the RUC field
    pub numero: Option<String>,
}

impl PageQuery {
    /// Build from raw query pairs. A repeated `numero` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            numero: first_value(pairs, "numero"),
        }
    }
}

/// One labelled value in the result grid
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub label: &'static str,
    /// Key of the value in the `/api/ruc` response
    pub key: &'static str,
    pub value: String,
    /// One of `neutral`, `positive`, `negative`, `warning`
    pub tone: &'static str,
    pub wide: bool,
}

/// Template context for `pages/index.html.jinja`
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub state: &'static str,
    pub candidate: String,
    pub loading: bool,
    pub can_submit: bool,
    pub error: Option<String>,
    pub has_result: bool,
    pub fields: Vec<FieldView>,
    pub msg_invalid: &'static str,
    pub msg_transport: &'static str,
}

impl From<&LookupForm> for PageView {
    fn from(form: &LookupForm) -> Self {
        let state = form.state();
        let error = match state {
            FormState::Error { message } => Some(message.clone()),
            _ => None,
        };
        let record = match state {
            FormState::Result { record } => Some(record),
            _ => None,
        };

        Self {
            state: state.name(),
            candidate: form.candidate().to_string(),
            loading: form.is_loading(),
            can_submit: form.can_submit(),
            error,
            has_result: record.is_some(),
            fields: fields(record),
            msg_invalid: MSG_FORM_INVALID_RUC,
            msg_transport: MSG_FORM_TRANSPORT_FAILED,
        }
    }
}

/// Result grid, with empty values when there is no record yet so the page
/// script has slots to fill.
fn fields(record: Option<&TaxpayerRecord>) -> Vec<FieldView> {
    let value = |f: fn(&TaxpayerRecord) -> &str| record.map(f).unwrap_or_default().to_string();

    let estado_tone = match record {
        Some(r) if r.is_active() => "positive",
        Some(_) => "negative",
        None => "neutral",
    };
    let condicion_tone = match record {
        Some(r) if r.is_habido() => "positive",
        Some(_) => "warning",
        None => "neutral",
    };

    vec![
        FieldView {
            label: "RUC",
            key: "ruc",
            value: value(|r| r.ruc.as_str()),
            tone: "neutral",
            wide: false,
        },
        FieldView {
            label: "Razón Social",
            key: "razonSocial",
            value: value(|r| r.razon_social.as_str()),
            tone: "neutral",
            wide: false,
        },
        FieldView {
            label: "Estado",
            key: "estado",
            value: value(|r| r.estado.as_str()),
            tone: estado_tone,
            wide: false,
        },
        FieldView {
            label: "Condición",
            key: "condicion",
            value: value(|r| r.condicion.as_str()),
            tone: condicion_tone,
            wide: false,
        },
        FieldView {
            label: "Dirección Fiscal",
            key: "direccion",
            value: value(|r| r.direccion.as_str()),
            tone: "neutral",
            wide: true,
        },
        FieldView {
            label: "Tipo de Contribuyente",
            key: "tipoContribuyente",
            value: value(|r| r.tipo_contribuyente.as_str()),
            tone: "neutral",
            wide: false,
        },
        FieldView {
            label: "Fecha de Inscripción",
            key: "fechaInscripcion",
            value: value(|r| r.fecha_inscripcion.as_str()),
            tone: "neutral",
            wide: false,
        },
    ]
}
