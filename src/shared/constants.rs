/// Number of digits in a RUC
pub const RUC_LENGTH: usize = 11;

/// Value shown for any registry field the upstream service left empty
pub const PLACEHOLDER: &str = "No disponible";

// =============================================================================
// CLIENT-FACING MESSAGES
// =============================================================================

/// Proxy rejected the identifier (missing or wrong length)
pub const MSG_INVALID_RUC: &str = "RUC inválido. Debe tener 11 dígitos.";

/// Upstream answered with a non-success status
pub const MSG_NOT_FOUND: &str = "No se encontró información para este RUC.";

/// Transport or parse failure while talking to the upstream service
pub const MSG_LOOKUP_FAILED: &str =
    "Error al consultar la información. Por favor, intente nuevamente.";

/// Form submitted with a candidate that is not 11 digits
pub const MSG_FORM_INVALID_RUC: &str = "El RUC debe tener 11 dígitos";

/// Form could not reach the proxy at all
pub const MSG_FORM_TRANSPORT_FAILED: &str =
    "Error al consultar el RUC. Por favor, intente nuevamente.";
