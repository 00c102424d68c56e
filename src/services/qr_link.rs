//! Enlaces de las etiquetas QR
//! 
//! La etiqueta de un camión codifica la URL de su ficha en el frontend.
//! Al escanearla se toma el último segmento de la ruta como id del camión.

use axum::http::Uri;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QrLinkError {
    #[error("Invalid QR code format. Please scan a valid truck QR code.")]
    InvalidFormat,
    #[error("Invalid QR code. Could not find truck ID.")]
    MissingTruckId,
}

/// URL que se imprime en la etiqueta QR del camión
pub fn truck_link(public_app_url: &str, truck_id: Uuid) -> String {
    format!("{}/trucks/{}", public_app_url.trim_end_matches('/'), truck_id)
}

/// Resolver el contenido escaneado al id del camión
pub fn resolve_scanned_truck_id(payload: &str) -> Result<Uuid, QrLinkError> {
    let uri: Uri = payload.trim().parse().map_err(|_| QrLinkError::InvalidFormat)?;

    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(QrLinkError::InvalidFormat);
    }

    let segment = uri.path().rsplit('/').next().unwrap_or_default();
    if segment.is_empty() {
        return Err(QrLinkError::MissingTruckId);
    }

    Uuid::parse_str(segment).map_err(|_| QrLinkError::MissingTruckId)
}
