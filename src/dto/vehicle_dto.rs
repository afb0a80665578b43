use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleFields};
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_payload;

// Request para crear un vehículo.
// Los campos obligatorios son Option para que `validator` reporte cuáles faltan.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(required(message = "field required"))]
    pub amp_number: Option<String>,
    #[validate(required(message = "field required"))]
    pub driver_name: Option<String>,
    pub status: Option<String>,
    pub position: Option<String>,
    pub cargo: Option<String>,
    pub alert: Option<String>,
}

impl CreateVehicleRequest {
    /// Validar y convertir a los campos que se guardan
    pub fn into_fields(self) -> AppResult<VehicleFields> {
        validate_payload(&self)?;

        Ok(VehicleFields {
            amp_number: self.amp_number.unwrap_or_default(),
            driver_name: self.driver_name.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            cargo: self.cargo.unwrap_or_default(),
            alert: self.alert.unwrap_or_default(),
        })
    }
}

// Request para actualizar un vehículo: el registro completo, incluido el id
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(required(message = "field required"))]
    pub id: Option<i64>,
    #[validate(required(message = "field required"))]
    pub amp_number: Option<String>,
    #[validate(required(message = "field required"))]
    pub driver_name: Option<String>,
    pub status: Option<String>,
    pub position: Option<String>,
    pub cargo: Option<String>,
    pub alert: Option<String>,
}

impl UpdateVehicleRequest {
    /// Validar y separar el id del body de los campos que se sobrescriben
    pub fn into_parts(self) -> AppResult<(i64, VehicleFields)> {
        validate_payload(&self)?;

        let fields = VehicleFields {
            amp_number: self.amp_number.unwrap_or_default(),
            driver_name: self.driver_name.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            cargo: self.cargo.unwrap_or_default(),
            alert: self.alert.unwrap_or_default(),
        };

        Ok((self.id.unwrap_or_default(), fields))
    }
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub amp_number: String,
    pub driver_name: String,
    pub status: String,
    pub position: String,
    pub cargo: String,
    pub alert: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            amp_number: vehicle.amp_number,
            driver_name: vehicle.driver_name,
            status: vehicle.status,
            position: vehicle.position,
            cargo: vehicle.cargo,
            alert: vehicle.alert,
        }
    }
}

// Respuesta con un único mensaje, p. ej. {"detail": "Vehicle deleted"}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
