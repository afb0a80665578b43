//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como se guarda en la tabla
//! `vehicles` de SQLite, y los campos editables que escribe el repositorio.

use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub amp_number: String,
    pub driver_name: String,
    pub status: String,
    pub position: String,
    pub cargo: String,
    pub alert: String,
}

/// Todos los campos de un vehículo excepto `id`.
///
/// Es lo que se inserta en un alta y lo que sobrescribe por completo una
/// actualización.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFields {
    pub amp_number: String,
    pub driver_name: String,
    pub status: String,
    pub position: String,
    pub cargo: String,
    pub alert: String,
}

impl VehicleFields {
    pub fn new(amp_number: impl Into<String>, driver_name: impl Into<String>) -> Self {
        Self {
            amp_number: amp_number.into(),
            driver_name: driver_name.into(),
            ..Self::default()
        }
    }
}

impl From<Vehicle> for VehicleFields {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            amp_number: vehicle.amp_number,
            driver_name: vehicle.driver_name,
            status: vehicle.status,
            position: vehicle.position,
            cargo: vehicle.cargo,
            alert: vehicle.alert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fields_default_to_empty() {
        let fields = VehicleFields::new("A100", "J. Doe");
        assert_eq!(fields.amp_number, "A100");
        assert_eq!(fields.driver_name, "J. Doe");
        assert!(fields.status.is_empty());
        assert!(fields.position.is_empty());
        assert!(fields.cargo.is_empty());
        assert!(fields.alert.is_empty());
    }

    #[test]
    fn test_fields_from_vehicle_drop_id() {
        let vehicle = Vehicle {
            id: 7,
            amp_number: "A100".to_string(),
            driver_name: "J. Doe".to_string(),
            status: "loading".to_string(),
            position: "dock-3".to_string(),
            cargo: String::new(),
            alert: String::new(),
        };

        let fields = VehicleFields::from(vehicle.clone());
        assert_eq!(fields.amp_number, vehicle.amp_number);
        assert_eq!(fields.status, "loading");
        assert_eq!(fields.position, "dock-3");

        assert_ne!(VehicleFields::new("A100", "J. Doe"), fields);
    }
}
