use crate::dto::vehicle_dto::{
    CreateVehicleRequest, DetailResponse, UpdateVehicleRequest, VehicleResponse,
};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use sqlx::SqlitePool;
use tracing::info;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<VehicleResponse, AppError> {
        let fields = request.into_fields()?;
        let vehicle = self.repository.create(fields).await?;

        info!("🚛 Vehículo {} creado (AMP {})", vehicle.id, vehicle.amp_number);
        Ok(VehicleResponse::from(vehicle))
    }

    /// El registro se localiza por el id de la ruta; un id distinto en el body se rechaza
    /// solo si el registro existe, para que un id ausente siga dando 404
    pub async fn update(
        &self,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        let (body_id, fields) = request.into_parts()?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Vehicle"));
        }
        if body_id != id {
            return Err(validation_error("id", "id in body does not match the path id"));
        }

        let vehicle = self.repository.update(id, fields).await?;

        info!("✏️  Vehículo {} actualizado", vehicle.id);
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn delete(&self, id: i64) -> Result<DetailResponse, AppError> {
        self.repository.delete(id).await?;

        info!("🗑️  Vehículo {} eliminado", id);
        Ok(DetailResponse::new("Vehicle deleted"))
    }
}
