use crate::models::vehicle::{Vehicle, VehicleFields};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::debug;

// Las escrituras abren su propia transacción: commit explícito al terminar,
// rollback automático si se sale antes por un error.
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, amp_number, driver_name, status, position, cargo, alert
            FROM vehicles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, amp_number, driver_name, status, position, cargo, alert
            FROM vehicles
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn create(&self, fields: VehicleFields) -> Result<Vehicle, AppError> {
        let mut tx = self.pool.begin().await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (amp_number, driver_name, status, position, cargo, alert)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, amp_number, driver_name, status, position, cargo, alert
            "#,
        )
        .bind(fields.amp_number)
        .bind(fields.driver_name)
        .bind(fields.status)
        .bind(fields.position)
        .bind(fields.cargo)
        .bind(fields.alert)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("Vehicle {} inserted", vehicle.id);

        Ok(vehicle)
    }

    /// Sobrescribe todos los campos salvo `id`
    pub async fn update(&self, id: i64, fields: VehicleFields) -> Result<Vehicle, AppError> {
        let mut tx = self.pool.begin().await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET amp_number = ?2, driver_name = ?3, status = ?4, position = ?5, cargo = ?6, alert = ?7
            WHERE id = ?1
            RETURNING id, amp_number, driver_name, status, position, cargo, alert
            "#,
        )
        .bind(id)
        .bind(fields.amp_number)
        .bind(fields.driver_name)
        .bind(fields.status)
        .bind(fields.position)
        .bind(fields.cargo)
        .bind(fields.alert)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Vehicle"))?;

        tx.commit().await?;
        debug!("Vehicle {} updated", id);

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehicle"));
        }

        tx.commit().await?;
        debug!("Vehicle {} deleted", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConnection;

    async fn repository() -> VehicleRepository {
        let db = DatabaseConnection::in_memory().await.unwrap();
        VehicleRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = repository().await;
        let first = repo.create(VehicleFields::new("A100", "J. Doe")).await.unwrap();
        let second = repo.create(VehicleFields::new("A101", "M. Roe")).await.unwrap();

        assert_eq!(first.id, 1);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = repository().await;
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repository().await;
        let result = repo.update(999, VehicleFields::new("A100", "J. Doe")).await;
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Vehicle not found"));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = repository().await;
        repo.create(VehicleFields::new("A100", "J. Doe")).await.unwrap();

        let result = repo.delete(999).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let repo = repository().await;
        let first = repo.create(VehicleFields::new("A100", "J. Doe")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(VehicleFields::new("A100", "J. Doe")).await.unwrap();
        assert_ne!(second.id, first.id);
    }
}
