use async_trait::async_trait;
use namegate_application::ports::RecordRepository;
use namegate_domain::{Address, DomainError, EncodedName, ResolutionRecord};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

type RecordRow = (Vec<u8>, String, String);

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Result<ResolutionRecord, DomainError> {
        let (name, address, updated_at) = row;
        let name = EncodedName::from_wire(&name).map_err(|e| {
            error!(error = %e, "Stored name is not valid wire format");
            DomainError::DatabaseError(e.to_string())
        })?;
        let address = address.parse::<Address>().map_err(|e| {
            error!(error = %e, address = %address, "Stored address is not valid hex");
            DomainError::DatabaseError(e.to_string())
        })?;
        Ok(ResolutionRecord {
            name,
            address,
            updated_at: Some(updated_at),
        })
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self), fields(name = %name, address = %address))]
    async fn upsert(&self, name: &EncodedName, address: Address) -> Result<(), DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let checksummed = address.to_checksum(None);
        let lower = checksummed.to_ascii_lowercase();

        // write_seq must be assigned inside the statement, under the write lock.
        sqlx::query(
            "INSERT INTO resolution_records (name, address, address_lower, write_seq, updated_at)
             VALUES (?, ?, ?, (SELECT COALESCE(MAX(write_seq), 0) + 1 FROM resolution_records), ?)
             ON CONFLICT(name) DO UPDATE SET
                address = excluded.address,
                address_lower = excluded.address_lower,
                write_seq = excluded.write_seq,
                updated_at = excluded.updated_at",
        )
        .bind(name.as_bytes())
        .bind(&checksummed)
        .bind(&lower)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to upsert resolution record");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Resolution record stored");
        Ok(())
    }

    #[instrument(skip(self), fields(name = %name))]
    async fn get_by_name(
        &self,
        name: &EncodedName,
    ) -> Result<Option<ResolutionRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT name, address, updated_at FROM resolution_records WHERE name = ?",
        )
        .bind(name.as_bytes())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resolution record by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_record).transpose()
    }

    #[instrument(skip(self))]
    async fn lookup_by_address(
        &self,
        address: Address,
    ) -> Result<Option<ResolutionRecord>, DomainError> {
        let lower = address.to_checksum(None).to_ascii_lowercase();

        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT name, address, updated_at FROM resolution_records
             WHERE address_lower = ?
             ORDER BY write_seq DESC
             LIMIT 1",
        )
        .bind(&lower)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resolution record by address");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_record).transpose()
    }
}
