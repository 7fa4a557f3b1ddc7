use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::app_settings::dsl::*;
use rebalancer_core::constants::{DEFAULT_DISPLAY_CURRENCY, DISPLAY_CURRENCY_SETTING_KEY};
use rebalancer_core::errors::Result;
use rebalancer_core::settings::{Settings, SettingsRepositoryTrait, SettingsUpdate};

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

fn upsert(conn: &mut SqliteConnection, key: &str, value: &str) -> Result<()> {
    diesel::replace_into(app_settings)
        .values(&AppSettingDB {
            setting_key: key.to_string(),
            setting_value: value.to_string(),
        })
        .execute(conn)
        .into_core()?;
    Ok(())
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let mut conn = get_connection(&self.pool)?;
        let all_settings: Vec<(String, String)> = app_settings
            .select((setting_key, setting_value))
            .load::<(String, String)>(&mut conn)
            .into_core()?;

        let mut settings = Settings::default();

        for (key, value) in all_settings {
            if key == DISPLAY_CURRENCY_SETTING_KEY {
                settings.display_currency = value;
            }
        }

        Ok(settings)
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        let settings = new_settings.clone();
        self.writer
            .exec(move |conn| {
                match settings.display_currency {
                    Some(ref currency) => upsert(conn, DISPLAY_CURRENCY_SETTING_KEY, currency),
                    None => Ok(()),
                }
            })
            .await
    }

    fn get_setting(&self, setting_key_param: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        let result = app_settings
            .filter(setting_key.eq(setting_key_param))
            .select(setting_value)
            .first::<String>(&mut conn);

        match result {
            Ok(value) => Ok(value),
            Err(diesel::result::Error::NotFound)
                if setting_key_param == DISPLAY_CURRENCY_SETTING_KEY =>
            {
                Ok(DEFAULT_DISPLAY_CURRENCY.to_string())
            }
            Err(e) => Err(StorageError::from(e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use rebalancer_core::errors::{DatabaseError, Error};
    use tempfile::tempdir;

    async fn create_test_repository() -> (SettingsRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone()).expect("Failed to spawn writer");

        (SettingsRepository::new(pool, writer), temp_dir)
    }

    #[tokio::test]
    async fn test_fresh_database_uses_default_currency() {
        let (repo, _dir) = create_test_repository().await;

        assert_eq!(repo.get_settings().unwrap().display_currency, "USD");
        assert_eq!(repo.get_setting(DISPLAY_CURRENCY_SETTING_KEY).unwrap(), "USD");
    }

    #[tokio::test]
    async fn test_update_settings_persists_currency() {
        let (repo, _dir) = create_test_repository().await;

        repo.update_settings(&SettingsUpdate {
            display_currency: Some("GBP".to_string()),
        })
        .await
        .unwrap();

        assert_eq!(repo.get_settings().unwrap().display_currency, "GBP");
    }

    #[tokio::test]
    async fn test_update_settings_overwrites_value() {
        let (repo, _dir) = create_test_repository().await;

        for code in ["EUR", "GBP"] {
            repo.update_settings(&SettingsUpdate {
                display_currency: Some(code.to_string()),
            })
            .await
            .unwrap();
        }

        assert_eq!(repo.get_setting(DISPLAY_CURRENCY_SETTING_KEY).unwrap(), "GBP");
    }

    #[tokio::test]
    async fn test_unknown_key_is_not_found() {
        let (repo, _dir) = create_test_repository().await;

        let result = repo.get_setting("no_such_key");

        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }
}
