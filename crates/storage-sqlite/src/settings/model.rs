//! Row type for the key/value settings table.

use diesel::prelude::*;

#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_settings)]
pub struct AppSettingDB {
    pub setting_key: String,
    pub setting_value: String,
}
