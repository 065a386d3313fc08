//! Dependency injection module using Shaku.
//!
//! `PortalDataModule` wires the DAOs and the message catalog over one
//! [`DatabasePool`], MySQL in production or SQLite when embedded.

use crate::{
    AccessCheckpointLinkDaoImpl, AccessCheckpointLinkDaoImplParameters, AccessMenuLinkDaoImpl,
    AccessMenuLinkDaoImplParameters, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    PasswordHistoryDaoImpl, PasswordHistoryDaoImplParameters, TableNames,
};
use portal_config::{AppConfig, I18nConfig};
use portal_core::{module, Locale, PortalResult, StaticMessageSource, StaticMessageSourceParameters};
use std::sync::Arc;
use tracing::info;

module! {
    pub PortalDataModule {
        components = [
            DatabasePool,
            AccessCheckpointLinkDaoImpl,
            AccessMenuLinkDaoImpl,
            PasswordHistoryDaoImpl,
            StaticMessageSource,
        ],
        providers = [],
    }
}

/// Builds the message catalog from configuration.
///
/// Starts from the built-in English and Portuguese messages and layers
/// any bundles found in `bundle_dir` on top.
pub fn message_source(config: &I18nConfig) -> PortalResult<StaticMessageSource> {
    let mut source =
        StaticMessageSource::with_defaults().with_default_locale(Locale::parse(&config.default_locale)?);
    if let Some(dir) = &config.bundle_dir {
        source.load_dir(dir)?;
    }
    Ok(source)
}

/// Connects to the configured database and builds the data module.
pub async fn build_data_module(config: &AppConfig) -> PortalResult<Arc<PortalDataModule>> {
    let pool = DatabasePool::connect(&config.database).await?;
    assemble_data_module(&pool, config)
}

/// Builds the data module around an existing pool.
pub fn assemble_data_module(pool: &DatabasePool, config: &AppConfig) -> PortalResult<Arc<PortalDataModule>> {
    let tables = TableNames::new(config.database.table_prefix.clone())?;
    let messages = message_source(&config.i18n)?;

    let module = PortalDataModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: pool.inner().clone(),
        })
        .with_component_parameters::<AccessCheckpointLinkDaoImpl>(AccessCheckpointLinkDaoImplParameters {
            tables: tables.clone(),
        })
        .with_component_parameters::<AccessMenuLinkDaoImpl>(AccessMenuLinkDaoImplParameters {
            tables: tables.clone(),
        })
        .with_component_parameters::<PasswordHistoryDaoImpl>(PasswordHistoryDaoImplParameters { tables })
        .with_component_parameters::<StaticMessageSource>(StaticMessageSourceParameters::from(messages))
        .build();

    info!(table_prefix = %config.database.table_prefix, "Portal data module assembled");
    Ok(Arc::new(module))
}
