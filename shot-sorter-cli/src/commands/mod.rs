pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod lookup;
pub(crate) mod sync;

use shot_sorter_lib::Settings;
use shot_sorter_lib::steam::StoreClient;

use crate::CliError;

/// Store client for the configured endpoint. No request timeout.
pub(crate) fn store_client(settings: &Settings) -> Result<StoreClient, CliError> {
    Ok(StoreClient::new(settings.store_url.clone(), None)?)
}
