use crate::config::cors::CorsConfig;
use crate::config::server::ServerConfig;
use crate::store::SharedStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: SharedStore,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        store: SharedStore::new(),
        cors_config: CorsConfig::from_env(),
        server_config: ServerConfig::from_env(),
    }
}
