use crate::controller::Dashboard;
use crate::loader::{self, DataSource};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_source: DataSource,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(data_source: DataSource, dashboard: Dashboard) -> Self {
        Self {
            data_source,
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }

    /// Runs the one startup load. The lock is only taken once the fetch has
    /// resolved, so pages keep serving the loading placeholder meanwhile.
    pub async fn load(&self) {
        let result = loader::load(&self.data_source).await;
        self.dashboard.lock().await.finish_load(result);
    }
}
