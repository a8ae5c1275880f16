use crate::di::{DependenciesInject, Repositories};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    /// Fully populated before the router is built and only read afterwards.
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_repositories(Repositories::postgres(&pool))
    }

    pub fn with_repositories(repos: Repositories) -> Self {
        let mut registry = Registry::default();

        let system_metrics = Arc::new(SystemMetrics::new());
        system_metrics.register(&mut registry);

        let di_container = DependenciesInject::new(repos, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        }
    }

    pub fn spawn_metrics_collector(&self) -> JoinHandle<()> {
        tokio::spawn(run_metrics_collector(self.system_metrics.clone()))
    }
}
