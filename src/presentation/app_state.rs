// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::session_store::SessionStore;

pub struct AppState {
    pub sessions: SessionStore,
    pub dashboard: DashboardService,
}
