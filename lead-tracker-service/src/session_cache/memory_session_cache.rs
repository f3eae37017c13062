use lead_tracker_api::domain::session::ActiveSession;
use lead_tracker_api::error::ApiResult;
use lead_tracker_api::service::session_cache::SessionCache;
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemorySessionCache {
    entry: Mutex<Option<ActiveSession>>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for MemorySessionCache {
    fn load(&self) -> ApiResult<Option<ActiveSession>> {
        Ok(self.entry.lock().clone())
    }

    fn store(&self, session: &ActiveSession) -> ApiResult<()> {
        *self.entry.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        *self.entry.lock() = None;
        Ok(())
    }
}
