use crate::domain::session::ActiveSession;
use crate::error::ApiResult;

/// Client-local storage holding at most one cached session.
pub trait SessionCache: Send + Sync {
    fn load(&self) -> ApiResult<Option<ActiveSession>>;

    fn store(&self, session: &ActiveSession) -> ApiResult<()>;

    /// Removes the cached session; succeeds when nothing is cached.
    fn clear(&self) -> ApiResult<()>;
}
