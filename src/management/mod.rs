mod exchange;
mod session;
mod store;
mod sync;

pub use exchange::CodeExchanger;
pub use exchange::ExchangeOutcome;
pub use session::SessionManager;
pub use session::SessionState;
pub use store::ACCESS_TOKEN_KEY;
pub use store::REFRESH_TOKEN_KEY;
pub use store::SessionStore;
pub use store::StoreError;
pub use sync::fetch_timeline;
pub use sync::sync_user_data;
