pub mod extract;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;

pub use extract::AppJson;
pub use routes::create_router;
pub use state::AppState;
