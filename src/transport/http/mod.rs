pub mod router;
pub mod server;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod deploy;
    pub mod health;
    pub mod lamports;
    pub mod page;
}

pub use router::{create_router, ApiDoc};
pub use server::serve;
pub use types::AppState;
