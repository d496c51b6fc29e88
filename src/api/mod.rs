// Thin namespace wrapper for API-layer components
pub mod handlers {
    pub use crate::handlers::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod routes {
    pub use crate::routes::*;
}

pub mod openapi {
    pub use crate::openapi::*;
}
