//---------------------------------------
pub mod web_api {
    pub mod routes;
    pub mod controllers;
    pub mod api_error;
    pub mod extractors;
    pub mod validation;
}

pub use web_api::routes::map_routes;
pub use web_api::controllers::*;
pub use web_api::{api_error, extractors, validation};
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
}

pub use shared::models::*;
pub use shared::dto::*;
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
    pub mod store_error;
}

pub use data_access::{data_context, store_error};
//---------------------------------------

pub mod board;
