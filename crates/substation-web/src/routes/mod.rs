mod entities;
mod equipment;
mod health;
mod integrity;
mod maintenance;
mod search;
mod status;

pub use entities::entity_routes;
pub use equipment::equipment_routes;
pub use health::health_routes;
pub use integrity::integrity_routes;
pub use maintenance::maintenance_routes;
pub use search::search_routes;
pub use status::status_routes;
