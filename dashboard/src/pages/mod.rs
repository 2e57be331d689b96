pub mod centers;
pub mod formations;
pub mod vehicles;

pub use centers::CentersPage;
pub use formations::FormationsPage;
pub use vehicles::VehiclesPage;
