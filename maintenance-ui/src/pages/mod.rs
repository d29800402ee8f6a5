mod maintenance;

pub use maintenance::MaintenancePage;
