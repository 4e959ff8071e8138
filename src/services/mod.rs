pub mod axis_service;
pub mod chart_service;
pub mod month_service;
pub mod session_service;
pub mod view_service;
pub mod zoom_service;

pub use session_service::ChartSession;
pub use zoom_service::ZoomSelector;
