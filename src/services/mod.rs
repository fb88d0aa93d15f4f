pub mod chart_service;
pub mod gradient_service;
pub mod sparkline_service;
pub mod svg_service;
pub mod trajectory_service;
