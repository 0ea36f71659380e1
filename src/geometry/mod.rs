pub mod chart;
pub mod length;
pub mod spline;
