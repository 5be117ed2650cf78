pub mod calibration;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod floorplan;
pub mod heatmap;
pub mod io;
pub mod network;
pub mod observation;
pub mod render;
pub mod scan;
pub mod session;
pub mod store;
