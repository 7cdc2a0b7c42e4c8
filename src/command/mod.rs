pub mod demo;

pub use demo::DemoCMD;
