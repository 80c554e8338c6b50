//! Configuration management for the bounded Game of Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, InputConfig, OutputConfig, OutputFormat, Settings, TimingConfig,
};
