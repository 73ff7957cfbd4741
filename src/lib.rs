pub mod configuration;
pub mod domain;
pub mod fetcher;
pub mod notifier;
pub mod persistence;
pub mod prompt;
pub mod startup;
pub mod telemetry;
