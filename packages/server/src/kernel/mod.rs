// Kernel services shared across domains

pub mod event_bus;

pub use event_bus::EventBus;
