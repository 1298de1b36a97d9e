//! Background rendering for interactive exploration.
//!
//! The platform layer submits each new viewport; a single worker thread
//! renders the most recent one and hands the frame to a presenter port.
//! Submitting a newer viewport cancels the render in flight, and cancelled
//! renders are never presented.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
