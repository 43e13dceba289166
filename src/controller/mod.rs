//! Paginated fetch-and-render loop
//!
//! - `gallery_controller`: the synchronous state machine
//! - `session`: async driver pairing the controller with an image source
//! - `trigger`: strategy deciding how the next page is requested
//! - `feedback`: fixed user-facing messages and the notifier seam

pub mod feedback;
pub mod gallery_controller;
pub mod session;
pub mod trigger;

pub use feedback::{Feedback, Notifier};
pub use gallery_controller::{GalleryController, LoadOutcome, PageRequest};
pub use session::SearchSession;
pub use trigger::LoadTrigger;
