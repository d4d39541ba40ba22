//! Geomark annotates a map with the user's current location, a target point, a line connecting the
//! two and a camera fitted to show both of them.
//!
//! # Quick start
//!
//! ```
//! use geomark::location::{acquire_origin, FixedLocationProvider};
//! use geomark::control::{AnnotationController, EventProcessor, MapEvent};
//! use geomark::geomark_types::latlon;
//! use geomark::{RecordingPresenter, SessionBuilder};
//!
//! let presenter = RecordingPresenter::new();
//! let mut session = SessionBuilder::new()
//!     .with_fixed_target(latlon!(10.762622, 106.660172).unwrap())
//!     .with_presenter(presenter.clone())
//!     .build();
//!
//! let mut events = EventProcessor::default();
//! events.add_handler(AnnotationController);
//!
//! let provider = FixedLocationProvider::new(latlon!(10.0, 106.0).unwrap());
//! tokio_test::block_on(acquire_origin(&provider, &mut session)).unwrap();
//!
//! events.handle(&MapEvent::LineTapped, &mut session);
//! assert_eq!(presenter.shown().len(), 1);
//! ```
//!
//! # Main components
//!
//! * [`Annotator`] is the annotation state machine. It knows nothing about the map: every
//!   transition returns the [`RenderCommand`]s that bring the map up to date.
//! * [`Session`] owns an annotator together with a [`MapRenderer`], which executes the commands
//!   on the actual map widget, and a [`Presenter`], which shows distances and errors to the user.
//! * [`location`] acquires the current location asynchronously and sets it as the session origin.
//! * [`control`] turns map taps into session updates.
//!
//! The camera fit of an annotation is computed by [`camera::fit`], antimeridian included.

mod annotation;
pub mod camera;
mod color;
pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod location;
mod presenter;
mod render;
mod session;

pub use annotation::{AnnotationState, Annotator};
pub use color::Color;
pub use command::{LineStyle, MarkerRole, RenderCommand};
pub use config::{AnnotationConfig, AnnotationMode};
pub use error::GeomarkError;
pub use presenter::{LogPresenter, Presented, Presenter, RecordingPresenter};
pub use render::{LogRenderer, MapRenderer, RecordingRenderer};
pub use session::{Session, SessionBuilder};

// Reexport geomark_types
pub use geomark_types;
