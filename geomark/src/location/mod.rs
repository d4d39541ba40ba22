//! Acquisition of the user's current location.
//!
//! Location is the only asynchronous input of a session. A [`LocationProvider`] is asked once for
//! permission and a position fix; [`acquire_origin`] awaits the result and hands a successful fix
//! to [`Session::set_origin`]. Failures are shown to the user and leave the session unchanged, so
//! the caller may simply try again.

use async_trait::async_trait;
use geomark_types::geo::impls::GeoPoint2d;
use thiserror::Error;

use crate::session::Session;

mod fixed;
mod oneshot;

pub use fixed::FixedLocationProvider;
pub use oneshot::{OneshotLocationProvider, OneshotLocationSender};

/// Reasons the current location could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user did not allow access to the location.
    #[error("permission denied")]
    PermissionDenied,
    /// The provider works, but has no position fix.
    #[error("no location fix available")]
    NoFixAvailable,
    /// The provider cannot be used.
    #[error("location provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Answer to a location permission request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Permission {
    /// Location may be read.
    Granted,
    /// Location may not be read.
    Denied,
}

/// Source of the device location.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Asks for the permission to read the location. Granted by default.
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    /// Requests a single position fix.
    async fn request_current_location(&self) -> Result<GeoPoint2d, LocationError>;
}

/// Acquires the current location and sets it as the origin of the session.
///
/// Returns the acquired point. On failure the error is shown through the session presenter and
/// the annotation state is not touched.
pub async fn acquire_origin(
    provider: &dyn LocationProvider,
    session: &mut Session,
) -> Result<GeoPoint2d, LocationError> {
    match request_location(provider).await {
        Ok(origin) => {
            session.set_origin(origin);
            Ok(origin)
        }
        Err(err) => {
            session.report_location_error(&err);
            Err(err)
        }
    }
}

async fn request_location(provider: &dyn LocationProvider) -> Result<GeoPoint2d, LocationError> {
    if provider.request_permission().await == Permission::Denied {
        return Err(LocationError::PermissionDenied);
    }

    let location = provider.request_current_location().await?;
    log::debug!("Location fix received: {location}");

    Ok(location)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geomark_types::geo::distance::distance;
    use geomark_types::latlon;

    use super::*;
    use crate::annotation::AnnotationState;
    use crate::camera::fit;
    use crate::command::{LineStyle, MarkerRole, RenderCommand};
    use crate::control::{AnnotationController, EventProcessor, MapEvent};
    use crate::presenter::{Presented, RecordingPresenter};
    use crate::render::RecordingRenderer;
    use crate::SessionBuilder;

    struct DenyingProvider;

    #[async_trait]
    impl LocationProvider for DenyingProvider {
        async fn request_permission(&self) -> Permission {
            Permission::Denied
        }

        async fn request_current_location(&self) -> Result<GeoPoint2d, LocationError> {
            unreachable!("location must not be requested without permission")
        }
    }

    #[test]
    fn permission_denied_keeps_session_empty() {
        let renderer = RecordingRenderer::new();
        let presenter = RecordingPresenter::new();
        let mut session = SessionBuilder::new()
            .with_renderer(renderer.clone())
            .with_presenter(presenter.clone())
            .build();

        let result = tokio_test::block_on(acquire_origin(&DenyingProvider, &mut session));

        assert_matches!(result, Err(LocationError::PermissionDenied));
        assert_eq!(*session.state(), AnnotationState::Empty);
        assert!(renderer.commands().is_empty());
        assert_eq!(
            presenter.shown(),
            vec![Presented::LocationError(LocationError::PermissionDenied)]
        );
    }

    #[test]
    fn retry_after_failure() {
        let mut session = SessionBuilder::new().build();

        let failing = FixedLocationProvider::failing(LocationError::NoFixAvailable);
        let result = tokio_test::block_on(acquire_origin(&failing, &mut session));
        assert_matches!(result, Err(LocationError::NoFixAvailable));
        assert_eq!(*session.state(), AnnotationState::Empty);

        let origin = latlon!(10.0, 106.0).unwrap();
        let provider = FixedLocationProvider::new(origin);
        let result = tokio_test::block_on(acquire_origin(&provider, &mut session));
        assert_eq!(result, Ok(origin));
        assert_eq!(session.state().origin(), Some(origin));
    }

    #[test]
    fn fixed_target_end_to_end() {
        let renderer = RecordingRenderer::new();
        let presenter = RecordingPresenter::new();
        let target = latlon!(10.762622, 106.660172).unwrap();
        let mut session = SessionBuilder::new()
            .with_fixed_target(target)
            .with_renderer(renderer.clone())
            .with_presenter(presenter.clone())
            .build();

        let mut events = EventProcessor::default();
        events.add_handler(AnnotationController);

        let origin = latlon!(10.0, 106.0).unwrap();
        let provider = FixedLocationProvider::new(origin);
        tokio_test::block_on(acquire_origin(&provider, &mut session)).unwrap();

        assert_eq!(
            renderer.commands(),
            vec![
                RenderCommand::PlaceMarker {
                    role: MarkerRole::Origin,
                    position: origin,
                    label: "Current location".into(),
                },
                RenderCommand::CenterCamera {
                    position: origin,
                    zoom: 15.0,
                },
                RenderCommand::PlaceMarker {
                    role: MarkerRole::Target,
                    position: target,
                    label: "Selected location".into(),
                },
                RenderCommand::DrawLine {
                    from: origin,
                    to: target,
                    style: LineStyle::default(),
                },
                RenderCommand::AnimateToBounds(fit(&[origin, target], 300).unwrap()),
            ]
        );

        assert!(presenter.shown().is_empty());
        events.handle(&MapEvent::LineTapped, &mut session);
        assert_eq!(
            presenter.shown(),
            vec![Presented::Distance(distance(&origin, &target))]
        );
    }

    #[test]
    fn interactive_end_to_end() {
        let renderer = RecordingRenderer::new();
        let presenter = RecordingPresenter::new();
        let mut session = SessionBuilder::new()
            .interactive()
            .with_renderer(renderer.clone())
            .with_presenter(presenter.clone())
            .build();

        let mut events = EventProcessor::default();
        events.add_handler(AnnotationController);

        // Tap before the location is known.
        events.handle(&MapEvent::PointTapped(latlon!(11.0, 107.0).unwrap()), &mut session);
        assert_eq!(*session.state(), AnnotationState::Empty);

        let (sender, provider) = OneshotLocationProvider::channel();
        let origin = latlon!(10.0, 106.0).unwrap();
        sender.send(Ok(origin)).unwrap();
        tokio_test::block_on(acquire_origin(&provider, &mut session)).unwrap();
        renderer.take();

        let first = latlon!(10.5, 106.5).unwrap();
        let second = latlon!(9.5, 105.5).unwrap();
        events.handle(&MapEvent::PointTapped(first), &mut session);
        events.handle(&MapEvent::PointTapped(second), &mut session);

        assert_eq!(session.state().target(), Some(second));
        let lines: Vec<_> = renderer
            .commands()
            .into_iter()
            .filter(|c| matches!(c, RenderCommand::DrawLine { .. }))
            .collect();
        assert_eq!(lines.len(), 2);

        events.handle(&MapEvent::LineTapped, &mut session);
        assert!(presenter.shown().is_empty());
    }
}
