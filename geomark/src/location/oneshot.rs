use async_trait::async_trait;
use geomark_types::geo::impls::GeoPoint2d;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use super::{LocationError, LocationProvider};

/// Sending half of a [`OneshotLocationProvider`]. Platform code sends the location result through
/// it once the fix (or the failure) is known.
pub type OneshotLocationSender = oneshot::Sender<Result<GeoPoint2d, LocationError>>;

/// Provider that delivers a single location result produced elsewhere, e.g. by a platform
/// location callback.
///
/// The first request waits for the result. If the sender is dropped without sending, the request
/// fails with [`LocationError::ProviderUnavailable`]. Every later request fails with
/// [`LocationError::NoFixAvailable`].
#[derive(Debug)]
pub struct OneshotLocationProvider {
    receiver: Mutex<Option<oneshot::Receiver<Result<GeoPoint2d, LocationError>>>>,
}

impl OneshotLocationProvider {
    /// Creates a provider together with the sender that completes it.
    pub fn channel() -> (OneshotLocationSender, Self) {
        let (sender, receiver) = oneshot::channel();
        (
            sender,
            Self {
                receiver: Mutex::new(Some(receiver)),
            },
        )
    }
}

#[async_trait]
impl LocationProvider for OneshotLocationProvider {
    async fn request_current_location(&self) -> Result<GeoPoint2d, LocationError> {
        let receiver = self.receiver.lock().take();
        let Some(receiver) = receiver else {
            return Err(LocationError::NoFixAvailable);
        };

        match receiver.await {
            Ok(result) => result,
            Err(_) => Err(LocationError::ProviderUnavailable(
                "location source was dropped".into(),
            )),
        }
    }
}
