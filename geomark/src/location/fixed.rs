use async_trait::async_trait;
use geomark_types::geo::impls::GeoPoint2d;

use super::{LocationError, LocationProvider, Permission};

/// Provider that always returns the same result. Useful for simulators, demos and tests.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    result: Result<GeoPoint2d, LocationError>,
    permission: Permission,
}

impl FixedLocationProvider {
    /// Provider that always reports the given location.
    pub fn new(location: GeoPoint2d) -> Self {
        Self {
            result: Ok(location),
            permission: Permission::Granted,
        }
    }

    /// Provider that always fails with the given error.
    pub fn failing(error: LocationError) -> Self {
        Self {
            result: Err(error),
            permission: Permission::Granted,
        }
    }

    /// Sets the answer to permission requests.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn request_current_location(&self) -> Result<GeoPoint2d, LocationError> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use geomark_types::latlon;

    use super::*;

    #[test]
    fn returns_configured_result() {
        let point = latlon!(1.0, 2.0).unwrap();
        let provider = FixedLocationProvider::new(point);

        tokio_test::block_on(async {
            assert_eq!(provider.request_permission().await, Permission::Granted);
            assert_eq!(provider.request_current_location().await, Ok(point));
            assert_eq!(provider.request_current_location().await, Ok(point));
        });
    }

    #[test]
    fn permission_can_be_denied() {
        let provider = FixedLocationProvider::new(latlon!(1.0, 2.0).unwrap())
            .with_permission(Permission::Denied);

        let permission = tokio_test::block_on(provider.request_permission());
        assert_eq!(permission, Permission::Denied);
    }
}
