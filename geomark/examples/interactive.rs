//! This example shows the interactive mode: the target follows the user's taps. Location and tap
//! callbacks come from a simulated platform task and are funneled into a single queue, so the
//! session is only touched from one place.

use anyhow::Result;
use geomark::control::{AnnotationController, EventProcessor, EventPropagation, MapEvent};
use geomark::geomark_types::latlon;
use geomark::location::{acquire_origin, LocationError, OneshotLocationProvider};
use geomark::{RenderCommand, Session, SessionBuilder};
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let mut session = SessionBuilder::new()
        .interactive()
        .with_distance_reporting(true)
        .with_renderer(|command: &RenderCommand| println!("render: {command:?}"))
        .build();

    let mut events = EventProcessor::default();
    events.add_handler(|event: &MapEvent, _: &mut Session| {
        log::info!("Map event: {event:?}");
        EventPropagation::Propagate
    });
    events.add_handler(AnnotationController);

    // Made before the location is known, so it is ignored.
    events.handle(&MapEvent::PointTapped(latlon!(10.80, 106.70)?), &mut session);

    let (location_sender, provider) = OneshotLocationProvider::channel();
    let (tap_sender, mut taps) = mpsc::unbounded_channel();

    let platform = tokio::spawn(async move {
        if location_sender
            .send(latlon!(10.762622, 106.660172).map_err(|_| LocationError::NoFixAvailable))
            .is_err()
        {
            log::warn!("Location request was cancelled");
        }

        let points = [(10.7769, 106.7009), (10.7626, 106.6822), (10.7500, 106.6500)];
        for (lat, lon) in points {
            let Ok(point) = latlon!(lat, lon) else {
                continue;
            };
            if tap_sender.send(MapEvent::PointTapped(point)).is_err() {
                return;
            }
        }

        let _ = tap_sender.send(MapEvent::LineTapped);
    });

    acquire_origin(&provider, &mut session).await?;

    while let Some(event) = taps.recv().await {
        events.handle(&event, &mut session);
    }

    platform.await?;
    println!("Final state: {:?}", session.state());

    Ok(())
}
