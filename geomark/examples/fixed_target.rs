//! This example annotates the map against a constant point of interest. The location provider
//! reports a simulated position, and a tap on the drawn line reports the distance.

use anyhow::Result;
use geomark::control::{AnnotationController, EventProcessor, MapEvent};
use geomark::geomark_types::latlon;
use geomark::location::{acquire_origin, FixedLocationProvider};
use geomark::{LogPresenter, RenderCommand, SessionBuilder};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let mut session = SessionBuilder::new()
        .with_fixed_target(latlon!(10.762622, 106.660172)?)
        .with_renderer(print_command)
        .with_presenter(LogPresenter)
        .build();

    let mut events = EventProcessor::default();
    events.add_handler(AnnotationController);

    let provider = FixedLocationProvider::new(latlon!(10.772622, 106.670172)?);
    acquire_origin(&provider, &mut session).await?;

    events.handle(&MapEvent::LineTapped, &mut session);

    let distance = session.request_distance()?;
    println!("Distance to the point of interest: {distance}");

    Ok(())
}

fn print_command(command: &RenderCommand) {
    match serde_json::to_string(command) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("Cannot serialize {}: {err}", command.name()),
    }
}
