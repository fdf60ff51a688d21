use std::{collections::HashSet, time::Duration};

use ais_core::{Mmsi, VesselRecord};
use tokio::time::timeout;

use crate::helper::spawn_server;

const READ_TIMEOUT: Duration = Duration::from_secs(10);

async fn next_record(
    stream: &mut ais_feed::decoder::RecordStream<tokio::net::TcpStream>,
) -> VesselRecord {
    timeout(READ_TIMEOUT, stream.next())
        .await
        .expect("timed out waiting for a record")
        .expect("stream ended unexpectedly")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connected_clients_receive_drifting_fixture_vessels() {
    let helper = spawn_server().await;
    let mut first = helper.connect().await;
    let mut second = helper.connect().await;

    let fleet = VesselRecord::sample_fleet();
    let mmsis: HashSet<Mmsi> = fleet.iter().map(|v| v.mmsi).collect();

    for stream in [&mut first, &mut second] {
        for _ in 0..3 {
            let record = next_record(stream).await;
            assert!(mmsis.contains(&record.mmsi));

            let fixture = fleet.iter().find(|v| v.mmsi == record.mmsi).unwrap();
            assert!((record.latitude - fixture.latitude).abs() < 0.01);
            assert!((record.longitude - fixture.longitude).abs() < 0.01);
            assert!(record.speed >= 0.0);
            assert!((0.0..360.0).contains(&record.course));
            assert_eq!(record.heading, record.course as i32 % 360);
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_disconnecting_client_does_not_interrupt_remaining() {
    let helper = spawn_server().await;
    let mut keep = helper.connect().await;
    let doomed = helper.connect().await;

    // Make sure both connections were admitted before dropping one.
    next_record(&mut keep).await;
    drop(doomed);

    for _ in 0..5 {
        next_record(&mut keep).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_client_connected_mid_run_receives_records() {
    let helper = spawn_server().await;

    // A few ticks pass with nobody listening.
    tokio::time::sleep(crate::helper::TICK_INTERVAL * 3).await;

    let mut stream = helper.connect().await;
    for _ in 0..3 {
        next_record(&mut stream).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shutdown_closes_client_streams() {
    let helper = spawn_server().await;
    let mut stream = helper.connect().await;

    next_record(&mut stream).await;
    helper.shutdown();

    // Drain whatever was in flight, the stream must end cleanly.
    let ended = timeout(READ_TIMEOUT, async {
        while stream.next().await.is_some() {}
    })
    .await;
    assert!(ended.is_ok());
}
