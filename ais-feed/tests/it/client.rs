use std::time::Duration;

use ais_core::VesselRecord;
use ais_feed::client::{StreamClient, StreamEnd};
use tokio::{io::AsyncWriteExt, net::TcpListener};

use crate::helper::spawn_server;

#[tokio::test(flavor = "multi_thread")]
async fn test_client_completes_after_max_records() {
    let helper = spawn_server().await;

    let client = StreamClient::new(helper.address, 4, Duration::from_secs(10));
    let summary = client.run().await.unwrap();

    assert_eq!(summary.end, StreamEnd::Complete);
    assert_eq!(summary.records.len(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_client_times_out_on_a_silent_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _socket = listener.accept().await;
        tokio::time::sleep(Duration::from_secs(60)).await;
    });

    let client = StreamClient::new(address, 3, Duration::from_millis(200));
    let summary = client.run().await.unwrap();

    assert_eq!(summary.end, StreamEnd::IdleTimeout);
    assert!(summary.records.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_client_distinguishes_clean_eof_from_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        for vessel in VesselRecord::sample_fleet().iter().take(2) {
            let mut line = serde_json::to_vec(vessel).unwrap();
            line.push(b'\n');
            socket.write_all(&line).await.unwrap();
        }
        // Dropping the socket closes the stream after two records.
    });

    let client = StreamClient::new(address, 5, Duration::from_secs(5));
    let summary = client.run().await.unwrap();

    assert_eq!(summary.end, StreamEnd::Eof);
    assert_eq!(summary.records.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_refused_connection_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = StreamClient::new(address, 1, Duration::from_secs(1));
    assert!(client.run().await.is_err());
}
