use recording_service_impl::{HEADERS_PEER, RecordingReqResp, SILENT_PEER, UNREACHABLE_PEER};
use reqresp_core::client::{CallOptions, ReqRespClient, SendRequest};
use reqresp_service::ReqRespServer;
use reqresp_service::pb::Topic;
use std::time::Duration;
use tonic::Code;


fn setup_client() -> (
    ReqRespClient<ReqRespServer<RecordingReqResp>>,
    RecordingReqResp,
) {
    let service = RecordingReqResp::default();
    let client = ReqRespClient::new(ReqRespServer::new(service.clone()));
    (client, service)
}

fn recorded_topic(service: &RecordingReqResp, index: usize) -> Option<Topic> {
    service.requests()[index]
        .msg
        .clone()
        .and_then(|msg| msg.topic)
        .expect("the optional topic wrapper must always be sent")
        .topic
}

#[tokio::test]
async fn test_send_returns_reply_payload() {
    let (client, _) = setup_client();

    let reply = client.send("peer-a", "r", None).await.unwrap();

    assert_eq!(reply, "r");
}

#[tokio::test]
async fn test_send_forwards_peer_and_payload() {
    let (client, service) = setup_client();

    client.send("peer-a", "hello", None).await.unwrap();

    let requests = service.requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.peer.as_ref().unwrap().peer_id, "peer-a");
    assert_eq!(
        request.msg.as_ref().unwrap().data.as_ref().unwrap().data,
        "hello"
    );
}

#[tokio::test]
async fn test_absent_topic_differs_from_empty_topic() {
    let (client, service) = setup_client();

    client.send("peer-a", "data", None).await.unwrap();
    client.send("peer-a", "data", Some("")).await.unwrap();

    assert_eq!(recorded_topic(&service, 0), None);
    assert_eq!(
        recorded_topic(&service, 1),
        Some(Topic {
            topic: String::new()
        })
    );
}

#[tokio::test]
async fn test_present_topic_is_sent() {
    let (client, service) = setup_client();

    client.send("peer-a", "data", Some("t")).await.unwrap();

    assert_eq!(
        recorded_topic(&service, 0),
        Some(Topic {
            topic: "t".to_string()
        })
    );
}

#[tokio::test]
async fn test_empty_inputs_reach_the_server() {
    let (client, service) = setup_client();

    let reply = client.send("", "", None).await.unwrap();

    assert_eq!(reply, "");
    assert_eq!(service.requests().len(), 1);
}

#[tokio::test]
async fn test_failure_status_message_is_kept_verbatim() {
    let (client, _) = setup_client();

    let err = client
        .send(UNREACHABLE_PEER, "data", Some("t"))
        .await
        .expect_err("a failed call must not return a payload");

    assert_eq!(err.message(), "boom");
    assert_eq!(err.to_string(), "boom");
    assert_eq!(err.code(), Code::Unavailable);
}

#[tokio::test]
async fn test_missing_payload_is_an_error() {
    let (client, _) = setup_client();

    let err = client
        .send(SILENT_PEER, "data", None)
        .await
        .expect_err("a response without payload must not be an empty success");

    assert_eq!(err.code(), Code::Internal);
}

#[tokio::test]
async fn test_concurrent_sends_get_their_own_reply() {
    let (client, service) = setup_client();

    let (first, second) = tokio::join!(
        client.send("peer-a", "first", Some("a")),
        client.send("peer-b", "second", None),
    );

    assert_eq!(first.unwrap(), "first");
    assert_eq!(second.unwrap(), "second");
    assert_eq!(service.requests().len(), 2);
}

#[tokio::test]
async fn test_concurrent_sends_from_spawned_tasks() {
    let (client, _) = setup_client();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let data = format!("payload-{i}");
                let reply = client.send("peer-a", &data, None).await.unwrap();
                (data, reply)
            })
        })
        .collect();

    for handle in handles {
        let (data, reply) = handle.await.unwrap();
        assert_eq!(data, reply);
    }
}

#[tokio::test]
async fn test_send_request_forwards_call_options() {
    let (client, _) = setup_client();

    let options = CallOptions::default()
        .with_header("x-trace", "trace-42")
        .unwrap()
        .with_timeout(Duration::from_secs(5));

    let reply = client
        .send_request(SendRequest::new(HEADERS_PEER, "data"), options)
        .await
        .unwrap();

    assert_eq!(reply, "trace-42");
}

#[tokio::test]
async fn test_inputs_stay_usable_after_send() {
    let (client, _) = setup_client();

    let peer_id = String::from("peer-a");
    let data = String::from("hello");
    let topic = String::from("t");

    client
        .send(&peer_id, &data, Some(topic.as_str()))
        .await
        .unwrap();
    let reply = client
        .send(&peer_id, &data, Some(topic.as_str()))
        .await
        .unwrap();

    assert_eq!(reply, data);
    assert_eq!((peer_id.as_str(), topic.as_str()), ("peer-a", "t"));
}

#[tokio::test]
async fn test_connect_rejects_invalid_url() {
    let result = ReqRespClient::connect("not a url").await;

    assert!(matches!(
        result,
        Err(reqresp_core::client::ClientConnectError::InvalidUrl(url, _)) if url == "not a url"
    ));
}

#[tokio::test]
async fn test_lazy_client_reports_transport_failure() {
    // Nothing listens on port 1
    let client = ReqRespClient::connect_lazy("http://127.0.0.1:1").unwrap();

    let err = client
        .send("peer-a", "data", None)
        .await
        .expect_err("an unreachable server must fail the call");

    assert!(!err.message().is_empty());
}
