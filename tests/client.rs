use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use serde_json::{json, Value};
use admin_reports::models::{ProcessRequest, ReportStatus};
use admin_reports::{ApiRequest, ClientConfig, HttpMethod, ReportsClient, ReportsError, Transport};

type Responder = Box<dyn Fn(&ApiRequest) -> Result<Value, ReportsError> + Send + Sync>;

struct FakeTransport {
    requests: Mutex<Vec<ApiRequest>>,
    respond: Responder,
}

impl FakeTransport {
    fn new<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&ApiRequest) -> Result<Value, ReportsError> + Send + Sync + 'static,
    {
        Arc::new(Self { requests: Mutex::new(Vec::new()), respond: Box::new(respond) })
    }

    fn replying(value: Value) -> Arc<Self> {
        Self::new(move |_| Ok(value.clone()))
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ReportsError> {
        let result = (self.respond)(&request);
        self.requests.lock().unwrap().push(request);
        result
    }
}

fn client_with(transport: &Arc<FakeTransport>) -> ReportsClient<Arc<FakeTransport>> {
    ReportsClient::with_transport(&ClientConfig::default(), Arc::clone(transport))
}

#[tokio::test]
async fn test_summary_request_and_body() {
    let transport = FakeTransport::replying(json!({"total": 5}));
    let client = client_with(&transport);

    let summary = client.get_summary().await.unwrap();
    assert_eq!(summary, json!({"total": 5}));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], ApiRequest::get("http://localhost:8080/admin/reports/summary"));
}

#[tokio::test]
async fn test_list_request() {
    let list = json!([
        {"reportId": 1, "status": "PENDING", "reportCount": 5},
        {"reportId": 2, "status": "PENDING", "reportCount": 7}
    ]);
    let transport = FakeTransport::replying(list.clone());
    let client = client_with(&transport);

    assert_eq!(client.get_list().await.unwrap(), list);
    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url, "http://localhost:8080/admin/reports");
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn test_detail_request() {
    let transport = FakeTransport::new(|req| {
        if req.url.ends_with("/42") {
            Ok(json!({"id": 42, "status": "open"}))
        } else {
            Err(ReportsError::Http { status: 404, body: String::new() })
        }
    });
    let client = client_with(&transport);

    let detail = client.get_detail(42).await.unwrap();
    assert_eq!(detail, json!({"id": 42, "status": "open"}));
    assert_eq!(transport.requests()[0].url, "http://localhost:8080/admin/reports/42");
}

#[tokio::test]
async fn test_detail_id_interpolated_verbatim() {
    let transport = FakeTransport::replying(Value::Null);
    let client = client_with(&transport);

    client.get_detail("R-0001").await.unwrap();
    client.get_detail("../summary").await.unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "http://localhost:8080/admin/reports/R-0001",
            "http://localhost:8080/admin/reports/../summary",
        ]
    );
}

#[tokio::test]
async fn test_process_forwards_payload_unmodified() {
    let payload = json!({
        "reportId": 42,
        "status": "REJECTED",
        "memo": {"reason": "duplicate", "tags": ["spam", null, 1.5]}
    });
    let transport = FakeTransport::replying(json!({"processed": true}));
    let client = client_with(&transport);

    let result = client.process(&payload).await.unwrap();
    assert_eq!(result, json!({"processed": true}));

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, "http://localhost:8080/admin/reports/process");
    assert_eq!(requests[0].body.as_ref(), Some(&payload));
}

#[tokio::test]
async fn test_process_with_typed_request() {
    let transport = FakeTransport::replying(Value::Null);
    let client = client_with(&transport);

    let request = ProcessRequest::new(7, ReportStatus::Valid).unwrap();
    let result = client.process(&request).await.unwrap();
    assert_eq!(result, Value::Null);
    assert_eq!(transport.requests()[0].body, Some(json!({"reportId": 7, "status": "VALID"})));
}

#[tokio::test]
async fn test_response_returned_as_received() {
    let body = json!({"Total_Count": 3, "pending": null, "nested": {"a": [1, 2, 3]}});
    let transport = FakeTransport::replying(body.clone());
    let client = client_with(&transport);

    assert_eq!(client.get_summary().await.unwrap(), body);
}

#[tokio::test]
async fn test_transport_failure_propagated_by_every_operation() {
    let transport = FakeTransport::new(|_| Err(ReportsError::Transport("connection refused".into())));
    let client = client_with(&transport);

    let results = vec![
        client.get_summary().await,
        client.get_list().await,
        client.get_detail(1).await,
        client.process(&json!({"reportId": 1})).await,
    ];

    for result in results {
        match result {
            Err(ReportsError::Transport(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
    assert_eq!(transport.requests().len(), 4);
}

#[tokio::test]
async fn test_http_error_not_rewritten() {
    let transport = FakeTransport::new(|_| {
        Err(ReportsError::Http { status: 409, body: r#"{"error":"already processed"}"#.into() })
    });
    let client = client_with(&transport);

    match client.process(&json!({"reportId": 3})).await {
        Err(ReportsError::Http { status, body }) => {
            assert_eq!(status, 409);
            assert_eq!(body, r#"{"error":"already processed"}"#);
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_one_request_per_call() {
    let transport = FakeTransport::new(|_| Err(ReportsError::Http { status: 503, body: String::new() }));
    let client = client_with(&transport);

    assert!(client.get_summary().await.is_err());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_concurrent_calls() {
    let transport = FakeTransport::new(|req| Ok(json!({"url": req.url})));
    let client = client_with(&transport);

    let calls = (1..=10).map(|id| client.get_detail(id));
    let results = futures::future::join_all(calls).await;

    for (id, result) in (1..=10).zip(results) {
        let expected = format!("http://localhost:8080/admin/reports/{}", id);
        assert_eq!(result.unwrap(), json!({"url": expected}));
    }
    assert_eq!(transport.requests().len(), 10);
}

#[tokio::test]
async fn test_custom_base_url() {
    let transport = FakeTransport::replying(json!({}));
    let config = ClientConfig::new("https://admin.example.com/admin/reports/").unwrap();
    let client = ReportsClient::with_transport(&config, Arc::clone(&transport));

    client.get_summary().await.unwrap();
    assert_eq!(transport.requests()[0].url, "https://admin.example.com/admin/reports/summary");
}
