//! HTTP client tests against a throwaway local server that answers one
//! request with a canned response.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::time::Duration;

use medcheck_ml::{MlApiClient, MlError, PredictionService};

struct CannedServer {
    base_url: String,
    requests: mpsc::Receiver<String>,
}

fn serve_once(status_line: &str, body: &str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream);
        let mut request = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 {
                break;
            }
            if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap_or(0);
            }
            let end_of_headers = line == "\r\n";
            request.push_str(&line);
            if end_of_headers {
                break;
            }
        }
        let mut body = vec![0u8; content_length];
        let _ = reader.read_exact(&mut body);
        request.push_str(&String::from_utf8_lossy(&body));
        let _ = tx.send(request);

        let mut stream = reader.into_inner();
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    CannedServer {
        base_url: format!("http://{addr}/api"),
        requests: rx,
    }
}

#[test]
fn constructor_trims_trailing_slash() {
    let client = MlApiClient::new("http://localhost:5000/api/", 10);
    assert_eq!(client.base_url(), "http://localhost:5000/api");
    assert_eq!(client.timeout_secs(), 10);
}

#[test]
fn default_local_points_at_port_5000() {
    let client = MlApiClient::default_local();
    assert_eq!(client.base_url(), "http://localhost:5000/api");
    assert_eq!(client.timeout_secs(), 10);
}

#[tokio::test]
async fn health_check_parses_status() {
    let server = serve_once(
        "200 OK",
        r#"{"status":"healthy","message":"Medical ML API is running","model_loaded":true}"#,
    );
    let client = MlApiClient::new(&server.base_url, 5);

    let health = client.health_check().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert!(health.model_loaded);

    let request = server.requests.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.starts_with("GET /api/health "), "{request}");
}

#[tokio::test]
async fn predict_posts_symptoms_and_parses_predictions() {
    let server = serve_once(
        "200 OK",
        r#"{
            "predictions": [
                {"disease": "Influenza", "confidence": 71.5},
                {"disease": "COVID-19", "confidence": 20.0}
            ],
            "input_symptoms": ["fever", "cough"],
            "total_symptoms_in_model": 39,
            "model_type": "Random Forest Classifier"
        }"#,
    );
    let client = MlApiClient::new(&server.base_url, 5);

    let response = client
        .predict(vec!["fever".to_string(), "cough".to_string()])
        .await
        .unwrap();
    assert_eq!(response.predictions.len(), 2);
    assert_eq!(response.predictions[0].disease, "Influenza");
    assert_eq!(response.total_symptoms_in_model, 39);

    let request = server.requests.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.starts_with("POST /api/predict "), "{request}");
    assert!(request.contains(r#"{"symptoms":["fever","cough"]}"#), "{request}");
}

#[tokio::test]
async fn model_info_accepts_unbounded_depth() {
    let server = serve_once(
        "200 OK",
        r#"{
            "model_type": "Random Forest Classifier",
            "n_estimators": 100,
            "max_depth": null,
            "total_features": 39,
            "total_diseases": 20,
            "top_important_symptoms": [{"symptom": "fever", "importance": 0.12}]
        }"#,
    );
    let client = MlApiClient::new(&server.base_url, 5);

    let info = client.model_info().await.unwrap();
    assert_eq!(info.n_estimators, 100);
    assert_eq!(info.max_depth, None);
    assert_eq!(info.top_important_symptoms[0].symptom, "fever");
}

#[tokio::test]
async fn retrain_posts_without_body() {
    let server = serve_once(
        "200 OK",
        r#"{"message":"Model retrained successfully","accuracy":0.97,"total_samples":1000}"#,
    );
    let client = MlApiClient::new(&server.base_url, 5);

    let summary = client.retrain().await.unwrap();
    assert_eq!(summary.total_samples, 1000);

    let request = server.requests.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.starts_with("POST /api/retrain "), "{request}");
}

#[tokio::test]
async fn symptom_listing_parses() {
    let server = serve_once(
        "200 OK",
        r#"{"symptoms":[{"id":"fever","name":"Fever","category":"General"}],"total_count":1}"#,
    );
    let client = MlApiClient::new(&server.base_url, 5);

    let listing = client.symptoms().await.unwrap();
    assert_eq!(listing.total_count, 1);
    assert_eq!(listing.symptoms[0].name, "Fever");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = serve_once(
        "500 Internal Server Error",
        r#"{"error":"Prediction failed"}"#,
    );
    let client = MlApiClient::new(&server.base_url, 5);

    let err = client.predict(vec!["fever".to_string()]).await.unwrap_err();
    assert!(matches!(err, MlError::Status { status: 500, .. }), "{err}");
}

#[tokio::test]
async fn malformed_body_maps_to_response_parse() {
    let server = serve_once("200 OK", r#"{"status": 42}"#);
    let client = MlApiClient::new(&server.base_url, 5);

    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, MlError::ResponseParse(_)), "{err}");
}

#[tokio::test]
async fn refused_connection_maps_to_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MlApiClient::new(&format!("http://{addr}/api"), 2);
    let err = client.health_check().await.unwrap_err();
    assert!(
        matches!(err, MlError::Connection { .. } | MlError::Timeout { .. }),
        "{err}"
    );
}

#[tokio::test]
async fn silent_server_maps_to_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (release, hold) = mpsc::channel::<()>();
    std::thread::spawn(move || {
        // Accept and hold the connection open without answering.
        let _conn = listener.accept();
        let _ = hold.recv_timeout(Duration::from_secs(10));
    });

    let client = MlApiClient::new(&format!("http://{addr}/api"), 1);
    let err = client.model_info().await.unwrap_err();
    assert!(matches!(err, MlError::Timeout { secs: 1, .. }), "{err}");
    let _ = release.send(());
}
