use httpmock::prelude::*;
use leads_enrich::{CliConfig, EnrichEngine, EnrichError, LeadPipeline, LocalStorage};
use tempfile::TempDir;

fn test_config(server: &MockServer, input: &str, output: &str) -> CliConfig {
    CliConfig {
        input: input.to_string(),
        output: output.to_string(),
        api_endpoint: server.url("/search"),
        api_key: Some("test-key".to_string()),
        language: "en".to_string(),
        region: "pl".to_string(),
        timeout_secs: 5,
        delay_ms: 0,
        verbose: false,
        monitor: false,
    }
}

fn write_input(dir: &TempDir, contents: &str) -> (String, String) {
    let input = dir.path().join("leads.csv");
    let output = dir.path().join("leads_with_info.csv");
    std::fs::write(&input, contents).unwrap();
    (
        input.to_str().unwrap().to_string(),
        output.to_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_end_to_end_enrichment_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let (input, output) = write_input(&temp_dir, "Name,City\nCafe Mila,Krakow\n");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Cafe Mila Krakow")
            .query_param("hl", "en")
            .query_param("gl", "pl")
            .query_param("api_key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "knowledge_graph": {
                    "title": "Cafe Mila",
                    "menu": "https://cafemila.pl/menu",
                    "review_count": 412,
                    "phone": "+48 12 345 67 89",
                    "list": [
                        { "link": "https://glovoapp.com/pl/krk/cafe-mila" }
                    ],
                    "source": { "link": "https://cafemila.pl" },
                    "profiles": [
                        { "name": "Instagram", "link": "https://instagram.com/cafemila" }
                    ]
                },
                "organic_results": [
                    { "link": "https://facebook.com/cafemila" },
                    { "link": "https://pyszne.pl/cafe-mila" }
                ]
            }));
    });

    let config = test_config(&server, &input, &output);
    let pipeline = LeadPipeline::new(LocalStorage::new(), config).unwrap();
    let engine = EnrichEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());
    api_mock.assert();

    let csv = std::fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Name,City,Website,Google Reviews,Phone,Facebook,Instagram,Order"
    );
    assert_eq!(
        lines.next().unwrap(),
        "Cafe Mila,Krakow,https://cafemila.pl/menu,412,+48 12 345 67 89,\
         https://facebook.com/cafemila,https://instagram.com/cafemila,\"glovo, pyszne\""
    );
    assert!(lines.next().is_none());
}

#[tokio::test]
async fn test_empty_payload_produces_all_empty_fields() {
    let temp_dir = TempDir::new().unwrap();
    let (input, output) = write_input(&temp_dir, "Name,City\nEmpty Spot,Lodz\n");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Empty Spot Lodz");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    let config = test_config(&server, &input, &output);
    let pipeline = LeadPipeline::new(LocalStorage::new(), config).unwrap();
    let engine = EnrichEngine::new(pipeline);

    assert!(engine.run().await.is_ok());
    api_mock.assert();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().nth(1).unwrap(), "Empty Spot,Lodz,,,,,,");
}

#[tokio::test]
async fn test_lead_failure_does_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    let (input, output) = write_input(
        &temp_dir,
        "Name,City\nBroken Bar,Warszawa\nCafe Mila,Krakow\n",
    );

    let server = MockServer::start();
    let failing_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Broken Bar Warszawa");
        then.status(500);
    });
    let working_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Cafe Mila Krakow");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "knowledge_graph": { "phone": "+48 12 345 67 89" }
            }));
    });

    let config = test_config(&server, &input, &output);
    let pipeline = LeadPipeline::new(LocalStorage::new(), config).unwrap();
    let engine = EnrichEngine::new(pipeline);

    // The batch must finish despite the 500 on the first lead.
    assert!(engine.run().await.is_ok());
    failing_mock.assert();
    working_mock.assert();

    let csv = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Broken Bar,Warszawa,,,,,,");
    assert_eq!(lines[2], "Cafe Mila,Krakow,,,+48 12 345 67 89,,,");
}

#[tokio::test]
async fn test_malformed_json_counts_as_lead_failure() {
    let temp_dir = TempDir::new().unwrap();
    let (input, output) = write_input(&temp_dir, "Name,City\nOdd Payload,Poznan\n");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Odd Payload Poznan");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json at all");
    });

    let config = test_config(&server, &input, &output);
    let pipeline = LeadPipeline::new(LocalStorage::new(), config).unwrap();
    let engine = EnrichEngine::new(pipeline);

    assert!(engine.run().await.is_ok());
    api_mock.assert();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().nth(1).unwrap(), "Odd Payload,Poznan,,,,,,");
}

#[tokio::test]
async fn test_missing_required_columns_aborts_before_any_request() {
    let temp_dir = TempDir::new().unwrap();
    let (input, output) = write_input(&temp_dir, "Name,Town\nCafe Mila,Krakow\n");

    let server = MockServer::start();
    // No mocks registered: any request against the server would 404 and the
    // assertion below would not see a ValidationError.

    let config = test_config(&server, &input, &output);
    let pipeline = LeadPipeline::new(LocalStorage::new(), config).unwrap();
    let engine = EnrichEngine::new(pipeline);

    let result = engine.run().await;
    assert!(matches!(result, Err(EnrichError::ValidationError { .. })));
    assert!(!std::path::Path::new(&output).exists());
}

#[tokio::test]
async fn test_extra_input_columns_are_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let (input, output) = write_input(
        &temp_dir,
        "Segment,Name,City\nhoreca,Cafe Mila,Krakow\n",
    );

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Cafe Mila Krakow");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "organic_results": [
                    { "link": "https://www.facebook.com/cafemila" }
                ]
            }));
    });

    let config = test_config(&server, &input, &output);
    let pipeline = LeadPipeline::new(LocalStorage::new(), config).unwrap();
    let engine = EnrichEngine::new(pipeline);

    assert!(engine.run().await.is_ok());
    api_mock.assert();

    let csv = std::fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Segment,Name,City,Website,Google Reviews,Phone,Facebook,Instagram,Order"
    );
    assert_eq!(
        lines.next().unwrap(),
        "horeca,Cafe Mila,Krakow,,,,https://www.facebook.com/cafemila,,"
    );
}
