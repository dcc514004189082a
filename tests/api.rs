use job_market::{build_rocket, ConfigManager};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};

fn client() -> Client {
    Client::tracked(build_rocket(&ConfigManager::default())).expect("valid rocket instance")
}

fn json_body(response: rocket::local::blocking::LocalResponse<'_>) -> Value {
    let body = response.into_string().expect("response body");
    serde_json::from_str(&body).expect("JSON body")
}

#[test]
fn health_reports_ok() {
    let client = client();
    let response = client.get("/api/health").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert!(response.headers().get_one("X-Request-Id").is_some());
    let body = json_body(response);
    assert_eq!(body["type"], "text");
    assert_eq!(body["message"], "OK");
}

#[test]
fn default_page_is_overview() {
    let client = client();
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));
    let html = response.into_string().unwrap();
    assert!(html.contains("Indian Tech Job Market Overview"));
    assert!(html.contains(r#"name="section" value="overview""#));
    assert_eq!(html.matches("Plotly.newPlot(").count(), 3);
}

#[test]
fn every_section_page_renders() {
    let client = client();
    for slug in [
        "overview",
        "market-analysis",
        "skills-insights",
        "job-recommender",
        "salary-analysis",
    ] {
        let response = client.get(format!("/?section={}", slug)).dispatch();
        assert_eq!(response.status(), Status::Ok, "section {}", slug);
        let html = response.into_string().unwrap();
        assert!(html.contains("Indian Job Market Intelligence"));
        assert!(html.contains(&format!(r#"value="{}""#, slug)));
    }
}

#[test]
fn unknown_section_page_is_404() {
    let client = client();
    let response = client.get("/?section=careers").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert!(response.into_string().unwrap().contains("Unknown section: careers"));
}

#[test]
fn cleared_city_selection_drops_comparison_chart() {
    let client = client();
    let with_defaults = client.get("/?section=market-analysis").dispatch();
    assert!(with_defaults
        .into_string()
        .unwrap()
        .contains("market-city-comparison"));

    let cleared = client
        .get("/?section=market-analysis&applied=true")
        .dispatch();
    let html = cleared.into_string().unwrap();
    assert!(!html.contains("market-city-comparison"));
    assert!(html.contains("City Comparison Tool"));
}

#[test]
fn view_json_reflects_city_selection() {
    let client = client();
    let response = client
        .get("/api/views/market-analysis?city=Chennai&city=Delhi&applied=true")
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = json_body(response);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["section"], "market-analysis");

    let chart = body["data"]["body"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["element"] == "chart" && e["id"] == "market-city-comparison")
        .expect("comparison chart")
        .clone();
    assert_eq!(chart["labels"], json!(["Chennai", "Delhi"]));
    assert_eq!(chart["values"], json!([683.0, 450.0]));
}

#[test]
fn unknown_view_is_json_404() {
    let client = client();
    let response = client.get("/api/views/careers").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body = json_body(response);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_code"], "UNKNOWN_SECTION");
}

#[test]
fn recommender_page_submission() {
    let client = client();
    let response = client
        .get("/?section=job-recommender&skill=Python&skill=SQL&skill=Machine%20Learning&submit=true&applied=true")
        .dispatch();
    let html = response.into_string().unwrap();
    assert!(html.contains("1. Senior Data Scientist"));
    assert!(html.contains("3. Data Engineer"));
    assert!(html.contains("You have: Python, SQL, Machine Learning"));

    let empty = client
        .get("/?section=job-recommender&submit=true&applied=true")
        .dispatch();
    let html = empty.into_string().unwrap();
    assert!(html.contains("Please select at least one skill!"));
    assert!(!html.contains("Senior Data Scientist"));
}

#[test]
fn recommendations_api_returns_three_candidates() {
    let client = client();
    let response = client
        .post("/api/recommendations")
        .header(ContentType::JSON)
        .body(r#"{"skills": ["Python", "SQL", "Machine Learning"], "preferred_cities": ["Pune"], "min_salary": 30}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = json_body(response);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["title"], "Senior Data Scientist");
    assert_eq!(data[1]["title"], "ML Engineer");
    assert_eq!(data[2]["title"], "Data Engineer");
    assert_eq!(data[0]["has"], json!(["Python", "SQL", "Machine Learning"]));
    assert_eq!(data[1]["has"], json!(["Python", "SQL"]));
    assert_eq!(data[2]["needs"], json!(["Databricks", "ETL"]));
}

#[test]
fn recommendations_api_rejects_empty_skills() {
    let client = client();
    let response = client
        .post("/api/recommendations")
        .header(ContentType::JSON)
        .body(r#"{"skills": []}"#)
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body = json_body(response);
    assert_eq!(body["error_code"], "NO_SKILLS_SELECTED");
    assert_eq!(body["error"], "Please select at least one skill!");
}

#[test]
fn recommendations_api_treats_missing_skills_as_empty() {
    let client = client();
    let response = client
        .post("/api/recommendations")
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    assert_eq!(json_body(response)["error_code"], "NO_SKILLS_SELECTED");
}

#[test]
fn oversized_salary_query_is_clamped() {
    let client = client();
    let response = client
        .get("/?section=job-recommender&min_salary=99999999999999999999")
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let html = response.into_string().unwrap();
    assert!(html.contains(r#"name="min_salary" min="0" max="50" value="50""#));
    assert!(html.contains("₹50 LPA"));
}

#[test]
fn snapshot_and_datasets() {
    let client = client();
    let body = json_body(client.get("/api/snapshot").dispatch());
    assert_eq!(body["data"]["cities"]["Bangalore"], 845);
    assert_eq!(body["data"]["salary"]["avg"], 15.6);
    assert_eq!(body["data"]["coverage"]["jobs_analyzed"], 4665);

    let body = json_body(client.get("/api/snapshot/seniority").dispatch());
    assert_eq!(body["data"][2]["label"], "Junior");

    let missing = client.get("/api/snapshot/weather").dispatch();
    assert_eq!(missing.status(), Status::NotFound);
    assert_eq!(json_body(missing)["error_code"], "UNKNOWN_DATASET");
}

#[test]
fn dataset_csv_download() {
    let client = client();
    let response = client.get("/api/snapshot/companies/csv").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::CSV));
    assert_eq!(
        response.headers().get_one("Content-Disposition"),
        Some("attachment; filename=\"companies.csv\"")
    );
    let csv = response.into_string().unwrap();
    assert!(csv.starts_with("Company,Openings\nAmazon,99\n"));
}

#[test]
fn skill_shares_are_rounded() {
    let client = client();
    let body = json_body(client.get("/api/skills/shares").dispatch());
    assert_eq!(body["data"][0]["skill"], "AI");
    assert_eq!(body["data"][0]["percentage"], 21.2);
    assert_eq!(body["data"][1]["percentage"], 13.4);
}

#[test]
fn sections_listing_and_cors() {
    let client = client();
    let response = client.get("/api/sections").dispatch();
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    let body = json_body(response);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][3]["slug"], "job-recommender");

    let preflight = client.options("/api/recommendations").dispatch();
    assert_eq!(preflight.status(), Status::Ok);
}

#[test]
fn unknown_api_route_uses_error_envelope() {
    let client = client();
    let response = client.get("/api/nothing-here").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(json_body(response)["error_code"], "NOT_FOUND");
}

#[test]
fn repeated_renders_are_identical() {
    let client = client();
    let uri = "/api/views/skills-insights";
    let first = client.get(uri).dispatch().into_string().unwrap();
    let second = client.get(uri).dispatch().into_string().unwrap();
    assert_eq!(first, second);
}
