use std::io::Write;

use clap::Parser;
use inspect::cli::Cli;
use inspect::config::Config;
use inspect::error::InspectError;
use serde_json::{Value, json};
use tempfile::NamedTempFile;

const STORE: &str = r#"{
    "auth": { "user": { "_id": "u-1", "name": "Dana", "role": "admin" }, "isSuccess": true },
    "contact": {
        "messages": [
            { "_id": "c-1", "subject": "Quote", "status": "new", "priority": "high",
              "createdAt": "2024-06-09T08:00:00Z" },
            { "_id": "c-2", "subject": "Thanks", "status": "replied",
              "createdAt": "2024-04-01T08:00:00Z" }
        ]
    },
    "notification": null,
    "payment": {
        "payments": [
            { "_id": "p-1", "amount": 120, "status": "completed", "booking": "b-1",
              "createdAt": "2024-06-10T09:00:00Z" },
            { "_id": "p-2", "amount": 80.25, "status": "pending", "booking": "b-2",
              "createdAt": "2024-06-10T10:00:00Z" },
            { "_id": "p-3", "amount": 60, "status": "completed", "booking": "b-1",
              "createdAt": "2024-06-08T10:00:00Z" }
        ],
        "isError": true,
        "errorMessage": "Failed to fetch payment stats"
    },
    "services": {
        "services": [
            { "_id": "s-1", "name": "Standard", "category": "residential", "price": 80, "duration": 120 },
            { "_id": "s-2", "name": "Deep", "category": "residential", "price": 150, "duration": 240 },
            { "_id": "s-3", "name": "Office", "category": "commercial", "price": 200, "duration": 180,
              "isActive": false }
        ],
        "serviceStats": {
            "topServices": [
                { "_id": "s-1", "name": "Standard", "completedBookings": 12 },
                { "_id": "s-2", "name": "Deep", "completedBookings": 30 },
                { "_id": "s-3", "name": "Office", "completedBookings": 7 }
            ]
        }
    },
    "users": {
        "users": [
            { "_id": "u-1", "name": "Dana", "role": "admin" },
            { "_id": "u-2", "name": "Ken", "role": "cleaner" },
            { "_id": "u-3", "name": "Ana", "role": "customer", "isActive": false }
        ]
    }
}"#;

fn store_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(STORE.as_bytes()).unwrap();
    file
}

fn run(file: &NamedTempFile, argv: &[&str]) -> inspect::error::Result<Value> {
    let mut full = vec!["snapshot-inspect", "--now", "2024-06-10T12:00:00Z"];
    full.extend_from_slice(argv);
    let cli = Cli::try_parse_from(full).unwrap();
    let config = Config::default().with_overrides(Some(file.path().to_path_buf()), None, None);
    inspect::run(&cli, &config)
}

#[test]
fn filters_payments_by_status() {
    let file = store_file();
    let value = run(&file, &["query", "payment.by_status", "--status", "completed"]).unwrap();
    let ids: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["p-1", "p-3"]);
}

#[test]
fn revenue_and_today_use_the_fixed_clock() {
    let file = store_file();
    assert_eq!(
        run(&file, &["query", "payment.total_revenue"]).unwrap(),
        json!(180)
    );
    let today = run(&file, &["query", "payment.today"]).unwrap();
    assert_eq!(today.as_array().unwrap().len(), 2);
    assert_eq!(
        run(&file, &["query", "payment.today_revenue"]).unwrap(),
        json!(120)
    );
}

#[test]
fn recent_messages_exclude_old_ones() {
    let file = store_file();
    let value = run(&file, &["query", "contact.recent"]).unwrap();
    let messages = value.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["id"], "c-1");
}

#[test]
fn lifecycle_flags_come_through() {
    let file = store_file();
    let status = run(&file, &["query", "payment.status"]).unwrap();
    assert_eq!(status["isError"], true);
    assert_eq!(
        run(&file, &["query", "payment.message"]).unwrap(),
        json!("Failed to fetch payment stats")
    );
    let status = run(&file, &["query", "notification.status"]).unwrap();
    assert_eq!(status["isLoading"], false);
}

#[test]
fn price_range_is_inclusive() {
    let file = store_file();
    let value = run(
        &file,
        &["query", "services.by_price", "--min", "80", "--max", "150"],
    )
    .unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);

    let inverted = run(
        &file,
        &["query", "services.by_price", "--min", "150", "--max", "80"],
    )
    .unwrap();
    assert_eq!(inverted, json!([]));
}

#[test]
fn top_services_honour_limit() {
    let file = store_file();
    let value = run(&file, &["query", "services.top", "--limit", "2"]).unwrap();
    let counts: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["completedBookings"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, [30, 12]);

    let none = run(&file, &["query", "services.top", "--limit", "-1"]).unwrap();
    assert_eq!(none, json!([]));
}

#[test]
fn auth_queries_read_the_signed_in_user() {
    let file = store_file();
    assert_eq!(
        run(&file, &["query", "auth.is_admin"]).unwrap(),
        json!(true)
    );
    assert_eq!(run(&file, &["query", "auth.role"]).unwrap(), json!("admin"));
}

#[test]
fn missing_argument_is_an_error() {
    let file = store_file();
    let err = run(&file, &["query", "users.by_role"]).unwrap_err();
    assert!(matches!(
        err,
        InspectError::MissingArgument {
            argument: "role",
            ..
        }
    ));
}

#[test]
fn unknown_query_is_an_error() {
    let file = store_file();
    let err = run(&file, &["query", "bookings.all"]).unwrap_err();
    assert!(matches!(err, InspectError::UnknownQuery(_)));
}

#[test]
fn missing_snapshot_is_an_error() {
    let cli = Cli::try_parse_from(["snapshot-inspect", "summary"]).unwrap();
    let config = Config::default().with_overrides(
        Some("/nonexistent/store.json".into()),
        None,
        None,
    );
    let err = inspect::run(&cli, &config).unwrap_err();
    assert!(matches!(err, InspectError::Snapshot(_)));
}

#[test]
fn list_needs_no_snapshot() {
    let cli = Cli::try_parse_from(["snapshot-inspect", "list"]).unwrap();
    let config = Config::default().with_overrides(
        Some("/nonexistent/store.json".into()),
        None,
        None,
    );
    let value = inspect::run(&cli, &config).unwrap();
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"payment.by_status"));
    assert!(names.contains(&"users.top_cleaners"));
}

#[test]
fn summary_reports_counts_and_failures() {
    let file = store_file();
    let value = run(&file, &["summary"]).unwrap();
    assert_eq!(value["authenticated"], true);
    assert_eq!(value["totalUsers"], 3);
    assert_eq!(value["activeUsers"], 2);
    assert_eq!(value["unreadMessages"], 1);
    assert_eq!(value["pendingPayments"], 1);
    assert_eq!(value["activeServices"], 2);
    assert_eq!(value["categories"], json!(["residential", "commercial"]));

    let payment = value["subdomains"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["subdomain"] == "payment")
        .unwrap();
    assert_eq!(payment["isError"], true);
    assert_eq!(payment["records"], 3);
}
