//! Sample datasets shared by integration tests.

use serde_json::{Value, json};

/// Three weekdays with one signed numeric column.
pub fn weekday_tickets() -> Value {
    json!([
        {"day": "Mon", "ticketCount": 5},
        {"day": "Tue", "ticketCount": -2},
        {"day": "Wed", "ticketCount": 0}
    ])
}

/// Monthly support figures wrapped in `items`, with a nested breakdown
/// and a column that is missing from most records.
pub fn support_trends() -> Value {
    json!({
        "items": [
            {
                "id": "2025-01",
                "date": "2025-01-31",
                "month": "January",
                "totalTickets": 120,
                "satisfaction": 4.2,
                "priority": {"low": 60, "medium": 40, "high": 20}
            },
            {
                "id": "2025-02",
                "date": "2025-02-28",
                "month": "February",
                "totalTickets": 150,
                "satisfaction": 4.5,
                "priority": {"low": 70, "medium": 50, "high": 30}
            },
            {
                "id": "2025-03",
                "date": "2025-03-31",
                "month": "March",
                "totalTickets": 90,
                "satisfaction": 3.9,
                "priority": {"low": 30, "medium": 30, "high": 30},
                "notes": "holiday staffing"
            }
        ]
    })
}

/// Square correlation matrix in the shape pandas writes with `to_json`.
pub fn correlation_matrix() -> Value {
    json!([
        {"Unnamed: 0": "tickets", "tickets": 1.0, "wait": 0.82, "score": -0.45},
        {"Unnamed: 0": "wait", "tickets": 0.82, "wait": 1.0, "score": -0.1},
        {"Unnamed: 0": "score", "tickets": -0.45, "wait": -0.1, "score": 1.0}
    ])
}

/// One record per month of 2025, `tickets` counting up from 1.
pub fn monthly_series() -> Value {
    let records: Vec<Value> = (1..=12)
        .map(|month| {
            json!({
                "date": format!("2025-{:02}-01", month),
                "tickets": month
            })
        })
        .collect();
    Value::Array(records)
}
