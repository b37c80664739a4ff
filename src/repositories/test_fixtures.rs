// src/repositories/test_fixtures.rs
//
// Shared marketing database fixture for the report repository tests.
// Dates are relative to today so the windowed reports stay stable.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rusqlite::params;

use crate::db::{create_memory_pool, get_connection, initialize_database, ConnectionPool};

pub fn days_ago(days: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Empty, migrated in-memory database
pub fn empty_pool() -> Arc<ConnectionPool> {
    let pool = create_memory_pool().unwrap();
    initialize_database(&get_connection(&pool).unwrap()).unwrap();
    Arc::new(pool)
}

/// Two shows and a handful of bookings, campaigns, feedback and partners.
///
/// Show 1 "The Great Show" (event E1) has 4 bookings, show 2 "Movie Night"
/// (event E2) has 1, show 3 "Quiet Evening" has none.
pub fn seeded_pool() -> Arc<ConnectionPool> {
    let pool = empty_pool();
    let conn = get_connection(&pool).unwrap();

    let in_ten_days = (Utc::now().date_naive() + Duration::days(10))
        .format("%Y-%m-%d")
        .to_string();

    conn.execute_batch(
        "INSERT INTO shows VALUES (2, 'Movie Night', '2025-01-01', '20:00');
         INSERT INTO shows VALUES (3, 'Quiet Evening', '2025-01-02', '19:00');

         INSERT INTO companies VALUES (1, 'Acme Ltd', 'Wile Coyote', 'wile@acme.test');
         INSERT INTO companies VALUES (2, 'Globex', 'Hank Scorpio', 'hank@globex.test');

         INSERT INTO marketing_campaigns VALUES ('C1', 'E1', 'Social', 30, 200, '2025-03-01', '2025-03-31', 1);
         INSERT INTO marketing_campaigns VALUES ('C2', 'E1', 'Social', 20, 300, '2025-03-05', '2025-03-20', 0);
         INSERT INTO marketing_campaigns VALUES ('C3', 'E1', 'Email', 10, 50, '2025-03-10', '2025-04-30', 1);
         INSERT INTO marketing_campaigns VALUES ('C4', 'E2', 'Print', 5, 0, '2025-03-01', '2025-03-02', 1);

         INSERT INTO attendees VALUES (1, 'E1-1', '18-25');
         INSERT INTO attendees VALUES (2, 'E1-1', '18-25');
         INSERT INTO attendees VALUES (3, 'E1-1', '65+');

         INSERT INTO feedback VALUES (1, 'E1-1', 'Positive', 'Sound', 5.0, 'Great mix');
         INSERT INTO feedback VALUES (2, 'E1-1', 'Negative', 'Seating', 2.0, 'Seats too narrow');
         INSERT INTO feedback VALUES (3, 'E1-1', 'Negative', 'Seating', 1.0, 'No legroom');
         INSERT INTO feedback VALUES (4, 'E1-1', 'Neutral', 'Sound', 3.0, '');

         INSERT INTO discounts VALUES ('D1', 'E1', 'Student', 20.0);
         INSERT INTO discounts VALUES ('D2', 'E1', 'Senior', 15.0);
         INSERT INTO discounts VALUES ('D3', 'E1', 'Student', 10.0);

         INSERT INTO partnerships VALUES (1, 'E1', 'Sponsor', 'Brewery Co', 'Logo on banners', 'Foyer');
         INSERT INTO partnerships VALUES (2, 'E1', 'Media', 'Radio Lancs', 'Spoken mention', 'Stage');
         INSERT INTO partnerships VALUES (3, 'E1', 'Sponsor', 'Bakery', 'Stand at entrance', 'Foyer');

         INSERT INTO sponsor_requirements VALUES (1, 'E1', 'S1', 'Banner', '2 x 3m');
         INSERT INTO sponsor_requirements VALUES (2, 'E1', 'S1', 'Table', 'Near bar');
         INSERT INTO sponsor_requirements VALUES (3, 'E1', 'S2', 'Banner', '1 x 1m');",
    )
    .unwrap();

    conn.execute(
        "INSERT INTO shows VALUES (1, 'The Great Show', ?1, '18:00')",
        params![in_ten_days],
    )
    .unwrap();

    // id, show, event, patron, campaign, ticket type, date, cost, confirmed, discounted
    let bookings: [(i64, i64, &str, i64, Option<&str>, &str, String, f64, i64, i64); 5] = [
        (1, 1, "E1", 100, Some("C1"), "Standard", days_ago(2), 20.0, 1, 0),
        (2, 1, "E1", 101, Some("C1"), "Premium", days_ago(2), 35.0, 1, 1),
        (3, 1, "E1", 102, None, "Standard", days_ago(2), 20.0, 1, 1),
        (4, 1, "E1", 100, None, "Standard", days_ago(45), 20.0, 1, 0),
        (5, 2, "E2", 100, Some("C4"), "Standard", days_ago(60), 15.0, 1, 0),
    ];
    for (id, show, event, patron, campaign, ticket, date, cost, confirmed, discounted) in bookings {
        conn.execute(
            "INSERT INTO bookings VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![id, show, event, patron, campaign, ticket, date, cost, confirmed, discounted],
        )
        .unwrap();
    }

    // patron 100 also booked twice for another event
    conn.execute_batch(
        "INSERT INTO bookings VALUES (6, 2, 'E3', 100, NULL, 'Standard', '2024-12-01', 10.0, 1, 0);",
    )
    .unwrap();

    conn.execute_batch(
        "INSERT INTO group_bookings VALUES (1, 'G1', 1, 1, 12, 1, 0);
         INSERT INTO group_bookings VALUES (2, 'G2', 2, 2, 8, 0, 0);
         INSERT INTO group_bookings VALUES (3, 'G3', 5, 1, 20, 1, 0);",
    )
    .unwrap();

    conn.execute(
        "INSERT INTO price_adjustments VALUES (1, 'E1', ?1, 25.0)",
        params![days_ago(3)],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO price_adjustments VALUES (2, 'E1', ?1, 30.0)",
        params![days_ago(90)],
    )
    .unwrap();

    drop(conn);
    pool
}
