// src/bin/seed.rs
// Inserts a demo hotel, its rooms and a demo user, then prints a bearer
// token for that user so the /rate endpoints can be tried by hand.
use anyhow::{Context, Result};
use dotenv::dotenv;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use std::env;
use uuid::Uuid;

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

const DEV_JWT_SECRET: &str = "hotel-detail-dev-secret";
const TOKEN_TTL_SECONDS: i64 = 7 * 24 * 3600;

struct DemoRoom {
    name: &'static str,
    room_type: &'static str,
    price: f64,
    capacity: i32,
    images: &'static [&'static str],
}

const DEMO_HOTEL_IMAGES: &[&str] = &[
    "https://images.example.com/hotels/sunrise/lobby.jpg",
    "https://images.example.com/hotels/sunrise/pool.jpg",
    "https://images.example.com/hotels/sunrise/facade.jpg",
    "https://images.example.com/hotels/sunrise/restaurant.jpg",
    "https://images.example.com/hotels/sunrise/spa.jpg",
    "https://images.example.com/hotels/sunrise/rooftop.jpg",
];

const DEMO_ROOMS: &[DemoRoom] = &[
    DemoRoom {
        name: "Deluxe Double",
        room_type: "double",
        price: 120.0,
        capacity: 2,
        images: &["https://images.example.com/rooms/deluxe-1.jpg"],
    },
    DemoRoom {
        name: "Standard Twin",
        room_type: "twin",
        price: 95.0,
        capacity: 2,
        images: &[
            "https://images.example.com/rooms/twin-1.jpg",
            "https://images.example.com/rooms/twin-2.jpg",
        ],
    },
    DemoRoom {
        name: "Family Suite",
        room_type: "suite",
        price: 200.0,
        capacity: 4,
        images: &[],
    },
];

#[derive(Serialize)]
struct Claims {
    sub: Uuid,
    exp: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string());

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let images: Vec<String> = DEMO_HOTEL_IMAGES.iter().map(|s| s.to_string()).collect();
    let (hotel_id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO hotels (name, description, address, city, images)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind("Sunrise Riverside Hotel")
    .bind("Riverside hotel with rooftop bar and spa")
    .bind("12 Bach Dang")
    .bind("Da Nang")
    .bind(&images)
    .fetch_one(&pool)
    .await
    .context("failed to insert demo hotel")?;

    for room in DEMO_ROOMS {
        let room_images: Vec<String> = room.images.iter().map(|s| s.to_string()).collect();
        sqlx::query(
            r#"
            INSERT INTO rooms (hotel_id, name, room_type, price, capacity, images)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(hotel_id)
        .bind(room.name)
        .bind(room.room_type)
        .bind(room.price)
        .bind(room.capacity)
        .bind(&room_images)
        .execute(&pool)
        .await
        .with_context(|| format!("failed to insert room {}", room.name))?;
    }

    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, name, avatar) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind("Demo Traveller")
        .bind("https://images.example.com/avatars/demo.png")
        .execute(&pool)
        .await
        .context("failed to insert demo user")?;

    let claims = Claims {
        sub: user_id,
        exp: (chrono::Utc::now().timestamp() + TOKEN_TTL_SECONDS) as u64,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .context("failed to sign demo token")?;

    println!("{}{}Seed complete{}", BOLD, GREEN, RESET);
    println!("  hotel id : {}{}{}", CYAN, hotel_id, RESET);
    println!("  rooms    : {}", DEMO_ROOMS.len());
    println!("  user id  : {}{}{}", CYAN, user_id, RESET);
    println!("  token    : {}", token);
    println!();
    println!(
        "Try: curl -H 'Authorization: Bearer {}' http://127.0.0.1:8003/api/detail/rate/{}",
        token, hotel_id
    );

    Ok(())
}
