// src/bin/seed.rs
// DOCUMENTATION: Seed a running places service with sample records
// USAGE: cargo run --bin seed [places.json]
// The optional file holds a JSON array of {name, description, latitude, longitude}

use dotenv::dotenv;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::process;
use std::time::{Duration, Instant};

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedPlace {
    name: String,
    description: String,
    latitude: String,
    longitude: String,
}

/// Reply envelope as sent by the service
#[derive(Debug, Deserialize)]
struct Envelope {
    status: u16,
    message: String,
    data: EnvelopeData,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    data: Value,
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug)]
struct SeedResult {
    name: String,
    inserted_id: Option<String>,
    error: Option<String>,
    duration_secs: f64,
}

fn default_places() -> Vec<SeedPlace> {
    let raw = [
        ("Eiffel Tower", "Wrought-iron lattice tower on the Champ de Mars", "48.8584", "2.2945"),
        ("Colosseum", "Oval amphitheatre in the centre of Rome", "41.8902", "12.4922"),
        ("Sagrada Familia", "Basilica designed by Antoni Gaudi", "41.4036", "2.1744"),
        ("Brandenburg Gate", "Neoclassical monument in Berlin", "52.5163", "13.3777"),
        ("Acropolis", "Ancient citadel above Athens", "37.9715", "23.7257"),
        ("Tower Bridge", "Bascule and suspension bridge over the Thames", "51.5055", "-0.0754"),
    ];

    raw.iter()
        .map(|(name, description, latitude, longitude)| SeedPlace {
            name: name.to_string(),
            description: description.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        })
        .collect()
}

fn load_places(path: &str) -> Result<Vec<SeedPlace>, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Cannot parse {}: {}", path, e))
}

// --- Seeder ---

struct PlacesSeeder {
    base_url: String,
    client: Client,
    results: Vec<SeedResult>,
}

impl PlacesSeeder {
    fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url,
            client,
            results: Vec::new(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn create_place(&self, place: &SeedPlace) -> Result<String, String> {
        let response = self
            .client
            .post(format!("{}/place", self.base_url))
            .json(place)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let envelope = response
            .json::<Envelope>()
            .await
            .map_err(|e| format!("Failed to parse response JSON: {}", e))?;

        if envelope.message != "success" {
            return Err(format!("HTTP {} - {}", envelope.status, envelope.data.data));
        }

        envelope.data.data["inserted_id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| "Response carried no inserted_id".to_string())
    }

    async fn count_places(&self) -> Result<(usize, usize), String> {
        let envelope = self
            .client
            .get(format!("{}/places", self.base_url))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json::<Envelope>()
            .await
            .map_err(|e| format!("Failed to parse response JSON: {}", e))?;

        let listed = envelope.data.data.as_array().map(Vec::len).unwrap_or(0);
        Ok((listed, envelope.data.errors.len()))
    }

    async fn run(&mut self, places: Vec<SeedPlace>) {
        println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            println!("{}❌ Service unavailable at {}{}", RED, self.base_url, RESET);
            println!("{}Please ensure places-service is running (cargo run){}", YELLOW, RESET);
            process::exit(1);
        }
        println!("{}✅ Service available{}\n", GREEN, RESET);
        println!("{}🚀 Seeding {} places...{}\n", BOLD, places.len(), RESET);

        let total = places.len();
        for (i, place) in places.iter().enumerate() {
            let start_time = Instant::now();
            let response = self.create_place(place).await;
            let duration_secs = start_time.elapsed().as_secs_f64();

            match response {
                Ok(id) => {
                    println!(
                        "{}[{}/{}] ✅ {} -> {}{}",
                        GREEN, i + 1, total, place.name, id, RESET
                    );
                    self.results.push(SeedResult {
                        name: place.name.clone(),
                        inserted_id: Some(id),
                        error: None,
                        duration_secs,
                    });
                }
                Err(err_msg) => {
                    println!(
                        "{}[{}/{}] ❌ {}: {}{}",
                        RED, i + 1, total, place.name, err_msg, RESET
                    );
                    self.results.push(SeedResult {
                        name: place.name.clone(),
                        inserted_id: None,
                        error: Some(err_msg),
                        duration_secs,
                    });
                }
            }
        }

        self.print_summary();

        match self.count_places().await {
            Ok((listed, undecodable)) => {
                println!("  • Places now stored: {}{}{}", GREEN, listed, RESET);
                if undecodable > 0 {
                    println!("  • Undecodable records: {}{}{}", YELLOW, undecodable, RESET);
                }
            }
            Err(e) => println!("{}⚠️  Could not list places: {}{}", YELLOW, e, RESET),
        }
    }

    fn print_summary(&self) {
        println!("\n{}📋 Seed Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────────────────────");
        println!("{:<30} {:<40} {:>8}", "Name", "Id / Error", "Duration");
        println!("──────────────────────────────────────────────────────────────────────────────");

        for res in &self.results {
            let outcome = match (&res.inserted_id, &res.error) {
                (Some(id), _) => id.clone(),
                (None, Some(e)) => e.clone(),
                (None, None) => String::new(),
            };
            println!("{:<30} {:<40} {:>7.2}s", res.name, outcome, res.duration_secs);
        }

        let created = self.results.iter().filter(|r| r.inserted_id.is_some()).count();
        println!("──────────────────────────────────────────────────────────────────────────────");
        println!("{}📊 Totals:{}", BOLD, RESET);
        println!("  • Created: {}{}{}", GREEN, created, RESET);
        println!("  • Failed: {}{}{}", RED, self.results.len() - created, RESET);
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let base_url =
        env::var("PLACES_API_URL").unwrap_or_else(|_| "http://127.0.0.1:6000".to_string());

    let places = match env::args().nth(1) {
        Some(path) => match load_places(&path) {
            Ok(places) => places,
            Err(e) => {
                println!("{}❌ {}{}", RED, e, RESET);
                process::exit(1);
            }
        },
        None => default_places(),
    };

    let mut seeder = match PlacesSeeder::new(base_url) {
        Ok(seeder) => seeder,
        Err(e) => {
            println!("{}❌ Failed to create HTTP client: {}{}", RED, e, RESET);
            process::exit(1);
        }
    };
    seeder.run(places).await;
}
