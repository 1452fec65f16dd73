use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        port: get_env_or_default("PORT", "10000")
            .parse()
            .unwrap_or_else(|_| panic!("PORT must be a valid port number")),
        wikipedia_api_url: get_env_or_default(
            "WIKIPEDIA_API_URL",
            "https://pt.wikipedia.org/w/api.php",
        ),
        openlibrary_url: get_env_or_default("OPENLIBRARY_URL", "https://openlibrary.org"),
        covers_url: get_env_or_default("COVERS_URL", "https://covers.openlibrary.org"),
        placeholder_image: get_env_or_default(
            "PLACEHOLDER_IMAGE",
            "https://via.placeholder.com/150",
        ),
        cache_capacity: get_env_or_default("CACHE_CAPACITY", "100")
            .parse()
            .unwrap_or_else(|_| panic!("CACHE_CAPACITY must be a positive integer")),
        static_dir: get_env_or_default("STATIC_DIR", "static"),
    }
});

pub struct Config {
    pub port: u16,
    pub wikipedia_api_url: String,
    pub openlibrary_url: String,
    pub covers_url: String,
    pub placeholder_image: String,
    pub cache_capacity: usize,
    pub static_dir: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
