use std::env;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kwdense_core::analyzer::{AnalyzerConfig, SubstringDensityAnalyzer};
use kwdense_core::keywords;
use kwdense_core::ranking::{generate_ranking, RankingEntry};

/// Longest `text` accepted by `/v1/analyze`, in chars.
///
/// Analysis is O(n²) in memory and O(n³) in time, so the length is capped
/// before any work is done.
const MAX_TEXT_CHARS: usize = 1000;

/// Largest JSON body accepted, in bytes (1000 `\uXXXX` escapes plus slack).
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Optional threshold overrides for `/v1/analyze`.
#[derive(Deserialize)]
struct AnalyzeParams {
	top_k: Option<usize>,
	min_count: Option<usize>,
	min_word_len: Option<usize>,
}

#[derive(Deserialize)]
struct KeywordQuery {
	category: Option<String>,
}

#[derive(Serialize)]
struct RankingResponse {
	success: bool,
	message: String,
	data: Vec<RankingEntry>,
}

/// Bind address, read from `KWDENSE_HOST` / `KWDENSE_PORT`.
struct ServerConfig {
	host: String,
	port: u16,
}

impl ServerConfig {
	fn from_env() -> Result<Self, String> {
		let host = env::var("KWDENSE_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
		let port = match env::var("KWDENSE_PORT") {
			Ok(p) => p.parse::<u16>().map_err(|_| format!("Invalid KWDENSE_PORT: {p}"))?,
			Err(_) => 5000,
		};
		Ok(Self { host, port })
	}
}

impl AnalyzeParams {
	/// Builds the analyzer configuration, starting from the defaults.
	fn config(&self) -> Result<AnalyzerConfig, String> {
		let mut config = AnalyzerConfig::default();
		if let Some(top_k) = self.top_k {
			config.set_top_k(top_k).map_err(|e| e.to_string())?;
		}
		if let Some(min_count) = self.min_count {
			config.set_min_count(min_count).map_err(|e| e.to_string())?;
		}
		if let Some(min_word_len) = self.min_word_len {
			config.set_min_word_len(min_word_len).map_err(|e| e.to_string())?;
		}
		Ok(config)
	}
}

/// HTTP POST endpoint `/v1/analyze`
///
/// Ranks the substrings of the body's `text` field by density and returns
/// them as a JSON array. A missing or non-string `text`, or a body that is
/// not an object, yields `[]`. A `text` longer than `MAX_TEXT_CHARS` is
/// rejected with 413.
#[post("/v1/analyze")]
async fn post_analyze(query: web::Query<AnalyzeParams>, body: web::Json<Value>) -> impl Responder {
	let config = match query.config() {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mut body = body.into_inner();
	let text = body.get_mut("text").map(Value::take).unwrap_or(Value::Null);
	if text.as_str().is_some_and(|t| t.chars().count() > MAX_TEXT_CHARS) {
		return HttpResponse::PayloadTooLarge().body(format!("Text longer than {MAX_TEXT_CHARS} chars"));
	}

	let analyzer = SubstringDensityAnalyzer::new(config);
	let result = match web::block(move || analyzer.analyze_value(&text)).await {
		Ok(r) => r,
		Err(_) => return HttpResponse::InternalServerError().body("Analysis failed"),
	};

	HttpResponse::Ok().json(result.unwrap_or_else(|e| {
		warn!("{e}, answering with an empty result");
		Vec::new()
	}))
}

/// HTTP GET endpoint `/v1/ranking`
///
/// Returns a freshly generated mock popularity ranking.
#[get("/v1/ranking")]
async fn get_ranking() -> impl Responder {
	let data = generate_ranking(&mut rand::rng());
	HttpResponse::Ok().json(RankingResponse {
		success: true,
		message: "Ranking updated".to_owned(),
		data,
	})
}

#[get("/v1/keywords")]
async fn get_keywords(query: web::Query<KeywordQuery>) -> impl Responder {
	let words = match query.category.as_deref().map(str::trim) {
		Some(c) if !c.is_empty() => keywords::keywords_by_category(c),
		_ => keywords::keywords(),
	};
	HttpResponse::Ok().json(words)
}

#[get("/v1/categories")]
async fn get_categories() -> impl Responder {
	HttpResponse::Ok().json(keywords::categories())
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::JsonConfig::default().limit(MAX_BODY_BYTES))
		.service(post_analyze)
		.service(get_ranking)
		.service(get_keywords)
		.service(get_categories);
}

/// Main entry point for the server.
///
/// Reads the bind address from the environment and starts an Actix-web
/// HTTP server. The analyzer is stateless, so nothing is shared between
/// workers.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env()
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	info!("Listening on {}:{}", config.host, config.port);

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{test, App};
	use serde_json::json;

	#[actix_web::test]
	async fn analyze_returns_ranked_keywords() {
		let app = test::init_service(App::new().configure(routes)).await;
		let req = test::TestRequest::post()
			.uri("/v1/analyze")
			.set_json(json!({ "text": "ababab" }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;

		let words: Vec<&str> = body.as_array().unwrap().iter().map(|c| c["word"].as_str().unwrap()).collect();
		assert_eq!(words, vec!["abab", "ab", "aba", "bab", "ba"]);
		assert_eq!(body[1]["count"], json!(3));
	}

	#[actix_web::test]
	async fn non_string_text_gives_empty_result() {
		let app = test::init_service(App::new().configure(routes)).await;
		for payload in [json!({ "text": 12 }), json!({ "text": null }), json!({})] {
			let req = test::TestRequest::post().uri("/v1/analyze").set_json(payload).to_request();
			let resp = test::call_service(&app, req).await;
			assert!(resp.status().is_success());
			let body: Value = test::read_body_json(resp).await;
			assert_eq!(body, json!([]));
		}
	}

	#[actix_web::test]
	async fn non_object_body_gives_empty_result() {
		let app = test::init_service(App::new().configure(routes)).await;
		for payload in [json!("ababab"), json!(["ababab"]), json!(7)] {
			let req = test::TestRequest::post().uri("/v1/analyze").set_json(payload).to_request();
			let resp = test::call_service(&app, req).await;
			assert!(resp.status().is_success());
			let body: Value = test::read_body_json(resp).await;
			assert_eq!(body, json!([]));
		}
	}

	#[actix_web::test]
	async fn text_at_the_char_limit_is_analyzed() {
		let app = test::init_service(App::new().configure(routes)).await;
		// The cap applies to the raw text, punctuation included
		let text = "智能, ".repeat(MAX_TEXT_CHARS / 4);
		assert_eq!(text.chars().count(), MAX_TEXT_CHARS);
		let req = test::TestRequest::post()
			.uri("/v1/analyze")
			.set_json(json!({ "text": text }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.as_array().unwrap().len(), 10);
	}

	#[actix_web::test]
	async fn text_over_the_char_limit_is_rejected() {
		let app = test::init_service(App::new().configure(routes)).await;
		let text = "a".repeat(MAX_TEXT_CHARS + 1);
		let req = test::TestRequest::post()
			.uri("/v1/analyze")
			.set_json(json!({ "text": text }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), actix_web::http::StatusCode::PAYLOAD_TOO_LARGE);
	}

	#[actix_web::test]
	async fn oversized_body_is_rejected() {
		let app = test::init_service(App::new().configure(routes)).await;
		let text = "人".repeat(MAX_BODY_BYTES);
		let req = test::TestRequest::post()
			.uri("/v1/analyze")
			.set_json(json!({ "text": text }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), actix_web::http::StatusCode::PAYLOAD_TOO_LARGE);
	}

	#[actix_web::test]
	async fn thresholds_can_be_overridden() {
		let app = test::init_service(App::new().configure(routes)).await;
		let req = test::TestRequest::post()
			.uri("/v1/analyze?top_k=1")
			.set_json(json!({ "text": "ababab" }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.as_array().unwrap().len(), 1);
		assert_eq!(body[0]["word"], json!("ab"));
	}

	#[actix_web::test]
	async fn zero_threshold_is_a_bad_request() {
		let app = test::init_service(App::new().configure(routes)).await;
		let req = test::TestRequest::post()
			.uri("/v1/analyze?min_count=0")
			.set_json(json!({ "text": "ababab" }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn ranking_lists_every_model() {
		let app = test::init_service(App::new().configure(routes)).await;
		let req = test::TestRequest::get().uri("/v1/ranking").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["success"], json!(true));
		assert_eq!(body["data"].as_array().unwrap().len(), kwdense_core::ranking::BASE_INDICES.len());
	}

	#[actix_web::test]
	async fn keywords_filter_by_category() {
		let app = test::init_service(App::new().configure(routes)).await;
		let req = test::TestRequest::get().uri("/v1/keywords?category=%E9%80%9A%E7%94%A8").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body.as_array().unwrap().len(), 5);

		let req = test::TestRequest::get().uri("/v1/categories").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, json!(["技术", "通用"]));
	}
}
