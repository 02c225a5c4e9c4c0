use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use ngram_writer_core::NGramError;
use ngram_writer_core::io::{list_files, render_sentence};
use ngram_writer_core::model::generation_input::GenerationInput;
use ngram_writer_core::model::generator::Writer;
use ngram_writer_core::model::ngram_table::TableStats;
use ngram_writer_core::model::random::RngSource;

/// Number of words generated when the query does not say.
const DEFAULT_LENGTH: usize = 30;

/// Extension of corpus files in the data directory
const CORPUS_EXTENSION: &str = "txt";

/// Server configuration, from flags or environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "ngram-writer-server", version)]
struct ServerConfig {
	/// Address to listen on
	#[arg(long, env = "NGRAM_BIND", default_value = "127.0.0.1:5000")]
	bind: String,

	/// Directory holding the `.txt` corpora
	#[arg(long, env = "NGRAM_DATA_DIR", default_value = "./data")]
	data_dir: PathBuf,

	/// Corpus to load at startup (file stem inside the data directory)
	#[arg(long, env = "NGRAM_CORPUS")]
	corpus: Option<String>,

	/// Value of N for the startup corpus
	#[arg(long, env = "NGRAM_ORDER", default_value_t = 2)]
	order: usize,

	/// Largest `length` a generate request may ask for
	#[arg(long, env = "NGRAM_MAX_LENGTH", default_value_t = 1000)]
	max_length: usize,
}

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	seed: Option<u64>,
}

/// Query parameters for the `/v1/load_model` endpoint
#[derive(Deserialize)]
struct LoadQuery {
	name: Option<String>,
	order: Option<usize>,
}

#[derive(Serialize)]
struct ModelInfo<'a> {
	name: &'a str,
	stats: TableStats,
}

struct SharedData {
	data_dir: PathBuf,
	max_length: usize,
	writer: Option<Writer>,
}

/// Maps a core error to the matching HTTP response.
fn error_response(error: &NGramError) -> HttpResponse {
	match error {
		NGramError::Io(e) if e.kind() == io::ErrorKind::NotFound => HttpResponse::NotFound().body(error.to_string()),
		NGramError::EmptyCorpus | NGramError::InvalidOrder(_) | NGramError::KeyLength { .. } => {
			HttpResponse::BadRequest().body(error.to_string())
		}
		_ => HttpResponse::InternalServerError().body(error.to_string()),
	}
}

fn corpus_path(data_dir: &Path, name: &str) -> PathBuf {
	data_dir.join(format!("{name}.{CORPUS_EXTENSION}"))
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one sentence from the loaded corpus and returns it rendered
/// as `"... w1 w2 ..."`. A `seed` makes the output reproducible.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<RwLock<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let length = query.length.unwrap_or(DEFAULT_LENGTH);
	if length == 0 {
		return HttpResponse::BadRequest().body("length must be 1 or greater");
	}

	let shared_data = match data.read() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	if length > shared_data.max_length {
		return HttpResponse::BadRequest().body(format!("length must be at most {}", shared_data.max_length));
	}
	let Some(writer) = &shared_data.writer else {
		return HttpResponse::Conflict().body("No corpus loaded");
	};

	let result = match query.seed {
		Some(seed) => writer.write(length, &mut RngSource::seeded(seed)),
		None => writer.write(length, &mut RngSource::thread()),
	};

	match result {
		Ok(Some(sentence)) => HttpResponse::Ok().body(render_sentence(&sentence)),
		Ok(None) => HttpResponse::Ok().finish(),
		Err(e) => error_response(&e),
	}
}

/// HTTP GET endpoint `/v1/corpora`: corpus names available in the data directory.
#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let data_dir = match data.read() {
		Ok(d) => d.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match list_files(&data_dir, CORPUS_EXTENSION) {
		Ok(files) => {
			let suffix = format!(".{CORPUS_EXTENSION}");
			let names: Vec<&str> = files.iter().map(|f| f.trim_end_matches(suffix.as_str())).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

/// HTTP GET endpoint `/v1/model`: name and statistics of the loaded table.
#[get("/v1/model")]
async fn get_model(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match &shared_data.writer {
		Some(writer) => HttpResponse::Ok().json(ModelInfo { name: writer.name(), stats: writer.table().stats() }),
		None => HttpResponse::Conflict().body("No corpus loaded"),
	}
}

/// HTTP PUT endpoint `/v1/load_model`
///
/// Builds a table from `<data_dir>/<name>.txt` and swaps it in. The previous
/// table stays in service if the build fails.
#[put("/v1/load_model")]
async fn put_model(data: web::Data<RwLock<SharedData>>, query: web::Query<LoadQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	if name.contains(['/', '\\']) || name.contains("..") {
		return HttpResponse::BadRequest().body("Invalid corpus name");
	}

	let settings = match GenerationInput::new(query.order.unwrap_or(2), 0) {
		Ok(s) => s,
		Err(e) => return error_response(&e),
	};

	let data_dir = match data.read() {
		Ok(d) => d.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	// Build outside the lock: readers keep generating from the current table
	let writer = match Writer::from_file(corpus_path(&data_dir, name), settings.order()) {
		Ok(w) => w,
		Err(e) => {
			warn!("Failed to load corpus '{name}': {e}");
			return error_response(&e);
		}
	};
	info!("Loaded corpus '{}' as {}-gram table ({} keys)", name, settings.order(), writer.table().len());

	match data.write() {
		Ok(mut d) => {
			d.writer = Some(writer);
			HttpResponse::Ok().body("Corpus loaded successfully")
		}
		Err(_) => HttpResponse::InternalServerError().body("Model lock failed"),
	}
}

/// Registers every endpoint.
fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_corpora)
		.service(get_model)
		.service(put_model);
}

/// Main entry point for the server.
///
/// Optionally preloads a corpus, wraps the shared state in a `RwLock`
/// (generation only reads the table) and starts the Actix-web server.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let config = ServerConfig::parse();

	let writer = match &config.corpus {
		Some(name) => {
			let writer = Writer::from_file(corpus_path(&config.data_dir, name), config.order)
				.map_err(|e| io::Error::other(format!("Failed to load corpus '{name}': {e}")))?;
			info!("Loaded corpus '{}' as {}-gram table ({} keys)", name, config.order, writer.table().len());
			Some(writer)
		}
		None => None,
	};

	let shared_data = SharedData { data_dir: config.data_dir.clone(), max_length: config.max_length, writer };
	let shared_model = web::Data::new(RwLock::new(shared_data));

	info!("Listening on {}", config.bind);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.configure(configure)
	})
		.bind(config.bind.as_str())?
		.run()
		.await
}
