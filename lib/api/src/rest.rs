use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use sillage_core::{Engine, Error, Recommendation};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Deserialize)]
pub(crate) struct RecommendRequest {
    #[serde(default)]
    notes: Vec<serde_json::Value>,
    gender: Option<String>,
    brands: Option<Vec<String>>,
    top_n: Option<i64>,
}

#[derive(Serialize)]
struct RecommendResponse {
    results: Vec<Recommendation>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<Engine>, port: u16) -> std::io::Result<()> {
        info!("Binding HTTP API on 0.0.0.0:{}", port);
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .configure(|cfg| configure(cfg, engine.clone()))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register the API routes on an app, sharing `engine` between workers
pub fn configure(cfg: &mut web::ServiceConfig, engine: Arc<Engine>) {
    cfg.app_data(web::Data::new(engine))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/api/recommend", web::post().to(recommend))
        .route("/api/notes", web::get().to(notes))
        .route("/api/brands", web::get().to(brands))
        .route("/api/stats", web::get().to(stats));
}

/// Selected notes must all be strings
pub(crate) fn note_selection(values: &[serde_json::Value]) -> Result<Vec<String>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::InvalidNotes(format!("entry {} is not a string: {}", i, v)))
        })
        .collect()
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_input_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        error!("Engine failure: {}", e);
        HttpResponse::InternalServerError().json(body)
    }
}

/// Malformed request bodies get the same JSON error shape as engine errors
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = serde_json::json!({ "error": err.to_string() });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

async fn recommend(
    engine: web::Data<Arc<Engine>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();
    let notes = match note_selection(&req.notes) {
        Ok(notes) => notes,
        Err(e) => return Ok(error_response(&e)),
    };
    let top_n = req
        .top_n
        .unwrap_or_else(|| i64::try_from(engine.config().default_top_n).unwrap_or(i64::MAX));

    let engine = engine.get_ref().clone();
    let result = web::block(move || {
        engine.recommend(&notes, req.gender.as_deref(), req.brands.as_deref(), top_n)
    })
    .await?;

    match result {
        Ok(results) => Ok(HttpResponse::Ok().json(RecommendResponse { results })),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn notes(engine: web::Data<Arc<Engine>>) -> ActixResult<HttpResponse> {
    let engine = engine.get_ref().clone();
    match web::block(move || engine.notes_for_ui()).await? {
        Ok(tiers) => Ok(HttpResponse::Ok().json(tiers)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn brands(engine: web::Data<Arc<Engine>>) -> ActixResult<HttpResponse> {
    let engine = engine.get_ref().clone();
    match web::block(move || engine.brands()).await? {
        Ok(brands) => Ok(HttpResponse::Ok().json(brands)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn stats(engine: web::Data<Arc<Engine>>) -> ActixResult<HttpResponse> {
    let engine = engine.get_ref().clone();
    match web::block(move || engine.stats()).await? {
        Ok(stats) => Ok(HttpResponse::Ok().json(stats)),
        Err(e) => Ok(error_response(&e)),
    }
}
