use actix_web::{HttpResponse, Responder, get};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthBody {
    success: bool,
    status: &'static str,
}

/// Liveness probe.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthBody {
        success: true,
        status: "ok",
    })
}
