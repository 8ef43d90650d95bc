use actix_web::HttpResponse;
use std::sync::atomic::{AtomicU64, Ordering};

static SIGNUP_COUNT: AtomicU64 = AtomicU64::new(0);
static SCORE_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_signup_count() {
    SIGNUP_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_score_count() {
    SCORE_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// Counts 5xx responses only.
pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

fn render() -> String {
    format!(
        "# HELP signups_total Total number of registered users\n\
         # TYPE signups_total counter\n\
         signups_total {}\n\
         \n\
         # HELP scores_recorded_total Total number of quiz scores saved\n\
         # TYPE scores_recorded_total counter\n\
         scores_recorded_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP 5xx responses\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n",
        SIGNUP_COUNT.load(Ordering::Relaxed),
        SCORE_COUNT.load(Ordering::Relaxed),
        ERROR_COUNT.load(Ordering::Relaxed),
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Process counters in Prometheus text format", body = String)
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render())
}
