use axum::{
    Json, Router,
    extract::{Path, rejection::JsonRejection},
    routing::{get, post},
};
use log::info;
use serde_json::{Value, json};
use std::net::SocketAddr;

use crate::conflicts::detect_conflicts;
use crate::data::{AssignedSeat, Conflict, ExamData, GenerationOutput};
use crate::error::AppError;
use crate::ingest::{self, Collection, Records};
use crate::projections;
use crate::report;
use crate::seating::assign_seats;

type Payload = Result<Json<ExamData>, JsonRejection>;

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn generate_handler(payload: Payload) -> Result<Json<GenerationOutput>, AppError> {
    let Json(data) = payload?;
    let missing = report::missing_collections(&data);
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing data: upload {} before generating the schedule",
            missing.join(", ")
        )));
    }
    Ok(Json(report::generate(&data)))
}

async fn conflicts_handler(payload: Payload) -> Result<Json<Vec<Conflict>>, AppError> {
    let Json(data) = payload?;
    Ok(Json(detect_conflicts(&data.schedule, &data.timeslots)))
}

/// Parses one CSV upload into the JSON records the other endpoints accept.
async fn ingest_handler(
    Path(collection): Path<String>,
    body: String,
) -> Result<Json<Records>, AppError> {
    let collection: Collection = collection.parse()?;
    Ok(Json(ingest::parse_collection(collection, &body)?))
}

fn seats_of(data: &ExamData) -> Vec<AssignedSeat> {
    assign_seats(
        &data.schedule,
        &data.classrooms,
        &data.courses,
        &data.instructors,
        &data.timeslots,
    )
    .assigned_seats
}

async fn student_schedule_handler(
    Path(student_id): Path<String>,
    payload: Payload,
) -> Result<Json<Vec<AssignedSeat>>, AppError> {
    let Json(data) = payload?;
    Ok(Json(projections::student_schedule(&student_id, &seats_of(&data))))
}

async fn instructor_schedule_handler(
    Path(instructor_id): Path<String>,
    payload: Payload,
) -> Result<Json<Vec<AssignedSeat>>, AppError> {
    let Json(data) = payload?;
    Ok(Json(projections::instructor_schedule(&instructor_id, &seats_of(&data))))
}

async fn room_schedule_handler(
    Path(classroom_id): Path<String>,
    payload: Payload,
) -> Result<Json<Vec<AssignedSeat>>, AppError> {
    let Json(data) = payload?;
    Ok(Json(projections::room_schedule(&classroom_id, &seats_of(&data))))
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/exams/ingest/:collection", post(ingest_handler))
        .route("/v1/exams/generate", post(generate_handler))
        .route("/v1/exams/conflicts", post(conflicts_handler))
        .route(
            "/v1/exams/students/:student_id/schedule",
            post(student_schedule_handler),
        )
        .route(
            "/v1/exams/instructors/:instructor_id/schedule",
            post(instructor_schedule_handler),
        )
        .route(
            "/v1/exams/rooms/:classroom_id/schedule",
            post(room_schedule_handler),
        )
}

pub async fn run_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, router()).await
}
