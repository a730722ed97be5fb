use actix_web::web::{self, Data, Json, Path, Query};
use actix_web::HttpResponse;
use log::warn;
use serde_json::json;

use super::stats_service::{get_course_stats, get_milestones, get_net_curve, get_player_stats};
use crate::error::AppError;
use crate::model::{CourseEdit, NewCourse, NewPlayer, RoundDraft, RoundEdit, RoundFilter};
use crate::storage::{SqliteStorage, Storage};

/// Runs a storage-bound closure on the blocking pool.
async fn with_storage<T, F>(storage: &Data<SqliteStorage>, f: F) -> Result<T, AppError>
where
    F: FnOnce(&dyn Storage) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let storage = storage.get_ref().clone();
    let res = web::block(move || f(&storage)).await?;
    if let Err(e) = &res {
        warn!("request failed: {e}");
    }
    res
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn list_players(storage: Data<SqliteStorage>) -> Result<HttpResponse, AppError> {
    let players = with_storage(&storage, |s| Ok(s.list_players()?)).await?;
    Ok(HttpResponse::Ok().json(players))
}

pub async fn add_player(
    storage: Data<SqliteStorage>,
    body: Json<NewPlayer>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let player = with_storage(&storage, move |s| Ok(s.add_player(&body.name)?)).await?;
    Ok(HttpResponse::Ok().json(player))
}

pub async fn list_courses(storage: Data<SqliteStorage>) -> Result<HttpResponse, AppError> {
    let courses = with_storage(&storage, |s| Ok(s.list_courses()?)).await?;
    Ok(HttpResponse::Ok().json(courses))
}

pub async fn add_course(
    storage: Data<SqliteStorage>,
    body: Json<NewCourse>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let course = with_storage(&storage, move |s| Ok(s.add_course(&body)?)).await?;
    Ok(HttpResponse::Ok().json(course))
}

pub async fn update_course(
    storage: Data<SqliteStorage>,
    path: Path<i64>,
    body: Json<CourseEdit>,
) -> Result<HttpResponse, AppError> {
    let course_id = path.into_inner();
    let body = body.into_inner();
    let course = with_storage(&storage, move |s| Ok(s.update_course(course_id, &body)?)).await?;
    Ok(HttpResponse::Ok().json(course))
}

pub async fn list_rounds(
    storage: Data<SqliteStorage>,
    query: Query<RoundFilter>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner();
    let rounds = with_storage(&storage, move |s| Ok(s.list_rounds(&filter)?)).await?;
    Ok(HttpResponse::Ok().json(rounds))
}

pub async fn submit_round(
    storage: Data<SqliteStorage>,
    body: Json<RoundDraft>,
) -> Result<HttpResponse, AppError> {
    let draft = body.into_inner();
    let round = with_storage(&storage, move |s| Ok(s.submit_round(&draft)?)).await?;
    Ok(HttpResponse::Ok().json(round))
}

pub async fn edit_round(
    storage: Data<SqliteStorage>,
    path: Path<i64>,
    body: Json<RoundEdit>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    let edit = body.into_inner();
    let round = with_storage(&storage, move |s| Ok(s.edit_round(round_id, &edit)?)).await?;
    Ok(HttpResponse::Ok().json(round))
}

pub async fn delete_round(
    storage: Data<SqliteStorage>,
    path: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    with_storage(&storage, move |s| Ok(s.delete_round(round_id)?)).await?;
    Ok(HttpResponse::Ok().json(json!({"ok": true})))
}

pub async fn player_stats(
    storage: Data<SqliteStorage>,
    path: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let stats = with_storage(&storage, move |s| get_player_stats(s, player_id)).await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub async fn net_curve(
    storage: Data<SqliteStorage>,
    path: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let curve = with_storage(&storage, move |s| get_net_curve(s, player_id)).await?;
    Ok(HttpResponse::Ok().json(curve))
}

pub async fn course_stats(
    storage: Data<SqliteStorage>,
    path: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let course_id = path.into_inner();
    let stats = with_storage(&storage, move |s| get_course_stats(s, course_id)).await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub async fn milestones(storage: Data<SqliteStorage>) -> Result<HttpResponse, AppError> {
    let events = with_storage(&storage, get_milestones).await?;
    Ok(HttpResponse::Ok().json(events))
}
