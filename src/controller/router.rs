use actix_web::web;

use super::http_handlers::{
    add_course, add_player, course_stats, delete_round, edit_round, health, list_courses,
    list_players, list_rounds, milestones, net_curve, player_stats, submit_round, update_course,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .route("/players", web::get().to(list_players))
            .route("/players", web::post().to(add_player))
            .route("/courses", web::get().to(list_courses))
            .route("/courses", web::post().to(add_course))
            .route("/courses/{id}", web::patch().to(update_course))
            .route("/rounds", web::get().to(list_rounds))
            .route("/rounds", web::post().to(submit_round))
            .route("/rounds/{id}", web::patch().to(edit_round))
            .route("/rounds/{id}", web::delete().to(delete_round))
            .route("/stats/player/{id}", web::get().to(player_stats))
            .route("/stats/player/{id}/net-curve", web::get().to(net_curve))
            .route("/stats/course/{id}", web::get().to(course_stats))
            .route("/milestones", web::get().to(milestones)),
    );
}
