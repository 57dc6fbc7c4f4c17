mod push_backup;

use actix_web::web;
use push_backup::push_backup_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/backup", web::post().to(push_backup_controller));
}
