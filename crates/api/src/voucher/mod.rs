mod create_voucher;
mod delete_voucher;
mod get_expiring_vouchers;
mod get_nearby_vouchers;
mod get_voucher;
mod get_voucher_stats;
mod get_vouchers;
mod subscribers;

use actix_web::web;
use create_voucher::create_voucher_controller;
use delete_voucher::delete_voucher_controller;
use get_expiring_vouchers::get_expiring_vouchers_controller;
use get_nearby_vouchers::get_nearby_vouchers_controller;
use get_voucher::get_voucher_controller;
use get_voucher_stats::get_voucher_stats_controller;
use get_vouchers::get_vouchers_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/vouchers", web::post().to(create_voucher_controller));
    cfg.route("/vouchers", web::get().to(get_vouchers_controller));

    // Registered before `/vouchers/{voucher_id}` so that they are not taken as ids
    cfg.route(
        "/vouchers/expiring-soon",
        web::get().to(get_expiring_vouchers_controller),
    );
    cfg.route(
        "/vouchers/nearby",
        web::post().to(get_nearby_vouchers_controller),
    );
    cfg.route("/vouchers/stats", web::get().to(get_voucher_stats_controller));

    cfg.route(
        "/vouchers/{voucher_id}",
        web::get().to(get_voucher_controller),
    );
    cfg.route(
        "/vouchers/{voucher_id}",
        web::delete().to(delete_voucher_controller),
    );
}
