mod get_pending_reminders;
mod get_reminder_settings;
mod sweep_reminders;
mod update_reminder_settings;

use actix_web::web;
use get_pending_reminders::get_pending_reminders_controller;
use get_reminder_settings::get_reminder_settings_controller;
pub use sweep_reminders::SweepRemindersUseCase;
use sweep_reminders::check_reminders_controller;
use update_reminder_settings::update_reminder_settings_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders/settings",
        web::get().to(get_reminder_settings_controller),
    );
    cfg.route(
        "/reminders/settings",
        web::put().to(update_reminder_settings_controller),
    );
    cfg.route(
        "/reminders/check",
        web::post().to(check_reminders_controller),
    );
    cfg.route(
        "/reminders/pending",
        web::get().to(get_pending_reminders_controller),
    );
}
