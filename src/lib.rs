//! Manna - small-group community app for churches.
//!
//! This is the main library for the Tauri backend, exposing IPC commands
//! to the webview frontend.

pub mod commands;
pub mod error;
pub mod models;
pub mod services;

use commands::notifications::AppBadge;
use commands::{
    delete_notification, dismiss_notice, get_current_user, get_home_overview, get_home_sections,
    get_main_notices, get_my_groups, get_notification_permission, get_notifications,
    get_recent_board_posts, get_recent_fellowships, get_recent_prayer_requests,
    get_session_status, get_unread_count,
    mark_all_notifications_as_read, mark_notification_as_read, refresh_notifications,
    register_push_token, request_notification_permission, save_home_sections,
    send_native_notification, sign_in, sign_out,
};
use services::NotificationCenter;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            // The notification cache and badge sink live for the whole
            // app session.
            let center = NotificationCenter::new(AppBadge::new(app.handle().clone()));
            app.manage(center);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            sign_in,
            sign_out,
            get_session_status,
            get_current_user,
            get_my_groups,
            get_home_overview,
            get_home_sections,
            save_home_sections,
            get_main_notices,
            dismiss_notice,
            refresh_notifications,
            get_notifications,
            get_unread_count,
            mark_notification_as_read,
            mark_all_notifications_as_read,
            delete_notification,
            send_native_notification,
            get_recent_fellowships,
            get_recent_prayer_requests,
            get_recent_board_posts,
            get_notification_permission,
            request_notification_permission,
            register_push_token,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
