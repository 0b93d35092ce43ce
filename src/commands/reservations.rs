use crate::error::Result;
use crate::models::{Reservation, ReservationConfirmation, ReservationForm, ReservationOptions};
use crate::reservation;
use crate::store::StoreExt;
use chrono::Local;
use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

#[tauri::command]
pub fn get_reservation_options() -> ReservationOptions {
    reservation::options(Local::now().date_naive())
}

#[tauri::command]
pub fn validate_reservation(form: ReservationForm) -> Result<Reservation> {
    reservation::validate(&form, Local::now().date_naive())
}

#[tauri::command]
pub async fn submit_reservation(
    app: AppHandle,
    form: ReservationForm,
) -> Result<ReservationConfirmation> {
    let delay = StoreExt::config(&app).submission_delay();
    let today = Local::now().date_naive();

    let confirmation = app.desk().submit(form, today, delay).await?;

    // Non-blocking: the desk is already free again when the dialog appears.
    app.dialog()
        .message(confirmation.message.as_str())
        .title(StoreExt::config(&app).restaurant.name.as_str())
        .kind(MessageDialogKind::Info)
        .show(|_| {});

    Ok(confirmation)
}

#[tauri::command]
pub fn is_submitting(app: AppHandle) -> bool {
    app.desk().is_submitting()
}
