//! Wall-clock helpers that differ between the browser and native builds.

use std::time::Duration;

/// Local date and time, e.g. `18/10/2026, 14:05:09`.
#[cfg(target_arch = "wasm32")]
pub fn timestamp() -> String {
    let date = js_sys::Date::new_0();
    let day = date.get_date();
    let month = date.get_month() + 1;
    let year = date.get_full_year();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{day}/{month}/{year}, {h:02}:{m:02}:{s:02}")
}

/// Time of day in UTC; native builds carry no timezone database.
#[cfg(not(target_arch = "wasm32"))]
pub fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let of_day = secs % 86_400;
    format!(
        "{:02}:{:02}:{:02} UTC",
        of_day / 3600,
        (of_day / 60) % 60,
        of_day % 60
    )
}

pub async fn pause(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
