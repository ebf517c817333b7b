use std::time::Duration;

use tracing::info;

use geode_core::DiscountState;
use geode_store::Store;
use geode_store::impls::settings::{SettingKey, is_enabled};
use geode_utils::time::seconds_until_next_utc_midnight;

/// Half-price window length once the daily discount starts.
const DISCOUNT_WINDOW_SECS: u64 = 30 * 60;

/// Background task: at each UTC midnight, open a half-price shop window
/// for 30 minutes, as long as the dailyDiscount toggle is enabled at the
/// time. Runs for the life of the process.
pub async fn run_daily_discount(store: Store, discount: DiscountState) {
    loop {
        let wait = seconds_until_next_utc_midnight(chrono::Utc::now());
        tokio::time::sleep(Duration::from_secs(wait)).await;

        if !is_enabled(&store, SettingKey::DailyDiscount) {
            continue;
        }

        discount.set_active(true);
        info!("daily shop discount started");

        tokio::time::sleep(Duration::from_secs(DISCOUNT_WINDOW_SECS)).await;

        discount.set_active(false);
        info!("daily shop discount ended");
    }
}
