//! Command implementations, one module per area.

pub mod account;
pub mod cart;
pub mod orders;
pub mod products;
pub mod profile;

use shelf_storefront::error::{Notice, NoticeLevel};

/// Print a notice at the log level matching its severity.
pub fn notify(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success | NoticeLevel::Info => tracing::info!("{}", notice.message),
        NoticeLevel::Error => tracing::error!("{}", notice.message),
    }
}
