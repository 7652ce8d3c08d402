//! Shared UI components

pub mod button;
pub mod footer;
pub mod logo;
pub mod marketing_layout;
pub mod navbar;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use footer::MarketingFooterView;
pub use logo::Logo;
pub use marketing_layout::MarketingLayoutView;
pub use navbar::MarketingNavbarView;
