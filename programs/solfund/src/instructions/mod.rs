pub mod add_campaign_update;
pub mod emergency_shutdown;
pub mod fund_campaign;
pub mod initialize_campaign;
pub mod pause_campaign;
pub mod request_refund;
pub mod resume_campaign;
pub mod update_campaign;
pub mod withdraw_milestone;

pub use add_campaign_update::*;
pub use emergency_shutdown::*;
pub use fund_campaign::*;
pub use initialize_campaign::*;
pub use pause_campaign::*;
pub use request_refund::*;
pub use resume_campaign::*;
pub use update_campaign::*;
pub use withdraw_milestone::*;

mod escrow;
