mod backup;
mod reminder;
mod status;
mod voucher;

pub mod dtos {
    pub use crate::reminder::dtos::*;
    pub use crate::voucher::dtos::*;
}

pub use crate::backup::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
pub use crate::voucher::api::*;
