//! Workplace availability aggregate: Workplace, Period, TimeSlot

pub mod model;
pub mod repository;

pub use model::{windows_overlap, Period, SlotContext, TimeSlot, Workplace};
pub use repository::WorkplaceRepository;
