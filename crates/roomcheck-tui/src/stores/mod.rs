/// Store modules that hold application state
/// Each store is responsible for a slice of the application state
pub mod booking_store;
pub mod notices_store;
pub mod ui_store;

pub use booking_store::BookingStore;
pub use notices_store::NoticesStore;
pub use ui_store::UIStore;
