//! In-memory tables split across logical submodules. Each store exclusively
//! owns its table; the service layer only reaches state through these methods.

mod books;
mod users;

pub use books::BookStore;
pub use users::UserStore;
