pub mod backend;

pub use backend::HttpCurrencyService;
