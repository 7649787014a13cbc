pub mod bird;
pub mod disease;
pub mod prediction;
pub mod reference;
pub mod request;
pub mod severity;
