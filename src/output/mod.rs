pub mod presenter;

pub use presenter::{GroupLabel, Presenter, ResultGroup, TableStyle};
