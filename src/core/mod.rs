pub mod classifier;
pub mod engine;
pub mod fun_fact;
pub mod properties;
pub mod validator;

pub use crate::domain::model::{
    ClassificationResult, ClassifyResponse, ErrorResult, Property, ValidatedNumber,
};
pub use crate::domain::ports::{ConfigProvider, FactSource};
pub use crate::utils::error::Result;
