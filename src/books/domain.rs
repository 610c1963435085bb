use rust_decimal::Decimal;
use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn author(&self) -> &str;
    fn title(&self) -> &str;
    fn price(&self) -> Decimal;
    fn quantity(&self) -> i32;
}
