use crate::core::classifier::{is_armstrong, is_even};
use crate::domain::model::Property;

/// `armstrong` (若成立) 一定排在奇偶標籤之前
pub fn compose_properties(n: i32) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }
    properties.push(if is_even(n) {
        Property::Even
    } else {
        Property::Odd
    });
    properties
}
