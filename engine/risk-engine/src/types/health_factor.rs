use serde::Serializer;

/// JSON has no infinity, a debt free position is written as `"Infinity"`
pub fn serialize<S: Serializer>(health_factor: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *health_factor;
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() {
        serializer.serialize_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        serializer.serialize_f64(value)
    }
}
