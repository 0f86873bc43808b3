use crate::util::time;
use uuid::Uuid;

fn generate(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}", prefix, time::timestamp_millis(), &random[..9])
}

pub fn generate_stroke_id() -> String {
    generate("stroke")
}

pub fn generate_session_id() -> String {
    generate("session")
}
